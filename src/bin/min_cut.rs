use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use mincut::graph::{karger_min_cut, load_adjacency_file, KargerConfig};

/// Estimate the minimum cut of an undirected graph with Karger's algorithm
#[derive(Parser, Debug)]
#[command(name = "min_cut")]
#[command(about = "Randomized minimum cut of an adjacency-list graph", long_about = None)]
struct Args {
    /// Adjacency-list file: line i holds the 1-indexed neighbours of vertex i
    #[arg(default_value = "graph.txt")]
    graph: PathBuf,

    /// Number of contraction trials [default: n² ln n]
    #[arg(short, long)]
    iterations: Option<NonZeroUsize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials in parallel
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let graph = match load_adjacency_file(&args.graph) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "loaded {:?}: {} vertices, {} edges",
        args.graph,
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut config = KargerConfig::for_vertices(graph.vertex_count());
    if let Some(iterations) = args.iterations {
        config.iterations = iterations.get();
    }
    config.seed = args.seed;
    config.parallel = args.parallel;

    match karger_min_cut(&graph, &config) {
        Ok(cut) => {
            println!("{}", cut.value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
