//! Karger's randomized contraction minimum cut.
//!
//! One trial copies the graph and contracts uniformly random edges until two
//! vertices remain. The edges left between them form a cut. A single trial
//! finds a given minimum cut of an `n`-vertex graph with probability at least
//! `1 / C(n, 2)`, so many independent trials are run and the smallest cut is
//! kept. About `n² ln n` trials drive the failure probability down to roughly
//! `1 / n`.
//!
//! ```rust
//! use mincut::graph::{karger_min_cut, Graph, KargerConfig};
//!
//! let mut g = Graph::undirected(false);
//! for (a, b) in [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)] {
//!     g.add_edge(a, b, 0, true).unwrap();
//! }
//! let config = KargerConfig {
//!     iterations: 200,
//!     seed: Some(3),
//!     ..KargerConfig::default()
//! };
//! let cut = karger_min_cut(&g, &config).unwrap();
//! assert_eq!(cut.value, 1);
//! ```

use std::hash::Hash;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::edge::EdgeKind;
use super::multigraph::Graph;
use crate::error::{Error, Result};

/// Configuration for [`karger_min_cut`].
#[derive(Debug, Clone)]
pub struct KargerConfig {
    /// Number of independent trials
    pub iterations: usize,
    /// Seed for reproducible runs. A random seed is drawn when `None`.
    pub seed: Option<u64>,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl Default for KargerConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            seed: None,
            parallel: false,
        }
    }
}

impl KargerConfig {
    /// Uses [`recommended_iterations`] for a graph of `n` vertices.
    pub fn for_vertices(n: usize) -> Self {
        Self {
            iterations: recommended_iterations(n),
            ..Self::default()
        }
    }
}

/// The best cut found over a batch of trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<T> {
    /// Number of edges crossing the cut
    pub value: usize,
    /// Original vertex values on either side of the cut
    pub partition: (Vec<T>, Vec<T>),
    /// Trials run
    pub trials: usize,
    /// Trials that reached `value`
    pub hits: usize,
}

impl<T> MinCut<T> {
    fn single(value: usize, partition: (Vec<T>, Vec<T>)) -> Self {
        Self {
            value,
            partition,
            trials: 1,
            hits: 1,
        }
    }

    /// Keeps the smaller cut, preferring `self` on ties.
    ///
    /// Associative, so trial results may be combined in any grouping.
    fn merge(self, other: Self) -> Self {
        let trials = self.trials + other.trials;
        match self.value.cmp(&other.value) {
            std::cmp::Ordering::Less => Self { trials, ..self },
            std::cmp::Ordering::Greater => Self { trials, ..other },
            std::cmp::Ordering::Equal => Self {
                trials,
                hits: self.hits + other.hits,
                ..self
            },
        }
    }
}

/// `ceil(n² ln n)`, at least 1.
pub fn recommended_iterations(n: usize) -> usize {
    if n < 2 {
        return 1;
    }
    let n = n as f64;
    ((n * n * n.ln()).ceil() as usize).max(1)
}

fn check_input<T: Eq + Hash + Clone>(graph: &Graph<T>, iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(Error::InvalidIterations);
    }
    if graph.kind() == EdgeKind::Directed {
        return Err(Error::DirectedGraph);
    }
    if graph.vertex_count() < 2 {
        return Err(Error::TooFewVertices(graph.vertex_count()));
    }
    Ok(())
}

/// Runs one contraction trial on a private copy of `graph`.
///
/// If the edges run out while more than two vertices remain, the graph is
/// disconnected. The trial then reports a cut of 0, with one component on
/// the first side.
pub fn run_trial<T, R>(graph: &Graph<T>, rng: &mut R) -> Result<MinCut<T>>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    let mut copy = graph.deep_copy();
    while copy.vertex_count() > 2 {
        match copy.random_edge(rng) {
            Some(edge) => {
                copy.contract(edge)?;
            }
            None => {
                debug!(
                    "no edges left with {} vertices remaining, graph is disconnected",
                    copy.vertex_count()
                );
                return Ok(MinCut::single(0, split(&copy)));
            }
        }
    }
    // self-loops can only survive here if the input had two vertices
    let value = copy.edges().filter(|(_, e)| !e.is_self_loop()).count();
    Ok(MinCut::single(value, split(&copy)))
}

/// First vertex's members against everything else.
fn split<T: Eq + Hash + Clone>(graph: &Graph<T>) -> (Vec<T>, Vec<T>) {
    let mut vertices = graph.vertices();
    let first = vertices
        .next()
        .map(|v| v.members().to_vec())
        .unwrap_or_default();
    let rest = vertices.flat_map(|v| v.members().iter().cloned()).collect();
    (first, rest)
}

/// Estimates the minimum cut of `graph` with `iterations` trials, using a
/// freshly seeded generator.
pub fn minimum_cut<T: Eq + Hash + Clone>(graph: &Graph<T>, iterations: usize) -> Result<usize> {
    let mut rng = StdRng::from_entropy();
    minimum_cut_with_rng(graph, iterations, &mut rng)
}

/// Estimates the minimum cut of `graph` with `iterations` trials drawn from `rng`.
pub fn minimum_cut_with_rng<T, R>(graph: &Graph<T>, iterations: usize, rng: &mut R) -> Result<usize>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    Ok(run_sequential(graph, iterations, rng)?.value)
}

fn run_sequential<T, R>(graph: &Graph<T>, iterations: usize, rng: &mut R) -> Result<MinCut<T>>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    check_input(graph, iterations)?;
    let mut best = run_trial(graph, rng)?;
    for trial in 1..iterations {
        let cut = run_trial(graph, rng)?;
        debug!("trial {}: cut {}", trial, cut.value);
        best = best.merge(cut);
    }
    Ok(best)
}

/// Runs Karger's algorithm as configured and returns the best cut with its partition.
///
/// In parallel mode every trial draws from its own `ChaCha8Rng` stream derived
/// from the seed and the trial index. A seeded run therefore gives the same
/// answer however rayon schedules it.
pub fn karger_min_cut<T>(graph: &Graph<T>, config: &KargerConfig) -> Result<MinCut<T>>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    check_input(graph, config.iterations)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    debug!(
        "running {} trials on {} vertices / {} edges (seed {}, parallel {})",
        config.iterations,
        graph.vertex_count(),
        graph.edge_count(),
        seed,
        config.parallel
    );

    let best = if config.parallel {
        (0..config.iterations)
            .into_par_iter()
            .map(|trial| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(trial as u64);
                run_trial(graph, &mut rng)
            })
            .try_reduce_with(|a, b| Ok(a.merge(b)))
            .unwrap_or(Err(Error::InvalidIterations))?
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        run_sequential(graph, config.iterations, &mut rng)?
    };

    info!(
        "minimum cut {} found in {} of {} trials",
        best.value, best.hits, best.trials
    );
    Ok(best)
}
