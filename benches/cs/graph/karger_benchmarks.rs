use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mincut::graph::{karger_min_cut, run_trial, Graph, KargerConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Two cliques of `half` vertices joined by a single bridge.
fn two_cliques(half: u32) -> Graph<u32> {
    let mut g = Graph::undirected(false);
    for offset in [0, half] {
        for a in 0..half {
            for b in (a + 1)..half {
                g.add_edge(offset + a, offset + b, 0, true).unwrap();
            }
        }
    }
    g.add_edge(0, half, 0, true).unwrap();
    g
}

fn bench_single_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger_trial");
    for &half in &[8u32, 16, 32] {
        let g = two_cliques(half);
        group.bench_with_input(BenchmarkId::from_parameter(half * 2), &g, |b, g| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            b.iter(|| run_trial(black_box(g), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let g = two_cliques(12);
    let mut group = c.benchmark_group("karger_min_cut");
    for parallel in [false, true] {
        let config = KargerConfig {
            iterations: 256,
            seed: Some(7),
            parallel,
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| karger_min_cut(black_box(&g), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_trial, bench_sequential_vs_parallel);
criterion_main!(benches);
