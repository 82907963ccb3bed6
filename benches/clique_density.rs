//! Timing for clique enumeration and a full driver run on generated
//! Erdos-Renyi-style graphs, mirroring `habedi-graphina`'s
//! `[[bench]] harness = false` + `criterion` setup.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hclique_densest_subgraph::{densest_subgraph, Config, Graph};
use rand::{Rng, SeedableRng};

fn random_graph(n: usize, edge_probability: f64, seed: u64) -> Graph {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(edge_probability) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}

// Graph's clique enumeration is memoized per instance, so timing repeated
// calls against one shared graph would measure cache hits after the first
// iteration. Each iteration gets its own freshly-built graph instead.
fn bench_enumeration(c: &mut Criterion) {
    let cfg = Config::default();
    let mut group = c.benchmark_group("triangle_enumeration");
    for &n in &[20usize, 60, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || random_graph(n, 0.2, 1),
                |graph| graph.clique_count(3, &cfg),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_densest_subgraph(c: &mut Criterion) {
    let cfg = Config::default();
    let mut group = c.benchmark_group("densest_subgraph_h3");
    for &n in &[15usize, 30, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || random_graph(n, 0.3, 2),
                |graph| densest_subgraph(&graph, 3, &cfg),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_densest_subgraph);
criterion_main!(benches);
