//! Brute-force oracles shared across unit and property tests. Only ever
//! compiled under `#[cfg(test)]`; never called from non-test code.

use itertools::Itertools;

use crate::graph::Graph;

/// All `k`-cliques of `graph`, found by checking every `k`-subset of
/// vertices. Exponential; only meant for `n` small enough for tests.
pub(crate) fn brute_force_cliques(graph: &Graph, k: usize) -> Vec<Vec<usize>> {
    if k == 0 || k > graph.vertex_count() {
        return Vec::new();
    }
    (0..graph.vertex_count())
        .combinations(k)
        .filter(|combo| {
            combo
                .iter()
                .tuple_combinations()
                .all(|(&a, &b)| graph.has_edge(a, b))
        })
        .collect()
}
