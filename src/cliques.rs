//! Bounded clique enumeration.
//!
//! Produces `C_h` and `C_{h-1}` (sorted, duplicate-free, fixed-length vertex
//! tuples) plus the vertex-to-clique index `M`, subject to `MAX_CLIQUES` and
//! a backtracking step counter. Two code paths: a specialized triangle
//! routine for `k == 3`, and a lexicographic-pivot backtracking search for
//! everything else. Both are deterministic: the same graph and `k` always
//! produce the cliques in the same order.

use crate::config::Config;
use crate::graph::Graph;

/// The enumerated `k`-cliques of a graph, and the vertex-to-clique index
/// derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueSet {
    /// Sorted, duplicate-free `k`-vertex cliques, in enumeration order.
    pub cliques: Vec<Vec<usize>>,
    /// `true` if `MAX_CLIQUES` or the step cap stopped enumeration early.
    pub capped: bool,
    /// `vertex_index[v]` is the list of indices into `cliques` containing `v`.
    pub vertex_index: Vec<Vec<usize>>,
}

impl CliqueSet {
    fn empty(n: usize) -> Self {
        CliqueSet {
            cliques: Vec::new(),
            capped: false,
            vertex_index: vec![Vec::new(); n],
        }
    }

    fn from_cliques(n: usize, cliques: Vec<Vec<usize>>, capped: bool) -> Self {
        let mut vertex_index = vec![Vec::new(); n];
        for (idx, clique) in cliques.iter().enumerate() {
            for &v in clique {
                vertex_index[v].push(idx);
            }
        }
        CliqueSet {
            cliques,
            capped,
            vertex_index,
        }
    }
}

/// Enumerates all `k`-cliques of `graph`, bounded by `cfg`.
///
/// `k == 0` or `k > n` yields an empty, uncapped result. `k == 1` is handled
/// directly (one singleton per vertex) rather than falling through to the
/// backtracking search.
pub fn enumerate(graph: &Graph, k: usize, cfg: &Config) -> CliqueSet {
    let n = graph.vertex_count();
    if k == 0 || k > n {
        return CliqueSet::empty(n);
    }
    if k == 1 {
        return enumerate_singletons(n, cfg);
    }
    if k == 3 {
        return enumerate_triangles(graph, cfg);
    }
    enumerate_backtracking(graph, k, cfg)
}

fn enumerate_singletons(n: usize, cfg: &Config) -> CliqueSet {
    let take = n.min(cfg.max_cliques);
    let cliques: Vec<Vec<usize>> = (0..take).map(|v| vec![v]).collect();
    CliqueSet::from_cliques(n, cliques, take < n)
}

/// Iterates every ordered triple `(u < v < w)` with `u~v`, `u~w`, testing
/// `v~w` via the adjacency set. O(sum deg^2) worst case, no recursion.
fn enumerate_triangles(graph: &Graph, cfg: &Config) -> CliqueSet {
    let n = graph.vertex_count();
    let mut cliques = Vec::new();
    let mut capped = false;

    'outer: for u in 0..n {
        let neighbors_of_u: Vec<usize> = graph.neighbors(u).filter(|&v| v > u).collect();
        for (i, &v) in neighbors_of_u.iter().enumerate() {
            for &w in neighbors_of_u.iter().skip(i + 1) {
                if graph.has_edge(v, w) {
                    cliques.push(vec![u, v, w]);
                    if cliques.len() >= cfg.max_cliques {
                        capped = true;
                        break 'outer;
                    }
                }
            }
        }
    }

    CliqueSet::from_cliques(n, cliques, capped)
}

/// Lexicographic-pivot backtracking: grows a prefix `path` (itself a clique)
/// by vertices strictly greater than `path`'s last element, in ascending
/// order, until it reaches length `k`. Implemented with an explicit stack of
/// "next candidate to try" resume points instead of recursion, so depth is
/// bounded by `k` stack frames, not by the call stack.
fn enumerate_backtracking(graph: &Graph, k: usize, cfg: &Config) -> CliqueSet {
    let n = graph.vertex_count();
    let mut cliques = Vec::new();
    let mut path: Vec<usize> = Vec::with_capacity(k);
    // frames[d] is the next candidate vertex to try extending path[..d].
    let mut frames: Vec<usize> = vec![0];
    let mut steps: u64 = 0;
    let mut capped = false;

    'search: loop {
        let depth = path.len();
        let start = frames[depth];
        let mut extended_with = None;

        for x in start..n {
            steps += 1;
            if steps >= cfg.max_iter_steps {
                capped = true;
                break 'search;
            }
            if path.iter().all(|&p| graph.has_edge(x, p)) {
                frames[depth] = x + 1;
                extended_with = Some(x);
                break;
            }
        }

        match extended_with {
            Some(x) => {
                path.push(x);
                if path.len() == k {
                    cliques.push(path.clone());
                    path.pop();
                    if cliques.len() >= cfg.max_cliques {
                        capped = true;
                        break 'search;
                    }
                } else {
                    frames.push(x + 1);
                }
            }
            None => {
                frames.pop();
                if path.pop().is_none() {
                    break 'search;
                }
            }
        }
    }

    CliqueSet::from_cliques(n, cliques, capped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::brute_force_cliques;

    fn k4() -> Graph {
        let mut g = Graph::new(4);
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v);
            }
        }
        g
    }

    #[test]
    fn k1_is_singletons() {
        let g = k4();
        let cfg = Config::default();
        let c1 = enumerate(&g, 1, &cfg);
        let mut got: Vec<Vec<usize>> = c1.cliques.clone();
        got.sort();
        assert_eq!(got, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn k_zero_or_above_n_is_empty() {
        let g = k4();
        let cfg = Config::default();
        assert!(enumerate(&g, 0, &cfg).cliques.is_empty());
        assert!(enumerate(&g, 5, &cfg).cliques.is_empty());
    }

    #[test]
    fn triangle_free_graph_has_no_triangles() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        let cfg = Config::default();
        assert!(enumerate(&g, 3, &cfg).cliques.is_empty());
    }

    #[test]
    fn k4_has_four_triangles_and_one_4_clique() {
        let g = k4();
        let cfg = Config::default();
        let c3 = enumerate(&g, 3, &cfg);
        assert_eq!(c3.cliques.len(), 4);
        let c4 = enumerate(&g, 4, &cfg);
        assert_eq!(c4.cliques, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn every_clique_is_actually_a_clique() {
        let g = k4();
        let cfg = Config::default();
        for k in 1..=4 {
            let set = enumerate(&g, k, &cfg);
            for clique in &set.cliques {
                for &i in clique {
                    for &j in clique {
                        if i != j {
                            assert!(g.has_edge(i, j));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn vertex_index_matches_clique_degree() {
        let g = k4();
        let cfg = Config::default();
        let set = enumerate(&g, 3, &cfg);
        for v in 0..g.vertex_count() {
            let expected = set.cliques.iter().filter(|c| c.contains(&v)).count();
            assert_eq!(set.vertex_index[v].len(), expected);
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let g = k4();
        let cfg = Config::default();
        let first = enumerate(&g, 3, &cfg);
        let second = enumerate(&g, 3, &cfg);
        assert_eq!(first.cliques, second.cliques);
    }

    #[test]
    fn backtracking_matches_brute_force_on_small_random_graphs() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let cfg = Config::default();

        for _ in 0..20 {
            let n = rng.gen_range(1..=10);
            let mut g = Graph::new(n);
            for u in 0..n {
                for v in (u + 1)..n {
                    if rng.gen_bool(0.4) {
                        g.add_edge(u, v);
                    }
                }
            }
            for k in 1..=4 {
                let got = enumerate(&g, k, &cfg);
                let mut got_sorted = got.cliques.clone();
                got_sorted.sort();
                let mut expected = brute_force_cliques(&g, k);
                expected.sort();
                assert_eq!(got_sorted, expected, "n={n} k={k}");
            }
        }
    }
}
