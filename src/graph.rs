//! The immutable undirected graph store.
//!
//! Vertices are dense indices `0..n`. Adjacency is backed by
//! [`petgraph::graphmap::UnGraphMap`], which gives O(1)-expected edge lookup
//! and a neighbor iterator keyed directly on `usize` node ids -- no separate
//! `NodeIndex` translation layer is needed since our ids are already dense.
//!
//! Enumerated cliques are attached here as a lazily-populated,
//! interior-mutable memo: see `cliques()`.

use std::cell::RefCell;
use std::rc::Rc;

use petgraph::graphmap::UnGraphMap;
use rustc_hash::FxHashMap;

use crate::cliques::{self, CliqueSet};
use crate::config::Config;

/// An immutable undirected simple graph over vertices `0..vertex_count()`.
pub struct Graph {
    adjacency: UnGraphMap<usize, ()>,
    n: usize,
    clique_cache: RefCell<FxHashMap<usize, Rc<CliqueSet>>>,
}

impl Graph {
    /// Builds an edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        let mut adjacency = UnGraphMap::with_capacity(n, 0);
        for v in 0..n {
            adjacency.add_node(v);
        }
        Graph {
            adjacency,
            n,
            clique_cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Inserts the undirected edge `(u, v)`. Out-of-range endpoints and
    /// self-loops are silently ignored (bounds-rejected, per the error
    /// taxonomy -- this is an internal builder, not a user-facing query, but
    /// the same "never abort" policy applies).
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u >= self.n || v >= self.n || u == v {
            return;
        }
        self.adjacency.add_edge(u, v, ());
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// O(1)-expected edge membership test. Out-of-range vertices return
    /// `false` rather than panicking.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.n || v >= self.n {
            return false;
        }
        self.adjacency.contains_edge(u, v)
    }

    /// Neighbors of `v` in unspecified order. Empty for an out-of-range `v`.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let present = v < self.n;
        self.adjacency
            .neighbors(v)
            .filter(move |_| present)
    }

    /// Returns the cached (possibly bound-limited) set of `k`-cliques,
    /// enumerating on first request for this `k` and memoizing the result.
    pub fn cliques(&self, k: usize, cfg: &Config) -> Rc<CliqueSet> {
        if let Some(hit) = self.clique_cache.borrow().get(&k) {
            return Rc::clone(hit);
        }
        let computed = Rc::new(cliques::enumerate(self, k, cfg));
        self.clique_cache
            .borrow_mut()
            .insert(k, Rc::clone(&computed));
        computed
    }

    /// `|{C in C_h : v in C}|`. Returns 0 for an out-of-range vertex.
    pub fn clique_degree(&self, v: usize, h: usize, cfg: &Config) -> usize {
        if v >= self.n {
            return 0;
        }
        self.cliques(h, cfg)
            .vertex_index
            .get(v)
            .map_or(0, |idxs| idxs.len())
    }

    /// `max_v clique_degree(v, h)`, 0 for the empty graph.
    pub fn max_clique_degree(&self, h: usize, cfg: &Config) -> usize {
        (0..self.n)
            .map(|v| self.clique_degree(v, h, cfg))
            .max()
            .unwrap_or(0)
    }

    /// `|C_h|`.
    pub fn clique_count(&self, h: usize, cfg: &Config) -> usize {
        self.cliques(h, cfg).cliques.len()
    }

    /// `|C_h| / n`, 0 when `n == 0`.
    pub fn density(&self, h: usize, cfg: &Config) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.clique_count(h, cfg) as f64 / self.n as f64
    }

    /// Builds `G[vertices]`, remapped to `0..vertices.len()` in the order
    /// `vertices` is given. Duplicate entries in `vertices` collapse to one
    /// vertex (first occurrence wins); out-of-range entries are dropped.
    pub fn induced(&self, vertices: &[usize]) -> Graph {
        let mut remap: FxHashMap<usize, usize> = FxHashMap::default();
        let mut ordered = Vec::with_capacity(vertices.len());
        for &v in vertices {
            if v >= self.n {
                continue;
            }
            remap.entry(v).or_insert_with(|| {
                let idx = ordered.len();
                ordered.push(v);
                idx
            });
        }

        let mut sub = Graph::new(ordered.len());
        for (i, &u) in ordered.iter().enumerate() {
            for (j, &v) in ordered.iter().enumerate().skip(i + 1) {
                if self.has_edge(u, v) {
                    sub.add_edge(i, j);
                }
            }
        }
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_pendant() -> Graph {
        // 0-1-2 triangle, plus pendant edge 2-3
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(0, 2);
        g.add_edge(2, 3);
        g
    }

    #[test]
    fn has_edge_is_symmetric_and_bounds_checked() {
        let g = triangle_with_pendant();
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert!(!g.has_edge(0, 3));
        assert!(!g.has_edge(10, 0));
        assert!(!g.has_edge(0, 10));
    }

    #[test]
    fn self_loops_and_out_of_range_edges_are_ignored() {
        let mut g = Graph::new(3);
        g.add_edge(1, 1);
        g.add_edge(0, 5);
        assert!(!g.has_edge(1, 1));
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn induced_preserves_adjacency() {
        let g = triangle_with_pendant();
        let sub = g.induced(&[0, 1, 2]);
        assert_eq!(sub.vertex_count(), 3);
        assert!(sub.has_edge(0, 1));
        assert!(sub.has_edge(1, 2));
        assert!(sub.has_edge(0, 2));
    }

    #[test]
    fn induced_on_full_vertex_set_reproduces_the_graph() {
        let g = triangle_with_pendant();
        let all: Vec<usize> = (0..g.vertex_count()).collect();
        let sub = g.induced(&all);
        for u in 0..g.vertex_count() {
            for v in 0..g.vertex_count() {
                assert_eq!(g.has_edge(u, v), sub.has_edge(u, v));
            }
        }
    }

    #[test]
    fn induced_is_idempotent() {
        let g = triangle_with_pendant();
        let once = g.induced(&[0, 1, 2]);
        let prefix: Vec<usize> = (0..once.vertex_count()).collect();
        let twice = once.induced(&prefix);
        for u in 0..once.vertex_count() {
            for v in 0..once.vertex_count() {
                assert_eq!(once.has_edge(u, v), twice.has_edge(u, v));
            }
        }
    }

    #[test]
    fn empty_graph_queries_are_neutral() {
        let g = Graph::new(0);
        let cfg = Config::default();
        assert_eq!(g.density(3, &cfg), 0.0);
        assert_eq!(g.max_clique_degree(3, &cfg), 0);
    }
}
