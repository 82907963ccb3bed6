//! The parametric Goldberg-style flow network `N(alpha)`.
//!
//! Node numbering (before any compaction): `0` is the source, `1..=n` are
//! the vertex-nodes (node `vertex_start + v` corresponds to graph vertex
//! `v`), then up to `CLIQUE_BUDGET` clique-nodes, then the sink. Only the
//! first `min(|C_{h-1}|, CLIQUE_BUDGET)` (h-1)-cliques are sampled into a
//! network, trading exactness for a bounded memory footprint on graphs with
//! very many (h-1)-cliques.
//!
//! If the resulting node count exceeds `COMPACT_THRESHOLD`, active-node
//! compaction renumbers every node touched by at least one edge (plus
//! source/sink) densely from 0, in ascending original-id order for
//! determinism, and discards the rest. The mapping back to original ids is
//! kept so the caller can translate a solved min-cut back to graph vertices.

use rustc_hash::FxHashMap;

use crate::config::Config;
use crate::graph::Graph;
use crate::max_flow::{self, FlowGraph, INFINITE_CAPACITY};

/// A built (and, if needed, compacted) flow network ready for Dinic.
pub struct Network {
    pub graph: FlowGraph,
    pub source: usize,
    pub sink: usize,
    /// `vertex_start..clique_start` in the *pre-compaction* numbering is the
    /// range of vertex-nodes; `to_original[new_id]` recovers that numbering.
    pub vertex_start: usize,
    pub clique_start: usize,
    pub to_original: Vec<usize>,
}

/// Builds `N(alpha)` for clique size `h` over `graph`, applying sampling and
/// (if needed) active-node compaction.
pub fn build(graph: &Graph, h: usize, alpha: f64, cfg: &Config) -> Network {
    let n = graph.vertex_count();
    let h_minus_1 = if h >= 1 { graph.cliques(h - 1, cfg) } else { graph.cliques(0, cfg) };
    let budget = h_minus_1.cliques.len().min(cfg.clique_budget);

    let source = 0usize;
    let vertex_start = 1usize;
    let clique_start = vertex_start + n;
    let sink = clique_start + budget;
    let node_count = sink + 1;

    let vertex_sink_capacity = vertex_to_sink_capacity(alpha, h);

    let mut sparse: Vec<Vec<(usize, i64)>> = vec![Vec::new(); node_count];
    for v in 0..n {
        let degree = graph.clique_degree(v, h, cfg) as i64;
        if degree > 0 {
            sparse[source].push((vertex_start + v, degree));
        }
        sparse[vertex_start + v].push((sink, vertex_sink_capacity));
    }

    for (j, clique) in h_minus_1.cliques.iter().take(budget).enumerate() {
        let clique_node = clique_start + j;
        for &v in clique {
            sparse[clique_node].push((vertex_start + v, INFINITE_CAPACITY));
        }
        for v in 0..n {
            if clique.contains(&v) {
                continue;
            }
            if clique.iter().all(|&u| graph.has_edge(v, u)) {
                sparse[vertex_start + v].push((clique_node, 1));
            }
        }
    }

    let (sparse, source, sink, to_original) = compact_if_needed(sparse, source, sink, cfg);

    let mut flow_graph = FlowGraph::new(sparse.len());
    for (u, edges) in sparse.into_iter().enumerate() {
        for (v, cap) in edges {
            flow_graph.add_edge(u, v, cap);
        }
    }

    Network {
        graph: flow_graph,
        source,
        sink,
        vertex_start,
        clique_start,
        to_original,
    }
}

/// `ceil(alpha * h)`, clamped to `[0, i64::MAX]` and floored at non-negative
/// since `alpha >= 0` always.
fn vertex_to_sink_capacity(alpha: f64, h: usize) -> i64 {
    let raw = (alpha * h as f64).ceil();
    if raw.is_infinite() || raw > i64::MAX as f64 {
        i64::MAX
    } else if raw < 0.0 {
        0
    } else {
        raw as i64
    }
}

/// Renumbers to only the nodes incident to an edge (plus source/sink) when
/// the network is larger than `compact_threshold`. Returns the
/// (possibly-unchanged) sparse adjacency, the remapped source/sink, and
/// `to_original[new_id] = original_id`.
fn compact_if_needed(
    sparse: Vec<Vec<(usize, i64)>>,
    source: usize,
    sink: usize,
    cfg: &Config,
) -> (Vec<Vec<(usize, i64)>>, usize, usize, Vec<usize>) {
    if sparse.len() <= cfg.compact_threshold {
        let identity = (0..sparse.len()).collect();
        return (sparse, source, sink, identity);
    }

    let mut active = std::collections::BTreeSet::new();
    active.insert(source);
    active.insert(sink);
    for (u, edges) in sparse.iter().enumerate() {
        if !edges.is_empty() {
            active.insert(u);
        }
        for &(v, _) in edges {
            active.insert(v);
        }
    }

    let to_original: Vec<usize> = active.into_iter().collect();
    let old_to_new: FxHashMap<usize, usize> = to_original
        .iter()
        .enumerate()
        .map(|(new_id, &old_id)| (old_id, new_id))
        .collect();

    let mut compacted = vec![Vec::new(); to_original.len()];
    for (u, edges) in sparse.into_iter().enumerate() {
        let Some(&new_u) = old_to_new.get(&u) else {
            continue;
        };
        for (v, cap) in edges {
            if let Some(&new_v) = old_to_new.get(&v) {
                compacted[new_u].push((new_v, cap));
            }
        }
    }

    let new_source = old_to_new[&source];
    let new_sink = old_to_new[&sink];
    (compacted, new_source, new_sink, to_original)
}

/// The result of deciding "does a subgraph of density > alpha exist", with
/// the candidate vertex set translated back to `graph`'s vertex ids.
pub struct Decision {
    pub candidate: Vec<usize>,
}

/// Builds `N(alpha)`, solves max-flow/min-cut on it, and extracts the
/// candidate vertex set from the min-cut's source side.
pub fn decide(graph: &Graph, h: usize, alpha: f64, cfg: &Config) -> Decision {
    let mut network = build(graph, h, alpha, cfg);
    let result = max_flow::dinic(&mut network.graph, network.source, network.sink);

    let candidate = result
        .reachable
        .into_iter()
        .filter(|&new_id| new_id != network.source)
        .map(|new_id| network.to_original[new_id])
        .filter(|&orig| orig >= network.vertex_start && orig < network.clique_start)
        .map(|orig| orig - network.vertex_start)
        .collect();

    Decision { candidate }
}
