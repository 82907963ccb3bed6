//! Dinic's max-flow / min-cut solver.
//!
//! The network is a compressed sparse row of edges: a flat `(to, cap)` pair
//! per directed edge plus a per-node list of outgoing edge indices, with
//! every edge paired with its reverse at `id ^ 1` (edges are always added in
//! forward/reverse pairs starting at an even index). There is no separate
//! dense-matrix path for small networks -- one representation throughout.

/// A saturating "infinite" capacity. Chosen so that the finite-capacity
/// edges on any augmenting path through it always dominate the residual
/// minimum -- the solver never needs to add two of these on one path.
pub const INFINITE_CAPACITY: i64 = i64::MAX / 4;

/// A residual-capacity flow network built from paired forward/reverse edges.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    adj: Vec<Vec<usize>>,
    to: Vec<usize>,
    cap: Vec<i64>,
}

impl FlowGraph {
    /// Builds an edgeless network on `n` nodes.
    pub fn new(n: usize) -> Self {
        FlowGraph {
            adj: vec![Vec::new(); n],
            to: Vec::new(),
            cap: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Adds a directed edge `u -> v` with the given residual capacity and
    /// its zero-capacity reverse edge, returning the forward edge's id.
    /// Capacities are clamped to be non-negative.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: i64) -> usize {
        let capacity = capacity.max(0);
        let fwd = self.to.len();
        self.to.push(v);
        self.cap.push(capacity);
        self.adj[u].push(fwd);

        let rev = self.to.len();
        self.to.push(u);
        self.cap.push(0);
        self.adj[v].push(rev);

        fwd
    }

    #[inline]
    fn reverse_of(edge: usize) -> usize {
        edge ^ 1
    }
}

/// The outcome of a max-flow solve: the flow value and the s-side of the
/// resulting minimum cut (nodes reachable from `source` in the residual
/// graph at termination).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlowResult {
    pub max_flow: i64,
    pub reachable: Vec<usize>,
}

/// Runs Dinic's algorithm from `source` to `sink`. Returns `(0, [source])`
/// for out-of-range or equal source/sink rather than panicking.
pub fn dinic(graph: &mut FlowGraph, source: usize, sink: usize) -> MaxFlowResult {
    let n = graph.node_count();
    if source >= n || sink >= n || source == sink {
        return MaxFlowResult {
            max_flow: 0,
            reachable: vec![source].into_iter().filter(|&s| s < n).collect(),
        };
    }

    let mut max_flow = 0i64;
    loop {
        let levels = bfs_levels(graph, source, n);
        if levels[sink] < 0 {
            break;
        }
        let mut current_edge = vec![0usize; n];
        loop {
            let pushed = dfs_augment(graph, source, sink, INFINITE_CAPACITY, &levels, &mut current_edge);
            if pushed == 0 {
                break;
            }
            max_flow += pushed;
        }
    }

    let reachable = bfs_reachable(graph, source, n);
    MaxFlowResult { max_flow, reachable }
}

fn bfs_levels(graph: &FlowGraph, source: usize, n: usize) -> Vec<i32> {
    let mut levels = vec![-1i32; n];
    levels[source] = 0;
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for &edge in &graph.adj[u] {
            let v = graph.to[edge];
            if graph.cap[edge] > 0 && levels[v] < 0 {
                levels[v] = levels[u] + 1;
                queue.push_back(v);
            }
        }
    }
    levels
}

/// DFS with a per-node current-edge pointer: each saturated or
/// level-violating edge is skipped on future calls within the same phase,
/// because `current_edge[u]` only ever advances.
fn dfs_augment(
    graph: &mut FlowGraph,
    u: usize,
    sink: usize,
    pushed_cap: i64,
    levels: &[i32],
    current_edge: &mut [usize],
) -> i64 {
    if u == sink {
        return pushed_cap;
    }
    while current_edge[u] < graph.adj[u].len() {
        let edge = graph.adj[u][current_edge[u]];
        let v = graph.to[edge];
        if levels[v] == levels[u] + 1 && graph.cap[edge] > 0 {
            let bottleneck = dfs_augment(graph, v, sink, pushed_cap.min(graph.cap[edge]), levels, current_edge);
            if bottleneck > 0 {
                graph.cap[edge] -= bottleneck;
                let rev = FlowGraph::reverse_of(edge);
                graph.cap[rev] += bottleneck;
                return bottleneck;
            }
        }
        current_edge[u] += 1;
    }
    0
}

fn bfs_reachable(graph: &FlowGraph, source: usize, n: usize) -> Vec<usize> {
    let mut visited = vec![false; n];
    visited[source] = true;
    let mut order = vec![source];
    let mut queue = std::collections::VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for &edge in &graph.adj[u] {
            let v = graph.to[edge];
            if graph.cap[edge] > 0 && !visited[v] {
                visited[v] = true;
                order.push(v);
                queue.push_back(v);
            }
        }
    }
    order
}
