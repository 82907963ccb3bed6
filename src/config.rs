//! Named, overridable resource bounds.
//!
//! Every cap that would otherwise be a scattered module-level constant
//! lives here as a field instead, so a caller can dial them down for a
//! smaller/faster run without touching the algorithm code. No value is
//! ever read from the environment.

/// Resource bounds governing enumeration size, search depth and network size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Cap on the number of cliques kept per enumerated size.
    pub max_cliques: usize,
    /// Cap on backtracking extension steps during enumeration.
    pub max_iter_steps: u64,
    /// Cap on binary-search rounds in the density search driver.
    pub max_iterations: u32,
    /// Number of (h-1)-cliques sampled when building a flow network.
    pub clique_budget: usize,
    /// Node count above which active-node compaction is applied.
    pub compact_threshold: usize,
    /// |S| above which exact re-measurement of density is skipped.
    pub density_check_threshold: usize,
    /// Vertex count above which a graph is rejected outright.
    pub max_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_cliques: 1_000_000,
            max_iter_steps: 100_000_000,
            max_iterations: 20,
            clique_budget: 10_000,
            compact_threshold: 100_000,
            density_check_threshold: 1_000,
            max_n: 1_000_000,
        }
    }
}

impl Config {
    /// Binary-search stopping width for a graph of `n` vertices: `1 / n^2`.
    ///
    /// Returns `f64::INFINITY` for `n == 0`, which immediately satisfies any
    /// "width below precision" check and keeps callers from dividing by zero.
    pub fn precision(n: usize) -> f64 {
        if n == 0 {
            f64::INFINITY
        } else {
            1.0 / (n as f64 * n as f64)
        }
    }
}
