//! Pure reporting data, translated from the driver's returned subgraph.
//! No I/O lives here; the binary decides how to print it.

use std::fmt;

use crate::config::Config;
use crate::graph::Graph;

/// The final, human-facing summary of a discovered h-clique densest
/// subgraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub vertex_count: usize,
    /// `None` when `vertex_count >= 10_000` (too large to count exactly).
    pub h_clique_count: Option<usize>,
    pub h_clique_density: f64,
}

impl Report {
    /// Summarizes `subgraph` for clique size `h`.
    pub fn new(subgraph: &Graph, h: usize, cfg: &Config) -> Self {
        let vertex_count = subgraph.vertex_count();
        let h_clique_count = if vertex_count < 10_000 {
            Some(subgraph.clique_count(h, cfg))
        } else {
            None
        };
        Report {
            vertex_count,
            h_clique_count,
            h_clique_density: subgraph.density(h, cfg),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertex_count)?;
        match self.h_clique_count {
            Some(count) => writeln!(f, "h-clique count: {count}")?,
            None => writeln!(f, "h-clique count: omitted (subgraph too large)")?,
        }
        write!(f, "h-clique density: {:.6}", self.h_clique_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_subgraph_reports_exact_clique_count() {
        let mut g = Graph::new(4);
        for u in 0..4 {
            for v in (u + 1)..4 {
                g.add_edge(u, v);
            }
        }
        let cfg = Config::default();
        let report = Report::new(&g, 3, &cfg);
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.h_clique_count, Some(4));
        assert_eq!(report.h_clique_density, 1.0);
    }

    #[test]
    fn display_renders_all_three_fields() {
        let g = Graph::new(1);
        let cfg = Config::default();
        let report = Report::new(&g, 1, &cfg);
        let text = report.to_string();
        assert!(text.contains("vertices: 1"));
        assert!(text.contains("h-clique count"));
        assert!(text.contains("h-clique density"));
    }
}
