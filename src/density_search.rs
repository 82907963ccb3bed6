//! The binary-search driver tying the graph store, clique enumeration,
//! flow-network construction, and max-flow solver together.
//!
//! Binary-searches a density guess `alpha` in `[0, max_clique_degree]`: each
//! guess is decided by building `N(alpha)` and solving its min-cut. A
//! non-trivial cut enlarges the lower bound and yields a candidate `S`; an
//! empty cut shrinks the upper bound. The driver
//! never commits to the bound itself as the answer -- it tracks the best
//! *measured* density seen across iterations (see the tie-break policy
//! below) and returns that subgraph.

use log::{debug, info, warn};

use crate::config::Config;
use crate::flow_network;
use crate::graph::Graph;

struct Best {
    vertices: Vec<usize>,
    density: f64,
}

/// Finds an approximate h-clique densest subgraph of `graph`.
///
/// Tie-break policy: `best` is only
/// overwritten on a *measured*, strictly improving density. A min-cut whose
/// candidate is too large to re-measure exactly (`>= density_check_threshold`)
/// is kept only as a last-resort fallback, used solely if no measured `best`
/// was ever recorded -- it never silently replaces a measured one.
pub fn densest_subgraph(graph: &Graph, h: usize, cfg: &Config) -> Graph {
    let n = graph.vertex_count();
    let all_vertices: Vec<usize> = (0..n).collect();

    let d_max = graph.max_clique_degree(h, cfg);
    info!("h={h}: max clique-degree is {d_max} over {n} vertices");
    if d_max == 0 {
        info!("h={h}: no h-cliques found, returning the input graph unchanged");
        return graph.induced(&all_vertices);
    }

    let mut alpha_lo = 0.0f64;
    let mut alpha_hi = d_max as f64;
    let precision = Config::precision(n);

    let mut best: Option<Best> = None;
    let mut last_large: Option<Vec<usize>> = None;
    let mut rounds_used = 0u32;

    for round in 0..cfg.max_iterations {
        if alpha_hi - alpha_lo < precision {
            break;
        }
        rounds_used = round + 1;
        let alpha = (alpha_lo + alpha_hi) / 2.0;
        debug!("round {round}: alpha in [{alpha_lo}, {alpha_hi}], probing {alpha}");

        let decision = flow_network::decide(graph, h, alpha, cfg);

        if decision.candidate.is_empty() {
            alpha_hi = alpha;
        } else {
            alpha_lo = alpha;
            if decision.candidate.len() < cfg.density_check_threshold {
                let induced = graph.induced(&decision.candidate);
                let density = induced.density(h, cfg);
                let improves = best.as_ref().map_or(true, |b| density > b.density);
                if improves {
                    best = Some(Best {
                        vertices: decision.candidate,
                        density,
                    });
                }
            } else {
                warn!(
                    "round {round}: candidate of size {} exceeds density_check_threshold, \
                     accepting without exact re-measurement",
                    decision.candidate.len()
                );
                last_large = Some(decision.candidate);
            }
        }
    }

    if rounds_used >= cfg.max_iterations {
        warn!("h={h}: binary search hit MAX_ITERATIONS before reaching precision {precision}");
    }

    match best {
        Some(b) => {
            info!("h={h}: best measured density {} over {} vertices", b.density, b.vertices.len());
            graph.induced(&b.vertices)
        }
        None => match last_large {
            Some(vertices) => {
                info!("h={h}: no exactly-measured candidate, falling back to last large cut");
                graph.induced(&vertices)
            }
            None => {
                info!("h={h}: binary search never accepted a candidate, returning the input graph");
                graph.induced(&all_vertices)
            }
        },
    }
}
