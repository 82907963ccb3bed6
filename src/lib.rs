//! Approximate h-clique densest subgraph discovery.
//!
//! Given an undirected simple graph and a clique size `h`, this crate finds a
//! non-empty vertex subset `S` that approximately maximizes the h-clique
//! density `rho_h(S) = c_h(S) / |S|`, where `c_h(S)` is the number of h-vertex
//! cliques in the subgraph induced by `S`. The search is a binary search over
//! a density guess `alpha`, deciding each guess with a max-flow/min-cut solve
//! on a Goldberg-style parametric network built from the graph's cliques.

pub mod config;
pub mod error;
pub mod graph;
pub mod cliques;
pub mod flow_network;
pub mod max_flow;
pub mod density_search;
pub mod report;
pub mod io;

pub use config::Config;
pub use error::CoreError;
pub use graph::Graph;
pub use density_search::densest_subgraph;
pub use report::Report;

#[cfg(test)]
pub(crate) mod test_support;
