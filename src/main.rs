//! The command-line surface: reads `h` from stdin and the graph from the
//! file named by the first positional argument, runs the density search,
//! and prints the final report. Thin by design -- all the interesting
//! behavior is in the library (see `src/lib.rs`).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use hclique_densest_subgraph::{densest_subgraph, Config, CoreError, Report};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CoreError::InvalidInput(message)) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CoreError> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| CoreError::InvalidInput("missing graph file argument".to_string()))?;

    let stdin = io::stdin();
    let h = hclique_densest_subgraph::io::read_clique_size(stdin.lock())?;
    if h == 0 {
        return Err(CoreError::InvalidInput("h must be positive".to_string()));
    }
    let h = h as usize;

    let cfg = Config::default();
    let (graph, stats) = hclique_densest_subgraph::io::read_graph(&path, &cfg)?;
    if stats.invalid_edges > 0 {
        log::warn!("ignored {} invalid edge record(s)", stats.invalid_edges);
    }
    log::info!(
        "loaded graph: {} vertices, searching for {h}-clique densest subgraph",
        graph.vertex_count()
    );

    let subgraph = densest_subgraph(&graph, h, &cfg);
    let report = Report::new(&subgraph, h, &cfg);
    println!("{report}");

    Ok(())
}
