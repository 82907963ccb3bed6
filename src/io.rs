//! Parsing and relabeling: the ambient layer around the core. Reads `h`
//! from one channel and the graph from another, kept as two separate
//! reads rather than unified into one file format, to stay compatible
//! with existing invocation habits.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::config::Config;
use crate::error::CoreError;
use crate::graph::Graph;

/// Bookkeeping about the parse that isn't part of the graph itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    /// Edge records skipped because they referenced an out-of-range vertex
    /// or failed to parse.
    pub invalid_edges: usize,
}

/// Reads `h` as the first whitespace-delimited token on `reader`.
pub fn read_clique_size<R: BufRead>(mut reader: R) -> Result<u32, CoreError> {
    let mut line = String::new();
    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .map_err(|e| CoreError::InvalidInput(format!("failed to read clique size: {e}")))?;
        if bytes_read == 0 {
            return Err(CoreError::InvalidInput("missing clique size h".to_string()));
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse::<u32>()
                .map_err(|_| CoreError::InvalidInput(format!("invalid clique size: {token:?}")));
        }
    }
}

/// Reads `n m` followed by `m` `u v w` edge records from `path`, relabeling
/// arbitrary vertex identifiers to dense indices `0..n` in first-seen order.
/// An edge whose mapped endpoint would land outside `0..n`, or that fails to
/// parse, is skipped and counted in `ParseStats::invalid_edges` rather than
/// aborting the parse.
pub fn read_graph(path: &Path, cfg: &Config) -> Result<(Graph, ParseStats), CoreError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CoreError::InvalidInput(format!("cannot read {}: {e}", path.display())))?;
    let mut tokens = content.split_whitespace();

    let n = parse_token::<i64>(&mut tokens, "n")?;
    let m = parse_token::<i64>(&mut tokens, "m")?;

    if n <= 0 || m < 0 || n as usize > cfg.max_n {
        return Err(CoreError::InvalidInput(format!(
            "invalid parameters: n={n}, m={m}, max_n={}",
            cfg.max_n
        )));
    }
    let n = n as usize;
    let m = m as usize;

    let mut graph = Graph::new(n);
    let mut id_map: HashMap<i64, usize> = HashMap::new();
    let mut stats = ParseStats::default();

    for record_index in 0..m {
        let triple = (tokens.next(), tokens.next(), tokens.next());
        let (Some(u_tok), Some(v_tok), Some(_w_tok)) = triple else {
            stats.invalid_edges += m - record_index;
            break;
        };
        let (Ok(u_raw), Ok(v_raw)) = (u_tok.parse::<i64>(), v_tok.parse::<i64>()) else {
            stats.invalid_edges += 1;
            continue;
        };

        let u = dense_index(&mut id_map, u_raw);
        let v = dense_index(&mut id_map, v_raw);
        if u >= n || v >= n {
            stats.invalid_edges += 1;
            continue;
        }
        graph.add_edge(u, v);
    }

    Ok((graph, stats))
}

fn dense_index(id_map: &mut HashMap<i64, usize>, raw_id: i64) -> usize {
    let next = id_map.len();
    *id_map.entry(raw_id).or_insert(next)
}

fn parse_token<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<T, CoreError>
where
    T::Err: std::fmt::Display,
{
    let token = tokens
        .next()
        .ok_or_else(|| CoreError::InvalidInput(format!("missing {name}")))?;
    token
        .parse::<T>()
        .map_err(|e| CoreError::InvalidInput(format!("invalid {name} {token:?}: {e}")))
}
