//! Reader for the adjacency-list text format.
//!
//! Line `i` (1-indexed) lists the 1-indexed vertices adjacent to vertex `i`,
//! separated by whitespace:
//!
//! ```text
//! 2 3
//! 1 3
//! 1 2 4
//! 3
//! ```
//!
//! Adjacency is read into an upper-triangular indicator, so a pair listed on
//! either of its lines (or on both) becomes one undirected edge of weight 0.

use std::fs;
use std::path::Path;

use log::debug;

use super::multigraph::Graph;
use crate::error::{Error, Result};

/// Parses adjacency lines into an undirected graph over `1..=n`.
///
/// Every line creates its vertex, even an empty line between other lines.
/// Trailing blank lines are ignored, and so are self references. Nothing is
/// built unless the whole input parses.
pub fn parse_adjacency_list(text: &str) -> Result<Graph<usize>> {
    let lines: Vec<&str> = text.lines().collect();
    let n = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut upper = vec![vec![false; n]; n];
    for (i, line) in lines.iter().take(n).enumerate() {
        for token in line.split_whitespace() {
            let j: usize = token.parse().map_err(|_| Error::Parse {
                line: i + 1,
                token: token.to_string(),
            })?;
            if j == 0 || j > n {
                return Err(Error::VertexOutOfRange {
                    line: i + 1,
                    index: j,
                    vertices: n,
                });
            }
            let j = j - 1;
            if i != j {
                upper[i.min(j)][i.max(j)] = true;
            }
        }
    }

    let mut graph = Graph::undirected(false);
    for v in 1..=n {
        graph.add_vertex(v);
    }
    for (i, row) in upper.iter().enumerate() {
        for (j, &adjacent) in row.iter().enumerate().skip(i + 1) {
            if adjacent {
                graph.add_edge(i + 1, j + 1, 0, true)?;
            }
        }
    }
    debug!(
        "parsed adjacency list: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads and parses an adjacency-list file.
pub fn load_adjacency_file<P: AsRef<Path>>(path: P) -> Result<Graph<usize>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_adjacency_list(&text)
}
