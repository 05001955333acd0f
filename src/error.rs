use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Parallel edge rejected: {0}")]
    DuplicateRejected(String),

    #[error("Vertex position {index} out of range for graph with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Graph has no edges")]
    EmptyGraph,

    #[error("A cut needs at least 2 vertices, graph has {0}")]
    TooFewVertices(usize),

    #[error("Iteration count must be positive")]
    InvalidIterations,

    #[error("Minimum cut is only defined here for undirected graphs")]
    DirectedGraph,

    #[error("Graph invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Line {line}: cannot parse '{token}' as a vertex index")]
    Parse { line: usize, token: String },

    #[error("Line {line}: vertex {index} is outside 1..={vertices}")]
    VertexOutOfRange {
        line: usize,
        index: usize,
        vertices: usize,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
