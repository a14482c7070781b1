use thiserror::Error;

/// Errors produced while loading a graph description.
///
/// Every variant means the input was rejected before any algorithm ran.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the loader was about to read.
        expected: &'static str,
    },

    #[error("Invalid {expected} '{token}' on line {line}")]
    InvalidInteger {
        /// What the loader was about to read.
        expected: &'static str,
        /// The offending token.
        token: String,
        /// 1-based line number of the token.
        line: usize,
    },

    #[error("Edge {edge_index} has endpoint {vertex} outside of [0, {vertex_count})")]
    VertexOutOfRange {
        /// 0-based position of the edge in the input.
        edge_index: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("Vertex count {vertex_count} exceeds the supported maximum of {max}")]
    TooManyVertices { vertex_count: usize, max: usize },

    #[error("Sum of absolute edge weights does not fit in a 64-bit cost")]
    WeightOverflow,

    #[error("Unexpected token '{token}' on line {line} after the last edge")]
    TrailingInput { token: String, line: usize },
}

/// Result type used by the graph loader.
pub type Result<T> = std::result::Result<T, GraphError>;
