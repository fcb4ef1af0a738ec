//! Error types shared by every stage.

use crate::pagerank::RankVector;
use crate::types::VertexId;

/// Errors raised while validating, building or ranking a graph.
///
/// All variants are recoverable: the caller decides whether to abort or to
/// continue with best-effort output (see [`GraphError::NonConvergence`]).
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Declared counts inconsistent with the content, or an edge endpoint
    /// outside `[1, num_vertices]`.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A vertex with outgoing edges whose weights sum to zero.
    #[error("vertex {vertex} has outgoing edges but zero total out-weight")]
    DegenerateVertex { vertex: VertexId },

    /// The iteration cap was reached before the tolerance test passed.
    ///
    /// `ranks` holds the normalized vector from the last sweep.
    #[error("pagerank did not converge after {iterations} iterations (residual {delta:e})")]
    NonConvergence {
        iterations: usize,
        delta: f64,
        ranks: RankVector,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
