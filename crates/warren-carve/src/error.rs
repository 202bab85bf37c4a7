//! Error types for maze carving.

use std::error::Error;
use std::fmt;
use warren_core::{GraphError, VertexId};

/// Errors arising from carving a maze out of a template.
#[derive(Clone, Debug, PartialEq)]
pub enum CarveError {
    /// The template lacks metadata the algorithm needs (for the
    /// binary-tree family, a candidate table).
    UnsupportedOperation {
        /// Name of the algorithm that refused the template.
        algorithm: &'static str,
    },
    /// A carve was requested between vertices the template does not join.
    EdgeNotFound {
        /// First endpoint.
        v1: VertexId,
        /// Second endpoint.
        v2: VertexId,
    },
    /// The template has no vertices.
    EmptyTemplate,
    /// A directional algorithm finished without reaching every vertex.
    IncompleteCarve {
        /// Edges carved.
        carved: usize,
        /// Edges a spanning tree of the template needs.
        required: usize,
    },
    /// A probability outside `[0, 1]` (or NaN).
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
    /// The maze graph rejected an edge.
    Graph(GraphError),
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation { algorithm } => {
                write!(f, "{algorithm} requires a template with a candidate table")
            }
            Self::EdgeNotFound { v1, v2 } => {
                write!(f, "template has no edge between {v1} and {v2}")
            }
            Self::EmptyTemplate => write!(f, "template has no vertices"),
            Self::IncompleteCarve { carved, required } => write!(
                f,
                "carve stranded cells: {carved} of {required} edges carved"
            ),
            Self::InvalidProbability { value } => {
                write!(f, "probability must be in [0, 1], got {value}")
            }
            Self::Graph(e) => write!(f, "maze graph error: {e}"),
        }
    }
}

impl Error for CarveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for CarveError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
