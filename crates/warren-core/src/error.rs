//! Error types for graph construction and queries.

use crate::id::VertexId;
use std::error::Error;
use std::fmt;

/// Errors arising from building or querying a [`MazeGraph`](crate::MazeGraph).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id does not exist in the graph.
    VertexOutOfBounds {
        /// The offending vertex.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge's direction pair is not an opposite pair.
    InconsistentDirections {
        /// First endpoint.
        v1: VertexId,
        /// Second endpoint.
        v2: VertexId,
    },
    /// The graph cannot address any more vertices (ids are `u32`).
    TooManyVertices,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfBounds {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} does not exist (graph has {vertex_count} vertices)"
            ),
            Self::InconsistentDirections { v1, v2 } => {
                write!(f, "edge {v1}-{v2} directions are not opposites")
            }
            Self::TooManyVertices => write!(f, "vertex count exceeds u32::MAX"),
        }
    }
}

impl Error for GraphError {}
