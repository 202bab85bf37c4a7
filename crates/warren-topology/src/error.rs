//! Error types for topology construction.

use std::error::Error;
use std::fmt;
use warren_core::GraphError;

/// Errors arising from building a template graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A grid dimension was zero.
    EmptyDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
    },
    /// A grid dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A circular radius was zero.
    InvalidRadius,
    /// A spherical diameter was zero.
    InvalidDiameter,
    /// A mask has no live cells.
    InvalidMask {
        /// What went wrong.
        reason: String,
    },
    /// The tiling cannot be built with the requested axis orientations.
    UnsupportedTopology {
        /// What went wrong.
        reason: String,
    },
    /// The underlying graph rejected a vertex or edge.
    Graph(GraphError),
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { name } => write!(f, "{name} must be at least 1"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::InvalidRadius => write!(f, "radius must be at least 1"),
            Self::InvalidDiameter => write!(f, "diameter must be at least 1"),
            Self::InvalidMask { reason } => write!(f, "invalid mask: {reason}"),
            Self::UnsupportedTopology { reason } => write!(f, "unsupported topology: {reason}"),
            Self::Graph(e) => write!(f, "graph construction failed: {e}"),
        }
    }
}

impl Error for TopologyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for TopologyError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Largest accepted width or height: coordinates are `i32`.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Reject zero and oversized grid dimensions.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), TopologyError> {
    for (name, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(TopologyError::EmptyDimension { name });
        }
        if value > MAX_DIM {
            return Err(TopologyError::DimensionTooLarge {
                name,
                value,
                max: MAX_DIM,
            });
        }
    }
    Ok(())
}

/// `width * height`, or `TooManyVertices` if the product overflows.
pub(crate) fn cell_count(width: u32, height: u32) -> Result<u32, TopologyError> {
    width
        .checked_mul(height)
        .ok_or(TopologyError::Graph(GraphError::TooManyVertices))
}
