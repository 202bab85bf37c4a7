//! A value describing which template to build.

use crate::circular::circular;
use crate::error::TopologyError;
use crate::mask::grid_from_mask;
use crate::orientation::AxialOrientation;
use crate::orthogonal::orthogonal_grid;
use crate::spherical::spherical;
use crate::upsilon::upsilon_grid;
use crate::zeta::zeta_grid;
use warren_core::MazeGraph;

/// A topology and its parameters.
///
/// Building is deferred until [`build`](Self::build), so a `Topology` can
/// sit in configuration and be validated or rebuilt cheaply.
///
/// # Examples
///
/// ```
/// use warren_topology::{AxialOrientation, Topology};
///
/// let torus = Topology::Orthogonal {
///     width: 6,
///     height: 4,
///     x: AxialOrientation::Looped,
///     y: AxialOrientation::Looped,
/// };
/// let g = torus.build().unwrap();
/// assert_eq!(g.vertex_count(), 24);
/// assert_eq!(g.edge_count(), 48);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Topology {
    /// See [`orthogonal_grid`].
    Orthogonal {
        /// Columns.
        width: u32,
        /// Rows.
        height: u32,
        /// Left/right boundary.
        x: AxialOrientation,
        /// Top/bottom boundary.
        y: AxialOrientation,
    },
    /// See [`grid_from_mask`].
    Mask {
        /// Mask rows; non-space bytes are live cells.
        rows: Vec<String>,
    },
    /// See [`circular`].
    Circular {
        /// Number of rings, including the centre.
        radius: u32,
    },
    /// See [`spherical`].
    Spherical {
        /// Number of latitude rows, including both poles.
        diameter: u32,
    },
    /// See [`upsilon_grid`].
    Upsilon {
        /// Octagon columns.
        width: u32,
        /// Octagon rows.
        height: u32,
        /// Left/right boundary.
        x: AxialOrientation,
        /// Top/bottom boundary.
        y: AxialOrientation,
    },
    /// See [`zeta_grid`].
    Zeta {
        /// Columns.
        width: u32,
        /// Rows.
        height: u32,
        /// Left/right boundary.
        x: AxialOrientation,
        /// Top/bottom boundary.
        y: AxialOrientation,
    },
}

impl Topology {
    /// Build the template graph.
    pub fn build(&self) -> Result<MazeGraph, TopologyError> {
        match self {
            Self::Orthogonal {
                width,
                height,
                x,
                y,
            } => orthogonal_grid(*width, *height, *x, *y),
            Self::Mask { rows } => grid_from_mask(rows.as_slice()),
            Self::Circular { radius } => circular(*radius),
            Self::Spherical { diameter } => spherical(*diameter),
            Self::Upsilon {
                width,
                height,
                x,
                y,
            } => upsilon_grid(*width, *height, *x, *y),
            Self::Zeta {
                width,
                height,
                x,
                y,
            } => zeta_grid(*width, *height, *x, *y),
        }
    }

    /// Short lowercase name of the topology family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Orthogonal { .. } => "orthogonal",
            Self::Mask { .. } => "mask",
            Self::Circular { .. } => "circular",
            Self::Spherical { .. } => "spherical",
            Self::Upsilon { .. } => "upsilon",
            Self::Zeta { .. } => "zeta",
        }
    }
}
