//! Topology constructors for Warren maze templates.
//!
//! Each constructor builds a fully populated
//! [`MazeGraph`](warren_core::MazeGraph) whose edges are
//! every passage the surface allows, annotated with the direction each
//! passage runs from both ends. Carving algorithms select a spanning tree
//! of these edges.
//!
//! # Families
//!
//! - [`orthogonal_grid`]: square cells with configurable [`AxialOrientation`]
//!   per axis, plus the named shapes [`grid`], [`cylinder`], [`torus`],
//!   [`mobius_strip`], [`klein_bottle`] and [`projective_plane`]
//! - [`grid_from_mask`]: irregular square grids read from text
//! - [`circular`] and [`spherical`]: ring subdivisions sized by [`ring_sizes`]
//! - [`upsilon_grid`]: octagons with diamonds at their diagonals
//! - [`zeta_grid`]: square cells that also connect diagonally
//!
//! [`Topology`] packages any of these as a buildable value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circular;
pub mod error;
pub mod mask;
pub mod orientation;
pub mod orthogonal;
pub mod rings;
pub mod spherical;
pub mod topology;
pub mod upsilon;
pub mod zeta;

#[cfg(test)]
pub(crate) mod compliance;

pub use circular::circular;
pub use error::TopologyError;
pub use mask::{grid_from_mask, grid_from_mask_str};
pub use orientation::AxialOrientation;
pub use orthogonal::{
    cylinder, grid, klein_bottle, mobius_strip, orthogonal_grid, projective_plane, torus,
};
pub use rings::ring_sizes;
pub use spherical::spherical;
pub use topology::Topology;
pub use upsilon::{upsilon_cylinder, upsilon_grid, upsilon_torus};
pub use zeta::zeta_grid;
