//! Core types for the Warren maze generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! direction vocabulary and the direction-annotated graph that topology
//! constructors build and carving algorithms consume:
//!
//! - [`Direction`]: the closed set of passage directions and their opposites
//! - [`MazeGraph`]: undirected graph of cells with [`EdgeInfo`] annotations
//! - [`GraphInfo`]: tessellation, dimensions, [`RankerMap`]s, and the
//!   [`CandidateTable`] used by directional carving algorithms

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod graph;
pub mod id;
pub mod info;

pub use direction::Direction;
pub use error::GraphError;
pub use graph::{EdgeInfo, MazeGraph, VertexInfo};
pub use id::{CellType, VertexId};
pub use info::{CandidateTable, GraphInfo, RankerMap, Tessellation};
