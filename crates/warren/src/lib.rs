//! Warren: perfect-maze generation over graph topologies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Warren sub-crates. For most users, adding `warren` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! let config = MazeConfig {
//!     topology: Topology::Orthogonal {
//!         width: 6,
//!         height: 4,
//!         x: AxialOrientation::Looped,
//!         y: AxialOrientation::Looped,
//!     },
//!     algorithm: Algorithm::Dfs,
//!     seed: 42,
//! };
//! let maze = config.generate().unwrap();
//! assert_eq!(maze.graph().vertex_count(), 24);
//! assert_eq!(maze.graph().edge_count(), 23);
//! assert!(maze.is_spanning());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | Directions, ids, `MazeGraph`, graph metadata |
//! | [`topology`] | `warren-topology` | Template constructors and `Topology` |
//! | [`carve`] | `warren-carve` | Carving algorithms, `Maze`, `MazeGenerator` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;

pub use config::{BuildError, MazeConfig};

/// Core graph types (`warren-core`).
///
/// Contains [`types::Direction`], [`types::MazeGraph`], and the metadata
/// consumed by renderers ([`types::GraphInfo`], [`types::RankerMap`]).
pub use warren_core as types;

/// Template constructors (`warren-topology`).
///
/// Grids and their looped surfaces, masks, circular and spherical ring
/// tilings, and the upsilon and zeta tilings. [`topology::Topology`]
/// describes any of them as a value.
pub use warren_topology as topology;

/// Spanning-tree carving (`warren-carve`).
///
/// Every algorithm implements [`carve::MazeGenerator`]; [`carve::Algorithm`]
/// selects one by name.
pub use warren_carve as carve;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use warren_core::{CellType, Direction, EdgeInfo, MazeGraph, Tessellation, VertexId};

    // Topology
    pub use warren_topology::{AxialOrientation, Topology, TopologyError};

    // Carving
    pub use warren_carve::{Algorithm, CarveError, Maze, MazeGenerator};

    // Configuration
    pub use crate::config::{BuildError, MazeConfig};
}
