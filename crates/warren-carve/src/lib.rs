//! Spanning-tree maze carving for Warren templates.
//!
//! Each algorithm implements [`MazeGenerator`]: it reads a template
//! [`MazeGraph`](warren_core::MazeGraph), draws every random choice from
//! a caller-supplied RNG, and returns a [`Maze`] whose edges are a subset
//! of the template's.
//!
//! # Algorithms
//!
//! General-purpose, for any connected template:
//!
//! - [`Dfs`]: randomized depth-first search
//! - [`Bfs`]: randomized breadth-first growth
//! - [`AldousBroder`]: uniform spanning trees by random walk
//! - [`Prim`]: random growth from a frontier pool
//! - [`HuntAndKill`]: walk until stuck, then hunt for a new start
//!
//! Directional, for templates carrying a
//! [`CandidateTable`](warren_core::CandidateTable):
//!
//! - [`BinaryTree`]
//! - [`Sidewinder`]
//!
//! [`Algorithm`] selects among them by value or by name.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aldous_broder;
pub mod algorithm;
pub mod bfs;
pub mod binary_tree;
pub mod dfs;
mod directional;
pub mod error;
pub mod generator;
pub mod hunt_and_kill;
pub mod maze;
pub mod prim;
pub mod seed;
pub mod sidewinder;

pub use aldous_broder::AldousBroder;
pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use bfs::Bfs;
pub use binary_tree::BinaryTree;
pub use dfs::Dfs;
pub use error::CarveError;
pub use generator::MazeGenerator;
pub use hunt_and_kill::HuntAndKill;
pub use maze::Maze;
pub use prim::Prim;
pub use seed::{random_start_vertex, MazeSeed};
pub use sidewinder::{Sidewinder, SidewinderBuilder};
