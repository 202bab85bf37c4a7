//! The carving strategy trait.

use crate::error::CarveError;
use crate::maze::Maze;
use rand::RngCore;
use warren_core::MazeGraph;

/// A maze-carving strategy.
///
/// Implementations are stateless apart from configuration: every random
/// choice is drawn from `rng`, so a fixed RNG state replays the same maze.
/// The template is only read.
///
/// On a connected template every implementation returns a spanning tree.
/// On a disconnected template the general-purpose algorithms span the
/// component of the start vertex, while the directional ones report
/// [`CarveError::IncompleteCarve`].
///
/// # Object safety
///
/// This trait is object-safe; generators can be stored as
/// `Box<dyn MazeGenerator>`.
///
/// # Examples
///
/// ```
/// use warren_carve::{Dfs, MazeGenerator};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let template = warren_topology::grid(4, 4).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let maze = Dfs.generate(&template, &mut rng).unwrap();
/// assert!(maze.is_spanning());
/// assert_eq!(maze.graph().edge_count(), 15);
/// ```
pub trait MazeGenerator: Send + Sync {
    /// Short lowercase name, as parsed by [`Algorithm`](crate::Algorithm).
    fn name(&self) -> &str;

    /// Carve a maze out of `template`.
    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError>;
}
