//! Prim-style frontier growth.

use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::{random_start_vertex, MazeSeed};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use warren_core::MazeGraph;

/// Keeps a pool of carved cells that may still have unvisited neighbours,
/// and repeatedly extends the maze from a random member of the pool.
///
/// Produces many short dead ends branching off a dense core.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prim;

impl MazeGenerator for Prim {
    fn name(&self) -> &str {
        "prim"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let mut seed = MazeSeed::new(template);
        let start = random_start_vertex(template, rng)?;
        seed.mark_visited(start);
        let mut processing = vec![start];

        while !processing.is_empty() {
            let idx = rng.random_range(0..processing.len());
            let v = processing[idx];
            let Some(&u) = seed.unvisited_neighbours(v).choose(rng) else {
                processing.swap_remove(idx);
                continue;
            };
            seed.add_edge(v, u)?;
            seed.mark_visited(u);
            processing.push(u);
        }

        Ok(seed.into_maze(start))
    }
}
