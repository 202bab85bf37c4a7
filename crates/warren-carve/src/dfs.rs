//! Randomized depth-first search (recursive backtracker).

use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::{random_start_vertex, MazeSeed};
use rand::seq::IndexedRandom;
use rand::RngCore;
use warren_core::MazeGraph;

/// Walks to a random unvisited neighbour, carving as it goes, and
/// backtracks along its stack when stuck.
///
/// Produces long, winding corridors with few dead ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dfs;

impl MazeGenerator for Dfs {
    fn name(&self) -> &str {
        "dfs"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let mut seed = MazeSeed::new(template);
        let start = random_start_vertex(template, rng)?;
        seed.mark_visited(start);
        let mut stack = vec![start];

        while let Some(&v) = stack.last() {
            let candidates = seed.unvisited_neighbours(v);
            let Some(&next) = candidates.choose(rng) else {
                stack.pop();
                continue;
            };
            seed.add_edge(v, next)?;
            seed.mark_visited(next);
            stack.push(next);
        }

        Ok(seed.into_maze(start))
    }
}
