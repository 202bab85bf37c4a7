//! Randomized breadth-first growth.

use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::{random_start_vertex, MazeSeed};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::RngCore;
use std::collections::VecDeque;
use warren_core::MazeGraph;

/// Grows the maze outwards from the start in breadth-first order, joining
/// each newly reached cell to a random already-carved neighbour.
///
/// Produces short, bushy passages radiating from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bfs;

impl MazeGenerator for Bfs {
    fn name(&self) -> &str {
        "bfs"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let mut seed = MazeSeed::new(template);
        let start = random_start_vertex(template, rng)?;
        seed.mark_visited(start);
        let mut queue: VecDeque<_> = seed.neighbours(start).into_iter().collect();

        while let Some(v) = queue.pop_front() {
            if !seed.is_unvisited(v) {
                continue;
            }
            seed.mark_visited(v);
            // Non-empty: `v` was queued from a visited neighbour.
            if let Some(&joined) = seed.visited_neighbours(v).choose(rng) {
                seed.add_edge(v, joined)?;
            }
            let mut next = seed.unvisited_neighbours(v);
            next.shuffle(rng);
            queue.extend(next);
        }

        Ok(seed.into_maze(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::VertexId;
    use warren_test_utils::{assert_carved_from, assert_spanning_tree, ZeroRng};
    use warren_topology::{circular, grid};

    #[test]
    fn spans_grid_and_circle() {
        for t in [grid(5, 3).unwrap(), circular(4).unwrap()] {
            let maze = Bfs.generate(&t, &mut ZeroRng).unwrap();
            assert_spanning_tree(maze.graph());
            assert_carved_from(&t, maze.graph());
        }
    }

    #[test]
    fn start_is_not_requeued() {
        let t = grid(2, 1).unwrap();
        let maze = Bfs.generate(&t, &mut ZeroRng).unwrap();
        assert_eq!(maze.start(), VertexId(0));
        assert_eq!(maze.graph().edge_count(), 1);
    }
}
