//! Hunt-and-kill.

use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::{random_start_vertex, MazeSeed};
use rand::seq::IndexedRandom;
use rand::RngCore;
use warren_core::{MazeGraph, VertexId};

/// Random-walks without revisiting until stuck, then hunts in id order
/// for an unvisited cell next to the maze, joins it, and walks again.
///
/// The walk phase gives long corridors like [`Dfs`](crate::Dfs) without
/// keeping a stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuntAndKill;

impl MazeGenerator for HuntAndKill {
    fn name(&self) -> &str {
        "hunt-and-kill"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let mut seed = MazeSeed::new(template);
        let start = random_start_vertex(template, rng)?;
        seed.mark_visited(start);
        let n = seed.vertex_count() as u32;
        let mut walker = start;
        // Every id below `low` is visited; hunts never scan them again.
        let mut low = 0u32;

        loop {
            // Kill: walk until there is nowhere new to go.
            while let Some(&next) = seed.unvisited_neighbours(walker).choose(rng) {
                seed.add_edge(walker, next)?;
                seed.mark_visited(next);
                walker = next;
            }

            // Hunt: the first unvisited cell bordering the maze.
            while low < n && !seed.is_unvisited(VertexId(low)) {
                low += 1;
            }
            let mut found = None;
            for id in low..n {
                let v = VertexId(id);
                if !seed.is_unvisited(v) {
                    continue;
                }
                if let Some(&joined) = seed.visited_neighbours(v).choose(rng) {
                    found = Some((v, joined));
                    break;
                }
            }
            let Some((v, joined)) = found else {
                break;
            };
            seed.add_edge(v, joined)?;
            seed.mark_visited(v);
            walker = v;
        }

        Ok(seed.into_maze(start))
    }
}
