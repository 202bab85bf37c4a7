//! Aldous-Broder random walk.

use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::{random_start_vertex, MazeSeed};
use rand::seq::IndexedRandom;
use rand::RngCore;
use std::collections::VecDeque;
use warren_core::{MazeGraph, VertexId};

/// Random-walks over the template, carving into each cell the first time
/// the walk enters it.
///
/// Samples uniformly among all spanning trees, at the cost of an
/// unbounded (expected polynomial) walk length.
#[derive(Clone, Copy, Debug, Default)]
pub struct AldousBroder;

impl MazeGenerator for AldousBroder {
    fn name(&self) -> &str {
        "aldous-broder"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let mut seed = MazeSeed::new(template);
        let mut v = random_start_vertex(template, rng)?;
        let start = v;
        seed.mark_visited(start);
        // Stop once the start's component is covered, so disconnected
        // templates terminate.
        let reachable = component_size(template, start);

        while seed.visited_count() < reachable {
            let Some(&next) = seed.neighbours(v).choose(rng) else {
                break;
            };
            if seed.mark_visited(next) {
                seed.add_edge(v, next)?;
            }
            v = next;
        }

        Ok(seed.into_maze(start))
    }
}

/// Number of vertices reachable from `start`, itself included.
fn component_size(g: &MazeGraph, start: VertexId) -> usize {
    let mut seen = vec![false; g.vertex_count()];
    seen[start.index()] = true;
    let mut queue = VecDeque::from([start]);
    let mut count = 1;
    while let Some(v) = queue.pop_front() {
        for w in g.neighbours(v) {
            if !seen[w.index()] {
                seen[w.index()] = true;
                count += 1;
                queue.push_back(w);
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use warren_test_utils::{assert_carved_from, assert_spanning_tree};
    use warren_topology::{grid_from_mask_str, spherical, torus};

    #[test]
    fn walk_covers_every_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for t in [torus(5, 4).unwrap(), spherical(5).unwrap()] {
            let maze = AldousBroder.generate(&t, &mut rng).unwrap();
            assert_spanning_tree(maze.graph());
            assert_carved_from(&t, maze.graph());
        }
    }

    #[test]
    fn disconnected_template_spans_the_start_component() {
        let t = grid_from_mask_str("## ").unwrap();
        let t2 = grid_from_mask_str("##  #").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let maze = AldousBroder.generate(&t, &mut rng).unwrap();
        assert_eq!(maze.graph().edge_count(), 1);
        let maze = AldousBroder.generate(&t2, &mut rng).unwrap();
        let expected = if maze.start() == VertexId(2) { 0 } else { 1 };
        assert_eq!(maze.graph().edge_count(), expected);
    }

    #[test]
    fn component_sizes() {
        let t = grid_from_mask_str("## #\n#  #").unwrap();
        assert_eq!(component_size(&t, VertexId(0)), 3);
        assert_eq!(component_size(&t, VertexId(2)), 2);
    }
}
