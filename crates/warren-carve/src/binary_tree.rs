//! Binary-tree carving driven by the template's candidate table.

use crate::directional::{candidate_table, cell_type, finish, targets_in};
use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::MazeSeed;
use rand::seq::IndexedRandom;
use rand::RngCore;
use warren_core::MazeGraph;

/// Visits cells in id order and carves each one towards a random
/// not-yet-processed neighbour lying in one of its candidate directions.
///
/// On an orthogonal grid with candidates `[EAST, SOUTH]` this is the
/// classic binary-tree maze: the bottom row is one long eastward
/// corridor and the last column one long southward corridor.
///
/// Requires a candidate table ([`CarveError::UnsupportedOperation`]
/// otherwise). Tilings on which some cell has no forward candidate (such
/// as upsilon diamonds) fail with [`CarveError::IncompleteCarve`]. The
/// reported start vertex is 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryTree;

impl MazeGenerator for BinaryTree {
    fn name(&self) -> &str {
        "binary-tree"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let table = candidate_table(template, "binary-tree")?;
        let mut seed = MazeSeed::new(template);

        for v in template.vertices() {
            let directions = table.candidates(cell_type(template, v));
            if let Some(&target) = targets_in(&seed, v, directions).choose(rng) {
                seed.add_edge(v, target)?;
            }
            seed.mark_visited(v);
        }

        finish(seed, "binary-tree")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use warren_core::{CellType, Direction, VertexId};
    use warren_test_utils::{assert_carved_from, assert_spanning_tree, ZeroRng};
    use warren_topology::{circular, cylinder, grid, spherical, upsilon_grid, AxialOrientation};

    #[test]
    fn first_choice_carves_east_everywhere_possible() {
        let t = grid(3, 3).unwrap();
        let maze = BinaryTree.generate(&t, &mut ZeroRng).unwrap();
        let g = maze.graph();
        assert_spanning_tree(g);
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(g.wall_at(CellType::DEFAULT, x, y, Direction::East), Some(false));
            }
        }
        assert!(g.has_passage(VertexId(2), Direction::South));
        assert!(g.has_passage(VertexId(5), Direction::South));
    }

    #[test]
    fn round_and_looped_templates_span() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for t in [
            cylinder(6, 4).unwrap(),
            circular(5).unwrap(),
            spherical(6).unwrap(),
        ] {
            let maze = BinaryTree.generate(&t, &mut rng).unwrap();
            assert_eq!(maze.start(), VertexId(0));
            assert_spanning_tree(maze.graph());
            assert_carved_from(&t, maze.graph());
        }
    }

    #[test]
    fn upsilon_diamonds_are_stranded() {
        let d = AxialOrientation::Disconnected;
        let t = upsilon_grid(3, 3, d, d).unwrap();
        let err = BinaryTree.generate(&t, &mut ZeroRng).unwrap_err();
        assert!(matches!(
            err,
            CarveError::IncompleteCarve { required: 12, .. }
        ));
    }

    #[test]
    fn missing_candidates_fail_up_front() {
        let mut t = grid(3, 3).unwrap();
        t.set_candidates(None);
        assert_eq!(
            BinaryTree.generate(&t, &mut ZeroRng).unwrap_err(),
            CarveError::UnsupportedOperation {
                algorithm: "binary-tree"
            }
        );
    }
}
