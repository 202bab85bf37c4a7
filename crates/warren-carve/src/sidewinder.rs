//! Sidewinder carving driven by the template's candidate table.

use crate::directional::{candidate_table, cell_type, finish, targets_in};
use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::maze::Maze;
use crate::seed::MazeSeed;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use warren_core::{MazeGraph, VertexId};

/// Builds runs of cells along each cell's preferred direction, ending a
/// run at random and carving one break-out passage from a random member
/// of the run in a secondary direction.
///
/// A run extends when a draw falls below the configured probability, or
/// unconditionally when the current cell has nowhere else to go, provided
/// the preferred neighbour is unprocessed. Processing then resumes at the
/// lowest unprocessed id.
///
/// Works on grids, cylinders, tori, circles and spheres. Templates on
/// which a run can end with no break-out (Möbius strips, Klein bottles,
/// projective planes, upsilon tilings) typically fail with
/// [`CarveError::IncompleteCarve`]. The reported start vertex is 0.
///
/// # Examples
///
/// ```
/// use warren_carve::{MazeGenerator, Sidewinder};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let sidewinder = Sidewinder::builder().probability(0.7).build().unwrap();
/// let template = warren_topology::torus(8, 5).unwrap();
/// let maze = sidewinder
///     .generate(&template, &mut ChaCha8Rng::seed_from_u64(1))
///     .unwrap();
/// assert!(maze.is_spanning());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sidewinder {
    probability: f64,
}

/// Builder for [`Sidewinder`].
#[derive(Clone, Copy, Debug)]
pub struct SidewinderBuilder {
    probability: f64,
}

impl Sidewinder {
    /// Run-extension probability used when none is configured.
    pub const DEFAULT_PROBABILITY: f64 = 0.5;

    /// Create a new builder.
    pub fn builder() -> SidewinderBuilder {
        SidewinderBuilder {
            probability: Self::DEFAULT_PROBABILITY,
        }
    }

    /// Probability of extending a run when a break-out is possible.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for Sidewinder {
    fn default() -> Self {
        Self {
            probability: Self::DEFAULT_PROBABILITY,
        }
    }
}

impl SidewinderBuilder {
    /// Set the run-extension probability (default 0.5). Must be in `[0, 1]`.
    pub fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Build the generator.
    ///
    /// # Errors
    ///
    /// Returns [`CarveError::InvalidProbability`] if the probability is
    /// NaN or outside `[0, 1]`.
    pub fn build(self) -> Result<Sidewinder, CarveError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(CarveError::InvalidProbability {
                value: self.probability,
            });
        }
        Ok(Sidewinder {
            probability: self.probability,
        })
    }
}

impl MazeGenerator for Sidewinder {
    fn name(&self) -> &str {
        "sidewinder"
    }

    fn generate(&self, template: &MazeGraph, rng: &mut dyn RngCore) -> Result<Maze, CarveError> {
        let table = candidate_table(template, "sidewinder")?;
        let mut seed = MazeSeed::new(template);
        let n = seed.vertex_count() as u32;
        let mut cursor = 0u32;
        let mut run: Vec<VertexId> = Vec::new();

        loop {
            while cursor < n && !seed.is_unvisited(VertexId(cursor)) {
                cursor += 1;
            }
            if cursor == n {
                break;
            }

            run.clear();
            let mut v = VertexId(cursor);
            loop {
                seed.mark_visited(v);
                run.push(v);
                let ty = cell_type(template, v);
                let can_break_out = !targets_in(&seed, v, table.secondary(ty)).is_empty();
                let draw: f64 = rng.random();
                if draw >= self.probability && can_break_out {
                    break;
                }
                let Some(preferred) = table.preferred(ty) else {
                    break;
                };
                let Some(&next) = targets_in(&seed, v, &[preferred]).first() else {
                    break;
                };
                seed.add_edge(v, next)?;
                v = next;
            }

            let exits: Vec<(VertexId, VertexId)> = run
                .iter()
                .flat_map(|&s| {
                    targets_in(&seed, s, table.secondary(cell_type(template, s)))
                        .into_iter()
                        .map(move |t| (s, t))
                })
                .collect();
            if let Some(&(s, t)) = exits.choose(rng) {
                seed.add_edge(s, t)?;
            }
        }

        finish(seed, "sidewinder")
    }
}
