//! Maze configuration, validation, and error types.
//!
//! [`MazeConfig`] names a template [`Topology`], a carving [`Algorithm`],
//! and a seed. [`validate()`](MazeConfig::validate) checks that the three
//! fit together without carving; [`generate()`](MazeConfig::generate)
//! builds the template and carves it with a `ChaCha8Rng` seeded from
//! [`MazeConfig::seed`].

use std::error::Error;
use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_carve::{Algorithm, CarveError, Maze};
use warren_core::MazeGraph;
use warren_topology::{Topology, TopologyError};

// ── BuildError ─────────────────────────────────────────────────────

/// Errors from [`MazeConfig::validate()`] and [`MazeConfig::generate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum BuildError {
    /// The template could not be built.
    Topology(TopologyError),
    /// The algorithm rejected its parameters or the template.
    Carve(CarveError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topology(e) => write!(f, "topology: {e}"),
            Self::Carve(e) => write!(f, "carve: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Topology(e) => Some(e),
            Self::Carve(e) => Some(e),
        }
    }
}

impl From<TopologyError> for BuildError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

impl From<CarveError> for BuildError {
    fn from(e: CarveError) -> Self {
        Self::Carve(e)
    }
}

// ── MazeConfig ─────────────────────────────────────────────────────

/// Everything needed to reproduce a maze.
///
/// The same config always produces the same maze.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    /// Template to carve.
    pub topology: Topology,
    /// Carving algorithm and its parameters.
    pub algorithm: Algorithm,
    /// RNG seed for deterministic carving.
    pub seed: u64,
}

impl MazeConfig {
    /// Build the template graph.
    pub fn template(&self) -> Result<MazeGraph, BuildError> {
        Ok(self.topology.build()?)
    }

    /// Check that the topology builds and the algorithm can carve it.
    pub fn validate(&self) -> Result<(), BuildError> {
        let template = self.template()?;
        self.check(&template)
    }

    /// Build the template and carve it with a `ChaCha8Rng` seeded from
    /// [`seed`](Self::seed).
    pub fn generate(&self) -> Result<Maze, BuildError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Build the template and carve it with a caller-supplied RNG.
    pub fn generate_with(&self, rng: &mut dyn RngCore) -> Result<Maze, BuildError> {
        let template = self.template()?;
        self.check(&template)?;
        log::debug!(
            "carving {} template ({} vertices, {} edges) with {}, seed {}",
            self.topology.name(),
            template.vertex_count(),
            template.edge_count(),
            self.algorithm,
            self.seed
        );
        Ok(self.algorithm.generate(&template, rng)?)
    }

    fn check(&self, template: &MazeGraph) -> Result<(), BuildError> {
        // 1. Algorithm parameters must be in range.
        self.algorithm.validate()?;
        // 2. Directional algorithms need a candidate table.
        if self.algorithm.is_directional() && template.info().candidates.is_none() {
            return Err(CarveError::UnsupportedOperation {
                algorithm: self.algorithm.name(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_topology::AxialOrientation;

    fn grid(width: u32, height: u32) -> Topology {
        Topology::Orthogonal {
            width,
            height,
            x: AxialOrientation::Disconnected,
            y: AxialOrientation::Disconnected,
        }
    }

    #[test]
    fn valid_config_passes() {
        let config = MazeConfig {
            topology: grid(5, 5),
            algorithm: Algorithm::BinaryTree,
            seed: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_is_a_topology_error() {
        let config = MazeConfig {
            topology: grid(0, 5),
            algorithm: Algorithm::Dfs,
            seed: 0,
        };
        match config.validate() {
            Err(BuildError::Topology(TopologyError::EmptyDimension { name })) => {
                assert_eq!(name, "width");
            }
            other => panic!("expected EmptyDimension, got {other:?}"),
        }
    }

    #[test]
    fn bad_probability_is_a_carve_error() {
        let config = MazeConfig {
            topology: grid(3, 3),
            algorithm: Algorithm::Sidewinder { probability: 1.5 },
            seed: 0,
        };
        assert_eq!(
            config.generate(),
            Err(BuildError::Carve(CarveError::InvalidProbability { value: 1.5 }))
        );
    }

    #[test]
    fn error_source_is_the_wrapped_error() {
        let err = BuildError::from(TopologyError::InvalidRadius);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("topology: "));
    }

    #[test]
    fn generate_is_deterministic() {
        let config = MazeConfig {
            topology: grid(8, 8),
            algorithm: Algorithm::Prim,
            seed: 7,
        };
        let a = config.generate().unwrap();
        let b = config.generate().unwrap();
        assert_eq!(a, b);
        assert!(a.is_spanning());
    }
}
