//! The closed set of carving algorithms, selectable by name.

use crate::aldous_broder::AldousBroder;
use crate::bfs::Bfs;
use crate::binary_tree::BinaryTree;
use crate::dfs::Dfs;
use crate::error::CarveError;
use crate::generator::MazeGenerator;
use crate::hunt_and_kill::HuntAndKill;
use crate::maze::Maze;
use crate::prim::Prim;
use crate::sidewinder::Sidewinder;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use warren_core::MazeGraph;

/// A carving algorithm and its parameters.
///
/// # Examples
///
/// ```
/// use warren_carve::Algorithm;
///
/// let a: Algorithm = "hunt-and-kill".parse().unwrap();
/// assert_eq!(a, Algorithm::HuntAndKill);
/// assert_eq!(a.to_string(), "hunt-and-kill");
/// assert!("quicksort".parse::<Algorithm>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Algorithm {
    /// See [`Dfs`].
    Dfs,
    /// See [`Bfs`].
    Bfs,
    /// See [`AldousBroder`].
    AldousBroder,
    /// See [`Prim`].
    Prim,
    /// See [`HuntAndKill`].
    HuntAndKill,
    /// See [`BinaryTree`].
    BinaryTree,
    /// See [`Sidewinder`].
    Sidewinder {
        /// Run-extension probability in `[0, 1]`.
        probability: f64,
    },
}

impl Algorithm {
    /// Every algorithm, with default parameters.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::AldousBroder,
        Algorithm::Prim,
        Algorithm::HuntAndKill,
        Algorithm::BinaryTree,
        Algorithm::Sidewinder {
            probability: Sidewinder::DEFAULT_PROBABILITY,
        },
    ];

    /// The name this algorithm parses from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::AldousBroder => "aldous-broder",
            Self::Prim => "prim",
            Self::HuntAndKill => "hunt-and-kill",
            Self::BinaryTree => "binary-tree",
            Self::Sidewinder { .. } => "sidewinder",
        }
    }

    /// Whether the algorithm needs a candidate table on the template.
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::BinaryTree | Self::Sidewinder { .. })
    }

    /// Check the parameters without carving.
    pub fn validate(&self) -> Result<(), CarveError> {
        self.generator().map(|_| ())
    }

    /// The configured generator.
    pub fn generator(&self) -> Result<Box<dyn MazeGenerator>, CarveError> {
        Ok(match *self {
            Self::Dfs => Box::new(Dfs),
            Self::Bfs => Box::new(Bfs),
            Self::AldousBroder => Box::new(AldousBroder),
            Self::Prim => Box::new(Prim),
            Self::HuntAndKill => Box::new(HuntAndKill),
            Self::BinaryTree => Box::new(BinaryTree),
            Self::Sidewinder { probability } => {
                Box::new(Sidewinder::builder().probability(probability).build()?)
            }
        })
    }

    /// Carve a maze out of `template`.
    pub fn generate(
        &self,
        template: &MazeGraph,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, CarveError> {
        self.generator()?.generate(template, rng)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown maze algorithm '{}'", self.name)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parse a name as printed by [`Algorithm::name`]. Case-insensitive;
    /// underscores are accepted in place of hyphens. Sidewinder gets the
    /// default probability.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|a| a.name() == normalized)
            .ok_or_else(|| UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.generator().unwrap().name(), a.name());
        }
        assert_eq!("Binary_Tree".parse::<Algorithm>(), Ok(Algorithm::BinaryTree));
    }

    #[test]
    fn unknown_names_are_reported() {
        let err = "kruskal".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "unknown maze algorithm 'kruskal'");
    }

    #[test]
    fn sidewinder_parameters_are_validated() {
        let bad = Algorithm::Sidewinder { probability: 2.0 };
        assert_eq!(
            bad.validate(),
            Err(CarveError::InvalidProbability { value: 2.0 })
        );
        assert!(Algorithm::BinaryTree.validate().is_ok());
        assert!(bad.is_directional());
        assert!(!Algorithm::Prim.is_directional());
    }
}
