//! Benchmark profiles for the Warren maze generator.
//!
//! Provides pre-built template profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 torus (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//! - [`mixed_profiles`]: one mid-sized template per tessellation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren_core::MazeGraph;
use warren_topology::{AxialOrientation, Topology, TopologyError};

/// Build a reference benchmark template: 100x100 torus (10K cells).
pub fn reference_profile() -> Result<MazeGraph, TopologyError> {
    warren_topology::torus(100, 100)
}

/// Build a stress benchmark template: 316x316 grid (~100K cells).
///
/// Same shape family as [`reference_profile`] but at 10x the cell count,
/// without wrapping.
pub fn stress_profile() -> Result<MazeGraph, TopologyError> {
    warren_topology::grid(316, 316)
}

/// One template of each tessellation, each with a few thousand cells.
///
/// Returned as `(label, topology)` pairs so benches can name their runs.
pub fn mixed_profiles() -> Vec<(&'static str, Topology)> {
    vec![
        (
            "klein_64",
            Topology::Orthogonal {
                width: 64,
                height: 64,
                x: AxialOrientation::Looped,
                y: AxialOrientation::ReverseLooped,
            },
        ),
        ("circular_12", Topology::Circular { radius: 12 }),
        ("spherical_24", Topology::Spherical { diameter: 24 }),
        (
            "upsilon_48",
            Topology::Upsilon {
                width: 48,
                height: 48,
                x: AxialOrientation::Disconnected,
                y: AxialOrientation::Disconnected,
            },
        ),
        (
            "zeta_64",
            Topology::Zeta {
                width: 64,
                height: 64,
                x: AxialOrientation::Looped,
                y: AxialOrientation::Looped,
            },
        ),
    ]
}
