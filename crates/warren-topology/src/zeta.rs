//! Square grids with diagonal passages.

use crate::error::{cell_count, check_dimensions, TopologyError};
use crate::orientation::{next_index, prev_index, AxialOrientation};
use crate::orthogonal::{add_square_edges, add_vertices, block_ranker, cell};
use warren_core::{CandidateTable, CellType, Direction, GraphInfo, MazeGraph, Tessellation};

/// Build a zeta template: an orthogonal grid whose cells also join their
/// diagonal neighbours.
///
/// Every cell joins NORTHEAST to `(x + 1, y - 1)` and SOUTHEAST to
/// `(x + 1, y + 1)` when those exist, wrapping across looped axes. The
/// orthogonal edges are exactly those of
/// [`orthogonal_grid`](crate::orthogonal_grid).
///
/// Returns `Err(TopologyError::UnsupportedTopology)` if either axis is
/// reverse-looped, or `Err(TopologyError::EmptyDimension)` if either
/// dimension is 0.
///
/// # Examples
///
/// ```
/// use warren_topology::{zeta_grid, AxialOrientation};
/// use warren_core::VertexId;
///
/// let d = AxialOrientation::Disconnected;
/// let g = zeta_grid(3, 3, d, d).unwrap();
/// // The centre reaches all eight surrounding cells.
/// assert_eq!(g.degree(VertexId(4)), 8);
/// ```
pub fn zeta_grid(
    width: u32,
    height: u32,
    x_orientation: AxialOrientation,
    y_orientation: AxialOrientation,
) -> Result<MazeGraph, TopologyError> {
    if x_orientation == AxialOrientation::ReverseLooped
        || y_orientation == AxialOrientation::ReverseLooped
    {
        return Err(TopologyError::UnsupportedTopology {
            reason: "zeta tilings cannot be reverse-looped".to_string(),
        });
    }
    check_dimensions(width, height)?;
    let count = cell_count(width, height)?;
    let x_looped = x_orientation == AxialOrientation::Looped;
    let y_looped = y_orientation == AxialOrientation::Looped;

    let info = GraphInfo::new(Tessellation::Zeta)
        .with_dimensions(width, height)
        .with_rankers(vec![block_ranker(width, height, 0)])
        .with_candidates(CandidateTable::uniform(&[
            Direction::East,
            Direction::South,
            Direction::SouthEast,
            Direction::SouthWest,
        ]));
    let mut g = MazeGraph::new(info);
    add_vertices(&mut g, count, CellType::DEFAULT)?;
    add_square_edges(&mut g, width, height, x_orientation, y_orientation)?;

    for y in 0..height {
        for x in 0..width {
            let Some(xe) = next_index(x, width, x_looped) else {
                continue;
            };
            let v = cell(x, y, width);
            if let Some(yn) = prev_index(y, height, y_looped) {
                g.connect(v, Direction::NorthEast, cell(xe, yn, width))?;
            }
            if let Some(ys) = next_index(y, height, y_looped) {
                g.connect(v, Direction::SouthEast, cell(xe, ys, width))?;
            }
        }
    }

    log::debug!(
        "zeta template {width}x{height} ({x_orientation:?}, {y_orientation:?}): {} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    Ok(g)
}
