//! Latitude-ring tilings of a sphere.

use crate::error::TopologyError;
use crate::rings::ring_sizes;
use warren_core::{
    CandidateTable, CellType, Direction, GraphError, GraphInfo, MazeGraph, RankerMap, Tessellation,
    VertexId,
};

/// Build a spherical template spanning `diameter` rows of latitude.
///
/// The northern hemisphere (including the equator when `diameter` is odd)
/// has `diameter / 2 + diameter % 2` rows sized by [`ring_sizes`]; each
/// cell joins EAST around its row and NORTH to its parent. The southern
/// hemisphere mirrors those sizes back down to a single-cell south pole.
/// Each southern cell joins NORTH to the `previous / size` consecutive
/// cells above it, and EAST around its row except at the pole.
///
/// Ids increase from the north pole (0) to the south pole (last). The
/// ranker is keyed `(row, column)` with rows `0 .. diameter`; the width
/// is the widest row and the height is `diameter`.
///
/// Returns `Err(TopologyError::InvalidDiameter)` if `diameter` is 0.
///
/// # Examples
///
/// ```
/// use warren_topology::spherical;
///
/// // Pole, six cells, pole.
/// let g = spherical(3).unwrap();
/// assert_eq!(g.vertex_count(), 8);
/// assert_eq!(g.edge_count(), 6 + 6 + 6);
/// ```
pub fn spherical(diameter: u32) -> Result<MazeGraph, TopologyError> {
    if diameter == 0 {
        return Err(TopologyError::InvalidDiameter);
    }
    let northern = diameter / 2 + diameter % 2;
    let north_sizes = ring_sizes(northern)?;

    // Row sizes from pole to pole.
    let mirrored = north_sizes.len() - (diameter % 2) as usize;
    let rows: Vec<u32> = north_sizes
        .iter()
        .copied()
        .chain(north_sizes[..mirrored].iter().rev().copied())
        .collect();

    let mut ranker = RankerMap::new();
    let mut row_start = Vec::with_capacity(rows.len());
    let mut next = 0u32;
    for (row, &cols) in rows.iter().enumerate() {
        row_start.push(next);
        for col in 0..cols {
            ranker.insert(row as i32, col as i32, VertexId(next));
            next = next.checked_add(1).ok_or(GraphError::TooManyVertices)?;
        }
    }

    let widest = north_sizes.last().copied().unwrap_or(1);
    let info = GraphInfo::new(Tessellation::Spherical)
        .with_dimensions(widest, diameter)
        .with_rankers(vec![ranker])
        .with_candidates(CandidateTable::uniform(&[Direction::East, Direction::South]));
    let mut g = MazeGraph::new(info);
    for _ in 0..next {
        g.add_vertex(CellType::DEFAULT)?;
    }

    for row in 1..rows.len() {
        let cols = rows[row];
        let above = rows[row - 1];
        let start = row_start[row];
        let above_start = row_start[row - 1];
        if row < north_sizes.len() {
            let ratio = cols / above;
            for col in 0..cols {
                let v = VertexId(start + col);
                g.connect(v, Direction::East, VertexId(start + (col + 1) % cols))?;
                g.connect(v, Direction::North, VertexId(above_start + col / ratio))?;
            }
        } else {
            let ratio = above / cols;
            for col in 0..cols {
                let v = VertexId(start + col);
                if cols > 1 {
                    g.connect(v, Direction::East, VertexId(start + (col + 1) % cols))?;
                }
                for i in 0..ratio {
                    g.connect(v, Direction::North, VertexId(above_start + col * ratio + i))?;
                }
            }
        }
    }

    log::debug!(
        "spherical template diameter {diameter}: {} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    Ok(g)
}
