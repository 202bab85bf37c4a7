//! Concentric-ring tilings around a single centre cell.

use crate::error::TopologyError;
use crate::rings::ring_sizes;
use warren_core::{
    CandidateTable, CellType, Direction, GraphError, GraphInfo, MazeGraph, RankerMap, Tessellation,
    VertexId,
};

/// Build a circular template of `radius` rings.
///
/// Ring `r` holds `ring_sizes(radius)[r]` cells keyed `(r, column)` in the
/// ranker. Every cell outside the centre joins CLOCKWISE to its successor
/// in the ring (wrapping) and IN to its parent `(r - 1, column / ratio)`,
/// where `ratio` is the ring's size over its parent ring's size. The width
/// is the outermost ring's size and the height is `radius`.
///
/// Returns `Err(TopologyError::InvalidRadius)` if `radius` is 0.
///
/// # Examples
///
/// ```
/// use warren_topology::circular;
/// use warren_core::{Direction, VertexId};
///
/// let g = circular(3).unwrap();
/// assert_eq!(g.vertex_count(), 1 + 6 + 12);
/// assert!(g.has_passage(VertexId(0), Direction::Out));
/// ```
pub fn circular(radius: u32) -> Result<MazeGraph, TopologyError> {
    let sizes = ring_sizes(radius)?;

    let mut ranker = RankerMap::new();
    let mut next = 0u32;
    let mut ring_start = Vec::with_capacity(sizes.len());
    for (row, &cols) in sizes.iter().enumerate() {
        ring_start.push(next);
        for col in 0..cols {
            ranker.insert(row as i32, col as i32, VertexId(next));
            next = next.checked_add(1).ok_or(GraphError::TooManyVertices)?;
        }
    }

    let outer = sizes.last().copied().unwrap_or(1);
    let info = GraphInfo::new(Tessellation::Circular)
        .with_dimensions(outer, radius)
        .with_rankers(vec![ranker])
        .with_candidates(CandidateTable::uniform(&[Direction::Clockwise, Direction::Out]));
    let mut g = MazeGraph::new(info);
    for _ in 0..next {
        g.add_vertex(CellType::DEFAULT)?;
    }

    for row in 1..sizes.len() {
        let cols = sizes[row];
        let ratio = cols / sizes[row - 1];
        let start = ring_start[row];
        let parent_start = ring_start[row - 1];
        for col in 0..cols {
            let v = VertexId(start + col);
            g.connect(v, Direction::Clockwise, VertexId(start + (col + 1) % cols))?;
            g.connect(v, Direction::In, VertexId(parent_start + col / ratio))?;
        }
    }

    log::debug!(
        "circular template radius {radius}: {} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    Ok(g)
}
