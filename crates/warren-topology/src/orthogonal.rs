//! Square-cell grids with configurable axis looping.
//!
//! Cells are numbered row-major: `(x, y)` is vertex `y * width + x`.

use crate::error::{cell_count, check_dimensions, TopologyError};
use crate::orientation::AxialOrientation;
use warren_core::{
    CandidateTable, CellType, Direction, GraphInfo, MazeGraph, RankerMap, Tessellation, VertexId,
};

/// Row-major vertex id of `(x, y)` in a grid `width` cells wide.
pub(crate) fn cell(x: u32, y: u32, width: u32) -> VertexId {
    VertexId(y * width + x)
}

/// A row-major ranker over a `width × height` block starting at id `offset`.
pub(crate) fn block_ranker(width: u32, height: u32, offset: u32) -> RankerMap {
    let mut ranker = RankerMap::new();
    for y in 0..height {
        for x in 0..width {
            ranker.insert(x as i32, y as i32, VertexId(offset + y * width + x));
        }
    }
    ranker
}

/// Add `count` vertices of one type.
pub(crate) fn add_vertices(
    g: &mut MazeGraph,
    count: u32,
    cell_type: CellType,
) -> Result<(), TopologyError> {
    for _ in 0..count {
        g.add_vertex(cell_type)?;
    }
    Ok(())
}

/// Add the EAST/SOUTH interior edges and any boundary loops of a square grid.
pub(crate) fn add_square_edges(
    g: &mut MazeGraph,
    width: u32,
    height: u32,
    x_orientation: AxialOrientation,
    y_orientation: AxialOrientation,
) -> Result<(), TopologyError> {
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                g.connect(cell(x, y, width), Direction::East, cell(x + 1, y, width))?;
            }
            if y + 1 < height {
                g.connect(cell(x, y, width), Direction::South, cell(x, y + 1, width))?;
            }
        }
    }
    if x_orientation.is_connected() {
        for y in 0..height {
            let far = cell(width - 1, x_orientation.partner(y, height), width);
            g.connect(cell(0, y, width), Direction::West, far)?;
        }
    }
    if y_orientation.is_connected() {
        for x in 0..width {
            let far = cell(y_orientation.partner(x, width), height - 1, width);
            g.connect(cell(x, 0, width), Direction::North, far)?;
        }
    }
    Ok(())
}

/// Build a `width × height` orthogonal grid.
///
/// Interior cells join EAST and SOUTH. When the x axis is not
/// disconnected, `(0, y)` joins WEST to `(width - 1, y')` where `y'` is `y`
/// (looped) or `height - 1 - y` (reverse-looped); the y axis is treated
/// symmetrically with NORTH edges. Looping an axis of one cell adds
/// nothing, and loop edges that duplicate an existing adjacency are
/// dropped.
///
/// Returns `Err(TopologyError::EmptyDimension)` if either dimension is 0.
///
/// # Examples
///
/// ```
/// use warren_topology::{orthogonal_grid, AxialOrientation};
///
/// let d = AxialOrientation::Disconnected;
/// let g = orthogonal_grid(3, 2, d, d).unwrap();
/// assert_eq!(g.vertex_count(), 6);
/// // Three SOUTH edges and four EAST edges.
/// assert_eq!(g.edge_count(), 7);
/// ```
pub fn orthogonal_grid(
    width: u32,
    height: u32,
    x_orientation: AxialOrientation,
    y_orientation: AxialOrientation,
) -> Result<MazeGraph, TopologyError> {
    check_dimensions(width, height)?;
    let count = cell_count(width, height)?;
    let info = GraphInfo::new(Tessellation::Orthogonal)
        .with_dimensions(width, height)
        .with_rankers(vec![block_ranker(width, height, 0)])
        .with_candidates(CandidateTable::uniform(&[Direction::East, Direction::South]));
    let mut g = MazeGraph::new(info);
    add_vertices(&mut g, count, CellType::DEFAULT)?;
    add_square_edges(&mut g, width, height, x_orientation, y_orientation)?;
    log::debug!(
        "orthogonal template {width}x{height} ({x_orientation:?}, {y_orientation:?}): {} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    Ok(g)
}

/// A rectangle: neither axis joined.
pub fn grid(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    use AxialOrientation::*;
    orthogonal_grid(width, height, Disconnected, Disconnected)
}

/// A cylinder: the x axis loops.
pub fn cylinder(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    use AxialOrientation::*;
    orthogonal_grid(width, height, Looped, Disconnected)
}

/// A torus: both axes loop.
pub fn torus(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    use AxialOrientation::*;
    orthogonal_grid(width, height, Looped, Looped)
}

/// A Möbius strip: the x axis loops with y mirrored.
pub fn mobius_strip(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    use AxialOrientation::*;
    orthogonal_grid(width, height, ReverseLooped, Disconnected)
}

/// A Klein bottle: the x axis loops mirrored, the y axis loops plainly.
pub fn klein_bottle(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    use AxialOrientation::*;
    orthogonal_grid(width, height, ReverseLooped, Looped)
}

/// A projective plane: both axes loop mirrored.
pub fn projective_plane(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    use AxialOrientation::*;
    orthogonal_grid(width, height, ReverseLooped, ReverseLooped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            grid(0, 3).unwrap_err(),
            TopologyError::EmptyDimension { name: "width" }
        );
        assert_eq!(
            grid(3, 0).unwrap_err(),
            TopologyError::EmptyDimension { name: "height" }
        );
    }

    #[test]
    fn rectangle_edges_run_east_and_south() {
        let g = grid(3, 3).unwrap();
        compliance::run_full_compliance(&g);
        assert!(g.has_passage(VertexId(4), Direction::North));
        assert!(g.has_passage(VertexId(4), Direction::West));
        assert!(g.has_wall(VertexId(0), Direction::West));
        assert_eq!(g.degree(VertexId(0)), 2);
        assert_eq!(g.degree(VertexId(4)), 4);
    }

    #[test]
    fn cylinder_joins_left_and_right_columns() {
        let g = cylinder(4, 3).unwrap();
        let e = g.edge_between(VertexId(4), VertexId(7)).unwrap();
        assert_eq!(e.direction_from(VertexId(4)), Some(Direction::West));
        assert_eq!(e.direction_from(VertexId(7)), Some(Direction::East));
        assert!(g.has_wall(VertexId(1), Direction::North));
    }

    #[test]
    fn mobius_strip_mirrors_rows() {
        let g = mobius_strip(4, 3).unwrap();
        // (0, 0) joins (3, 2); (0, 1) joins (3, 1).
        assert!(g.edge_between(cell(0, 0, 4), cell(3, 2, 4)).is_some());
        assert!(g.edge_between(cell(0, 1, 4), cell(3, 1, 4)).is_some());
        assert!(g.edge_between(cell(0, 0, 4), cell(3, 0, 4)).is_none());
    }

    #[test]
    fn projective_plane_mirrors_columns() {
        let g = projective_plane(4, 3).unwrap();
        let e = g.edge_between(cell(1, 0, 4), cell(2, 2, 4)).unwrap();
        assert_eq!(e.direction_from(cell(1, 0, 4)), Some(Direction::North));
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn single_cell_loops_add_nothing() {
        let g = torus(1, 1).unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn metadata_describes_the_grid() {
        let g = klein_bottle(5, 2).unwrap();
        let info = g.info();
        assert_eq!(info.tessellation, Tessellation::Orthogonal);
        assert_eq!((info.width, info.height), (Some(5), Some(2)));
        let ranker = info.ranker(CellType::DEFAULT).unwrap();
        assert_eq!(ranker.get(4, 1), Some(VertexId(9)));
        assert_eq!(
            info.candidates.as_ref().unwrap().candidates(CellType::DEFAULT),
            &[Direction::East, Direction::South]
        );
    }
}
