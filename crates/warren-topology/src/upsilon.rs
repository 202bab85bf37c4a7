//! Octagon-and-diamond tilings.
//!
//! Octagons (type 0) sit on a `width × height` grid. Diamonds (type 1)
//! fill the gaps at the octagons' diagonals: diamond `(x, y)` touches
//! octagons `(x, y)`, `(x + 1, y)`, `(x, y + 1)` and `(x + 1, y + 1)`.

use crate::error::{cell_count, check_dimensions, TopologyError};
use crate::orientation::{next_index, AxialOrientation};
use crate::orthogonal::{add_vertices, block_ranker, cell};
use warren_core::{
    CandidateTable, CellType, Direction, GraphError, GraphInfo, MazeGraph, Tessellation, VertexId,
};

/// Build an upsilon template.
///
/// Octagons get ids `0 .. width * height` in row-major order and join
/// SOUTH and EAST to neighbouring octagons, wrapping on looped axes.
/// Diamonds follow on a `dw × dh` grid, where `dw` is `width - 1` for a
/// disconnected x axis and `width` for a looped one (likewise `dh`). Each
/// diamond joins NORTHWEST, NORTHEAST, SOUTHWEST and SOUTHEAST to its
/// four octagons.
///
/// Returns `Err(TopologyError::UnsupportedTopology)` if either axis is
/// reverse-looped, or `Err(TopologyError::EmptyDimension)` if either
/// dimension is 0.
///
/// # Examples
///
/// ```
/// use warren_topology::{upsilon_grid, AxialOrientation};
/// use warren_core::CellType;
///
/// let d = AxialOrientation::Disconnected;
/// let g = upsilon_grid(3, 3, d, d).unwrap();
/// assert_eq!(g.vertex_count(), 9 + 4);
/// assert_eq!(g.info().ranker(CellType::DIAMOND).unwrap().len(), 4);
/// ```
pub fn upsilon_grid(
    width: u32,
    height: u32,
    x_orientation: AxialOrientation,
    y_orientation: AxialOrientation,
) -> Result<MazeGraph, TopologyError> {
    if x_orientation == AxialOrientation::ReverseLooped
        || y_orientation == AxialOrientation::ReverseLooped
    {
        return Err(TopologyError::UnsupportedTopology {
            reason: "upsilon tilings cannot be reverse-looped".to_string(),
        });
    }
    check_dimensions(width, height)?;
    let x_looped = x_orientation == AxialOrientation::Looped;
    let y_looped = y_orientation == AxialOrientation::Looped;

    let octagons = cell_count(width, height)?;
    let dw = if x_looped { width } else { width - 1 };
    let dh = if y_looped { height } else { height - 1 };
    let diamonds = cell_count(dw, dh)?;
    octagons
        .checked_add(diamonds)
        .ok_or(GraphError::TooManyVertices)?;

    let info = GraphInfo::new(Tessellation::Upsilon)
        .with_dimensions(width, height)
        .with_rankers(vec![
            block_ranker(width, height, 0),
            block_ranker(dw, dh, octagons),
        ])
        .with_candidates(CandidateTable::per_type(&[
            &[Direction::East, Direction::SouthEast],
            &[Direction::SouthEast],
        ]));
    let mut g = MazeGraph::new(info);
    add_vertices(&mut g, octagons, CellType::OCTAGON)?;
    add_vertices(&mut g, diamonds, CellType::DIAMOND)?;

    for y in 0..height {
        for x in 0..width {
            let v = cell(x, y, width);
            if let Some(ys) = next_index(y, height, y_looped) {
                g.connect(v, Direction::South, cell(x, ys, width))?;
            }
            if let Some(xe) = next_index(x, width, x_looped) {
                g.connect(v, Direction::East, cell(xe, y, width))?;
            }
        }
    }

    for y in 0..dh {
        for x in 0..dw {
            let v = VertexId(octagons + y * dw + x);
            // Diamonds always have octagons on all four diagonals.
            let xe = if x + 1 < width { x + 1 } else { 0 };
            let ys = if y + 1 < height { y + 1 } else { 0 };
            g.connect(v, Direction::NorthWest, cell(x, y, width))?;
            g.connect(v, Direction::NorthEast, cell(xe, y, width))?;
            g.connect(v, Direction::SouthWest, cell(x, ys, width))?;
            g.connect(v, Direction::SouthEast, cell(xe, ys, width))?;
        }
    }

    log::debug!(
        "upsilon template {width}x{height} ({x_orientation:?}, {y_orientation:?}): \
         {octagons} octagons, {diamonds} diamonds, {} edges",
        g.edge_count()
    );
    Ok(g)
}

/// An upsilon cylinder: the x axis loops.
pub fn upsilon_cylinder(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    upsilon_grid(width, height, AxialOrientation::Looped, AxialOrientation::Disconnected)
}

/// An upsilon torus: both axes loop.
pub fn upsilon_torus(width: u32, height: u32) -> Result<MazeGraph, TopologyError> {
    upsilon_grid(width, height, AxialOrientation::Looped, AxialOrientation::Looped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn reverse_looping_is_unsupported() {
        let r = AxialOrientation::ReverseLooped;
        let d = AxialOrientation::Disconnected;
        assert!(matches!(
            upsilon_grid(3, 3, r, d),
            Err(TopologyError::UnsupportedTopology { .. })
        ));
        assert!(matches!(
            upsilon_grid(3, 3, d, r),
            Err(TopologyError::UnsupportedTopology { .. })
        ));
    }

    #[test]
    fn diamonds_touch_four_octagons() {
        let d = AxialOrientation::Disconnected;
        let g = upsilon_grid(3, 2, d, d).unwrap();
        compliance::run_full_compliance(&g);
        // Octagons: 2 * 2 EAST + 3 SOUTH. Diamonds: 2 * 1, four edges each.
        assert_eq!(g.edge_count(), 7 + 8);

        let diamond = g.info().ranker(CellType::DIAMOND).unwrap().get(1, 0).unwrap();
        assert_eq!(diamond, VertexId(7));
        assert_eq!(g.cell_type(diamond), Some(CellType::DIAMOND));
        let expect = [
            (Direction::NorthWest, cell(1, 0, 3)),
            (Direction::NorthEast, cell(2, 0, 3)),
            (Direction::SouthWest, cell(1, 1, 3)),
            (Direction::SouthEast, cell(2, 1, 3)),
        ];
        for (d, octagon) in expect {
            let e = g.edge_between(diamond, octagon).unwrap();
            assert_eq!(e.direction_from(diamond), Some(d));
            assert_eq!(e.direction_from(octagon), Some(d.flip()));
        }
    }

    #[test]
    fn torus_diamonds_wrap_to_the_first_octagons() {
        let g = upsilon_torus(3, 3).unwrap();
        compliance::run_full_compliance(&g);
        assert_eq!(g.vertex_count(), 9 + 9);
        // Every octagon has four octagon and four diamond neighbours.
        for v in 0..9 {
            assert_eq!(g.degree(VertexId(v)), 8);
        }
        let corner = g.info().ranker(CellType::DIAMOND).unwrap().get(2, 2).unwrap();
        let e = g.edge_between(corner, VertexId(0)).unwrap();
        assert_eq!(e.direction_from(corner), Some(Direction::SouthEast));
    }

    #[test]
    fn single_column_has_no_diamonds() {
        let g =
            upsilon_grid(1, 4, AxialOrientation::Disconnected, AxialOrientation::Looped).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert!(g.info().ranker(CellType::DIAMOND).unwrap().is_empty());
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn candidates_depend_on_cell_type() {
        let g = upsilon_cylinder(3, 3).unwrap();
        let table = g.info().candidates.as_ref().unwrap();
        assert_eq!(
            table.candidates(CellType::OCTAGON),
            &[Direction::East, Direction::SouthEast]
        );
        assert_eq!(table.candidates(CellType::DIAMOND), &[Direction::SouthEast]);
    }
}
