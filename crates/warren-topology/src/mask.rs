//! Irregular grids read from a text mask.
//!
//! Any byte other than a space marks a live cell:
//!
//! ```text
//! ##  ##
//!  ####
//! ##  ##
//! ```
//!
//! gives a 6×3 grid with 12 cells.

use crate::error::{TopologyError, MAX_DIM};
use warren_core::{
    CandidateTable, CellType, Direction, GraphInfo, MazeGraph, RankerMap, Tessellation, VertexId,
};

/// Build an orthogonal template from mask rows.
///
/// Rows shorter than the longest row are padded with dead cells and
/// trailing empty rows are dropped. A trailing `'\r'` on a row is ignored.
/// Live cells get ids in row-major scan order and join WEST and NORTH to
/// live neighbours; masks never loop. Width and height are those of the
/// padded mask.
///
/// Returns `Err(TopologyError::InvalidMask)` if the mask has no live cell.
///
/// # Examples
///
/// ```
/// use warren_topology::grid_from_mask;
///
/// let g = grid_from_mask(&["# #", "###"]).unwrap();
/// assert_eq!(g.vertex_count(), 5);
/// assert_eq!(g.edge_count(), 4);
/// ```
pub fn grid_from_mask<S: AsRef<str>>(rows: &[S]) -> Result<MazeGraph, TopologyError> {
    let mut cells: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| {
            let row = row.as_ref();
            let row = row.strip_suffix('\r').unwrap_or(row);
            row.bytes().map(|b| b != b' ').collect()
        })
        .collect();
    while cells.last().is_some_and(|r| r.is_empty()) {
        cells.pop();
    }
    if cells.is_empty() {
        return Err(TopologyError::InvalidMask {
            reason: "mask has no rows".to_string(),
        });
    }
    if !cells.iter().flatten().any(|&live| live) {
        return Err(TopologyError::InvalidMask {
            reason: "mask has no live cells".to_string(),
        });
    }

    let width = cells.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut cells {
        row.resize(width, false);
    }
    let height = cells.len();
    let (width, height) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w <= MAX_DIM && h <= MAX_DIM => (w, h),
        _ => {
            return Err(TopologyError::InvalidMask {
                reason: format!("mask of {width}x{height} cells is too large"),
            })
        }
    };

    let mut ranker = RankerMap::new();
    let mut edges: Vec<(VertexId, Direction, VertexId)> = Vec::new();
    let mut next = 0u32;
    for (y, row) in cells.iter().enumerate() {
        for (x, &live) in row.iter().enumerate() {
            if !live {
                continue;
            }
            let (xi, yi) = (x as i32, y as i32);
            let v = VertexId(next);
            next += 1;
            ranker.insert(xi, yi, v);
            if let Some(w) = ranker.get(xi - 1, yi) {
                edges.push((v, Direction::West, w));
            }
            if let Some(n) = ranker.get(xi, yi - 1) {
                edges.push((v, Direction::North, n));
            }
        }
    }

    let info = GraphInfo::new(Tessellation::Orthogonal)
        .with_dimensions(width, height)
        .with_rankers(vec![ranker])
        .with_candidates(CandidateTable::uniform(&[Direction::East, Direction::South]));
    let mut g = MazeGraph::new(info);
    for _ in 0..next {
        g.add_vertex(CellType::DEFAULT)?;
    }
    for (v1, d1, v2) in edges {
        g.connect(v1, d1, v2)?;
    }
    log::debug!(
        "mask template {width}x{height}: {} live cells, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    Ok(g)
}

/// Build an orthogonal template from a multi-line mask string.
///
/// Equivalent to [`grid_from_mask`] over the string's lines.
pub fn grid_from_mask_str(text: &str) -> Result<MazeGraph, TopologyError> {
    let rows: Vec<&str> = text.lines().collect();
    grid_from_mask(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn full_square_mask_links_all_four_cells() {
        let g = grid_from_mask_str("##\n##").unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        let e = g.edge_between(VertexId(0), VertexId(1)).unwrap();
        assert_eq!(e.direction_from(VertexId(0)), Some(Direction::East));
        let e = g.edge_between(VertexId(2), VertexId(3)).unwrap();
        assert_eq!(e.direction_from(VertexId(2)), Some(Direction::East));
        let e = g.edge_between(VertexId(0), VertexId(2)).unwrap();
        assert_eq!(e.direction_from(VertexId(0)), Some(Direction::South));
        let e = g.edge_between(VertexId(1), VertexId(3)).unwrap();
        assert_eq!(e.direction_from(VertexId(1)), Some(Direction::South));
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn holes_and_ragged_rows_are_dead_cells() {
        let g = grid_from_mask(&["##  ##", " ####", "##  ##", "", ""]).unwrap();
        assert_eq!(g.vertex_count(), 12);
        assert_eq!((g.info().width, g.info().height), (Some(6), Some(3)));
        let ranker = g.info().ranker(CellType::DEFAULT).unwrap();
        assert_eq!(ranker.get(2, 0), None);
        assert_eq!(ranker.get(5, 1), None);
        assert_eq!(ranker.get(1, 1), Some(VertexId(4)));
        compliance::run_structural_compliance(&g);
    }

    #[test]
    fn disconnected_islands_are_allowed() {
        let g = grid_from_mask_str("#  #").unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.is_connected());
    }

    #[test]
    fn carriage_returns_are_ignored() {
        let g = grid_from_mask_str("# \r\n##\r\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.info().width, Some(2));
    }

    #[test]
    fn empty_masks_are_rejected() {
        assert!(matches!(
            grid_from_mask::<&str>(&[]),
            Err(TopologyError::InvalidMask { .. })
        ));
        assert!(matches!(
            grid_from_mask_str("\n\n"),
            Err(TopologyError::InvalidMask { .. })
        ));
        assert!(matches!(
            grid_from_mask_str("   \n  "),
            Err(TopologyError::InvalidMask { .. })
        ));
    }
}
