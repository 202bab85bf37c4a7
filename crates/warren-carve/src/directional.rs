//! Shared plumbing for the candidate-table algorithms.

use crate::error::CarveError;
use crate::maze::Maze;
use crate::seed::MazeSeed;
use smallvec::SmallVec;
use warren_core::{CandidateTable, CellType, Direction, MazeGraph, VertexId};

/// The template's candidate table, or `UnsupportedOperation`.
pub(crate) fn candidate_table<'g>(
    template: &'g MazeGraph,
    algorithm: &'static str,
) -> Result<&'g CandidateTable, CarveError> {
    let table = template
        .info()
        .candidates
        .as_ref()
        .ok_or(CarveError::UnsupportedOperation { algorithm })?;
    if template.vertex_count() == 0 {
        return Err(CarveError::EmptyTemplate);
    }
    Ok(table)
}

/// Shape tag of `v`; vertices carry the default tag unless a tiling says
/// otherwise.
pub(crate) fn cell_type(g: &MazeGraph, v: VertexId) -> CellType {
    g.cell_type(v).unwrap_or_default()
}

/// Unvisited template neighbours of `v` reached by leaving in one of
/// `directions`, in out-edge order.
pub(crate) fn targets_in(
    seed: &MazeSeed<'_>,
    v: VertexId,
    directions: &[Direction],
) -> SmallVec<[VertexId; 8]> {
    seed.template()
        .out_edges(v)
        .filter(|e| e.direction_from(v).is_some_and(|d| directions.contains(&d)))
        .filter_map(|e| e.other(v))
        .filter(|&w| seed.is_unvisited(w))
        .collect()
}

/// Finish a directional carve started at vertex 0, rejecting forests.
pub(crate) fn finish(seed: MazeSeed<'_>, algorithm: &'static str) -> Result<Maze, CarveError> {
    let required = seed.vertex_count().saturating_sub(1);
    let carved = seed.maze().edge_count();
    if carved != required {
        log::warn!(
            "{algorithm} stranded {} cells: carved {carved} of {required} edges",
            required - carved
        );
        return Err(CarveError::IncompleteCarve { carved, required });
    }
    Ok(seed.into_maze(VertexId(0)))
}
