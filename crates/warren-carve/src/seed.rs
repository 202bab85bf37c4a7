//! The working state of one carve.

use crate::error::CarveError;
use crate::maze::Maze;
use rand::{Rng, RngCore};
use smallvec::SmallVec;
use warren_core::{GraphError, MazeGraph, VertexId};

/// Template, partially carved maze, and visited table for one `generate`
/// call.
///
/// The maze starts with the template's vertices and metadata but no
/// edges. Carving copies template edges across verbatim through
/// [`add_edge`](Self::add_edge). Each vertex is marked visited at most
/// once.
#[derive(Debug)]
pub struct MazeSeed<'t> {
    template: &'t MazeGraph,
    maze: MazeGraph,
    unvisited: Vec<bool>,
    visited: usize,
}

impl<'t> MazeSeed<'t> {
    /// A fresh seed over `template`: no edges, nothing visited.
    pub fn new(template: &'t MazeGraph) -> Self {
        Self {
            template,
            maze: template.empty_copy(),
            unvisited: vec![true; template.vertex_count()],
            visited: 0,
        }
    }

    /// The template being carved.
    pub fn template(&self) -> &'t MazeGraph {
        self.template
    }

    /// The maze carved so far.
    pub fn maze(&self) -> &MazeGraph {
        &self.maze
    }

    /// Number of vertices in the template.
    pub fn vertex_count(&self) -> usize {
        self.unvisited.len()
    }

    /// Number of vertices marked visited.
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Whether `v` has not been visited. Unknown vertices count as visited.
    pub fn is_unvisited(&self, v: VertexId) -> bool {
        self.unvisited.get(v.index()).copied().unwrap_or(false)
    }

    /// Mark `v` visited. Returns `true` if it was unvisited.
    pub fn mark_visited(&mut self, v: VertexId) -> bool {
        match self.unvisited.get_mut(v.index()) {
            Some(flag) if *flag => {
                *flag = false;
                self.visited += 1;
                true
            }
            _ => false,
        }
    }

    /// Carve the template edge between `v1` and `v2` into the maze.
    ///
    /// The edge keeps its template orientation and direction annotations.
    /// Fails with [`CarveError::EdgeNotFound`] if the template does not
    /// join the two vertices.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<(), CarveError> {
        let edge = *self
            .template
            .edge_between(v1, v2)
            .ok_or(CarveError::EdgeNotFound { v1, v2 })?;
        if self.maze.add_edge(edge)? {
            log::trace!(
                "carve {} {} {} {}",
                edge.v1,
                edge.d1.short_name(),
                edge.v2,
                edge.d2.short_name()
            );
        }
        Ok(())
    }

    /// Template neighbours of `v`, in out-edge order.
    pub fn neighbours(&self, v: VertexId) -> SmallVec<[VertexId; 8]> {
        self.template.neighbours(v)
    }

    /// Template neighbours of `v` that have not been visited.
    pub fn unvisited_neighbours(&self, v: VertexId) -> SmallVec<[VertexId; 8]> {
        self.filtered_neighbours(v, true)
    }

    /// Template neighbours of `v` that have been visited.
    pub fn visited_neighbours(&self, v: VertexId) -> SmallVec<[VertexId; 8]> {
        self.filtered_neighbours(v, false)
    }

    /// Finish the carve.
    pub fn into_maze(self, start: VertexId) -> Maze {
        log::debug!(
            "carved {} of {} vertices with {} edges from {start}",
            self.visited,
            self.unvisited.len(),
            self.maze.edge_count()
        );
        Maze::new(self.maze, start)
    }

    fn filtered_neighbours(&self, v: VertexId, unvisited: bool) -> SmallVec<[VertexId; 8]> {
        self.template
            .out_edges(v)
            .filter_map(|e| e.other(v))
            .filter(|&w| self.is_unvisited(w) == unvisited)
            .collect()
    }
}

/// A vertex chosen uniformly from `graph`, or
/// [`CarveError::EmptyTemplate`] if it has none.
pub fn random_start_vertex(
    graph: &MazeGraph,
    rng: &mut dyn RngCore,
) -> Result<VertexId, CarveError> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(CarveError::EmptyTemplate);
    }
    let n = u32::try_from(n).map_err(|_| GraphError::TooManyVertices)?;
    Ok(VertexId(rng.random_range(0..n)))
}
