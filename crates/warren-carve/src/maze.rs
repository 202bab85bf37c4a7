//! The result of a carve.

use warren_core::{CellType, Direction, GraphInfo, MazeGraph, VertexId};

/// A carved maze and the vertex carving started from.
///
/// The graph shares its vertex ids, cell types and metadata with the
/// template it was carved from; its edges are the carved passages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    graph: MazeGraph,
    start: VertexId,
}

impl Maze {
    /// Wrap a carved graph.
    pub fn new(graph: MazeGraph, start: VertexId) -> Self {
        Self { graph, start }
    }

    /// The carved passages.
    pub fn graph(&self) -> &MazeGraph {
        &self.graph
    }

    /// The vertex carving started from.
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Shape metadata copied from the template.
    pub fn info(&self) -> &GraphInfo {
        self.graph.info()
    }

    /// Whether `v` is walled off in direction `d`.
    pub fn has_wall(&self, v: VertexId, d: Direction) -> bool {
        self.graph.has_wall(v, d)
    }

    /// Wall predicate addressed by logical coordinate; `None` if no cell
    /// of `cell_type` sits at `(a, b)`.
    pub fn wall_at(&self, cell_type: CellType, a: i32, b: i32, d: Direction) -> Option<bool> {
        self.graph.wall_at(cell_type, a, b, d)
    }

    /// Whether the carved passages form a spanning tree of every vertex.
    pub fn is_spanning(&self) -> bool {
        self.graph.is_perfect()
    }

    /// Split into the carved graph and start vertex.
    pub fn into_parts(self) -> (MazeGraph, VertexId) {
        (self.graph, self.start)
    }
}
