//! The direction-annotated undirected graph shared by templates and mazes.

use crate::direction::Direction;
use crate::error::GraphError;
use crate::id::{CellType, VertexId};
use crate::info::{CandidateTable, GraphInfo};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Per-vertex properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VertexInfo {
    /// Shape tag, interpreted by the graph's tessellation.
    pub cell_type: CellType,
}

/// An undirected edge annotated with the direction it represents from
/// each endpoint.
///
/// `d1` is the direction from `v1` to reach `v2`, and `d2` the direction
/// from `v2` back to `v1`; `d2 == d1.flip()` for every stored edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeInfo {
    /// First endpoint.
    pub v1: VertexId,
    /// Direction from `v1` towards `v2`.
    pub d1: Direction,
    /// Second endpoint.
    pub v2: VertexId,
    /// Direction from `v2` towards `v1`.
    pub d2: Direction,
}

impl EdgeInfo {
    /// An edge leaving `v1` in direction `d1` and arriving at `v2`.
    pub fn new(v1: VertexId, d1: Direction, v2: VertexId) -> Self {
        Self {
            v1,
            d1,
            v2,
            d2: d1.flip(),
        }
    }

    /// The direction this edge runs in when leaving `v`.
    pub fn direction_from(&self, v: VertexId) -> Option<Direction> {
        if v == self.v1 {
            Some(self.d1)
        } else if v == self.v2 {
            Some(self.d2)
        } else {
            None
        }
    }

    /// The endpoint opposite `v`.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.v1 {
            Some(self.v2)
        } else if v == self.v2 {
            Some(self.v1)
        } else {
            None
        }
    }

    /// Whether this edge joins `a` and `b`, in either order.
    pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
        (self.v1 == a && self.v2 == b) || (self.v1 == b && self.v2 == a)
    }
}

/// An undirected graph of cells and passages.
///
/// Used both for *templates* (every physically possible passage of a
/// topology) and for *mazes* (the subset of template passages that were
/// carved). Vertices are dense [`VertexId`]s. Out-edges are enumerated in
/// insertion order, so identical construction sequences produce identical
/// graphs.
///
/// Parallel edges and self-loops are never stored: [`add_edge`](Self::add_edge)
/// reports them as no-ops.
///
/// # Examples
///
/// ```
/// use warren_core::{CellType, Direction, EdgeInfo, GraphInfo, MazeGraph, Tessellation};
///
/// let mut g = MazeGraph::new(GraphInfo::new(Tessellation::Orthogonal));
/// let a = g.add_vertex(CellType::DEFAULT).unwrap();
/// let b = g.add_vertex(CellType::DEFAULT).unwrap();
/// assert!(g.add_edge(EdgeInfo::new(a, Direction::East, b)).unwrap());
/// assert!(!g.add_edge(EdgeInfo::new(b, Direction::West, a)).unwrap());
/// assert_eq!(g.edge_count(), 1);
/// assert!(g.has_passage(b, Direction::West));
/// assert!(g.has_wall(b, Direction::North));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGraph {
    info: GraphInfo,
    vertices: Vec<VertexInfo>,
    edges: Vec<EdgeInfo>,
    adjacency: Vec<SmallVec<[usize; 8]>>,
}

impl MazeGraph {
    /// An empty graph carrying `info`.
    pub fn new(info: GraphInfo) -> Self {
        Self {
            info,
            vertices: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// A graph with the same vertices and metadata as `self` but no edges.
    ///
    /// This is the starting point of every carved maze.
    pub fn empty_copy(&self) -> Self {
        Self {
            info: self.info.clone(),
            vertices: self.vertices.clone(),
            edges: Vec::with_capacity(self.vertices.len().saturating_sub(1)),
            adjacency: vec![SmallVec::new(); self.vertices.len()],
        }
    }

    /// Append a vertex of the given type and return its id.
    pub fn add_vertex(&mut self, cell_type: CellType) -> Result<VertexId, GraphError> {
        let id =
            u32::try_from(self.vertices.len()).map_err(|_| GraphError::TooManyVertices)?;
        self.vertices.push(VertexInfo { cell_type });
        self.adjacency.push(SmallVec::new());
        Ok(VertexId(id))
    }

    /// Insert an edge.
    ///
    /// Returns `Ok(true)` if the edge was stored, `Ok(false)` if it is a
    /// self-loop or its endpoints are already joined.
    pub fn add_edge(&mut self, edge: EdgeInfo) -> Result<bool, GraphError> {
        self.check_vertex(edge.v1)?;
        self.check_vertex(edge.v2)?;
        if edge.d2 != edge.d1.flip() {
            return Err(GraphError::InconsistentDirections {
                v1: edge.v1,
                v2: edge.v2,
            });
        }
        if edge.v1 == edge.v2 || self.edge_between(edge.v1, edge.v2).is_some() {
            return Ok(false);
        }
        let idx = self.edges.len();
        self.edges.push(edge);
        self.adjacency[edge.v1.index()].push(idx);
        self.adjacency[edge.v2.index()].push(idx);
        Ok(true)
    }

    /// Shorthand for `add_edge(EdgeInfo::new(v1, d1, v2))`.
    pub fn connect(
        &mut self,
        v1: VertexId,
        d1: Direction,
        v2: VertexId,
    ) -> Result<bool, GraphError> {
        self.add_edge(EdgeInfo::new(v1, d1, v2))
    }

    /// Graph metadata.
    pub fn info(&self) -> &GraphInfo {
        &self.info
    }

    /// Replace the binary-tree candidate table.
    pub fn set_candidates(&mut self, candidates: Option<CandidateTable>) {
        self.info.candidates = candidates;
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[EdgeInfo] {
        &self.edges
    }

    /// Properties of `v`.
    pub fn vertex_info(&self, v: VertexId) -> Option<&VertexInfo> {
        self.vertices.get(v.index())
    }

    /// Shape tag of `v`.
    pub fn cell_type(&self, v: VertexId) -> Option<CellType> {
        self.vertex_info(v).map(|vi| vi.cell_type)
    }

    /// Edges incident to `v`, in insertion order. Empty for unknown vertices.
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = &EdgeInfo> + '_ {
        self.adjacency
            .get(v.index())
            .into_iter()
            .flatten()
            .map(move |&idx| &self.edges[idx])
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(v.index()).map_or(0, |a| a.len())
    }

    /// Vertices adjacent to `v`, in out-edge order.
    pub fn neighbours(&self, v: VertexId) -> SmallVec<[VertexId; 8]> {
        self.out_edges(v).filter_map(|e| e.other(v)).collect()
    }

    /// The edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&EdgeInfo> {
        self.out_edges(a).find(|e| e.joins(a, b))
    }

    /// Whether some edge leaves `v` in direction `d`.
    pub fn has_passage(&self, v: VertexId, d: Direction) -> bool {
        self.out_edges(v).any(|e| e.direction_from(v) == Some(d))
    }

    /// Whether `v` is walled off in direction `d`.
    ///
    /// On a carved maze this is the rendering predicate: a wall stands
    /// wherever no carved passage leaves the cell.
    pub fn has_wall(&self, v: VertexId, d: Direction) -> bool {
        !self.has_passage(v, d)
    }

    /// Bitmask of the directions with a passage out of `v`, using
    /// [`Direction::bit`].
    pub fn passage_mask(&self, v: VertexId) -> u16 {
        self.out_edges(v)
            .filter_map(|e| e.direction_from(v))
            .fold(0, |mask, d| mask | d.bit())
    }

    /// Wall predicate addressed by logical coordinate.
    ///
    /// Returns `None` if no ranker for `cell_type` maps `(a, b)`.
    pub fn wall_at(&self, cell_type: CellType, a: i32, b: i32, d: Direction) -> Option<bool> {
        let v = self.info.ranker(cell_type)?.get(a, b)?;
        Some(self.has_wall(v, d))
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([VertexId(0)]);
        seen[0] = true;
        let mut reached = 1;
        while let Some(v) = queue.pop_front() {
            for w in self.neighbours(v) {
                if !seen[w.index()] {
                    seen[w.index()] = true;
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }
        reached == self.vertices.len()
    }

    /// Whether the graph is a spanning tree of its vertices: connected with
    /// exactly `vertex_count - 1` edges.
    pub fn is_perfect(&self) -> bool {
        self.edges.len() + 1 == self.vertices.len().max(1) && self.is_connected()
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: v,
                vertex_count: self.vertices.len(),
            })
        }
    }
}
