//! Strongly-typed identifiers for cells and cell shapes.

use std::fmt;

/// Identifies a cell (vertex) within a maze graph.
///
/// Vertex ids are dense and zero-based: a graph with `n` vertices uses
/// exactly `VertexId(0) .. VertexId(n - 1)`, allocated in insertion order.
/// Ids are stable for the lifetime of the graph, and a maze carved from a
/// template shares the template's ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    /// The id as a `usize` index into per-vertex tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Tags the shape of a cell in tilings that mix shapes.
///
/// Interpretation is owned by the graph's tessellation: upsilon tilings
/// use [`CellType::OCTAGON`] and [`CellType::DIAMOND`]; every other
/// tessellation uses [`CellType::DEFAULT`] throughout. The binary-tree
/// candidate table is keyed by this tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellType(pub u32);

impl CellType {
    /// The only cell type of single-shape tessellations.
    pub const DEFAULT: CellType = CellType(0);
    /// Octagonal cell of an upsilon tiling.
    pub const OCTAGON: CellType = CellType(0);
    /// Diamond cell filling the gaps of an upsilon tiling.
    pub const DIAMOND: CellType = CellType(1);

    /// The tag as a `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellType {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
