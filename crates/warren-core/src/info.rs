//! Graph-level metadata: tessellation, ranker maps, and the binary-tree
//! candidate table.

use crate::direction::Direction;
use crate::id::{CellType, VertexId};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// The kind of surface a graph tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tessellation {
    /// Square cells (grids, cylinders, tori, Möbius strips, Klein bottles,
    /// projective planes, and masked grids).
    Orthogonal,
    /// Concentric rings around a single centre cell.
    Circular,
    /// Rings of latitude between two single-cell poles.
    Spherical,
    /// Octagons with diamonds at their diagonals.
    Upsilon,
    /// Square cells that also connect diagonally.
    Zeta,
}

/// Bijection from a logical 2D coordinate to a vertex.
///
/// Orthogonal-style tilings key by `(x, y)`; round tilings key by
/// `(ring, column)`. Entries keep insertion order, which every constructor
/// arranges to match vertex-id order for the vertex type the map covers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankerMap {
    cells: IndexMap<(i32, i32), VertexId>,
}

impl RankerMap {
    /// An empty ranker map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that coordinate `(a, b)` is vertex `v`.
    pub fn insert(&mut self, a: i32, b: i32, v: VertexId) {
        self.cells.insert((a, b), v);
    }

    /// Vertex at `(a, b)`, if that coordinate holds a cell.
    pub fn get(&self, a: i32, b: i32) -> Option<VertexId> {
        self.cells.get(&(a, b)).copied()
    }

    /// Coordinate of `v`, if this map covers it. Linear in the map size.
    pub fn coord_of(&self, v: VertexId) -> Option<(i32, i32)> {
        self.cells
            .iter()
            .find_map(|(&coord, &w)| (w == v).then_some(coord))
    }

    /// Number of mapped cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `(coordinate, vertex)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), VertexId)> + '_ {
        self.cells.iter().map(|(&c, &v)| (c, v))
    }
}

/// Per-cell-type, priority-ordered carving directions for the
/// binary-tree and sidewinder algorithms.
///
/// The first direction of a list is the preferred (run-extending)
/// direction; the remaining ones are break-out directions. Cell types with
/// no entry have no candidates.
///
/// # Examples
///
/// ```
/// use warren_core::{CandidateTable, CellType, Direction};
///
/// let table = CandidateTable::uniform(&[Direction::East, Direction::South]);
/// assert_eq!(table.preferred(CellType::DEFAULT), Some(Direction::East));
/// assert_eq!(table.secondary(CellType::DEFAULT), &[Direction::South]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateTable {
    by_type: Vec<SmallVec<[Direction; 4]>>,
}

impl CandidateTable {
    /// One list shared by the default cell type.
    pub fn uniform(directions: &[Direction]) -> Self {
        Self {
            by_type: vec![SmallVec::from_slice(directions)],
        }
    }

    /// One list per cell type; entry `n` belongs to `CellType(n)`.
    pub fn per_type(lists: &[&[Direction]]) -> Self {
        Self {
            by_type: lists.iter().map(|l| SmallVec::from_slice(l)).collect(),
        }
    }

    /// The ordered candidate directions for `cell_type`.
    pub fn candidates(&self, cell_type: CellType) -> &[Direction] {
        self.by_type
            .get(cell_type.index())
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// The preferred direction for `cell_type`.
    pub fn preferred(&self, cell_type: CellType) -> Option<Direction> {
        self.candidates(cell_type).first().copied()
    }

    /// The break-out directions for `cell_type` (all but the first).
    pub fn secondary(&self, cell_type: CellType) -> &[Direction] {
        self.candidates(cell_type).get(1..).unwrap_or(&[])
    }

    /// Number of cell types with an entry.
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }
}

/// Metadata describing a graph's shape.
///
/// Carried unchanged from a template to every maze carved from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphInfo {
    /// What kind of surface the graph tiles.
    pub tessellation: Tessellation,
    /// Nominal width (columns; widest ring for round tilings), if meaningful.
    pub width: Option<u32>,
    /// Nominal height (rows; ring count for round tilings), if meaningful.
    pub height: Option<u32>,
    /// One ranker map per cell type; entry `n` covers `CellType(n)`.
    pub rankers: Vec<RankerMap>,
    /// Directions the binary-tree family may carve in, if supported.
    pub candidates: Option<CandidateTable>,
}

impl GraphInfo {
    /// Metadata with no dimensions, rankers, or candidates.
    pub fn new(tessellation: Tessellation) -> Self {
        Self {
            tessellation,
            width: None,
            height: None,
            rankers: Vec::new(),
            candidates: None,
        }
    }

    /// Set the nominal dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the ranker maps, one per cell type.
    pub fn with_rankers(mut self, rankers: Vec<RankerMap>) -> Self {
        self.rankers = rankers;
        self
    }

    /// Set the binary-tree candidate table.
    pub fn with_candidates(mut self, candidates: CandidateTable) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// The ranker map for `cell_type`.
    pub fn ranker(&self, cell_type: CellType) -> Option<&RankerMap> {
        self.rankers.get(cell_type.index())
    }
}
