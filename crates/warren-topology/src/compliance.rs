//! Template invariant test helpers.
//!
//! These functions verify that a constructed template satisfies the
//! invariants the carving algorithms rely on. Reused across all
//! constructor test modules.

use indexmap::IndexSet;
use warren_core::{CellType, MazeGraph, VertexId};

/// Assert that every stored edge has opposite direction annotations.
pub fn assert_directions_consistent(g: &MazeGraph) {
    for e in g.edges() {
        assert_eq!(
            e.d1.flip(),
            e.d2,
            "edge {}-{} has directions {} / {}",
            e.v1,
            e.v2,
            e.d1,
            e.d2
        );
    }
}

/// Assert there are no self-loops and no parallel edges.
pub fn assert_simple(g: &MazeGraph) {
    let mut seen = IndexSet::new();
    for e in g.edges() {
        assert_ne!(e.v1, e.v2, "self-loop at {}", e.v1);
        let key = (e.v1.min(e.v2), e.v1.max(e.v2));
        assert!(seen.insert(key), "parallel edge {}-{}", key.0, key.1);
    }
}

/// Assert that each cell type's ranker maps distinct coordinates to
/// distinct vertices of that type, and that the rankers cover every vertex.
pub fn assert_rankers_cover_vertices(g: &MazeGraph) {
    let mut covered: IndexSet<VertexId> = IndexSet::new();
    for (t, ranker) in g.info().rankers.iter().enumerate() {
        let cell_type = CellType(t as u32);
        for (coord, v) in ranker.iter() {
            assert_eq!(
                g.cell_type(v),
                Some(cell_type),
                "ranker {t} maps {coord:?} to {v} of another type"
            );
            assert!(covered.insert(v), "vertex {v} is ranked twice");
        }
    }
    assert_eq!(
        covered.len(),
        g.vertex_count(),
        "rankers cover {} of {} vertices",
        covered.len(),
        g.vertex_count()
    );
}

/// Assert that out-edge enumeration agrees with the edge list.
pub fn assert_adjacency_symmetric(g: &MazeGraph) {
    for v in g.vertices() {
        for w in g.neighbours(v) {
            assert!(
                g.neighbours(w).contains(&v),
                "{w} is adjacent to {v} but not the reverse"
            );
        }
    }
    let total: usize = g.vertices().map(|v| g.degree(v)).sum();
    assert_eq!(total, 2 * g.edge_count(), "degree sum mismatch");
}

/// Run every structural check plus connectivity.
pub fn run_full_compliance(g: &MazeGraph) {
    run_structural_compliance(g);
    assert!(g.is_connected(), "template is not connected");
}

/// Run every check that holds for disconnected templates too.
pub fn run_structural_compliance(g: &MazeGraph) {
    assert_directions_consistent(g);
    assert_simple(g);
    assert_rankers_cover_vertices(g);
    assert_adjacency_symmetric(g);
}
