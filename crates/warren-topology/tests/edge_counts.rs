use proptest::prelude::*;
use warren_core::{CellType, Direction, VertexId};
use warren_topology::{
    circular, grid_from_mask, orthogonal_grid, ring_sizes, spherical, torus, upsilon_grid,
    AxialOrientation, TopologyError,
};

const D: AxialOrientation = AxialOrientation::Disconnected;
const L: AxialOrientation = AxialOrientation::Looped;
const R: AxialOrientation = AxialOrientation::ReverseLooped;

// ── Orthogonal ─────────────────────────────────────────────────

#[test]
fn torus_six_by_four() {
    let g = torus(6, 4).unwrap();
    assert_eq!(g.vertex_count(), 24);
    assert_eq!(g.edge_count(), 48);
    for v in g.vertices() {
        assert_eq!(g.degree(v), 4);
    }
}

#[test]
fn narrow_loops_collapse_onto_existing_edges() {
    // A two-wide loop would join cells that are already neighbours.
    let g = orthogonal_grid(2, 3, L, D).unwrap();
    assert_eq!(g.edge_count(), 3 + 2 * 2);
    let g = orthogonal_grid(1, 3, L, L).unwrap();
    assert_eq!(g.edge_count(), 2 + 1);
}

#[test]
fn every_orientation_pair_builds_a_connected_template() {
    for x in [D, L, R] {
        for y in [D, L, R] {
            let g = orthogonal_grid(5, 4, x, y).unwrap();
            assert!(g.is_connected(), "{x:?} {y:?}");
            for e in g.edges() {
                assert_eq!(e.d1.flip(), e.d2);
            }
        }
    }
}

// ── Masks ──────────────────────────────────────────────────────

#[test]
fn two_by_two_mask_scenario() {
    let g = grid_from_mask(&["##", "##"]).unwrap();
    let mut edges: Vec<_> = g
        .edges()
        .iter()
        .map(|e| {
            let (a, b) = (e.v1.min(e.v2), e.v1.max(e.v2));
            (a.0, b.0, e.direction_from(a).unwrap())
        })
        .collect();
    edges.sort();
    assert_eq!(
        edges,
        vec![
            (0, 1, Direction::East),
            (0, 2, Direction::South),
            (1, 3, Direction::South),
            (2, 3, Direction::East),
        ]
    );
}

// ── Round tilings ──────────────────────────────────────────────

#[test]
fn ring_sizes_of_five() {
    assert_eq!(ring_sizes(5).unwrap(), vec![1, 6, 12, 24, 24]);
}

#[test]
fn circular_vertex_count_is_ring_sum() {
    for radius in 1..8 {
        let sizes = ring_sizes(radius).unwrap();
        let g = circular(radius).unwrap();
        assert_eq!(g.vertex_count() as u32, sizes.iter().sum::<u32>());
        assert_eq!(g.info().width, sizes.last().copied());
        assert!(g.is_connected());
    }
}

#[test]
fn spherical_ids_increase_pole_to_pole() {
    let g = spherical(7).unwrap();
    let ranker = g.info().ranker(CellType::DEFAULT).unwrap();
    assert_eq!(ranker.get(0, 0), Some(VertexId(0)));
    assert_eq!(
        ranker.get(6, 0),
        Some(VertexId(g.vertex_count() as u32 - 1))
    );
    let mut last = None;
    for (_, v) in ranker.iter() {
        assert!(last < Some(v));
        last = Some(v);
    }
}

// ── Upsilon ────────────────────────────────────────────────────

#[test]
fn upsilon_reverse_loops_fail() {
    assert!(matches!(
        upsilon_grid(4, 4, R, R),
        Err(TopologyError::UnsupportedTopology { .. })
    ));
}

#[test]
fn upsilon_disconnected_edge_count() {
    let (w, h) = (5u32, 4u32);
    let g = upsilon_grid(w, h, D, D).unwrap();
    let octagon_edges = w * (h - 1) + h * (w - 1);
    let diamond_edges = 4 * (w - 1) * (h - 1);
    assert_eq!(g.edge_count() as u32, octagon_edges + diamond_edges);
    assert!(g.is_connected());
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn ring_sizes_grow_by_whole_multiples(radius in 1u32..40) {
        let sizes = ring_sizes(radius).unwrap();
        prop_assert_eq!(sizes.len(), radius as usize);
        prop_assert_eq!(sizes[0], 1);
        for pair in sizes.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
            prop_assert_eq!(pair[1] % pair[0], 0);
        }
    }

    #[test]
    fn rectangle_edge_formula(w in 1u32..12, h in 1u32..12) {
        let g = orthogonal_grid(w, h, D, D).unwrap();
        prop_assert_eq!(g.vertex_count() as u32, w * h);
        prop_assert_eq!(g.edge_count() as u32, w * (h - 1) + h * (w - 1));
    }

    #[test]
    fn torus_adds_one_edge_per_row_and_column(w in 3u32..12, h in 3u32..12) {
        let rect = orthogonal_grid(w, h, D, D).unwrap();
        let g = orthogonal_grid(w, h, L, L).unwrap();
        prop_assert_eq!(g.edge_count(), rect.edge_count() + (w + h) as usize);
    }

    #[test]
    fn full_masks_match_rectangles(w in 1usize..10, h in 1usize..10) {
        let rows = vec!["#".repeat(w); h];
        let mask = grid_from_mask(&rows[..]).unwrap();
        let rect = orthogonal_grid(w as u32, h as u32, D, D).unwrap();
        prop_assert_eq!(mask.vertex_count(), rect.vertex_count());
        prop_assert_eq!(mask.edge_count(), rect.edge_count());
        for e in rect.edges() {
            let m = mask.edge_between(e.v1, e.v2);
            prop_assert!(m.is_some());
            prop_assert_eq!(m.unwrap().direction_from(e.v1), Some(e.d1));
        }
    }
}
