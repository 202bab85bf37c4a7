//! Structural assertions over carved mazes.

use warren_core::{MazeGraph, VertexId};

/// Disjoint-set forest with path halving and union by size.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`. Returns `false` if they were already
    /// one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.sets -= 1;
        true
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }
}

/// Number of connected components of `g`.
pub fn component_count(g: &MazeGraph) -> usize {
    let mut uf = UnionFind::new(g.vertex_count());
    for e in g.edges() {
        uf.union(e.v1.index(), e.v2.index());
    }
    uf.set_count()
}

/// Assert that `g` has no cycles.
pub fn assert_forest(g: &MazeGraph) {
    let mut uf = UnionFind::new(g.vertex_count());
    for e in g.edges() {
        assert!(
            uf.union(e.v1.index(), e.v2.index()),
            "edge {}-{} closes a cycle",
            e.v1,
            e.v2
        );
    }
}

/// Assert that `g` is a spanning tree: acyclic, one component, and
/// exactly `vertex_count - 1` edges.
pub fn assert_spanning_tree(g: &MazeGraph) {
    assert_forest(g);
    assert_eq!(
        g.edge_count() + 1,
        g.vertex_count(),
        "expected {} edges, found {}",
        g.vertex_count().saturating_sub(1),
        g.edge_count()
    );
    assert_eq!(component_count(g), 1, "maze is not connected");
}

/// Assert that `maze` was carved from `template`: same vertices, cell
/// types and metadata, and every carved edge identical (annotations
/// included) to a template edge.
pub fn assert_carved_from(template: &MazeGraph, maze: &MazeGraph) {
    assert_eq!(maze.vertex_count(), template.vertex_count());
    assert_eq!(maze.info(), template.info(), "metadata differs");
    for v in template.vertices() {
        assert_eq!(maze.cell_type(v), template.cell_type(v), "cell type of {v}");
    }
    for e in maze.edges() {
        assert_eq!(e.d1.flip(), e.d2, "edge {}-{} is inconsistent", e.v1, e.v2);
        let t = template
            .edge_between(e.v1, e.v2)
            .unwrap_or_else(|| panic!("carved edge {}-{} is not in the template", e.v1, e.v2));
        assert_eq!(
            t.direction_from(e.v1),
            Some(e.d1),
            "edge {}-{} changed direction",
            e.v1,
            e.v2
        );
    }
}

/// Vertices with no carved passage.
pub fn isolated_vertices(g: &MazeGraph) -> Vec<VertexId> {
    g.vertices().filter(|&v| g.degree(v) == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_counts_sets() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.set_count(), 2);
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.set_count(), 1);
    }
}
