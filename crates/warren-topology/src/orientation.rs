//! Axis boundary behaviour for grid-like topologies.

/// How one axis of a grid-like topology treats its boundary.
///
/// Combining the two axes of an orthogonal grid gives the six classic
/// closed and open surfaces:
///
/// | x \ y            | `Disconnected` | `Looped`     | `ReverseLooped`   |
/// |------------------|----------------|--------------|-------------------|
/// | `Disconnected`   | rectangle      |              |                   |
/// | `Looped`         | cylinder       | torus        |                   |
/// | `ReverseLooped`  | Möbius strip   | Klein bottle | projective plane  |
///
/// # Examples
///
/// ```
/// use warren_topology::{orthogonal_grid, AxialOrientation};
///
/// let d = AxialOrientation::Disconnected;
/// let l = AxialOrientation::Looped;
/// let rect = orthogonal_grid(4, 3, d, d).unwrap();
/// let torus = orthogonal_grid(4, 3, l, l).unwrap();
/// assert_eq!(torus.edge_count(), rect.edge_count() + 4 + 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxialOrientation {
    /// Boundary cells have no neighbour beyond the edge.
    #[default]
    Disconnected,
    /// The far edge joins the near edge, preserving the other coordinate.
    Looped,
    /// The far edge joins the near edge with the other coordinate mirrored.
    ReverseLooped,
}

impl AxialOrientation {
    /// Whether the boundary is joined at all.
    pub fn is_connected(self) -> bool {
        !matches!(self, Self::Disconnected)
    }

    /// The coordinate on the far edge that `i` joins to, for an axis of
    /// `len` cells. Mirrored when reverse-looped.
    pub(crate) fn partner(self, i: u32, len: u32) -> u32 {
        match self {
            Self::ReverseLooped => len - 1 - i,
            _ => i,
        }
    }
}

/// Index after `i` on an axis of `len` cells, wrapping when `looped`.
pub(crate) fn next_index(i: u32, len: u32, looped: bool) -> Option<u32> {
    if i + 1 < len {
        Some(i + 1)
    } else if looped {
        Some(0)
    } else {
        None
    }
}

/// Index before `i` on an axis of `len` cells, wrapping when `looped`.
pub(crate) fn prev_index(i: u32, len: u32, looped: bool) -> Option<u32> {
    if i > 0 {
        Some(i - 1)
    } else if looped {
        Some(len - 1)
    } else {
        None
    }
}
