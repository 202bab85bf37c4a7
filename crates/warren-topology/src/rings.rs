//! Ring subdivision shared by circular and spherical tilings.

use crate::error::TopologyError;
use std::f64::consts::PI;

/// Number of cells in each ring of a round tiling of `radius` rings.
///
/// Ring 0 is a single centre cell. Each later ring splits every cell of
/// the previous ring into `ratio` cells, where `ratio` is chosen so that
/// cells stay roughly as wide as they are tall:
/// `ratio = round((2π · row / radius / previous) / (1 / radius))`.
///
/// The result has length `radius`, starts at 1, and each entry is a
/// multiple of its predecessor.
///
/// Returns `Err(TopologyError::InvalidRadius)` if `radius` is 0.
///
/// # Examples
///
/// ```
/// use warren_topology::ring_sizes;
///
/// assert_eq!(ring_sizes(5).unwrap(), vec![1, 6, 12, 24, 24]);
/// assert_eq!(ring_sizes(1).unwrap(), vec![1]);
/// ```
pub fn ring_sizes(radius: u32) -> Result<Vec<u32>, TopologyError> {
    if radius == 0 {
        return Err(TopologyError::InvalidRadius);
    }
    let row_height = 1.0 / f64::from(radius);
    let mut sizes = Vec::with_capacity(radius as usize);
    sizes.push(1u32);
    let mut previous = 1u32;
    for row in 1..radius {
        let circumference = 2.0 * PI * f64::from(row) * row_height;
        let cell_width = circumference / f64::from(previous);
        let ratio = ((cell_width / row_height).round() as u32).max(1);
        previous = previous
            .checked_mul(ratio)
            .ok_or(TopologyError::InvalidRadius)?;
        sizes.push(previous);
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_is_rejected() {
        assert_eq!(ring_sizes(0), Err(TopologyError::InvalidRadius));
    }

    #[test]
    fn small_radii() {
        assert_eq!(ring_sizes(2).unwrap(), vec![1, 6]);
        assert_eq!(ring_sizes(3).unwrap(), vec![1, 6, 12]);
    }
}
