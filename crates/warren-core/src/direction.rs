//! The closed set of directions a passage can run in.

use std::fmt;

/// A direction from one cell to an adjacent cell.
///
/// Compass directions cover orthogonal, zeta and upsilon tilings;
/// `Up`/`Down` are reserved for layered topologies; the rotational and
/// radial directions are used by circular mazes.
///
/// Every direction has a fixed opposite, see [`Direction::flip`].
///
/// # Examples
///
/// ```
/// use warren_core::Direction;
///
/// assert_eq!(Direction::North.flip(), Direction::South);
/// assert_eq!(Direction::Clockwise.flip().flip(), Direction::Clockwise);
/// assert_eq!(Direction::Out.short_name(), "OUT");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row `y - 1`.
    North,
    /// Towards column `x + 1`.
    East,
    /// Towards row `y + 1`.
    South,
    /// Towards column `x - 1`.
    West,
    /// Diagonal north-east.
    NorthEast,
    /// Diagonal south-east.
    SouthEast,
    /// Diagonal south-west.
    SouthWest,
    /// Diagonal north-west.
    NorthWest,
    /// One layer up.
    Up,
    /// One layer down.
    Down,
    /// Next cell around a ring.
    Clockwise,
    /// Previous cell around a ring.
    CounterClockwise,
    /// Away from the centre of a circular maze.
    Out,
    /// Towards the centre of a circular maze.
    In,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 14] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::Up,
        Direction::Down,
        Direction::Clockwise,
        Direction::CounterClockwise,
        Direction::Out,
        Direction::In,
    ];

    /// The opposite direction. `d.flip().flip() == d` for every `d`.
    pub fn flip(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
        }
    }

    /// A distinct single-bit mask, `1 << position` in [`Direction::ALL`].
    ///
    /// Suitable for packing the open walls of a cell into a `u16`.
    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Shorthand used in diagnostics (`N`, `NE`, `CC`, `OUT`, ...).
    pub fn short_name(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Clockwise => "C",
            Direction::CounterClockwise => "CC",
            Direction::Out => "OUT",
            Direction::In => "IN",
        }
    }

    /// Lowercase name (`north`, `counterclockwise`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::NorthEast => "northeast",
            Direction::SouthEast => "southeast",
            Direction::SouthWest => "southwest",
            Direction::NorthWest => "northwest",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counterclockwise",
            Direction::Out => "out",
            Direction::In => "in",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
