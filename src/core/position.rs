//! Grid geometry: positions, directions and scan axes.
//!
//! Positions are zero-based `(row, col)` pairs. Row 0 is the top of the
//! board, so `Direction::Down` increases the row and gravity pulls tiles
//! toward higher rows.

use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// ## Example
///
/// ```
/// use rust_match3::core::{Direction, Position};
///
/// let p = Position::new(0, 2);
/// assert_eq!(p.offset(Direction::Right), Some(Position::new(0, 3)));
/// assert_eq!(p.offset(Direction::Top), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring position one step in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// The upper bounds are the board's business, see `Board::contains`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Right => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
            Direction::Top => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::Down => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
        }
    }

    /// Check if both positions lie in the same row or the same column.
    #[must_use]
    pub fn is_aligned_with(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Index along `axis`: the column for rows, the row for columns.
    #[must_use]
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.col,
            Axis::Column => self.row,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal step directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Top,
    Down,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Down,
    ];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Down,
            Direction::Down => Direction::Top,
        }
    }

    /// The axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Top | Direction::Down => Axis::Column,
        }
    }
}

/// A line orientation the match detector scans along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The walk directions for this axis: `(backward, forward)`.
    ///
    /// Runs are reported as `[...backward walk, start, ...forward walk]`.
    #[must_use]
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Row => (Direction::Left, Direction::Right),
            Axis::Column => (Direction::Top, Direction::Down),
        }
    }
}
