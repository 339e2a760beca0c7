//! Grid coordinates.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// A cell coordinate in a crossword grid.
///
/// Coordinates are 0-based; `(0, 0)` is the top-left cell, rows grow downward
/// and columns grow rightward. Ordering is row-major.
///
/// # Examples
///
/// ```
/// use crossword_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.advance(Direction::Across, 2), Position::new(2, 5));
/// assert_eq!(pos.advance(Direction::Down, 1), Position::new(3, 3));
///
/// // Moving above the top row is not representable.
/// assert_eq!(Position::new(0, 3).offset(-1, 0), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Position {
    /// The top-left cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by the given signed deltas, or `None` if
    /// either coordinate would become negative (or overflow).
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }

    /// Returns the position `distance` cells further along `direction`'s primary axis.
    #[must_use]
    #[inline]
    pub const fn advance(self, direction: Direction, distance: usize) -> Self {
        match direction {
            Direction::Across => Self::new(self.row, self.col + distance),
            Direction::Down => Self::new(self.row + distance, self.col),
        }
    }

    /// Like [`Position::advance`], but returns `None` on overflow.
    #[must_use]
    pub fn checked_advance(self, direction: Direction, distance: usize) -> Option<Self> {
        Some(match direction {
            Direction::Across => Self::new(self.row, self.col.checked_add(distance)?),
            Direction::Down => Self::new(self.row.checked_add(distance)?, self.col),
        })
    }

    /// Returns the `len` consecutive positions starting here and running along
    /// `direction`'s primary axis.
    pub fn run(self, direction: Direction, len: usize) -> impl Iterator<Item = Self> {
        (0..len).map(move |i| self.advance(direction, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.offset(-1, 0), Some(Position::new(0, 1)));
        assert_eq!(pos.offset(0, 2), Some(Position::new(1, 3)));
        assert_eq!(pos.offset(-2, 0), None);
        assert_eq!(pos.offset(0, -2), None);
    }

    #[test]
    fn test_checked_advance() {
        let pos = Position::new(1, usize::MAX - 1);
        assert_eq!(
            pos.checked_advance(Direction::Across, 1),
            Some(Position::new(1, usize::MAX))
        );
        assert_eq!(pos.checked_advance(Direction::Across, 2), None);
        assert_eq!(
            pos.checked_advance(Direction::Down, 2),
            Some(Position::new(3, usize::MAX - 1))
        );
    }

    #[test]
    fn test_run_follows_primary_axis() {
        let across: Vec<_> = Position::new(2, 1).run(Direction::Across, 3).collect();
        assert_eq!(
            across,
            [
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3)
            ]
        );

        let down: Vec<_> = Position::new(2, 1).run(Direction::Down, 2).collect();
        assert_eq!(down, [Position::new(2, 1), Position::new(3, 1)]);

        assert_eq!(Position::ORIGIN.run(Direction::Down, 0).count(), 0);
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
        assert_eq!(format!("{}", Position::new(3, 4)), "(3, 4)");
    }
}
