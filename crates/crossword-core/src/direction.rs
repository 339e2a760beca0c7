//! Answer directions and grid axes.

use serde::{Deserialize, Serialize};

use crate::Position;

/// The direction an answer runs in.
///
/// Serialized in lowercase (`"across"` / `"down"`), matching the clue input format.
///
/// # Examples
///
/// ```
/// use crossword_core::{Axis, Direction};
///
/// assert_eq!(Direction::Across.other(), Direction::Down);
/// assert_eq!(Direction::Across.primary_axis(), Axis::Col);
/// assert_eq!(Direction::Down.to_string(), "down");
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
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right; the column varies.
    #[display("across")]
    Across,
    /// Top to bottom; the row varies.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    ///
    /// This is also the order in which answers are written into the grid.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    #[must_use]
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the axis answers in this direction extend along.
    #[must_use]
    #[inline]
    pub const fn primary_axis(self) -> Axis {
        match self {
            Self::Across => Axis::Col,
            Self::Down => Axis::Row,
        }
    }

    /// Returns the fixed axis of an answer's run.
    #[must_use]
    #[inline]
    pub const fn orthogonal_axis(self) -> Axis {
        self.other().primary_axis()
    }

    /// Returns the `(d_row, d_col)` delta of one step of `distance` cells along
    /// the primary axis.
    #[must_use]
    #[inline]
    pub const fn delta(self, distance: isize) -> (isize, isize) {
        match self {
            Self::Across => (0, distance),
            Self::Down => (distance, 0),
        }
    }
}

/// A grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Axis {
    /// The row coordinate.
    Row,
    /// The column coordinate.
    Col,
}

impl Axis {
    /// Returns the coordinate of `pos` on this axis.
    #[must_use]
    #[inline]
    pub const fn of(self, pos: Position) -> usize {
        match self {
            Self::Row => pos.row,
            Self::Col => pos.col,
        }
    }

    /// Returns a mutable reference to the coordinate of `pos` on this axis.
    #[inline]
    pub fn of_mut(self, pos: &mut Position) -> &mut usize {
        match self {
            Self::Row => &mut pos.row,
            Self::Col => &mut pos.col,
        }
    }
}
