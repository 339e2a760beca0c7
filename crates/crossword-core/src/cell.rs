//! Grid cells.

use serde::{Deserialize, Serialize};

use crate::{ClueNumber, Direction, Position};

/// A cell of a crossword grid.
///
/// A cell is *used* if at least one answer runs through it; otherwise it is a
/// blocked square. Cells that would lie outside the grid are represented by an
/// [`UnusedCell`] with `out_of_bounds` set (see [`Grid::cell`]).
///
/// [`Grid::cell`]: crate::Grid::cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellData {
    /// A blocked square.
    Unused(UnusedCell),
    /// A square that is part of at least one answer.
    Used(UsedCell),
}

/// A blocked (or out-of-bounds) square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnusedCell {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// Set on the synthetic cells returned for positions outside the grid.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub out_of_bounds: bool,
}

/// A square that is part of at least one answer.
///
/// At least one of `across`/`down` is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedCell {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// The correct letter, uppercase.
    pub answer: char,
    /// The player's current guess, uppercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess: Option<char>,
    /// The clue number shown in the cell; set only on cells that start an answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<ClueNumber>,
    /// The across clue this cell belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub across: Option<ClueNumber>,
    /// The down clue this cell belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<ClueNumber>,
}

impl CellData {
    /// Creates a blocked square.
    #[must_use]
    pub const fn unused(pos: Position) -> Self {
        Self::Unused(UnusedCell {
            row: pos.row,
            col: pos.col,
            out_of_bounds: false,
        })
    }

    /// Creates the synthetic cell that stands in for a position outside the grid.
    #[must_use]
    pub const fn out_of_bounds(pos: Position) -> Self {
        Self::Unused(UnusedCell {
            row: pos.row,
            col: pos.col,
            out_of_bounds: true,
        })
    }

    /// Returns the cell's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Unused(cell) => Position::new(cell.row, cell.col),
            Self::Used(cell) => Position::new(cell.row, cell.col),
        }
    }

    /// Returns `true` for the synthetic out-of-bounds cell.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::Unused(UnusedCell {
                out_of_bounds: true,
                ..
            })
        )
    }

    /// Returns the used cell, if this is one.
    #[must_use]
    pub const fn as_used(&self) -> Option<&UsedCell> {
        match self {
            Self::Used(cell) => Some(cell),
            Self::Unused(_) => None,
        }
    }

    /// Returns the used cell mutably, if this is one.
    pub const fn as_used_mut(&mut self) -> Option<&mut UsedCell> {
        match self {
            Self::Used(cell) => Some(cell),
            Self::Unused(_) => None,
        }
    }

    /// Returns the clue number of the `direction` answer running through this cell.
    ///
    /// Always `None` for unused cells.
    #[must_use]
    pub fn clue_number(&self, direction: Direction) -> Option<&ClueNumber> {
        self.as_used().and_then(|cell| cell.clue_number(direction))
    }

    /// Returns `true` if a `direction` answer runs through this cell.
    #[must_use]
    pub fn supports(&self, direction: Direction) -> bool {
        self.clue_number(direction).is_some()
    }
}

impl UsedCell {
    /// Creates a used cell with no clue membership yet.
    pub(crate) fn new(pos: Position, answer: char) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            answer,
            guess: None,
            number: None,
            across: None,
            down: None,
        }
    }

    /// Returns the cell's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the clue number of the `direction` answer running through this cell.
    #[must_use]
    pub fn clue_number(&self, direction: Direction) -> Option<&ClueNumber> {
        match direction {
            Direction::Across => self.across.as_ref(),
            Direction::Down => self.down.as_ref(),
        }
    }

    /// Returns `true` if a `direction` answer runs through this cell.
    #[must_use]
    pub fn supports(&self, direction: Direction) -> bool {
        self.clue_number(direction).is_some()
    }

    pub(crate) fn set_clue_number(&mut self, direction: Direction, number: ClueNumber) {
        match direction {
            Direction::Across => self.across = Some(number),
            Direction::Down => self.down = Some(number),
        }
    }

    /// Returns `true` if the guess matches the answer exactly.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.guess == Some(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unused_cells_support_nothing() {
        let cell = CellData::unused(Position::new(1, 2));
        assert!(cell.is_unused());
        assert!(!cell.is_out_of_bounds());
        assert!(!cell.supports(Direction::Across));
        assert!(!cell.supports(Direction::Down));
        assert_eq!(cell.position(), Position::new(1, 2));

        let sentinel = CellData::out_of_bounds(Position::new(9, 9));
        assert!(sentinel.is_unused());
        assert!(sentinel.is_out_of_bounds());
    }

    #[test]
    fn test_used_cell_membership() {
        let mut cell = UsedCell::new(Position::new(0, 0), 'C');
        cell.set_clue_number(Direction::Down, "3".into());
        assert!(cell.supports(Direction::Down));
        assert!(!cell.supports(Direction::Across));
        assert!(!cell.is_correct());
        cell.guess = Some('C');
        assert!(cell.is_correct());
    }

    #[test]
    fn test_serde_shape() {
        let mut cell = UsedCell::new(Position::new(0, 1), 'A');
        cell.set_clue_number(Direction::Across, "1".into());
        let json = serde_json::to_value(CellData::Used(cell)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "used", "row": 0, "col": 1, "answer": "A", "across": "1" })
        );

        let json = serde_json::to_value(CellData::unused(Position::new(2, 2))).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "unused", "row": 2, "col": 2 }));
    }
}
