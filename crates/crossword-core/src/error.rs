//! Error types for input validation and guess loading.

use crate::{ClueNumber, Direction, Position};

/// Reasons clue input is rejected by strict validation.
///
/// See [`CluesInput::validate`](crate::CluesInput::validate).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// A clue has an empty answer.
    #[display("{direction} {number}: answer is empty")]
    EmptyAnswer {
        /// Direction of the offending clue.
        direction: Direction,
        /// Number of the offending clue.
        number: ClueNumber,
    },
    /// An answer contains a character that is not a letter.
    #[display("{direction} {number}: answer contains non-letter character {character:?}")]
    InvalidCharacter {
        /// Direction of the offending clue.
        direction: Direction,
        /// Number of the offending clue.
        number: ClueNumber,
        /// The rejected character.
        character: char,
    },
    /// Two answers put different letters into the same cell.
    #[display(
        "cell {position}: {direction} {number} writes {found:?} over {expected:?}"
    )]
    ConflictingLetter {
        /// The shared cell.
        position: Position,
        /// Direction of the clue written second.
        direction: Direction,
        /// Number of the clue written second.
        number: ClueNumber,
        /// The letter written first.
        expected: char,
        /// The letter written second.
        found: char,
    },
    /// Two answers starting in the same cell declare different numbers.
    #[display("cell {position}: starts both {expected} and {found}")]
    ConflictingNumber {
        /// The shared start cell.
        position: Position,
        /// The number declared first.
        expected: ClueNumber,
        /// The number declared second.
        found: ClueNumber,
    },
    /// An answer reaches past the largest supported grid.
    ///
    /// See [`MAX_GRID_DIMENSION`](crate::builder::MAX_GRID_DIMENSION).
    #[display("{direction} {number}: answer reaches past row or column {limit}")]
    OutOfRange {
        /// Direction of the offending clue.
        direction: Direction,
        /// Number of the offending clue.
        number: ClueNumber,
        /// The largest allowed row or column count.
        limit: usize,
    },
    /// Two answers of the same direction cover the same cell.
    #[display("cell {position}: claimed by {direction} {first} and {second}")]
    OverlappingClues {
        /// The shared cell.
        position: Position,
        /// Direction of both clues.
        direction: Direction,
        /// The clue written first.
        first: ClueNumber,
        /// The clue written second.
        second: ClueNumber,
    },
}

/// Reasons an external guess snapshot is rejected.
///
/// See [`load_guesses`](crate::guesses::load_guesses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessError {
    /// The guess targets a position outside the grid.
    #[display("guess at {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The targeted position.
        position: Position,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },
    /// The guess targets a blocked square.
    #[display("guess at {position} targets an unused cell")]
    UnusedCell {
        /// The targeted position.
        position: Position,
    },
}
