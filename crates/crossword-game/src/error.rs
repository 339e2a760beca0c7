use crossword_core::{GuessError, InputError, Position};

/// Errors returned by [`Crossword`](crate::Crossword) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CrosswordError {
    /// A guess was written to a cell that is not part of any answer.
    #[display("cannot set a guess at {position}: cell is not part of any answer")]
    UnusedCell {
        /// The targeted cell.
        position: Position,
    },
    /// A guess string was longer than one character.
    #[display("guess {guess:?} must be empty or a single character")]
    InvalidGuess {
        /// The rejected guess.
        guess: String,
    },
    /// Clue input failed strict validation.
    #[display("invalid clue input: {_0}")]
    Input(#[from] InputError),
    /// A guess snapshot could not be loaded.
    #[display("invalid guesses: {_0}")]
    Guess(#[from] GuessError),
}
