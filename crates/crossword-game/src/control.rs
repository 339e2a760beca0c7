//! Imperative commands for hosts that drive the crossword directly.

use crossword_core::{Grid, Position, guesses::normalize_guess};

use crate::{Crossword, CrosswordError};

/// The command set a host can call without going through input events.
pub trait CrosswordControl {
    /// Acquires platform focus; warns if no focus handler is registered.
    fn focus(&mut self);

    /// Clears every guess.
    fn reset(&mut self);

    /// Sets the guess at `(row, col)`.
    ///
    /// `guess` is uppercased; an empty string clears the cell. Trusted callers
    /// bypass the `allow_mutation` option.
    ///
    /// # Errors
    ///
    /// - [`CrosswordError::InvalidGuess`] if `guess` has more than one character.
    /// - [`CrosswordError::UnusedCell`] if `(row, col)` is not a used cell.
    fn set_guess(&mut self, row: usize, col: usize, guess: &str) -> Result<(), CrosswordError>;

    /// Returns the current grid, guesses included.
    fn grid_data(&self) -> &Grid;
}

impl CrosswordControl for Crossword {
    fn focus(&mut self) {
        Crossword::focus(self);
    }

    fn reset(&mut self) {
        Crossword::reset(self);
    }

    fn set_guess(&mut self, row: usize, col: usize, guess: &str) -> Result<(), CrosswordError> {
        let mut chars = guess.chars();
        let guess = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(ch), None) => Some(normalize_guess(ch)),
            (Some(_), Some(_)) => {
                return Err(CrosswordError::InvalidGuess {
                    guess: guess.to_owned(),
                });
            }
        };
        self.set_cell_character(Position::new(row, col), guess)
    }

    fn grid_data(&self) -> &Grid {
        self.grid()
    }
}
