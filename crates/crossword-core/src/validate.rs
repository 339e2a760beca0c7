use std::collections::{HashMap, hash_map::Entry};

use crate::{
    ClueNumber, CluesInput, Direction, InputError, Position, builder::MAX_GRID_DIMENSION,
    guesses::normalize_guess,
};

impl CluesInput {
    /// Checks that every answer fits in a grid of at most
    /// [`MAX_GRID_DIMENSION`] rows and columns.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] for the first answer, in build
    /// order, whose last cell lies outside that grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::{ClueInput, CluesInput, Direction, InputError};
    ///
    /// let input = CluesInput::new()
    ///     .with_clue(Direction::Down, "1", ClueInput::new("x", "CAT", 200_000, 0));
    /// assert!(matches!(input.check_range(), Err(InputError::OutOfRange { .. })));
    /// ```
    pub fn check_range(&self) -> Result<(), InputError> {
        for direction in Direction::ALL {
            for (number, info) in self.entries(direction) {
                let last = info
                    .start()
                    .checked_advance(direction, info.len().saturating_sub(1));
                let fits = last.is_some_and(|last| {
                    last.row < MAX_GRID_DIMENSION && last.col < MAX_GRID_DIMENSION
                });
                if !fits {
                    return Err(InputError::OutOfRange {
                        direction,
                        number: number.clone(),
                        limit: MAX_GRID_DIMENSION,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks that the input describes a consistent grid.
    ///
    /// Runs [`CluesInput::check_range`] first. Answers are then visited in
    /// build order (across, then down), and the first problem found is
    /// reported.
    ///
    /// # Errors
    ///
    /// - [`InputError::OutOfRange`] if an answer lies outside the largest
    ///   supported grid.
    /// - [`InputError::EmptyAnswer`] if an answer is empty.
    /// - [`InputError::InvalidCharacter`] if an answer has a non-letter character.
    /// - [`InputError::ConflictingLetter`] if two answers disagree on a cell's letter.
    /// - [`InputError::ConflictingNumber`] if two answers starting in one cell
    ///   have different numbers.
    /// - [`InputError::OverlappingClues`] if two answers of one direction share a cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::{ClueInput, CluesInput, Direction, InputError};
    ///
    /// let input = CluesInput::new()
    ///     .with_clue(Direction::Across, "1", ClueInput::new("x", "CAT", 0, 0))
    ///     .with_clue(Direction::Down, "1", ClueInput::new("x", "DOG", 0, 0));
    /// assert!(matches!(input.validate(), Err(InputError::ConflictingLetter { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), InputError> {
        self.check_range()?;

        let mut letters: HashMap<Position, char> = HashMap::new();
        let mut numbers: HashMap<Position, &ClueNumber> = HashMap::new();
        let mut members: HashMap<(Position, Direction), &ClueNumber> = HashMap::new();

        for direction in Direction::ALL {
            for (number, info) in self.entries(direction) {
                if info.is_empty() {
                    return Err(InputError::EmptyAnswer {
                        direction,
                        number: number.clone(),
                    });
                }
                if let Some(character) = info.answer.chars().find(|c| !c.is_alphabetic()) {
                    return Err(InputError::InvalidCharacter {
                        direction,
                        number: number.clone(),
                        character,
                    });
                }

                match numbers.entry(info.start()) {
                    Entry::Occupied(entry) if *entry.get() != number => {
                        return Err(InputError::ConflictingNumber {
                            position: info.start(),
                            expected: (*entry.get()).clone(),
                            found: number.clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                    Entry::Vacant(entry) => {
                        entry.insert(number);
                    }
                }

                let cells = info.start().run(direction, info.len());
                for (position, letter) in cells.zip(info.answer.chars()) {
                    if let Some(first) = members.insert((position, direction), number) {
                        return Err(InputError::OverlappingClues {
                            position,
                            direction,
                            first: first.clone(),
                            second: number.clone(),
                        });
                    }

                    let found = normalize_guess(letter);
                    let expected = *letters.entry(position).or_insert(found);
                    if expected != found {
                        return Err(InputError::ConflictingLetter {
                            position,
                            direction,
                            number: number.clone(),
                            expected,
                            found,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
