//! Player guesses: loading external snapshots, snapshotting, and checking answers.
//!
//! An external guess source (a database, local storage, another player's
//! save) is represented as a list of [`GuessEntry`] triples. Loading is
//! replace-all: every load establishes the complete guess state of the grid.

use serde::{Deserialize, Serialize};

use crate::{ClueNumber, CluesData, Direction, Grid, GuessError, Position};

/// One guessed letter at a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessEntry {
    /// Row of the guessed cell.
    pub row: usize,
    /// Column of the guessed cell.
    pub col: usize,
    /// The guessed letter.
    pub guess: char,
}

impl GuessEntry {
    /// Creates a guess entry.
    #[must_use]
    pub const fn new(row: usize, col: usize, guess: char) -> Self {
        Self { row, col, guess }
    }

    /// Returns the guessed cell's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// An answer whose every cell holds the right guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectAnswer {
    /// Direction of the clue.
    pub direction: Direction,
    /// Number of the clue.
    pub number: ClueNumber,
    /// The answer, as supplied.
    pub answer: String,
}

/// Uppercases a guessed character.
///
/// Characters whose uppercase form is several characters keep the first one.
#[must_use]
pub fn normalize_guess(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

/// Clears the guess of every used cell.
pub fn clear_guesses(grid: &mut Grid) {
    for cell in grid.used_cells_mut() {
        cell.guess = None;
    }
}

/// Replaces all guesses in `grid` with `guesses`.
///
/// Every entry is checked before the grid is touched, so on error the grid is
/// left unchanged. Guesses are uppercased; later entries for the same cell win.
///
/// # Errors
///
/// - [`GuessError::OutOfBounds`] if an entry lies outside the grid.
/// - [`GuessError::UnusedCell`] if an entry targets a blocked square.
///
/// # Examples
///
/// ```
/// use crossword_core::{
///     ClueInput, CluesInput, Direction, GuessEntry, Position, build_grid_and_clues,
///     guesses::load_guesses,
/// };
///
/// let input = CluesInput::new()
///     .with_clue(Direction::Across, "1", ClueInput::new("Feline", "CAT", 0, 0));
/// let mut grid = build_grid_and_clues(&input, false).grid;
///
/// load_guesses(&mut grid, &[GuessEntry::new(0, 0, 'A'), GuessEntry::new(0, 2, 't')]).unwrap();
/// load_guesses(&mut grid, &[GuessEntry::new(0, 0, 'C')]).unwrap();
///
/// assert_eq!(grid.used_cell(Position::new(0, 0)).unwrap().guess, Some('C'));
/// assert_eq!(grid.used_cell(Position::new(0, 2)).unwrap().guess, None);
/// ```
pub fn load_guesses(grid: &mut Grid, guesses: &[GuessEntry]) -> Result<(), GuessError> {
    for entry in guesses {
        let position = entry.position();
        if !grid.contains(position) {
            return Err(GuessError::OutOfBounds {
                position,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if grid.used_cell(position).is_none() {
            return Err(GuessError::UnusedCell { position });
        }
    }

    clear_guesses(grid);
    for entry in guesses {
        if let Some(cell) = grid.used_cell_mut(entry.position()) {
            cell.guess = Some(normalize_guess(entry.guess));
        }
    }
    Ok(())
}

/// Returns every guess in `grid`, in row-major order.
///
/// Loading the result with [`load_guesses`] into a grid built from the same
/// input restores the same guesses.
#[must_use]
pub fn snapshot_guesses(grid: &Grid) -> Vec<GuessEntry> {
    grid.used_cells()
        .filter_map(|cell| {
            cell.guess
                .map(|guess| GuessEntry::new(cell.row, cell.col, guess))
        })
        .collect()
}

/// Lists the clues whose answers are fully and correctly guessed.
///
/// A cell matches when its guess equals the uppercased answer letter exactly.
/// Clues with empty answers are never listed.
#[must_use]
pub fn find_correct_answers(clues: &CluesData, grid: &Grid) -> Vec<CorrectAnswer> {
    clues
        .iter()
        .filter(|(direction, entry)| {
            !entry.is_empty()
                && entry
                    .positions(*direction)
                    .zip(entry.answer.chars())
                    .all(|(pos, letter)| {
                        grid.used_cell(pos)
                            .is_some_and(|cell| cell.guess == Some(normalize_guess(letter)))
                    })
        })
        .map(|(direction, entry)| CorrectAnswer {
            direction,
            number: entry.number.clone(),
            answer: entry.answer.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClueInput, CluesInput, build_grid_and_clues};

    fn cat_cot() -> (Grid, CluesData) {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("Feline", "CAT", 0, 0))
            .with_clue(Direction::Down, "1", ClueInput::new("Baby bed", "COT", 0, 0));
        let layout = build_grid_and_clues(&input, false);
        (layout.grid, layout.clues)
    }

    #[test]
    fn test_load_is_full_replace() {
        let (mut grid, _) = cat_cot();
        load_guesses(
            &mut grid,
            &[GuessEntry::new(0, 0, 'A'), GuessEntry::new(1, 0, 'T')],
        )
        .unwrap();
        assert_eq!(grid.used_cell(Position::new(1, 0)).unwrap().guess, Some('T'));

        load_guesses(&mut grid, &[GuessEntry::new(0, 0, 'C')]).unwrap();
        assert_eq!(grid.used_cell(Position::new(0, 0)).unwrap().guess, Some('C'));
        assert_eq!(grid.used_cell(Position::new(1, 0)).unwrap().guess, None);
    }

    #[test]
    fn test_load_rejects_bad_targets_without_touching_grid() {
        let (mut grid, _) = cat_cot();
        load_guesses(&mut grid, &[GuessEntry::new(0, 1, 'a')]).unwrap();
        let before = grid.clone();

        assert_eq!(
            load_guesses(
                &mut grid,
                &[GuessEntry::new(0, 0, 'C'), GuessEntry::new(1, 1, 'X')]
            ),
            Err(GuessError::UnusedCell {
                position: Position::new(1, 1)
            })
        );
        assert_eq!(
            load_guesses(&mut grid, &[GuessEntry::new(3, 0, 'X')]),
            Err(GuessError::OutOfBounds {
                position: Position::new(3, 0),
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(grid, before);
        assert_eq!(grid.used_cell(Position::new(0, 1)).unwrap().guess, Some('A'));
    }

    #[test]
    fn test_snapshot_restores_guesses() {
        let (mut grid, _) = cat_cot();
        load_guesses(
            &mut grid,
            &[GuessEntry::new(2, 0, 'T'), GuessEntry::new(0, 1, 'A')],
        )
        .unwrap();
        let snapshot = snapshot_guesses(&grid);
        assert_eq!(
            snapshot,
            [GuessEntry::new(0, 1, 'A'), GuessEntry::new(2, 0, 'T')]
        );

        let (mut other, _) = cat_cot();
        load_guesses(&mut other, &snapshot).unwrap();
        assert_eq!(other, grid);

        let json = serde_json::to_string(&snapshot[0]).unwrap();
        assert_eq!(json, r#"{"row":0,"col":1,"guess":"A"}"#);
    }

    #[test]
    fn test_find_correct_answers() {
        let (mut grid, clues) = cat_cot();
        assert!(find_correct_answers(&clues, &grid).is_empty());

        load_guesses(
            &mut grid,
            &[
                GuessEntry::new(0, 0, 'c'),
                GuessEntry::new(0, 1, 'a'),
                GuessEntry::new(0, 2, 't'),
                GuessEntry::new(1, 0, 'O'),
            ],
        )
        .unwrap();
        let correct = find_correct_answers(&clues, &grid);
        assert_eq!(
            correct,
            [CorrectAnswer {
                direction: Direction::Across,
                number: "1".into(),
                answer: "CAT".into(),
            }]
        );
        assert!(!grid.is_complete());

        load_guesses(&mut grid, &[]).unwrap();
        assert!(grid.used_cells().all(|cell| cell.guess.is_none()));
    }

    #[test]
    fn test_normalize_guess() {
        assert_eq!(normalize_guess('a'), 'A');
        assert_eq!(normalize_guess('Z'), 'Z');
        assert_eq!(normalize_guess('é'), 'É');
        assert_eq!(normalize_guess('ß'), 'S');
    }
}
