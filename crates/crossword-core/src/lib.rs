//! Core data structures and grid derivation for crossword puzzles.
//!
//! This crate turns a declarative clue/answer dataset into the normalized grid
//! and clue lists that interactive front-ends work with, and bridges player
//! guesses in and out of that grid. It holds no interaction state; see the
//! `crossword-game` crate for focus, navigation and editing.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`Position`], [`Direction`] and [`Axis`]
//!    - A direction's *primary axis* is the one its answers extend along
//!      (columns for across, rows for down).
//!
//! 2. **Input model** - [`CluesInput`], [`ClueInput`], [`ClueNumber`]
//!    - Two direction buckets, each mapping an opaque clue number to a clue,
//!      its answer and the answer's starting cell.
//!
//! 3. **Derived model** - [`Grid`], [`CellData`], [`CluesData`], [`ClueEntry`]
//!    - Built by the functions in [`builder`]; see [`build_grid_and_clues`].
//!
//! 4. **Guesses** - [`GuessEntry`] and the functions in [`guesses`]
//!    - Replace-all loading of external guess snapshots, snapshotting, and
//!      exact-match answer checking.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{ClueInput, CluesInput, Direction, Position, build_grid_and_clues};
//!
//! let input = CluesInput::new()
//!     .with_clue(Direction::Across, "1", ClueInput::new("Feline", "CAT", 0, 0))
//!     .with_clue(Direction::Down, "1", ClueInput::new("Baby bed", "COT", 0, 0));
//!
//! let layout = build_grid_and_clues(&input, false);
//! assert_eq!((layout.grid.rows(), layout.grid.cols()), (3, 3));
//!
//! let start = layout.grid.used_cell(Position::new(0, 0)).unwrap();
//! assert_eq!(start.number.as_ref().map(|n| n.as_str()), Some("1"));
//! assert_eq!(start.answer, 'C');
//! ```

pub mod builder;
pub mod cell;
pub mod clue;
pub mod direction;
pub mod error;
pub mod grid;
pub mod guesses;
pub mod position;
mod validate;

// Re-export commonly used types
pub use self::{
    builder::{CrosswordLayout, FirstClue, build_grid_and_clues, try_build_grid_and_clues},
    cell::{CellData, UnusedCell, UsedCell},
    clue::{ClueEntry, ClueInput, ClueNumber, CluesData, CluesInput},
    direction::{Axis, Direction},
    error::{GuessError, InputError},
    grid::{Grid, GridSize},
    guesses::{CorrectAnswer, GuessEntry},
    position::Position,
};
