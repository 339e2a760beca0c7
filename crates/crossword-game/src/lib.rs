//! Interaction state for crossword widgets.
//!
//! [`Crossword`] owns a grid built by [`crossword_core`] together with the
//! player's [`Selection`], and turns key presses, clicks and clue picks into
//! focus moves and guess edits. Front-ends render from its accessors and
//! learn about edits through a [`CrosswordObserver`].
//!
//! # Overview
//!
//! - **State machine**: [`Crossword`]
//!   - Navigation: `move_to`, `move_relative`, `move_forward`, `move_backward`
//!   - Input events: `handle_key_down`, `handle_character`, `handle_bulk_input`,
//!     `handle_cell_click`, `handle_input_click`, `handle_clue_selected`
//! - **Keys**: [`Key`], [`Modifiers`], [`KeyOutcome`]
//! - **Host hooks**: [`CrosswordObserver`], [`FocusHandler`], [`CrosswordControl`]
//! - **Configuration**: [`CrosswordOptions`], [`ValidationPolicy`]

pub mod control;
mod crossword;
mod error;
pub mod input;
mod observer;
mod options;
mod selection;

pub use self::{
    control::CrosswordControl,
    crossword::Crossword,
    error::CrosswordError,
    input::{Key, KeyOutcome, Modifiers},
    observer::{CrosswordObserver, FocusHandler, NoopObserver},
    options::{CrosswordOptions, ValidationPolicy},
    selection::Selection,
};
