use crossword_core::{ClueNumber, Direction, Position};
use serde::Serialize;

/// The focused cell, the active direction and the clue they select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// The focused cell.
    pub position: Position,
    /// The direction typed answers advance in.
    pub direction: Direction,
    /// The clue of `direction` that covers `position`, or an empty label if
    /// the cell has none.
    pub number: ClueNumber,
    /// Whether the widget holds platform input focus.
    pub focused: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            position: Position::ORIGIN,
            direction: Direction::Across,
            number: ClueNumber::new("1"),
            focused: false,
        }
    }
}
