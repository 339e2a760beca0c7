use crossword_core::{ClueNumber, Direction, Grid, Position};

/// Receives notifications from a [`Crossword`](crate::Crossword).
///
/// Notifications are delivered synchronously, from inside the call that
/// caused them. Every method defaults to doing nothing, so hosts implement
/// only the ones they care about.
pub trait CrosswordObserver {
    /// A cell's guess changed. `None` means the guess was cleared.
    fn cell_changed(&mut self, _position: Position, _guess: Option<char>) {}

    /// The grid was replaced wholesale: rebuilt from new input, reloaded from
    /// a guess snapshot, or reset. Only sent while mutation is allowed.
    fn grid_changed(&mut self, _grid: &Grid) {}

    /// The player picked a clue from a clue list.
    fn clue_selected(&mut self, _direction: Direction, _number: &ClueNumber) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CrosswordObserver for NoopObserver {}

/// Acquires platform input focus, e.g. focuses a native text input.
///
/// Registered with
/// [`Crossword::register_focus_handler`](crate::Crossword::register_focus_handler).
pub type FocusHandler = Box<dyn FnMut()>;
