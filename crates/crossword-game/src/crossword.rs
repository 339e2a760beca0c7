use std::{borrow::Cow, fmt};

use crossword_core::{
    CellData, ClueEntry, ClueNumber, CluesData, CluesInput, CorrectAnswer, CrosswordLayout,
    Direction, Grid, GuessEntry, Position, UsedCell, build_grid_and_clues,
    guesses::{self, normalize_guess},
    try_build_grid_and_clues,
};

use crate::{
    CrosswordError, CrosswordObserver, CrosswordOptions, FocusHandler, Key, KeyOutcome,
    Modifiers, NoopObserver, Selection, ValidationPolicy,
};

/// An interactive crossword: the grid, its clue lists, and the player's selection.
///
/// All state changes go through the methods below. Each one either applies
/// fully or leaves the state unchanged, and reports guess changes to the
/// registered [`CrosswordObserver`] before returning.
///
/// Guesses are owned by the crossword: edits are written to its grid and then
/// reported, so a host that persists guesses only needs to record the
/// notifications.
///
/// # Examples
///
/// ```
/// use crossword_core::{ClueInput, CluesInput, Direction, Position};
/// use crossword_game::{Crossword, CrosswordOptions, Key, Modifiers};
///
/// let input = CluesInput::new()
///     .with_clue(Direction::Across, "1", ClueInput::new("Feline", "CAT", 0, 0))
///     .with_clue(Direction::Down, "1", ClueInput::new("Baby bed", "COT", 0, 0));
/// let mut crossword = Crossword::new(input, CrosswordOptions::default()).unwrap();
///
/// // The lowest-numbered clue is selected, across first.
/// assert_eq!(crossword.selection().position, Position::new(0, 0));
/// assert_eq!(crossword.selection().direction, Direction::Across);
///
/// for ch in ['c', 'a', 't'] {
///     crossword.handle_key_down(&Key::Character(ch), Modifiers::empty()).unwrap();
/// }
/// assert_eq!(crossword.correct_answers().len(), 1);
/// assert_eq!(crossword.selection().position, Position::new(0, 2));
/// ```
pub struct Crossword {
    input: CluesInput,
    options: CrosswordOptions,
    grid: Grid,
    clues: CluesData,
    selection: Selection,
    observer: Box<dyn CrosswordObserver>,
    focus_handler: Option<FocusHandler>,
}

impl fmt::Debug for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crossword")
            .field("options", &self.options)
            .field("grid", &self.grid.size())
            .field("clues", &self.clues)
            .field("selection", &self.selection)
            .field("focus_handler", &self.focus_handler.is_some())
            .finish_non_exhaustive()
    }
}

fn build(input: &CluesInput, options: CrosswordOptions) -> Result<CrosswordLayout, CrosswordError> {
    let layout = match options.validation {
        ValidationPolicy::Lenient => {
            input.check_range()?;
            build_grid_and_clues(input, options.allow_non_square)
        }
        ValidationPolicy::Strict => try_build_grid_and_clues(input, options.allow_non_square)?,
    };
    Ok(layout)
}

impl Crossword {
    /// Builds a crossword from clue input.
    ///
    /// The selection starts on the lowest-numbered clue. The new crossword
    /// does not acquire focus; call [`Crossword::focus`] once a focus handler
    /// is registered.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::Input`] if an answer lies outside the
    /// largest supported grid, or if `options` asks for strict validation and
    /// the input is inconsistent.
    pub fn new(input: CluesInput, options: CrosswordOptions) -> Result<Self, CrosswordError> {
        let layout = build(&input, options)?;
        let mut this = Self {
            input,
            options,
            grid: Grid::new(0, 0),
            clues: CluesData::default(),
            selection: Selection::default(),
            observer: Box::new(NoopObserver),
            focus_handler: None,
        };
        this.install(layout);
        Ok(this)
    }

    /// Replaces the clue input and rebuilds the grid.
    ///
    /// Existing guesses are dropped. The selection moves to the lowest-numbered
    /// clue and focus is acquired.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::Input`] if an answer lies outside the largest
    /// supported grid, or under strict validation if the input is
    /// inconsistent; the crossword is left unchanged.
    pub fn set_data(&mut self, input: CluesInput) -> Result<(), CrosswordError> {
        let layout = build(&input, self.options)?;
        self.input = input;
        if self.install(layout) {
            self.focus();
        }
        Ok(())
    }

    /// Replaces the options.
    ///
    /// The grid is rebuilt, as by [`Crossword::set_data`], only if the layout
    /// or validation policy changed.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::Input`] if strict validation is being
    /// switched on and the current input is inconsistent; the crossword is
    /// left unchanged.
    pub fn set_options(&mut self, options: CrosswordOptions) -> Result<(), CrosswordError> {
        if !self.options.requires_rebuild(options) {
            self.options = options;
            return Ok(());
        }
        let layout = build(&self.input, options)?;
        self.options = options;
        if self.install(layout) {
            self.focus();
        }
        Ok(())
    }

    /// Installs a freshly built layout and selects its first clue.
    ///
    /// Returns `true` if the layout has a numbered cell to select.
    fn install(&mut self, layout: CrosswordLayout) -> bool {
        let first = layout.first_clue();
        log::debug!(
            "rebuilt {} grid with {} across and {} down clues",
            layout.grid.size(),
            layout.clues.across.len(),
            layout.clues.down.len()
        );
        self.grid = layout.grid;
        self.clues = layout.clues;
        self.notify_grid_changed();

        let Some(first) = first else {
            return false;
        };
        self.selection.position = first.position;
        self.selection.direction = first.direction;
        self.selection.number = first.number;
        true
    }

    /// Sets the observer that receives notifications, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn CrosswordObserver>) {
        self.observer = observer;
    }

    /// Registers the platform focus handler, replacing any previous one.
    ///
    /// Passing `None` unregisters it.
    pub fn register_focus_handler(&mut self, handler: Option<FocusHandler>) {
        self.focus_handler = handler;
    }

    /// Returns the clue input the grid was built from.
    #[must_use]
    pub fn input(&self) -> &CluesInput {
        &self.input
    }

    /// Returns the current options.
    #[must_use]
    pub fn options(&self) -> &CrosswordOptions {
        &self.options
    }

    /// Returns the grid, including the current guesses.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the sorted clue lists.
    #[must_use]
    pub fn clues(&self) -> &CluesData {
        &self.clues
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the cell at `position`, or an out-of-bounds unused cell if the
    /// position lies outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cow<'_, CellData> {
        self.grid.cell(position)
    }

    /// Returns the clue list entry the selection is on.
    #[must_use]
    pub fn current_clue(&self) -> Option<&ClueEntry> {
        self.clues
            .find(self.selection.direction, self.selection.number.as_str())
    }

    /// Returns `true` if `position` lies in the answer of the current clue.
    #[must_use]
    pub fn is_highlighted(&self, position: Position) -> bool {
        self.current_clue()
            .is_some_and(|entry| entry.contains(self.selection.direction, position))
    }

    /// Moves the selection to `position`.
    ///
    /// The direction is `direction` if given, otherwise the current one; if the
    /// target cell has no answer in that direction, the other direction is used.
    /// Returns the target cell, or `None` if it is not a used cell, in which case
    /// the selection is unchanged.
    pub fn move_to(
        &mut self,
        position: Position,
        direction: Option<Direction>,
    ) -> Option<&UsedCell> {
        let requested = direction.unwrap_or(self.selection.direction);
        let Some(cell) = self.grid.used_cell(position) else {
            log::trace!("move to {position} rejected: not an answer cell");
            return None;
        };
        let direction = if cell.supports(requested) {
            requested
        } else {
            requested.other()
        };
        log::trace!("move to {position} {direction}");
        self.selection.position = position;
        self.selection.direction = direction;
        self.selection.number = cell
            .clue_number(direction)
            .cloned()
            .unwrap_or_else(|| ClueNumber::new(""));
        Some(cell)
    }

    /// Moves the selection by a row and column offset.
    ///
    /// A purely vertical move prefers down and a purely horizontal move prefers
    /// across; otherwise the current direction is kept. Moves off the top or
    /// left edge are rejected like any other move to a non-answer cell.
    pub fn move_relative(&mut self, d_row: isize, d_col: isize) -> Option<&UsedCell> {
        let direction = match (d_row != 0, d_col != 0) {
            (true, false) => Some(Direction::Down),
            (false, true) => Some(Direction::Across),
            _ => None,
        };
        let Some(target) = self.selection.position.offset(d_row, d_col) else {
            log::trace!(
                "move by ({d_row}, {d_col}) from {} rejected: off the grid",
                self.selection.position
            );
            return None;
        };
        self.move_to(target, direction)
    }

    /// Steps one cell forward in the current direction.
    pub fn move_forward(&mut self) -> Option<&UsedCell> {
        let (d_row, d_col) = self.selection.direction.delta(1);
        self.move_relative(d_row, d_col)
    }

    /// Steps one cell backward in the current direction.
    pub fn move_backward(&mut self) -> Option<&UsedCell> {
        let (d_row, d_col) = self.selection.direction.delta(-1);
        self.move_relative(d_row, d_col)
    }

    /// Sets or clears the guess at `position` and notifies the observer.
    ///
    /// The guess is uppercased. Setting a cell to its current guess does
    /// nothing and sends no notification. This ignores
    /// the `allow_mutation` option.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::UnusedCell`] if `position` is not a used cell.
    pub fn set_cell_character(
        &mut self,
        position: Position,
        guess: Option<char>,
    ) -> Result<(), CrosswordError> {
        let Some(cell) = self.grid.used_cell_mut(position) else {
            return Err(CrosswordError::UnusedCell { position });
        };
        let guess = guess.map(normalize_guess);
        if cell.guess == guess {
            return Ok(());
        }
        cell.guess = guess;
        self.observer.cell_changed(position, guess);
        Ok(())
    }

    /// Types `ch` into the focused cell and steps forward.
    ///
    /// Does nothing if mutation is not allowed.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::UnusedCell`] if the focused cell is not a used cell.
    pub fn handle_character(&mut self, ch: char) -> Result<(), CrosswordError> {
        if !self.options.allow_mutation {
            return Ok(());
        }
        self.set_cell_character(self.selection.position, Some(ch))?;
        self.move_forward();
        Ok(())
    }

    /// Types each character of `text` in turn, as by [`Crossword::handle_character`].
    ///
    /// Each character is a separate edit with its own notification; an error
    /// stops processing, keeping the characters already typed.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::UnusedCell`] if a character lands on a cell
    /// that is not a used cell.
    pub fn handle_bulk_input(&mut self, text: &str) -> Result<(), CrosswordError> {
        for ch in text.chars() {
            self.handle_character(ch)?;
        }
        Ok(())
    }

    /// Dispatches a key press.
    ///
    /// Presses with Ctrl, Alt or Meta held, and [`Key::Other`] keys, are
    /// ignored. Backspace steps back even when mutation is not allowed.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::UnusedCell`] if an editing key is pressed
    /// while the focused cell is not a used cell.
    pub fn handle_key_down(
        &mut self,
        key: &Key,
        modifiers: Modifiers,
    ) -> Result<KeyOutcome, CrosswordError> {
        if modifiers.is_shortcut() {
            return Ok(KeyOutcome::Ignored);
        }

        match key {
            Key::ArrowUp => {
                self.move_relative(-1, 0);
            }
            Key::ArrowDown => {
                self.move_relative(1, 0);
            }
            Key::ArrowLeft => {
                self.move_relative(0, -1);
            }
            Key::ArrowRight => {
                self.move_relative(0, 1);
            }
            Key::Space | Key::Tab => self.switch_direction(),
            Key::Backspace => {
                if self.options.allow_mutation {
                    self.set_cell_character(self.selection.position, None)?;
                }
                self.move_backward();
            }
            Key::Delete => {
                if self.options.allow_mutation {
                    self.set_cell_character(self.selection.position, None)?;
                }
            }
            Key::Home => self.jump_within_clue(false),
            Key::End => self.jump_within_clue(true),
            Key::Character(ch) => self.handle_character(*ch)?,
            Key::Other(_) => return Ok(KeyOutcome::Ignored),
        }
        Ok(KeyOutcome::Handled)
    }

    fn switch_direction(&mut self) {
        let other = self.selection.direction.other();
        let Some(number) = self
            .grid
            .used_cell(self.selection.position)
            .and_then(|cell| cell.clue_number(other))
        else {
            return;
        };
        self.selection.number = number.clone();
        self.selection.direction = other;
    }

    fn jump_within_clue(&mut self, to_end: bool) {
        let Some(entry) = self.current_clue() else {
            log::debug!(
                "no {} clue {:?} to jump within",
                self.selection.direction,
                self.selection.number.as_str()
            );
            return;
        };
        let target = if to_end {
            entry.end(self.selection.direction)
        } else {
            entry.start()
        };
        self.move_to(target, None);
    }

    /// Handles a click on a grid cell.
    ///
    /// Clicking a used cell selects it, switching direction if the cell has no
    /// answer in the current one, or if it is already the focused cell and has
    /// an answer in the other. Focus is acquired even for unused cells.
    pub fn handle_cell_click(&mut self, position: Position) {
        if let Some(cell) = self.grid.used_cell(position) {
            let current = self.selection.direction;
            let other = current.other();
            let reclicked = self.selection.focused && self.selection.position == position;
            let direction = if !cell.supports(current) || (reclicked && cell.supports(other)) {
                other
            } else {
                current
            };
            self.selection.number = cell
                .clue_number(direction)
                .cloned()
                .unwrap_or_else(|| ClueNumber::new(""));
            self.selection.position = position;
            self.selection.direction = direction;
        }
        self.focus();
    }

    /// Handles a click on the text input that sits over the focused cell.
    ///
    /// Switches direction if the widget is focused and the cell has an answer
    /// in the other direction, then acquires focus.
    pub fn handle_input_click(&mut self) {
        if let Some(cell) = self.grid.used_cell(self.selection.position) {
            let other = self.selection.direction.other();
            if self.selection.focused && cell.supports(other) {
                self.selection.direction = other;
            }
            self.selection.number = cell
                .clue_number(self.selection.direction)
                .cloned()
                .unwrap_or_else(|| ClueNumber::new(""));
        }
        self.focus();
    }

    /// Handles the player picking a clue from a clue list.
    ///
    /// Moves to the clue's first cell in `direction`, acquires focus and
    /// notifies the observer. Unknown clues are ignored.
    pub fn handle_clue_selected(&mut self, direction: Direction, number: &str) {
        let Some(entry) = self.clues.find(direction, number) else {
            log::debug!("clue selection ignored: no {direction} clue {number:?}");
            return;
        };
        let start = entry.start();
        let number = entry.number.clone();
        self.move_to(start, Some(direction));
        self.focus();
        self.observer.clue_selected(direction, &number);
    }

    /// Acquires platform focus through the registered focus handler.
    ///
    /// Without a handler this logs a warning and does nothing.
    pub fn focus(&mut self) {
        match self.focus_handler.as_mut() {
            Some(handler) => {
                handler();
                self.selection.focused = true;
            }
            None => log::warn!("focus requested but no focus handler is registered"),
        }
    }

    /// Records that the widget lost platform focus.
    pub fn handle_blur(&mut self) {
        self.selection.focused = false;
    }

    /// Clears every guess. The selection is kept.
    pub fn reset(&mut self) {
        guesses::clear_guesses(&mut self.grid);
        log::debug!("guesses reset");
        self.notify_grid_changed();
    }

    /// Replaces all guesses with an external snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::Guess`] if an entry is out of bounds or on an
    /// unused cell; no guess is changed.
    pub fn load_guesses(&mut self, guesses: &[GuessEntry]) -> Result<(), CrosswordError> {
        guesses::load_guesses(&mut self.grid, guesses)?;
        log::debug!("loaded {} guesses", guesses.len());
        self.notify_grid_changed();
        Ok(())
    }

    /// Returns every guess, in row-major order.
    #[must_use]
    pub fn guesses(&self) -> Vec<GuessEntry> {
        guesses::snapshot_guesses(&self.grid)
    }

    /// Lists the clues that are fully and correctly answered.
    #[must_use]
    pub fn correct_answers(&self) -> Vec<CorrectAnswer> {
        guesses::find_correct_answers(&self.clues, &self.grid)
    }

    /// Returns `true` if every cell holds the right guess.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.grid.is_correct()
    }

    fn notify_grid_changed(&mut self) {
        if self.options.allow_mutation {
            self.observer.grid_changed(&self.grid);
        }
    }
}
