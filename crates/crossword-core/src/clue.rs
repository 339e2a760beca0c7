//! Clue input and derived clue lists.

use std::{borrow::Borrow, cmp::Ordering};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// The label of a clue within one direction.
///
/// Clue numbers are opaque strings. They are usually numeric, and clue lists
/// are ordered by their numeric value (see [`ClueNumber::numeric_value`]), but
/// any string is accepted.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ClueNumber(String);

impl ClueNumber {
    /// Creates a clue number from any string-like value.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric value of the label.
    ///
    /// Leading whitespace is skipped, then an optional `+` or `-` sign and the
    /// longest run of ASCII digits that follows are parsed, so `"12a"` is 12
    /// and `"-1"` is -1. Returns `None` if no digit follows.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_core::ClueNumber;
    ///
    /// assert_eq!(ClueNumber::new("10").numeric_value(), Some(10));
    /// assert_eq!(ClueNumber::new(" 7b").numeric_value(), Some(7));
    /// assert_eq!(ClueNumber::new("+3").numeric_value(), Some(3));
    /// assert_eq!(ClueNumber::new("-1").numeric_value(), Some(-1));
    /// assert_eq!(ClueNumber::new("x1").numeric_value(), None);
    /// assert_eq!(ClueNumber::new("-").numeric_value(), None);
    /// ```
    #[must_use]
    pub fn numeric_value(&self) -> Option<i64> {
        let trimmed = self.0.trim_start();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let end = trimmed.len() - unsigned.len() + digits;
        trimmed[..end].parse().ok()
    }
}

impl From<&str> for ClueNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl From<String> for ClueNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl Borrow<str> for ClueNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ClueNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ClueNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single clue as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueInput {
    /// The clue text shown to the player.
    pub clue: String,
    /// The answer; letters only, case-insensitive.
    pub answer: String,
    /// Row of the answer's first cell.
    pub row: usize,
    /// Column of the answer's first cell.
    pub col: usize,
}

impl ClueInput {
    /// Creates a clue whose answer starts at `(row, col)`.
    #[must_use]
    pub fn new(clue: impl Into<String>, answer: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            clue: clue.into(),
            answer: answer.into(),
            row,
            col,
        }
    }

    /// Returns the answer's first cell.
    #[must_use]
    pub const fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the number of cells the answer covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    /// Returns `true` if the answer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Clue input for a whole puzzle: one bucket per direction, keyed by clue number.
///
/// Buckets keep their insertion (or JSON key) order, which is the tie-break
/// for clue numbers with equal numeric value.
///
/// # Examples
///
/// ```
/// use crossword_core::CluesInput;
///
/// let input: CluesInput = serde_json::from_str(r#"{
///     "across": { "1": { "clue": "Feline", "answer": "CAT", "row": 0, "col": 0 } }
/// }"#).unwrap();
/// assert_eq!(input.across.len(), 1);
/// assert!(input.down.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluesInput {
    /// Across clues.
    #[serde(default)]
    pub across: IndexMap<ClueNumber, ClueInput>,
    /// Down clues.
    #[serde(default)]
    pub down: IndexMap<ClueNumber, ClueInput>,
}

impl CluesInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clue, returning the updated input.
    #[must_use]
    pub fn with_clue(
        mut self,
        direction: Direction,
        number: impl Into<ClueNumber>,
        clue: ClueInput,
    ) -> Self {
        self.insert(direction, number, clue);
        self
    }

    /// Adds or replaces a clue, returning the previous clue with that number.
    pub fn insert(
        &mut self,
        direction: Direction,
        number: impl Into<ClueNumber>,
        clue: ClueInput,
    ) -> Option<ClueInput> {
        self.entries_mut(direction).insert(number.into(), clue)
    }

    /// Returns the bucket for `direction`.
    #[must_use]
    pub fn entries(&self, direction: Direction) -> &IndexMap<ClueNumber, ClueInput> {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Returns the bucket for `direction` mutably.
    pub fn entries_mut(&mut self, direction: Direction) -> &mut IndexMap<ClueNumber, ClueInput> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    /// Returns `true` if neither bucket has any clue.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

/// A flattened clue, as listed in a direction's clue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    /// The clue number.
    pub number: ClueNumber,
    /// The clue text.
    pub clue: String,
    /// The answer, as supplied.
    pub answer: String,
    /// Row of the answer's first cell.
    pub row: usize,
    /// Column of the answer's first cell.
    pub col: usize,
}

impl ClueEntry {
    /// Flattens a clue input entry.
    #[must_use]
    pub fn from_input(number: &ClueNumber, input: &ClueInput) -> Self {
        Self {
            number: number.clone(),
            clue: input.clue.clone(),
            answer: input.answer.clone(),
            row: input.row,
            col: input.col,
        }
    }

    /// Returns the answer's first cell.
    #[must_use]
    pub const fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Returns the number of cells the answer covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    /// Returns `true` if the answer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Returns the answer's last cell when read in `direction`.
    ///
    /// For an empty answer this is the start cell.
    #[must_use]
    pub fn end(&self, direction: Direction) -> Position {
        self.start().advance(direction, self.len().saturating_sub(1))
    }

    /// Returns every cell the answer covers when read in `direction`.
    pub fn positions(&self, direction: Direction) -> impl Iterator<Item = Position> {
        self.start().run(direction, self.len())
    }

    /// Returns `true` if `pos` lies within the answer when read in `direction`.
    #[must_use]
    pub fn contains(&self, direction: Direction, pos: Position) -> bool {
        let primary = direction.primary_axis();
        let orthogonal = direction.orthogonal_axis();
        let start = self.start();
        orthogonal.of(pos) == orthogonal.of(start)
            && primary.of(pos) >= primary.of(start)
            && primary.of(pos) < primary.of(start) + self.len()
    }
}

/// The derived clue lists, one per direction, each sorted by clue number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluesData {
    /// Across clues, ascending by numeric clue number.
    pub across: Vec<ClueEntry>,
    /// Down clues, ascending by numeric clue number.
    pub down: Vec<ClueEntry>,
}

impl CluesData {
    /// Returns the clue list for `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction) -> &[ClueEntry] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub(crate) fn get_mut(&mut self, direction: Direction) -> &mut Vec<ClueEntry> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    /// Finds the clue labelled `number` in `direction`'s list.
    #[must_use]
    pub fn find(&self, direction: Direction, number: &str) -> Option<&ClueEntry> {
        self.get(direction)
            .iter()
            .find(|entry| entry.number == number)
    }

    /// Returns `true` if `direction`'s list has a clue labelled `number`.
    #[must_use]
    pub fn contains(&self, direction: Direction, number: &str) -> bool {
        self.find(direction, number).is_some()
    }

    /// Iterates over all clues, across first.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &ClueEntry)> {
        Direction::ALL
            .into_iter()
            .flat_map(move |direction| self.get(direction).iter().map(move |e| (direction, e)))
    }
}

/// Compares clue numbers by numeric value.
///
/// Labels without a numeric value sort after all numeric ones and compare
/// equal to each other.
#[must_use]
pub fn compare_numbers(a: &ClueNumber, b: &ClueNumber) -> Ordering {
    match (a.numeric_value(), b.numeric_value()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts clue entries ascending by numeric clue number.
///
/// The sort is stable: entries with equal numeric value keep their relative order.
pub fn sort_by_number(entries: &mut [ClueEntry]) {
    entries.sort_by(|a, b| compare_numbers(&a.number, &b.number));
}
