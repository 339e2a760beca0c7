//! Grid derivation from clue input.
//!
//! The functions here are pure: they turn a [`CluesInput`] into grid
//! dimensions, a [`Grid`] whose used cells carry answer letters and clue
//! membership, and per-direction clue lists sorted by clue number.
//!
//! Answers are written across first, then down. Where two answers disagree
//! about a cell (its letter, or its start number), the one written last wins;
//! use [`try_build_grid_and_clues`] to reject such input instead.

use serde::Serialize;

use crate::{
    CellData, ClueEntry, ClueNumber, CluesData, CluesInput, Direction, Grid, GridSize, InputError,
    Position, UsedCell,
    clue::sort_by_number,
    guesses::normalize_guess,
};

/// The largest row or column count an input may need.
///
/// Checked by [`CluesInput::check_range`], which keeps a grid at no more than
/// `MAX_GRID_DIMENSION * MAX_GRID_DIMENSION` cells.
pub const MAX_GRID_DIMENSION: usize = 1024;

/// A grid together with the clue lists derived from the same input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrosswordLayout {
    /// The filled grid.
    pub grid: Grid,
    /// The sorted clue lists.
    pub clues: CluesData,
}

/// The clue the player starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstClue {
    /// The start cell of the lowest-numbered answer.
    pub position: Position,
    /// The clue number shown in that cell.
    pub number: ClueNumber,
    /// Across if the across list has this number, otherwise down if the down
    /// list has it, otherwise across.
    pub direction: Direction,
}

impl CrosswordLayout {
    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Finds the numbered cell with the lowest numeric clue number.
    ///
    /// Cells are scanned in row-major order and only a strictly lower number
    /// replaces the current pick, so ties go to the first cell scanned. Numbers
    /// without a numeric value never replace a pick.
    #[must_use]
    pub fn first_clue(&self) -> Option<FirstClue> {
        let mut lowest: Option<(&UsedCell, &ClueNumber)> = None;
        for cell in self.grid.used_cells() {
            let Some(number) = &cell.number else {
                continue;
            };
            let replace = match lowest {
                None => true,
                Some((_, current)) => matches!(
                    (number.numeric_value(), current.numeric_value()),
                    (Some(n), Some(c)) if n < c
                ),
            };
            if replace {
                lowest = Some((cell, number));
            }
        }

        let (cell, number) = lowest?;
        let direction = if self.clues.contains(Direction::Across, number.as_str()) {
            Direction::Across
        } else if self.clues.contains(Direction::Down, number.as_str()) {
            Direction::Down
        } else {
            Direction::Across
        };
        Some(FirstClue {
            position: cell.position(),
            number: number.clone(),
            direction,
        })
    }
}

/// Calculates how far `direction`'s answers reach.
///
/// The returned position holds, on `direction`'s primary axis, the largest
/// coordinate covered by any answer (start + length - 1), and on the
/// orthogonal axis the largest start coordinate. Both are 0 if the bucket is
/// empty.
///
/// # Examples
///
/// ```
/// use crossword_core::{ClueInput, CluesInput, Direction, Position, builder::calculate_extents};
///
/// let input = CluesInput::new()
///     .with_clue(Direction::Across, "1", ClueInput::new("x", "CAT", 0, 0));
/// assert_eq!(calculate_extents(&input, Direction::Across), Position::new(0, 2));
/// ```
#[must_use]
pub fn calculate_extents(input: &CluesInput, direction: Direction) -> Position {
    let primary = direction.primary_axis();
    let orthogonal = direction.orthogonal_axis();

    let mut primary_max = 0;
    let mut orthogonal_max = 0;
    for info in input.entries(direction).values() {
        let reach = primary
            .of(info.start())
            .saturating_add(info.len())
            .saturating_sub(1);
        primary_max = primary_max.max(reach);
        orthogonal_max = orthogonal_max.max(orthogonal.of(info.start()));
    }

    let mut extents = Position::ORIGIN;
    *primary.of_mut(&mut extents) = primary_max;
    *orthogonal.of_mut(&mut extents) = orthogonal_max;
    extents
}

/// Computes the grid dimensions needed for `input`.
///
/// Unless `allow_non_square` is set, both dimensions are raised to the larger
/// one so the grid is square.
#[must_use]
pub fn compute_grid_size(input: &CluesInput, allow_non_square: bool) -> GridSize {
    let across = calculate_extents(input, Direction::Across);
    let down = calculate_extents(input, Direction::Down);
    let size = GridSize::new(
        across.row.max(down.row).saturating_add(1),
        across.col.max(down.col).saturating_add(1),
    );
    if allow_non_square { size } else { size.squared() }
}

/// Creates a grid of the given size with every cell unused.
#[must_use]
pub fn build_empty_grid(size: GridSize) -> Grid {
    Grid::new(size.rows, size.cols)
}

/// Writes `direction`'s answers into `grid` and appends their entries to `clues`.
///
/// Every cell an answer covers becomes used, takes the answer's letter
/// (uppercased) and records the clue number for `direction`; the first cell
/// also takes the clue number as its display number. Cells already written by
/// another answer are overwritten. `direction`'s clue list is re-sorted by
/// clue number afterwards.
///
/// # Panics
///
/// Panics if an answer runs outside `grid`. Grids sized by
/// [`compute_grid_size`] for the same input always fit.
pub fn fill_direction(
    grid: &mut Grid,
    clues: &mut CluesData,
    input: &CluesInput,
    direction: Direction,
) {
    let size = grid.size();
    for (number, info) in input.entries(direction) {
        for (i, (pos, letter)) in info
            .start()
            .run(direction, info.len())
            .zip(info.answer.chars())
            .enumerate()
        {
            let letter = normalize_guess(letter);
            let Some(cell) = grid.get_mut(pos) else {
                panic!("{direction} {number}: cell {pos} lies outside the {size} grid");
            };
            match cell {
                CellData::Used(used) => used.answer = letter,
                CellData::Unused(_) => *cell = CellData::Used(UsedCell::new(pos, letter)),
            }
            if let CellData::Used(used) = cell {
                used.set_clue_number(direction, number.clone());
                if i == 0 {
                    used.number = Some(number.clone());
                }
            }
        }
        clues
            .get_mut(direction)
            .push(ClueEntry::from_input(number, info));
    }
    sort_by_number(clues.get_mut(direction));
}

/// Builds the grid and clue lists for `input`.
///
/// Inconsistent input is resolved last-write-wins, with down answers written
/// after across answers. Sizes are not capped here; run
/// [`CluesInput::check_range`] first on untrusted input, since an answer
/// placed far from the origin makes the grid allocation fail.
///
/// # Examples
///
/// ```
/// use crossword_core::{ClueInput, CluesInput, Direction, build_grid_and_clues};
///
/// let input = CluesInput::new()
///     .with_clue(Direction::Across, "1", ClueInput::new("x", "ABCDE", 2, 0));
///
/// // The natural bounding box is 3x5, but grids are square by default.
/// let layout = build_grid_and_clues(&input, false);
/// assert_eq!((layout.rows(), layout.cols()), (5, 5));
///
/// let layout = build_grid_and_clues(&input, true);
/// assert_eq!((layout.rows(), layout.cols()), (3, 5));
/// ```
#[must_use]
pub fn build_grid_and_clues(input: &CluesInput, allow_non_square: bool) -> CrosswordLayout {
    let mut grid = build_empty_grid(compute_grid_size(input, allow_non_square));
    let mut clues = CluesData::default();
    for direction in Direction::ALL {
        fill_direction(&mut grid, &mut clues, input, direction);
    }
    CrosswordLayout { grid, clues }
}

/// Validates `input` and builds the grid and clue lists.
///
/// # Errors
///
/// Returns the first [`InputError`] found by
/// [`CluesInput::validate`](crate::CluesInput::validate).
pub fn try_build_grid_and_clues(
    input: &CluesInput,
    allow_non_square: bool,
) -> Result<CrosswordLayout, InputError> {
    input.validate()?;
    Ok(build_grid_and_clues(input, allow_non_square))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::ClueInput;

    fn cat_cot() -> CluesInput {
        CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("Feline", "CAT", 0, 0))
            .with_clue(Direction::Down, "1", ClueInput::new("Baby bed", "COT", 0, 0))
    }

    #[test]
    fn test_extents_saturate_far_from_origin() {
        let input = CluesInput::new().with_clue(
            Direction::Across,
            "1",
            ClueInput::new("x", "CAT", 0, usize::MAX - 1),
        );
        assert_eq!(
            calculate_extents(&input, Direction::Across),
            Position::new(0, usize::MAX - 1)
        );
        assert_eq!(compute_grid_size(&input, true), GridSize::new(1, usize::MAX));
    }

    #[test]
    fn test_calculate_extents() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("x", "CAT", 0, 0))
            .with_clue(Direction::Across, "4", ClueInput::new("x", "DOGS", 3, 1))
            .with_clue(Direction::Down, "2", ClueInput::new("x", "AB", 0, 6));
        assert_eq!(calculate_extents(&input, Direction::Across), Position::new(3, 4));
        assert_eq!(calculate_extents(&input, Direction::Down), Position::new(1, 6));
        assert_eq!(
            calculate_extents(&CluesInput::new(), Direction::Down),
            Position::ORIGIN
        );
    }

    #[test]
    fn test_compute_grid_size() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("x", "ABCDE", 0, 0))
            .with_clue(Direction::Down, "1", ClueInput::new("x", "AXY", 0, 0));
        assert_eq!(compute_grid_size(&input, false), GridSize::new(5, 5));
        assert_eq!(compute_grid_size(&input, true), GridSize::new(3, 5));
        assert_eq!(compute_grid_size(&CluesInput::new(), false), GridSize::new(1, 1));
    }

    #[test]
    fn test_build_cat_cot() {
        let layout = build_grid_and_clues(&cat_cot(), false);
        assert_eq!(layout.grid.size(), GridSize::new(3, 3));

        let start = layout.grid.used_cell(Position::new(0, 0)).unwrap();
        assert_eq!(start.answer, 'C');
        assert_eq!(start.number.as_ref().unwrap(), "1");
        assert_eq!(start.across.as_ref().unwrap(), "1");
        assert_eq!(start.down.as_ref().unwrap(), "1");

        let a = layout.grid.used_cell(Position::new(0, 1)).unwrap();
        assert_eq!(a.answer, 'A');
        assert!(a.number.is_none());
        assert!(a.down.is_none());

        let o = layout.grid.used_cell(Position::new(1, 0)).unwrap();
        assert_eq!(o.answer, 'O');
        assert!(o.across.is_none());

        assert!(layout.grid.cell(Position::new(1, 1)).is_unused());
        assert!(layout.grid.cell(Position::new(2, 2)).is_unused());
        assert_eq!(layout.clues.across.len(), 1);
        assert_eq!(layout.clues.down[0].clue, "Baby bed");
    }

    #[test]
    fn test_answers_are_uppercased() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("x", "cat", 0, 0));
        let layout = build_grid_and_clues(&input, false);
        let letters: String = layout.grid.used_cells().map(|c| c.answer).collect();
        assert_eq!(letters, "CAT");
        assert_eq!(layout.clues.across[0].answer, "cat");
    }

    #[test]
    fn test_down_wins_conflicts() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("x", "CAT", 0, 0))
            .with_clue(Direction::Down, "2", ClueInput::new("x", "DOG", 0, 0));
        let layout = build_grid_and_clues(&input, false);
        let start = layout.grid.used_cell(Position::ORIGIN).unwrap();
        assert_eq!(start.answer, 'D');
        assert_eq!(start.number.as_ref().unwrap(), "2");
        assert_eq!(start.across.as_ref().unwrap(), "1");

        assert!(try_build_grid_and_clues(&input, false).is_err());
    }

    #[test]
    fn test_clue_lists_sorted() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "10", ClueInput::new("x", "AB", 4, 0))
            .with_clue(Direction::Across, "2", ClueInput::new("x", "AB", 2, 0))
            .with_clue(Direction::Across, "1", ClueInput::new("x", "AB", 0, 0));
        let layout = build_grid_and_clues(&input, false);
        let numbers: Vec<_> = layout.clues.across.iter().map(|e| e.number.as_str()).collect();
        assert_eq!(numbers, ["1", "2", "10"]);
    }

    #[test]
    fn test_first_clue() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "3", ClueInput::new("x", "AB", 0, 0))
            .with_clue(Direction::Down, "2", ClueInput::new("x", "BC", 0, 1));
        let layout = build_grid_and_clues(&input, false);
        let first = layout.first_clue().unwrap();
        assert_eq!(first.position, Position::new(0, 1));
        assert_eq!(first.number, "2");
        assert_eq!(first.direction, Direction::Down);

        assert!(build_grid_and_clues(&CluesInput::new(), false).first_clue().is_none());
    }

    #[test]
    #[should_panic(expected = "lies outside the 2x2 grid")]
    fn test_fill_direction_panics_on_small_grid() {
        let mut grid = build_empty_grid(GridSize::new(2, 2));
        let mut clues = CluesData::default();
        fill_direction(&mut grid, &mut clues, &cat_cot(), Direction::Across);
    }

    fn arb_bucket() -> impl Strategy<Value = Vec<(u8, String, usize, usize)>> {
        prop::collection::vec((1u8..60, "[A-Za-z]{1,6}", 0usize..12, 0usize..12), 0..12)
    }

    fn arb_input() -> impl Strategy<Value = CluesInput> {
        (arb_bucket(), arb_bucket()).prop_map(|(across, down)| {
            let mut input = CluesInput::new();
            for (direction, bucket) in [(Direction::Across, across), (Direction::Down, down)] {
                for (number, answer, row, col) in bucket {
                    input.insert(
                        direction,
                        number.to_string(),
                        ClueInput::new("clue", answer, row, col),
                    );
                }
            }
            input
        })
    }

    proptest! {
        #[test]
        fn prop_build_is_idempotent(input in arb_input(), allow_non_square in any::<bool>()) {
            prop_assert_eq!(
                build_grid_and_clues(&input, allow_non_square),
                build_grid_and_clues(&input, allow_non_square)
            );
        }

        #[test]
        fn prop_grid_is_square_unless_allowed(input in arb_input()) {
            let layout = build_grid_and_clues(&input, false);
            prop_assert_eq!(layout.rows(), layout.cols());

            let natural = build_grid_and_clues(&input, true);
            prop_assert!(natural.rows() <= layout.rows());
            prop_assert!(natural.cols() <= layout.cols());
            prop_assert_eq!(layout.rows(), natural.rows().max(natural.cols()));
        }

        #[test]
        fn prop_clue_lists_strictly_ascending(input in arb_input()) {
            let layout = build_grid_and_clues(&input, false);
            for direction in Direction::ALL {
                let values: Vec<_> = layout
                    .clues
                    .get(direction)
                    .iter()
                    .map(|e| e.number.numeric_value().unwrap())
                    .collect();
                prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
                prop_assert_eq!(values.len(), input.entries(direction).len());
            }
        }

        #[test]
        fn prop_numbers_only_on_starts(input in arb_input()) {
            let layout = build_grid_and_clues(&input, false);
            for (direction, entry) in layout.clues.iter() {
                let cell = layout.grid.used_cell(entry.start()).unwrap();
                prop_assert!(cell.number.is_some());
                for pos in entry.positions(direction) {
                    prop_assert!(layout.grid.cell(pos).supports(direction));
                }
            }
            for cell in layout.grid.used_cells() {
                prop_assert!(cell.across.is_some() || cell.down.is_some());
                if cell.number.is_some() {
                    prop_assert!(
                        layout.clues.iter().any(|(_, e)| e.start() == cell.position())
                    );
                }
            }
        }
    }
}
