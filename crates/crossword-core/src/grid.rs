//! The crossword grid.

use std::{borrow::Cow, ops::Index};

use serde::Serialize;

use crate::{CellData, Position, UsedCell};

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{rows}x{cols}")]
pub struct GridSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridSize {
    /// Creates a size from row and column counts.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the size with both dimensions raised to the larger one.
    #[must_use]
    pub const fn squared(self) -> Self {
        let size = if self.rows > self.cols {
            self.rows
        } else {
            self.cols
        };
        Self::new(size, size)
    }
}

/// A rectangular, row-major grid of cells.
///
/// Every cell stores its own position; `grid[pos].position() == pos` always holds.
///
/// # Examples
///
/// ```
/// use crossword_core::{Grid, Position};
///
/// let grid = Grid::new(2, 3);
/// assert!(grid.cell(Position::new(1, 2)).is_unused());
///
/// // Positions outside the grid yield a synthetic unused cell instead of failing.
/// let outside = grid.cell(Position::new(5, 0));
/// assert!(outside.is_unused());
/// assert!(outside.is_out_of_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellData>,
}

impl Grid {
    /// Creates a grid whose cells are all unused.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| CellData::unused(Position::new(row, col))))
            .collect();
        Self { rows, cols, cells }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then_some(pos.row * self.cols + pos.col)
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&CellData> {
        self.index_of(pos).map(|idx| &self.cells[idx])
    }

    /// Returns the cell at `pos` mutably, or `None` if it lies outside the grid.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut CellData> {
        self.index_of(pos).map(|idx| &mut self.cells[idx])
    }

    /// Returns the cell at `pos`.
    ///
    /// Positions outside the grid yield a synthetic unused cell flagged as
    /// out-of-bounds, so callers can treat every non-enterable cell the same way.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cow<'_, CellData> {
        match self.get(pos) {
            Some(cell) => Cow::Borrowed(cell),
            None => Cow::Owned(CellData::out_of_bounds(pos)),
        }
    }

    /// Returns the used cell at `pos`, if there is one.
    #[must_use]
    pub fn used_cell(&self, pos: Position) -> Option<&UsedCell> {
        self.get(pos).and_then(CellData::as_used)
    }

    /// Returns the used cell at `pos` mutably, if there is one.
    pub fn used_cell_mut(&mut self, pos: Position) -> Option<&mut UsedCell> {
        self.get_mut(pos).and_then(CellData::as_used_mut)
    }

    /// Iterates over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellData]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CellData> {
        self.cells.iter()
    }

    /// Iterates over every used cell in row-major order.
    pub fn used_cells(&self) -> impl Iterator<Item = &UsedCell> {
        self.cells.iter().filter_map(CellData::as_used)
    }

    /// Iterates mutably over every used cell in row-major order.
    pub fn used_cells_mut(&mut self) -> impl Iterator<Item = &mut UsedCell> {
        self.cells.iter_mut().filter_map(CellData::as_used_mut)
    }

    /// Returns `true` if every used cell has a guess.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.used_cells().all(|cell| cell.guess.is_some())
    }

    /// Returns `true` if every used cell's guess matches its answer.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.used_cells().all(UsedCell::is_correct)
    }
}

impl Index<Position> for Grid {
    type Output = CellData;

    fn index(&self, pos: Position) -> &Self::Output {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!(
                "position {pos} is outside the {} grid",
                self.size()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unused_and_positioned() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.size(), GridSize::new(3, 4));
        assert_eq!(grid.cells().count(), 12);
        for (row, cells) in grid.iter_rows().enumerate() {
            assert_eq!(cells.len(), 4);
            for (col, cell) in cells.iter().enumerate() {
                assert!(cell.is_unused());
                assert_eq!(cell.position(), Position::new(row, col));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let grid = Grid::new(2, 2);
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, 2)).is_none());
        let sentinel = grid.cell(Position::new(0, 7));
        assert!(sentinel.is_out_of_bounds());
        assert_eq!(sentinel.position(), Position::new(0, 7));
        assert!(!grid.cell(Position::new(1, 1)).is_out_of_bounds());
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 2);
        let _ = &grid[Position::new(3, 0)];
    }

    #[test]
    fn test_squared() {
        assert_eq!(GridSize::new(3, 5).squared(), GridSize::new(5, 5));
        assert_eq!(GridSize::new(4, 2).squared(), GridSize::new(4, 4));
    }

    #[test]
    fn test_empty_grid_has_no_rows() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.iter_rows().count(), 0);
        assert!(grid.is_complete());
    }
}
