//! Grid module - the playing field
//!
//! The grid is `rows x columns` cells stored row-major in a flat `Vec`.
//! Each cell holds `0` when empty or the id of the piece kind that locked
//! there. Coordinates: (row, column), row 0 at the top.
//!
//! Plain accessors (`cell`, `set_cell`) expect callers to have checked
//! bounds with [`Grid::in_bounds`] or [`Grid::is_empty`] first and panic
//! otherwise; `try_*` variants report [`GridError`] instead.

use thiserror::Error;

use crate::types::EMPTY_CELL;

/// Out-of-range access on a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: i32,
        column: i32,
        rows: u16,
        columns: u16,
    },
}

/// The playing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    columns: u16,
    /// Row-major cells (row * columns + column)
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            cells: vec![EMPTY_CELL; rows as usize * columns as usize],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// One row's cells. Panics if `row` is out of range.
    pub fn row(&self, row: u16) -> &[u8] {
        let start = row as usize * self.columns as usize;
        &self.cells[start..start + self.columns as usize]
    }

    #[inline(always)]
    fn index(&self, row: i32, column: i32) -> Result<usize, GridError> {
        if !self.in_bounds(row, column) {
            return Err(GridError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row as usize * self.columns as usize + column as usize)
    }

    /// True iff `0 <= row < rows` and `0 <= column < columns`.
    pub fn in_bounds(&self, row: i32, column: i32) -> bool {
        row >= 0 && row < self.rows as i32 && column >= 0 && column < self.columns as i32
    }

    /// In bounds and unoccupied. Out-of-bounds cells count as blocked, which
    /// is how collision checks also enforce the walls and floor.
    pub fn is_empty(&self, row: i32, column: i32) -> bool {
        matches!(self.try_cell(row, column), Ok(EMPTY_CELL))
    }

    pub fn try_cell(&self, row: i32, column: i32) -> Result<u8, GridError> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    pub fn try_set_cell(&mut self, row: i32, column: i32, value: u8) -> Result<(), GridError> {
        let idx = self.index(row, column)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Read a cell.
    ///
    /// # Panics
    /// If `(row, column)` is out of bounds.
    pub fn cell(&self, row: i32, column: i32) -> u8 {
        match self.try_cell(row, column) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Write a cell.
    ///
    /// # Panics
    /// If `(row, column)` is out of bounds.
    pub fn set_cell(&mut self, row: i32, column: i32, value: u8) {
        if let Err(err) = self.try_set_cell(row, column, value) {
            panic!("{err}");
        }
    }

    /// Every cell in the row is occupied.
    pub fn is_row_full(&self, row: u16) -> bool {
        self.row(row).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Every cell in the row is empty.
    pub fn is_row_empty(&self, row: u16) -> bool {
        self.row(row).iter().all(|&cell| cell == EMPTY_CELL)
    }

    fn clear_row(&mut self, row: u16) {
        let start = row as usize * self.columns as usize;
        self.cells[start..start + self.columns as usize].fill(EMPTY_CELL);
    }

    fn move_row_down(&mut self, row: u16, by: u16) {
        let width = self.columns as usize;
        let src = row as usize * width;
        let dst = (row + by) as usize * width;
        self.cells.copy_within(src..src + width, dst);
        self.cells[src..src + width].fill(EMPTY_CELL);
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// One pass from the bottom row up: full rows are cleared and counted,
    /// and each surviving row drops by the number of full rows found below
    /// it so far. Returns how many rows were cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared: u16 = 0;

        for row in (0..self.rows).rev() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else if cleared > 0 {
                self.move_row_down(row, cleared);
            }
        }

        cleared as u32
    }

}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLUMNS)
    }
}
