//! Grid module - the locked-cell store
//!
//! The grid is a 20x20 field where each cell is empty or occupied by the kind
//! of the piece that locked there. It only ever holds locked cells; the
//! falling piece lives in the game state until it locks.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (col, row) where col ranges 0..19 (left to right) and row
//! ranges 0..19 (top to bottom).

use crate::error::GridError;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The game grid - 20 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if !Self::contains(col, row) {
            return None;
        }
        Some((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Whether (col, row) addresses a cell of the grid
    #[inline]
    pub fn contains(col: i8, row: i8) -> bool {
        col >= 0 && col < GRID_WIDTH as i8 && row >= 0 && row < GRID_HEIGHT as i8
    }

    /// Get cell at position (col, row)
    pub fn get(&self, col: i8, row: i8) -> Result<Cell, GridError> {
        Self::index(col, row)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { col, row })
    }

    /// Set cell at position (col, row)
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> Result<(), GridError> {
        let idx = Self::index(col, row).ok_or(GridError::OutOfBounds { col, row })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is inside the grid and empty
    pub fn is_empty(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Ok(Cell::Empty))
    }

    /// Check if position is inside the grid and occupied
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Ok(Cell::Occupied(_)))
    }

    /// Borrow one row of cells, left to right, or `None` below the grid
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= GRID_HEIGHT as usize {
            return None;
        }
        let width = GRID_WIDTH as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of occupied cells in a row
    pub fn row_occupancy(&self, row: usize) -> usize {
        self.row(row)
            .map_or(0, |cells| cells.iter().filter(|cell| !cell.is_empty()).count())
    }

    /// Number of rows holding at least one occupied cell
    pub fn occupied_row_count(&self) -> usize {
        self.rows()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .count()
    }

    /// Total number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Shift every row above `row` down by one and empty the top row.
    ///
    /// The contents of `row` itself are discarded.
    pub(crate) fn remove_row(&mut self, row: usize) {
        if row >= GRID_HEIGHT as usize {
            return;
        }

        let width = GRID_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(Cell::Empty);
    }

    /// Write the grid into a kind-code matrix (0 = empty)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.code();
            }
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
