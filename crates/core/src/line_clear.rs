//! Line clearing
//!
//! Rows are scanned top to bottom. When a row is full, everything above it
//! shifts down one row, the top row is emptied, and the same row index is
//! examined again before the scan advances.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::GRID_HEIGHT;

/// Row indices cleared by a single scan, in scan order
pub type ClearedRows = ArrayVec<u8, { GRID_HEIGHT as usize }>;

/// Clear every full row and return the indices that were cleared
///
/// Because the scan runs top to bottom, each recorded index is also the row's
/// position before the clear.
pub fn clear_full_rows_indexed(grid: &mut Grid) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    let height = GRID_HEIGHT as usize;

    let mut row = 0;
    while row < height {
        if grid.is_row_full(row) {
            grid.remove_row(row);
            cleared.push(row as u8);
            // re-check the same index; it now holds the row from above
            continue;
        }
        row += 1;
    }

    cleared
}

/// Clear every full row and return how many were removed
pub fn clear_full_rows(grid: &mut Grid) -> usize {
    clear_full_rows_indexed(grid).len()
}
