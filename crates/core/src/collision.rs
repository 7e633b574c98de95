//! Collision checks for candidate placements
//!
//! A candidate fits when every cell is on the grid and either empty or part of
//! the piece's own current footprint. The falling piece is never written into
//! the grid, so in practice only locked cells block it; the footprint rule
//! keeps the check correct for hosts that do paint the piece into a grid.

use crate::grid::Grid;
use crate::pieces::{Piece, Placement};

/// Whether `candidate` cells are a legal position for `piece` on `grid`
pub fn fits(grid: &Grid, piece: &Piece, candidate: &[(i8, i8)]) -> bool {
    let own = piece.cells();
    candidate.iter().all(|&(col, row)| {
        Grid::contains(col, row) && (grid.is_empty(col, row) || own.contains(&(col, row)))
    })
}

/// [`fits`] for a proposed placement of `piece`
pub fn fits_placement(grid: &Grid, piece: &Piece, placement: Placement) -> bool {
    fits(grid, piece, &piece.cells_at(placement))
}

/// Whether any of `cells` lands on an occupied grid cell.
///
/// Used for the spawn-time game over check, where the piece's own footprint
/// must not be excused.
pub fn overlaps_locked(grid: &Grid, cells: &[(i8, i8)]) -> bool {
    cells.iter().any(|&(col, row)| grid.is_occupied(col, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Direction, PieceKind};

    #[test]
    fn spawn_fits_on_empty_grid() {
        let grid = Grid::new();
        for kind in PieceKind::ALL {
            let piece = Piece::new(kind);
            assert!(fits(&grid, &piece, &piece.cells()));
        }
    }

    #[test]
    fn out_of_bounds_does_not_fit() {
        let grid = Grid::new();
        let piece = Piece::new(PieceKind::Square);
        assert!(!fits(&grid, &piece, &[(-1, 0)]));
        assert!(!fits(&grid, &piece, &[(0, 20)]));
        assert!(!fits(&grid, &piece, &[(20, 5)]));
    }

    #[test]
    fn locked_cell_blocks() {
        let mut grid = Grid::new();
        let piece = Piece::new(PieceKind::Bar);
        grid.set(9, 4, Cell::Occupied(PieceKind::Square)).unwrap();

        let down = piece.propose(Direction::Down);
        assert!(!fits_placement(&grid, &piece, down));
    }

    #[test]
    fn own_footprint_is_ignored() {
        let mut grid = Grid::new();
        let piece = Piece::new(PieceKind::Bar);
        // Paint the piece itself into the grid.
        for (col, row) in piece.cells() {
            grid.set(col, row, Cell::Occupied(PieceKind::Bar)).unwrap();
        }

        let down = piece.propose(Direction::Down);
        assert!(fits_placement(&grid, &piece, down));
        assert!(overlaps_locked(&grid, &piece.cells()));
    }

    #[test]
    fn fits_has_no_side_effects() {
        let grid = Grid::new();
        let piece = Piece::new(PieceKind::LShape);
        let grid_before = grid.clone();
        for _ in 0..3 {
            assert!(fits(&grid, &piece, &piece.cells()));
        }
        assert_eq!(grid, grid_before);
        assert_eq!(piece, Piece::new(PieceKind::LShape));
    }
}
