//! Piece, factory and collision tests

use std::collections::HashSet;

use blockfall::core::{fits, fits_placement, orientation_count, Grid, Piece, PieceFactory, Placement, RandomSource};
use blockfall::types::{Cell, Direction, PieceKind, GRID_WIDTH, SPAWN_COLUMN, SPAWN_ROW};

struct Scripted(Vec<u32>);

impl RandomSource for Scripted {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.0.remove(0) % bound
    }
}

#[test]
fn test_orientation_counts() {
    assert_eq!(orientation_count(PieceKind::Square), 1);
    assert_eq!(orientation_count(PieceKind::Bar), 2);
    assert_eq!(orientation_count(PieceKind::LShape), 4);
    assert_eq!(orientation_count(PieceKind::TShape), 4);
    assert_eq!(orientation_count(PieceKind::ZShape), 2);
}

#[test]
fn test_new_piece_at_spawn() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert_eq!(piece.anchor(), (SPAWN_COLUMN, SPAWN_ROW));
        assert_eq!(piece.orientation(), 0);
    }
}

#[test]
fn test_cells_are_pure_in_kind_orientation_anchor() {
    let a = Piece::new(PieceKind::TShape);
    let b = Piece::with_placement(
        PieceKind::TShape,
        Placement {
            orientation: 3,
            col: 2,
            row: 7,
        },
    );
    assert_eq!(a.occupied_cells(3, (2, 7)), b.cells());
    assert_eq!(a.occupied_cells(3, (2, 7)), a.occupied_cells(3, (2, 7)));
}

#[test]
fn test_vertical_bar_spawn_cells() {
    let bar = Piece::new(PieceKind::Bar);
    assert_eq!(bar.cells(), [(9, 0), (9, 1), (9, 2), (9, 3)]);
}

#[test]
fn test_propose_does_not_mutate() {
    let piece = Piece::new(PieceKind::LShape);
    let left = piece.propose(Direction::Left);
    let down = piece.propose(Direction::Down);
    let rot = piece.propose(Direction::Rotate);

    assert_eq!(left.col, SPAWN_COLUMN - 1);
    assert_eq!(down.row, SPAWN_ROW + 1);
    assert_eq!(rot.orientation, 1);
    assert_eq!(piece.placement(), Placement::SPAWN);
}

#[test]
fn test_rotating_full_cycle_restores_cells() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        let start = piece.cells();
        for _ in 0..orientation_count(kind) {
            piece.commit(piece.propose(Direction::Rotate));
        }
        assert_eq!(piece.cells(), start, "{kind:?}");
    }
}

#[test]
fn test_square_rotation_is_identity() {
    let piece = Piece::new(PieceKind::Square);
    assert_eq!(piece.cells_at(piece.propose(Direction::Rotate)), piece.cells());
}

#[test]
fn test_fits_ignores_own_cells() {
    let mut grid = Grid::new();
    let piece = Piece::new(PieceKind::Bar);
    for (col, row) in piece.cells() {
        grid.set(col, row, Cell::Occupied(PieceKind::Bar)).unwrap();
    }

    // Moving down overlaps three of the piece's own cells and one empty cell.
    assert!(fits_placement(&grid, &piece, piece.propose(Direction::Down)));

    grid.set(9, 4, Cell::Occupied(PieceKind::Square)).unwrap();
    assert!(!fits_placement(&grid, &piece, piece.propose(Direction::Down)));
}

#[test]
fn test_fits_rejects_out_of_bounds() {
    let grid = Grid::new();
    let piece = Piece::new(PieceKind::Square);
    assert!(!fits(&grid, &piece, &[(-1, 0)]));
    assert!(!fits(&grid, &piece, &[(GRID_WIDTH as i8, 0)]));
    assert!(!fits(&grid, &piece, &[(0, 20)]));
    assert!(fits(&grid, &piece, &[(0, 0), (19, 19)]));
}

#[test]
fn test_factory_follows_random_source() {
    let mut factory = PieceFactory::new(Scripted(vec![4, 0, 2, 1, 3]));
    let kinds: Vec<_> = (0..5).map(|_| factory.create_random_piece().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            PieceKind::ZShape,
            PieceKind::Square,
            PieceKind::LShape,
            PieceKind::Bar,
            PieceKind::TShape
        ]
    );
}

#[test]
fn test_seeded_factory_is_deterministic_and_uniform() {
    let mut a = PieceFactory::seeded(7);
    let mut b = PieceFactory::seeded(7);
    let mut counts = [0u32; 5];
    for _ in 0..5000 {
        let kind = a.create_random_piece().kind();
        assert_eq!(kind, b.create_random_piece().kind());
        counts[kind.code() as usize - 1] += 1;
    }
    for (i, &n) in counts.iter().enumerate() {
        assert!((800..=1200).contains(&n), "kind {i} drawn {n} times");
    }
}

#[test]
fn test_orientation_cells_are_distinct() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..orientation_count(kind) {
            let cells: HashSet<_> = piece.cells().into_iter().collect();
            assert_eq!(cells.len(), 4);
            piece.commit(piece.propose(Direction::Rotate));
        }
    }
}
