//! Pieces module - shapes and table-driven rotation
//!
//! Every kind owns a short ordered list of orientation tables. Rotating just
//! advances the index, wrapping at the end of the list; there is no rotation
//! matrix and no wall kick. A rotation that does not fit is simply refused.

use crate::types::{Direction, PieceKind, PIECE_CELLS, SPAWN_COLUMN, SPAWN_ROW};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece in one orientation - 4 offsets from the anchor
pub type PieceShape = [CellOffset; PIECE_CELLS];

/// Absolute grid cells covered by a piece
pub type PieceCells = [(i8, i8); PIECE_CELLS];

const SQUARE: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const BAR: [PieceShape; 2] = [
    // vertical
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    // horizontal
    [(0, 0), (1, 0), (2, 0), (3, 0)],
];

const L_SHAPE: [PieceShape; 4] = [
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(2, 0), (0, 1), (1, 1), (2, 1)],
];

const T_SHAPE: [PieceShape; 4] = [
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
];

const Z_SHAPE: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// All orientation tables of a kind, in rotation order
pub fn orientations(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::Square => &SQUARE,
        PieceKind::Bar => &BAR,
        PieceKind::LShape => &L_SHAPE,
        PieceKind::TShape => &T_SHAPE,
        PieceKind::ZShape => &Z_SHAPE,
    }
}

/// Number of distinct orientations of a kind
pub fn orientation_count(kind: PieceKind) -> u8 {
    orientations(kind).len() as u8
}

/// Get the shape (cell offsets) for a kind and orientation index
///
/// The index wraps, so any `u8` is accepted.
pub fn get_shape(kind: PieceKind, orientation: u8) -> PieceShape {
    let table = orientations(kind);
    table[orientation as usize % table.len()]
}

/// Orientation plus anchor: the complete position of a piece.
///
/// Produced by [`Piece::propose`] as a candidate and applied with
/// [`Piece::commit`] once the collision check accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub orientation: u8,
    pub col: i8,
    pub row: i8,
}

impl Placement {
    pub const SPAWN: Placement = Placement {
        orientation: 0,
        col: SPAWN_COLUMN,
        row: SPAWN_ROW,
    };
}

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    placement: Placement,
}

impl Piece {
    /// Create a piece at the spawn anchor with orientation 0
    pub fn new(kind: PieceKind) -> Self {
        Self::with_placement(kind, Placement::SPAWN)
    }

    pub fn with_placement(kind: PieceKind, placement: Placement) -> Self {
        Self { kind, placement }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn orientation(&self) -> u8 {
        self.placement.orientation
    }

    /// Anchor as (col, row)
    pub fn anchor(&self) -> (i8, i8) {
        (self.placement.col, self.placement.row)
    }

    /// Cells covered for a given orientation and anchor
    ///
    /// Coordinates wrap at the `i8` limits; any anchor that far off the grid
    /// yields cells that `fits` rejects.
    pub fn occupied_cells(&self, orientation: u8, anchor: (i8, i8)) -> PieceCells {
        let (col, row) = anchor;
        get_shape(self.kind, orientation)
            .map(|(dx, dy)| (col.wrapping_add(dx), row.wrapping_add(dy)))
    }

    /// Cells a candidate placement would cover
    pub fn cells_at(&self, placement: Placement) -> PieceCells {
        self.occupied_cells(placement.orientation, (placement.col, placement.row))
    }

    /// Cells covered right now
    pub fn cells(&self) -> PieceCells {
        self.cells_at(self.placement)
    }

    /// Compute the candidate placement for a step, without mutating
    pub fn propose(&self, direction: Direction) -> Placement {
        let p = self.placement;
        match direction {
            Direction::Left => Placement { col: p.col.wrapping_sub(1), ..p },
            Direction::Right => Placement { col: p.col.wrapping_add(1), ..p },
            Direction::Down => Placement { row: p.row.wrapping_add(1), ..p },
            Direction::Rotate => Placement {
                orientation: (p.orientation + 1) % orientation_count(self.kind),
                ..p
            },
        }
    }

    /// Apply a validated candidate
    pub fn commit(&mut self, placement: Placement) {
        self.placement = placement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_anchor_wraps_instead_of_overflowing() {
        let bar = Piece::new(PieceKind::Bar);
        let cells = bar.occupied_cells(1, (i8::MAX, i8::MAX));
        assert_eq!(cells[0], (i8::MAX, i8::MAX));
        assert_eq!(cells[1], (i8::MIN, i8::MAX));

        let edge = Piece::with_placement(
            PieceKind::Square,
            Placement {
                orientation: 0,
                col: i8::MIN,
                row: i8::MAX,
            },
        );
        assert_eq!(edge.propose(Direction::Left).col, i8::MAX);
        assert_eq!(edge.propose(Direction::Down).row, i8::MIN);
    }

    #[test]
    fn every_orientation_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for shape in orientations(kind) {
                for (i, a) in shape.iter().enumerate() {
                    assert!(a.0 >= 0 && a.1 >= 0, "{kind:?} has a negative offset");
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{kind:?} repeats an offset");
                    }
                }
            }
        }
    }

    #[test]
    fn orientation_counts() {
        assert_eq!(orientation_count(PieceKind::Square), 1);
        assert_eq!(orientation_count(PieceKind::Bar), 2);
        assert_eq!(orientation_count(PieceKind::LShape), 4);
        assert_eq!(orientation_count(PieceKind::TShape), 4);
        assert_eq!(orientation_count(PieceKind::ZShape), 2);
    }

    #[test]
    fn propose_does_not_mutate() {
        let piece = Piece::new(PieceKind::TShape);
        let before = piece;

        let left = piece.propose(Direction::Left);
        let down = piece.propose(Direction::Down);
        let rot = piece.propose(Direction::Rotate);

        assert_eq!(piece, before);
        assert_eq!(left.col, SPAWN_COLUMN - 1);
        assert_eq!(down.row, SPAWN_ROW + 1);
        assert_eq!(rot.orientation, 1);
    }

    #[test]
    fn commit_applies_candidate() {
        let mut piece = Piece::new(PieceKind::Bar);
        let candidate = piece.propose(Direction::Right);
        piece.commit(candidate);
        assert_eq!(piece.anchor(), (SPAWN_COLUMN + 1, SPAWN_ROW));
    }

    #[test]
    fn square_rotation_is_identity() {
        let piece = Piece::new(PieceKind::Square);
        assert_eq!(piece.propose(Direction::Rotate), piece.placement());
    }

    #[test]
    fn bar_spawns_vertical() {
        let piece = Piece::new(PieceKind::Bar);
        assert_eq!(piece.cells(), [(9, 0), (9, 1), (9, 2), (9, 3)]);
    }
}
