use crate::pieces::{Piece, PieceCells, Placement};
use crate::types::{GameStatus, PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub orientation: u8,
    pub col: i8,
    pub row: i8,
    pub cells: PieceCells,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        let Placement {
            orientation,
            col,
            row,
        } = value.placement();
        Self {
            kind: value.kind(),
            orientation,
            col,
            row,
            cells: value.cells(),
        }
    }
}

/// Read-only projection of a game for rendering and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells as kind codes, 0 = empty
    pub grid: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub status: GameStatus,
    pub score: u32,
    pub rows_cleared: u32,
    pub pieces_locked: u32,
    pub fall_interval_ms: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: ActiveSnapshot::from(Piece::new(PieceKind::Square)),
            next: PieceKind::Square,
            status: GameStatus::Running,
            score: 0,
            rows_cleared: 0,
            pieces_locked: 0,
            fall_interval_ms: 0,
        }
    }
}
