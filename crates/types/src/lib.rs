//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the key mapper and the terminal view alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: column 9, row 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NORMAL_FALL_MS` | 200 | Interval between gravity ticks |
//! | `FAST_FALL_MS` | 50 | Interval while the player holds the piece down |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 20);
//!
//! let cell = Cell::Occupied(PieceKind::TShape);
//! assert!(!cell.is_empty());
//! assert_eq!(PieceKind::from_code(cell.code()), Some(PieceKind::TShape));
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: u8 = 20;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Anchor column for freshly created pieces
pub const SPAWN_COLUMN: i8 = 9;

/// Anchor row for freshly created pieces
pub const SPAWN_ROW: i8 = 0;

/// Points awarded per cleared row
pub const SCORE_PER_ROW: u32 = 10;

/// Normal gravity interval in milliseconds
pub const NORMAL_FALL_MS: u64 = 200;

/// Sped-up gravity interval in milliseconds (held until the piece locks)
pub const FAST_FALL_MS: u64 = 50;

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// The five piece kinds
///
/// Each kind has a fixed display color:
/// - **Square**: orange 2x2 block
/// - **Bar**: green straight piece
/// - **LShape**: red
/// - **TShape**: yellow
/// - **ZShape**: blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    Bar,
    LShape,
    TShape,
    ZShape,
}

impl PieceKind {
    /// All kinds, in the order the piece factory indexes them.
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Square,
        PieceKind::Bar,
        PieceKind::LShape,
        PieceKind::TShape,
        PieceKind::ZShape,
    ];

    /// Non-zero grid code used by snapshots (0 means empty).
    pub fn code(self) -> u8 {
        match self {
            PieceKind::Square => 1,
            PieceKind::Bar => 2,
            PieceKind::LShape => 3,
            PieceKind::TShape => 4,
            PieceKind::ZShape => 5,
        }
    }

    /// Inverse of [`PieceKind::code`]
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_code(2), Some(PieceKind::Bar));
    /// assert_eq!(PieceKind::from_code(0), None);
    /// assert_eq!(PieceKind::from_code(9), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::Square),
            2 => Some(PieceKind::Bar),
            3 => Some(PieceKind::LShape),
            4 => Some(PieceKind::TShape),
            5 => Some(PieceKind::ZShape),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::Bar => "bar",
            PieceKind::LShape => "l",
            PieceKind::TShape => "t",
            PieceKind::ZShape => "z",
        }
    }
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceKind),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind) => Some(kind),
        }
    }

    /// Snapshot code: 0 for empty, [`PieceKind::code`] otherwise.
    pub fn code(self) -> u8 {
        self.kind().map_or(0, PieceKind::code)
    }
}

/// A single-step transformation of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Rotate,
}

/// Player commands accepted by the engine.
///
/// `Down` is absent: descent is driven by ticks only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Rotate,
}

impl From<Command> for Direction {
    fn from(value: Command) -> Self {
        match value {
            Command::Left => Direction::Left,
            Command::Right => Direction::Right,
            Command::Rotate => Direction::Rotate,
        }
    }
}

/// Host-level actions produced by key mapping
///
/// Each action maps to one engine call, see `GameState::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance to the next orientation
    Rotate,
    /// Speed up the fall until the piece locks
    SoftDrop,
    /// Pause play
    Pause,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Convert to camelCase string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle states of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Core-side event emitted after a piece locks.
///
/// The host drains it with `GameState::take_last_event` to reset timing and
/// write the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}
