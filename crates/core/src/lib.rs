//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state machine. It never touches
//! rendering, input devices or I/O, making it:
//!
//! - **Deterministic**: the same seed (or scripted random source) produces the same game
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: the terminal front-end is only one possible host
//!
//! # Module Structure
//!
//! - [`grid`]: 20x20 store of locked cells
//! - [`pieces`]: the five piece kinds and their orientation tables
//! - [`factory`]: random piece creation at the spawn anchor
//! - [`rng`]: injectable random source and the default LCG
//! - [`collision`]: does a candidate placement fit?
//! - [`line_clear`]: full-row detection and collapse
//! - [`game_state`]: tick-driven state machine, scoring, pause and game over
//! - [`snapshot`]: read-only projection for renderers
//!
//! # Game Rules
//!
//! - A periodic tick moves the active piece down one row; when it cannot move
//!   it locks into the grid.
//! - Each cleared row is worth 10 points.
//! - One queued piece is always known in advance.
//! - The game ends when a newly promoted piece overlaps locked cells.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{Command, GameStatus};
//!
//! let mut game = GameState::new(12345);
//!
//! game.command(Command::Left);
//! game.command(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.score(), 0);
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod factory;
pub mod game_state;
pub mod grid;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{fits, fits_placement, overlaps_locked};
pub use config::GameConfig;
pub use error::GridError;
pub use factory::PieceFactory;
pub use game_state::{GameState, TickOutcome};
pub use grid::Grid;
pub use line_clear::{clear_full_rows, clear_full_rows_indexed};
pub use pieces::{get_shape, orientation_count, Piece, PieceCells, Placement};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
