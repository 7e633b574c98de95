//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! plain framebuffer that is then flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable; the view only reads snapshots
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
