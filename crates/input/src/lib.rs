//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm`'s event
//! types. It maps key events into [`crate::types::GameAction`]. Held keys rely
//! on the terminal's own auto-repeat; there is no DAS/ARR layer.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
