//! Blockfall (workspace facade crate).
//!
//! The game rules live in `blockfall-core`, key mapping in `blockfall-input` and
//! drawing in `blockfall-term`. This package re-exports them under one name and
//! adds the pieces the binary needs around them: the tick clock, environment
//! configuration and the JSON-lines event log.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod clock;
pub mod config;
pub mod event_log;
