//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PuzzleAction`]s. Every
//! action is a discrete click-equivalent, so there is no repeat handling.

pub mod map;

pub use sentence_puzzle_types as types;

pub use map::{bank_position, handle_key_event, should_quit};
