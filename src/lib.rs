//! Sentence puzzle (workspace facade crate).
//!
//! The puzzle logic, key mapping and terminal view live in dedicated crates
//! under `crates/`; this package re-exports them as
//! `sentence_puzzle::{core,input,term,types}` and adds the pieces the binary
//! needs from its host: environment config and a process-backed speaker.

pub mod config;
pub mod speech;

pub use sentence_puzzle_core as core;
pub use sentence_puzzle_input as input;
pub use sentence_puzzle_term as term;
pub use sentence_puzzle_types as types;
