//! Terminal front end for the sentence puzzle.
//!
//! Rendering happens in two steps: [`GameView`] lays a session snapshot out
//! into a plain framebuffer (pure, unit-testable), and [`TerminalRenderer`]
//! flushes framebuffers to the terminal, rewriting only rows that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use sentence_puzzle_core as core;
pub use sentence_puzzle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{role_style, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
