//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the whole sentence-ordering session: level progression,
//! the tile bank and assembled sequence, answer validation, completion tracking
//! and the review log of wrong attempts. It has **no** dependencies on
//! rendering, terminals or speech engines:
//!
//! - **Deterministic**: the same seed produces the same bank orders
//! - **Testable**: every operation returns an explicit result
//! - **Portable**: runs headless, in a terminal, or behind any other front end
//!
//! # Module Structure
//!
//! - [`catalog`]: the fixed, ordered list of levels (built-in or JSON)
//! - [`rng`]: seeded Fisher-Yates shuffling of tile indices
//! - [`sequencer`]: bank vs. assembled sequence partition for the level in play
//! - [`validator`]: sentence rendering and comparison with the canonical answer
//! - [`progress`]: per-level completion flags and the finished latch
//! - [`review`]: first wrong attempt per level, in recording order
//! - [`speech`]: the speech collaborator seam
//! - [`session`]: [`GameSession`], which wires the above together
//! - [`snapshot`]: the render-ready view of a session
//!
//! # Rules
//!
//! - Tiles are placed one at a time from the bank; undo returns the last one
//! - A sentence can be checked only when every tile is placed
//! - A correct sentence locks the level and unlocks "next level"
//! - A wrong sentence is kept for review (first attempt per level only)
//! - Review opens once, after every level is complete
//!
//! # Example
//!
//! ```
//! use sentence_puzzle_core::{GameSession, LevelCatalog, Verdict};
//!
//! let mut session = GameSession::new(LevelCatalog::builtin(), 12345);
//!
//! // Place tiles in their stored order: that is the answer.
//! for i in 0..session.level().tile_count() {
//!     session.place_tile(i).unwrap();
//! }
//! assert_eq!(session.check(), Ok(Verdict::Correct));
//! assert!(session.can_advance());
//!
//! session.advance().unwrap();
//! assert_eq!(session.current_level_index(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod progress;
pub mod review;
pub mod rng;
pub mod sequencer;
pub mod session;
pub mod snapshot;
pub mod speech;
pub mod validator;

pub use sentence_puzzle_types as types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, LevelCatalog, LevelSpec};
pub use error::ActionError;
pub use progress::{Completion, ProgressTracker};
pub use review::{ReviewEntry, ReviewLog};
pub use rng::SimpleRng;
pub use sequencer::TileSequencer;
pub use session::GameSession;
pub use snapshot::{ReviewItem, SessionSnapshot, TileView};
pub use speech::{RecordingSpeaker, SilentSpeaker, Speaker, SpeechEvent};
pub use validator::Verdict;
