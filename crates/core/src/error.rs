//! Rejected session operations.

use thiserror::Error;

/// Why a session operation was not applied.
///
/// A rejected operation never changes session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("tile {index} is not in the bank")]
    TileNotInBank { index: usize },
    #[error("bank has no tile at position {pos}")]
    NoBankTile { pos: usize },
    #[error("level is solved and locked")]
    Locked,
    #[error("no placed tile to undo")]
    NothingToUndo,
    #[error("sentence is incomplete ({placed} of {needed} tiles placed)")]
    SequenceIncomplete { placed: usize, needed: usize },
    #[error("current level has not been solved yet")]
    NotValidated,
    #[error("already on the last level")]
    LastLevel,
    #[error("review opens once every level is complete")]
    NotFinished,
    #[error("review has already been opened")]
    ReviewAlreadyOpened,
}
