//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the puzzle.
//! All types are plain data with no I/O, making them usable in any context
//! (session logic, terminal rendering, catalog loading).
//!
//! # Tiles
//!
//! A level is a scenario plus an ordered list of role-tagged tiles. The stored
//! order of the tiles *is* the answer: the canonical sentence is derived once by
//! joining tile texts with single spaces and appending a period.
//!
//! | Role | Typical tile |
//! |------|--------------|
//! | `subject` | "She", "My parents" |
//! | `verb` | "is doing", "played" |
//! | `object` | "her homework" |
//! | `place` | "in her room" |
//! | `time` | "now", "yesterday" |
//!
//! # Examples
//!
//! ```
//! use sentence_puzzle_types::{Level, PuzzleAction, Role, Token};
//!
//! let level = Level::new(
//!     1,
//!     "After-school study time.",
//!     vec![
//!         Token::new("She", Role::Subject),
//!         Token::new("is doing", Role::Verb),
//!         Token::new("her homework", Role::Object),
//!     ],
//! );
//! assert_eq!(level.canonical_sentence(), "She is doing her homework.");
//!
//! assert_eq!(Role::from_str("TIME"), Some(Role::Time));
//! assert_eq!(PuzzleAction::from_str("check"), Some(PuzzleAction::Check));
//! ```

use serde::Deserialize;

/// Maximum number of tiles a level may carry.
///
/// Bank tiles are addressed by the digit keys `1`-`9` and `0`.
pub const MAX_TILES: usize = 10;

/// Feedback shown after a correct check.
pub const FEEDBACK_CORRECT: &str = "Excellent! The sentence is correct.";

/// Feedback shown after an incorrect check.
pub const FEEDBACK_INCORRECT: &str = "Not quite. Try again!";

/// Hint shown alongside incorrect feedback.
pub const HINT_TIME_CLUE: &str = "Look at the time clue!";

/// Grammatical role of a tile.
///
/// Roles only drive presentation (colours after a correct answer); validation
/// never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Subject,
    Verb,
    Object,
    Place,
    Time,
}

impl Role {
    /// Parse role from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use sentence_puzzle_types::Role;
    ///
    /// assert_eq!(Role::from_str("subject"), Some(Role::Subject));
    /// assert_eq!(Role::from_str("Verb"), Some(Role::Verb));
    /// assert_eq!(Role::from_str("adverb"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "subject" => Some(Role::Subject),
            "verb" => Some(Role::Verb),
            "object" => Some(Role::Object),
            "place" => Some(Role::Place),
            "time" => Some(Role::Time),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Subject => "subject",
            Role::Verb => "verb",
            Role::Object => "object",
            Role::Place => "place",
            Role::Time => "time",
        }
    }
}

/// A word or phrase tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Token {
    pub text: String,
    pub role: Role,
}

impl Token {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// A single puzzle level.
///
/// Immutable once built. The canonical sentence is computed in [`Level::new`]
/// and never recomputed from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    id: u32,
    scenario: String,
    tokens: Vec<Token>,
    canonical_sentence: String,
}

impl Level {
    pub fn new(id: u32, scenario: impl Into<String>, tokens: Vec<Token>) -> Self {
        let canonical_sentence = render_sentence(tokens.iter().map(|t| t.text.as_str()));
        Self {
            id,
            scenario: scenario.into(),
            tokens,
            canonical_sentence,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tile_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn canonical_sentence(&self) -> &str {
        &self.canonical_sentence
    }
}

/// Join tile texts with single spaces and append a trailing period.
///
/// # Examples
///
/// ```
/// use sentence_puzzle_types::render_sentence;
///
/// assert_eq!(render_sentence(["They", "played", "soccer"]), "They played soccer.");
/// assert_eq!(render_sentence(std::iter::empty::<&str>()), ".");
/// ```
pub fn render_sentence<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, text) in texts.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(text);
    }
    out.push('.');
    out
}

/// Validation state of the sequence currently being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// Nothing checked since the last change.
    #[default]
    None,
    /// Checked and correct; the level is locked.
    Success,
    /// Checked and wrong; the sequence stays editable.
    Error,
}

impl ValidationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationState::None => "none",
            ValidationState::Success => "success",
            ValidationState::Error => "error",
        }
    }
}

/// Discrete commands accepted by a puzzle session.
///
/// These are produced by key mapping in the terminal front end and consumed by
/// the session, one operation per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    /// Place the Nth tile of the bank (0-based bank position, not tile index)
    PlaceBankTile(usize),
    /// Return the last placed tile to the bank
    Undo,
    /// Validate the assembled sentence
    Check,
    /// Move on to the next level
    Advance,
    /// Open the review of incorrect attempts
    OpenReview,
}

impl PuzzleAction {
    /// Parse action from string
    ///
    /// Bank placement is written `place:<n>` with a 0-based bank position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentence_puzzle_types::PuzzleAction;
    ///
    /// assert_eq!(PuzzleAction::from_str("undo"), Some(PuzzleAction::Undo));
    /// assert_eq!(PuzzleAction::from_str("openReview"), Some(PuzzleAction::OpenReview));
    /// assert_eq!(PuzzleAction::from_str("place:3"), Some(PuzzleAction::PlaceBankTile(3)));
    /// assert_eq!(PuzzleAction::from_str("place:x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(pos) = lower.strip_prefix("place:") {
            return pos.parse().ok().map(PuzzleAction::PlaceBankTile);
        }
        match lower.as_str() {
            "undo" => Some(PuzzleAction::Undo),
            "check" => Some(PuzzleAction::Check),
            "advance" | "next" => Some(PuzzleAction::Advance),
            "openreview" | "review" => Some(PuzzleAction::OpenReview),
            _ => None,
        }
    }

    /// Convert to camelCase name (placement drops its position)
    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleAction::PlaceBankTile(_) => "place",
            PuzzleAction::Undo => "undo",
            PuzzleAction::Check => "check",
            PuzzleAction::Advance => "advance",
            PuzzleAction::OpenReview => "openReview",
        }
    }
}
