//! Level catalog - the fixed, ordered list of levels for a session
//!
//! A catalog is built once and injected into [`crate::GameSession`]; it is
//! never mutated afterwards. Levels come either from the built-in set or from a
//! JSON file of the form:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "scenario": "After-school study time.",
//!     "tokens": [
//!       { "text": "She", "role": "subject" },
//!       { "text": "is doing", "role": "verb" }
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Level, Role, Token, MAX_TILES};

/// Raw level description before the canonical sentence is derived.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelSpec {
    pub id: u32,
    pub scenario: String,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one level")]
    Empty,
    #[error("level {id} has no tiles")]
    NoTiles { id: u32 },
    #[error("level {id} has {count} tiles (at most {max} are supported)")]
    TooManyTiles { id: u32, count: usize, max: usize },
    #[error("duplicate level id {id}")]
    DuplicateId { id: u32 },
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered, immutable list of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Validate level specs and derive each canonical sentence.
    pub fn new(specs: Vec<LevelSpec>) -> Result<Self, CatalogError> {
        if specs.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(specs.len());
        let mut levels = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.tokens.is_empty() {
                return Err(CatalogError::NoTiles { id: spec.id });
            }
            if spec.tokens.len() > MAX_TILES {
                return Err(CatalogError::TooManyTiles {
                    id: spec.id,
                    count: spec.tokens.len(),
                    max: MAX_TILES,
                });
            }
            if !ids.insert(spec.id) {
                return Err(CatalogError::DuplicateId { id: spec.id });
            }
            levels.push(Level::new(spec.id, spec.scenario, spec.tokens));
        }

        Ok(Self { levels })
    }

    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        let specs: Vec<LevelSpec> = serde_json::from_str(s)?;
        Self::new(specs)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    /// The ten built-in levels (verb tenses driven by time clues).
    pub fn builtin() -> Self {
        let levels = BUILTIN
            .iter()
            .map(|(id, scenario, tiles)| {
                let tokens = tiles
                    .iter()
                    .map(|(text, role)| Token::new(*text, *role))
                    .collect();
                Level::new(*id, *scenario, tokens)
            })
            .collect();

        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

type BuiltinLevel = (u32, &'static str, [(&'static str, Role); 5]);

const BUILTIN: [BuiltinLevel; 10] = [
    (
        1,
        "After-school study time.",
        [
            ("She", Role::Subject),
            ("is doing", Role::Verb),
            ("her homework", Role::Object),
            ("in her room", Role::Place),
            ("now", Role::Time),
        ],
    ),
    (
        2,
        "Weekend sports at the park.",
        [
            ("They", Role::Subject),
            ("played", Role::Verb),
            ("soccer", Role::Object),
            ("at the park", Role::Place),
            ("yesterday", Role::Time),
        ],
    ),
    (
        3,
        "Visiting grandma tomorrow.",
        [
            ("I", Role::Subject),
            ("will visit", Role::Verb),
            ("my grandma", Role::Object),
            ("at her house", Role::Place),
            ("tomorrow", Role::Time),
        ],
    ),
    (
        4,
        "Daily morning routine.",
        [
            ("He", Role::Subject),
            ("eats", Role::Verb),
            ("breakfast", Role::Object),
            ("in the kitchen", Role::Place),
            ("every morning", Role::Time),
        ],
    ),
    (
        5,
        "Online game time tonight.",
        [
            ("We", Role::Subject),
            ("will play", Role::Verb),
            ("an online game", Role::Object),
            ("with friends", Role::Place),
            ("tonight", Role::Time),
        ],
    ),
    (
        6,
        "Reading quietly right now.",
        [
            ("The boy", Role::Subject),
            ("is reading", Role::Verb),
            ("a comic book", Role::Object),
            ("in the living room", Role::Place),
            ("right now", Role::Time),
        ],
    ),
    (
        7,
        "Fun at the swimming pool last weekend.",
        [
            ("My sister", Role::Subject),
            ("swam", Role::Verb),
            // Adverb sits in the object slot.
            ("happily", Role::Object),
            ("at the swimming pool", Role::Place),
            ("last weekend", Role::Time),
        ],
    ),
    (
        8,
        "Saturday morning shopping.",
        [
            ("My parents", Role::Subject),
            ("go", Role::Verb),
            ("shopping", Role::Object),
            ("at the supermarket", Role::Place),
            ("on Saturdays", Role::Time),
        ],
    ),
    (
        9,
        "Phone call from a friend later.",
        [
            ("My friend", Role::Subject),
            ("will call", Role::Verb),
            ("me", Role::Object),
            ("after dinner", Role::Place),
            ("this evening", Role::Time),
        ],
    ),
    (
        10,
        "Bus to school this morning.",
        [
            ("I", Role::Subject),
            ("took", Role::Verb),
            ("the bus", Role::Object),
            ("to school", Role::Place),
            ("this morning", Role::Time),
        ],
    ),
];
