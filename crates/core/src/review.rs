//! Review log - first incorrect attempt per level, in the order they happened

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub level_index: usize,
    pub incorrect_sentence: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewLog {
    entries: Vec<ReviewEntry>,
    /// level index -> position in `entries`
    by_level: HashMap<usize, usize>,
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wrong attempt unless the level already has one.
    ///
    /// Returns `true` if a new entry was inserted.
    pub fn record(&mut self, level_index: usize, incorrect_sentence: impl Into<String>) -> bool {
        if self.by_level.contains_key(&level_index) {
            return false;
        }
        self.by_level.insert(level_index, self.entries.len());
        self.entries.push(ReviewEntry {
            level_index,
            incorrect_sentence: incorrect_sentence.into(),
        });
        true
    }

    /// Entries in first-recorded order.
    pub fn entries(&self) -> &[ReviewEntry] {
        &self.entries
    }

    pub fn get(&self, level_index: usize) -> Option<&ReviewEntry> {
        self.by_level.get(&level_index).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
