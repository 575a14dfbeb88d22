//! Progress tracking - per-level completion flags and the finished latch

use crate::types::ValidationState;

/// Result of marking a level complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Level was already complete; nothing changed.
    AlreadyComplete,
    /// Level newly complete, others still outstanding.
    Completed,
    /// Level newly complete and it was the last outstanding one.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    completed: Vec<bool>,
    completed_count: usize,
    finished: bool,
}

impl ProgressTracker {
    pub fn new(level_count: usize) -> Self {
        Self {
            completed: vec![false; level_count],
            completed_count: 0,
            finished: false,
        }
    }

    /// Mark `level_index` complete. Idempotent.
    ///
    /// `finished` flips to true exactly once, on the call that completes the
    /// last outstanding level. Out-of-range indices are ignored.
    pub fn mark_complete(&mut self, level_index: usize) -> Completion {
        let Some(flag) = self.completed.get_mut(level_index) else {
            return Completion::AlreadyComplete;
        };
        if *flag {
            return Completion::AlreadyComplete;
        }

        *flag = true;
        self.completed_count += 1;

        if !self.finished && self.completed_count == self.completed.len() {
            self.finished = true;
            Completion::Finished
        } else {
            Completion::Completed
        }
    }

    pub fn is_complete(&self, level_index: usize) -> bool {
        self.completed.get(level_index).copied().unwrap_or(false)
    }

    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn level_count(&self) -> usize {
        self.completed.len()
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn is_last_level(&self, level_index: usize) -> bool {
        level_index + 1 == self.completed.len()
    }

    /// True iff the level in play is solved and another level follows it.
    pub fn can_advance(&self, level_index: usize, validation: ValidationState) -> bool {
        validation == ValidationState::Success && !self.is_last_level(level_index)
    }
}
