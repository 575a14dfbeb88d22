use crate::types::{Role, ValidationState};

/// A tile as shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Index into the level's tiles.
    pub index: usize,
    pub text: String,
    pub role: Role,
}

/// A review row: what the learner first built vs. the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub level_id: u32,
    pub scenario: String,
    pub incorrect_sentence: String,
    pub correct_sentence: String,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub level_index: usize,
    pub level_id: u32,
    pub level_count: usize,
    pub scenario: String,
    /// Placed tiles in placement order.
    pub assembled: Vec<TileView>,
    /// Unplaced tiles in bank order.
    pub bank: Vec<TileView>,
    pub validation: ValidationState,
    pub feedback: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub completed: Vec<bool>,
    pub finished: bool,
    pub can_advance: bool,
    pub is_last_level: bool,
    /// Review can be opened right now.
    pub review_available: bool,
    pub review_opened: bool,
    pub review: Vec<ReviewItem>,
}

impl SessionSnapshot {
    /// Reset every field, keeping vector allocations.
    pub fn clear(&mut self) {
        self.level_index = 0;
        self.level_id = 0;
        self.level_count = 0;
        self.scenario.clear();
        self.assembled.clear();
        self.bank.clear();
        self.validation = ValidationState::None;
        self.feedback = None;
        self.hint = None;
        self.completed.clear();
        self.finished = false;
        self.can_advance = false;
        self.is_last_level = false;
        self.review_available = false;
        self.review_opened = false;
        self.review.clear();
    }

    /// Tiles can still be moved.
    pub fn editable(&self) -> bool {
        self.validation != ValidationState::Success
    }

    pub fn can_undo(&self) -> bool {
        self.editable() && !self.assembled.is_empty()
    }

    pub fn can_check(&self) -> bool {
        self.editable() && self.bank.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&c| c).count()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            level_index: 0,
            level_id: 0,
            level_count: 0,
            scenario: String::new(),
            assembled: Vec::new(),
            bank: Vec::new(),
            validation: ValidationState::None,
            feedback: None,
            hint: None,
            completed: Vec::new(),
            finished: false,
            can_advance: false,
            is_last_level: false,
            review_available: false,
            review_opened: false,
            review: Vec::new(),
        }
    }
}
