//! Game session module - the level-by-level play loop
//!
//! This module ties together all core components: catalog, shuffler, tile
//! sequencer, validator, progress tracking and the review log. It owns the
//! per-level state machine:
//!
//! ```text
//! Building --check--> Success (locked)
//!     ^        \
//!     |         `---> Error --place/undo--> Building
//! ```
//!
//! and the session-level `InProgress -> AllComplete` transition.

use std::fmt;

use tracing::{debug, info};

use crate::catalog::LevelCatalog;
use crate::error::ActionError;
use crate::progress::{Completion, ProgressTracker};
use crate::review::{ReviewEntry, ReviewLog};
use crate::rng::SimpleRng;
use crate::sequencer::TileSequencer;
use crate::snapshot::{ReviewItem, SessionSnapshot, TileView};
use crate::speech::{SilentSpeaker, Speaker};
use crate::types::*;
use crate::validator::{self, Verdict};

/// Complete session state
pub struct GameSession {
    /// Never empty; enforced by [`LevelCatalog`].
    catalog: LevelCatalog,
    rng: SimpleRng,
    seed: u32,
    current: usize,
    tiles: TileSequencer,
    progress: ProgressTracker,
    review: ReviewLog,
    review_opened: bool,
    speaker: Box<dyn Speaker>,
}

impl GameSession {
    /// Create a session on level 0 with the given shuffle seed
    pub fn new(catalog: LevelCatalog, seed: u32) -> Self {
        let progress = ProgressTracker::new(catalog.len());
        let mut session = Self {
            catalog,
            rng: SimpleRng::new(seed),
            seed,
            current: 0,
            tiles: TileSequencer::new(),
            progress,
            review: ReviewLog::new(),
            review_opened: false,
            speaker: Box::new(SilentSpeaker),
        };
        session.enter_current_level();
        session
    }

    /// Replace the speech collaborator.
    pub fn with_speaker(mut self, speaker: impl Speaker + 'static) -> Self {
        self.speaker = Box::new(speaker);
        self
    }

    fn enter_current_level(&mut self) {
        let tile_count = self.level().tile_count();
        self.tiles.enter_level(tile_count, &mut self.rng);
        info!(
            level_index = self.current,
            level_id = self.level().id(),
            tiles = tile_count,
            "level entered"
        );
    }

    pub fn current_level_index(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    /// Level currently in play
    pub fn level(&self) -> &Level {
        &self.catalog.levels()[self.current]
    }

    pub fn sequence(&self) -> &[usize] {
        self.tiles.sequence()
    }

    /// Bank tile indices in bank order
    pub fn bank(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles.bank()
    }

    /// Placed tiles in placement order, with their tile indices
    pub fn assembled_tokens(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        let level = self.level();
        self.tiles
            .sequence()
            .iter()
            .filter_map(move |&i| level.token(i).map(|t| (i, t)))
    }

    /// Unplaced tiles in bank order, with their tile indices
    pub fn bank_tokens(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        let level = self.level();
        self.tiles
            .bank()
            .filter_map(move |i| level.token(i).map(|t| (i, t)))
    }

    pub fn validation(&self) -> ValidationState {
        self.tiles.validation()
    }

    pub fn feedback(&self) -> Option<&'static str> {
        match self.validation() {
            ValidationState::None => None,
            ValidationState::Success => Some(FEEDBACK_CORRECT),
            ValidationState::Error => Some(FEEDBACK_INCORRECT),
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self.validation() {
            ValidationState::Error => Some(HINT_TIME_CLUE),
            _ => None,
        }
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn completed(&self) -> &[bool] {
        self.progress.completed()
    }

    pub fn finished(&self) -> bool {
        self.progress.finished()
    }

    pub fn is_last_level(&self) -> bool {
        self.progress.is_last_level(self.current)
    }

    pub fn can_advance(&self) -> bool {
        self.progress.can_advance(self.current, self.validation())
    }

    pub fn review_entries(&self) -> &[ReviewEntry] {
        self.review.entries()
    }

    pub fn review_opened(&self) -> bool {
        self.review_opened
    }

    /// Review can be opened now (all levels done, not yet opened)
    pub fn review_available(&self) -> bool {
        self.finished() && !self.review_opened
    }

    /// Place tile `index` (an index into the level's tiles)
    pub fn place_tile(&mut self, index: usize) -> Result<(), ActionError> {
        self.tiles.place(index)?;
        debug!(
            tile = index,
            placed = self.tiles.sequence().len(),
            "tile placed"
        );
        Ok(())
    }

    /// Place the tile at bank position `pos`, returning its tile index
    pub fn place_bank_tile(&mut self, pos: usize) -> Result<usize, ActionError> {
        if self.validation() == ValidationState::Success {
            return Err(ActionError::Locked);
        }
        let index = self
            .tiles
            .bank_tile(pos)
            .ok_or(ActionError::NoBankTile { pos })?;
        self.place_tile(index)?;
        Ok(index)
    }

    /// Return the last placed tile to the bank
    pub fn undo(&mut self) -> Result<usize, ActionError> {
        let index = self.tiles.undo()?;
        debug!(tile = index, placed = self.tiles.sequence().len(), "undo");
        Ok(index)
    }

    /// Validate the assembled sentence
    ///
    /// A correct sentence locks the level, marks it complete and is read
    /// aloud. A wrong one is logged for review (first attempt per level only)
    /// and the sequence stays editable.
    pub fn check(&mut self) -> Result<Verdict, ActionError> {
        if self.validation() == ValidationState::Success {
            return Err(ActionError::Locked);
        }

        let verdict = validator::check(self.tiles.sequence(), self.level())?;
        match &verdict {
            Verdict::Correct => {
                self.tiles.set_validation(ValidationState::Success);
                let level = &self.catalog.levels()[self.current];
                self.speaker.cancel();
                self.speaker.speak(level.canonical_sentence());
                info!(level_id = level.id(), "sentence correct");

                match self.progress.mark_complete(self.current) {
                    Completion::Finished => info!(
                        levels = self.progress.level_count(),
                        wrong = self.review.len(),
                        "all levels complete"
                    ),
                    Completion::Completed => debug!(
                        completed = self.progress.completed_count(),
                        "level complete"
                    ),
                    Completion::AlreadyComplete => {}
                }
            }
            Verdict::Incorrect { sentence } => {
                self.tiles.set_validation(ValidationState::Error);
                let recorded = self.review.record(self.current, sentence.clone());
                info!(
                    level_id = self.level().id(),
                    sentence = %sentence,
                    recorded,
                    "sentence incorrect"
                );
            }
        }

        Ok(verdict)
    }

    /// Move on to the next level (only after the current one is solved)
    pub fn advance(&mut self) -> Result<(), ActionError> {
        if self.validation() != ValidationState::Success {
            return Err(ActionError::NotValidated);
        }
        if self.is_last_level() {
            return Err(ActionError::LastLevel);
        }

        self.current += 1;
        self.enter_current_level();
        Ok(())
    }

    /// Open the read-only review of wrong attempts (once, after finishing)
    pub fn open_review(&mut self) -> Result<&[ReviewEntry], ActionError> {
        if !self.finished() {
            return Err(ActionError::NotFinished);
        }
        if self.review_opened {
            return Err(ActionError::ReviewAlreadyOpened);
        }

        self.review_opened = true;
        info!(entries = self.review.len(), "review opened");
        Ok(self.review.entries())
    }

    /// Apply a front-end action; returns whether it changed anything
    pub fn apply_action(&mut self, action: PuzzleAction) -> bool {
        let result = match action {
            PuzzleAction::PlaceBankTile(pos) => self.place_bank_tile(pos).map(|_| ()),
            PuzzleAction::Undo => self.undo().map(|_| ()),
            PuzzleAction::Check => self.check().map(|_| ()),
            PuzzleAction::Advance => self.advance(),
            PuzzleAction::OpenReview => self.open_review().map(|_| ()),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(action = action.as_str(), reason = %e, "action rejected");
                false
            }
        }
    }

    /// Review rows joined with their level's scenario and answer
    pub fn review_items(&self) -> impl Iterator<Item = ReviewItem> + '_ {
        self.review.entries().iter().filter_map(|entry| {
            let level = self.catalog.get(entry.level_index)?;
            Some(ReviewItem {
                level_id: level.id(),
                scenario: level.scenario().to_string(),
                incorrect_sentence: entry.incorrect_sentence.clone(),
                correct_sentence: level.canonical_sentence().to_string(),
            })
        })
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();

        let level = self.level();
        let tile_view = |(index, t): (usize, &Token)| TileView {
            index,
            text: t.text.clone(),
            role: t.role,
        };

        out.level_index = self.current;
        out.level_id = level.id();
        out.level_count = self.catalog.len();
        out.scenario.push_str(level.scenario());
        out.assembled.extend(self.assembled_tokens().map(tile_view));
        out.bank.extend(self.bank_tokens().map(tile_view));
        out.validation = self.validation();
        out.feedback = self.feedback();
        out.hint = self.hint();
        out.completed.extend_from_slice(self.completed());
        out.finished = self.finished();
        out.can_advance = self.can_advance();
        out.is_last_level = self.is_last_level();
        out.review_available = self.review_available();
        out.review_opened = self.review_opened;
        out.review.extend(self.review_items());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(LevelCatalog::builtin(), 1)
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        // Teardown silences any utterance still playing.
        self.speaker.cancel();
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("seed", &self.seed)
            .field("current", &self.current)
            .field("tiles", &self.tiles)
            .field("progress", &self.progress)
            .field("review", &self.review)
            .field("review_opened", &self.review_opened)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LevelSpec;
    use crate::speech::{RecordingSpeaker, SpeechEvent};

    fn two_level_catalog() -> LevelCatalog {
        let spec = |id: u32, tiles: &[(&str, Role)]| LevelSpec {
            id,
            scenario: format!("scenario {}", id),
            tokens: tiles.iter().map(|(t, r)| Token::new(*t, *r)).collect(),
        };
        LevelCatalog::new(vec![
            spec(
                1,
                &[("They", Role::Subject), ("played", Role::Verb), ("soccer", Role::Object)],
            ),
            spec(2, &[("I", Role::Subject), ("ran", Role::Verb)]),
        ])
        .unwrap()
    }

    fn solve(session: &mut GameSession) -> Verdict {
        while session.undo().is_ok() {}
        for i in 0..session.level().tile_count() {
            session.place_tile(i).unwrap();
        }
        session.check().unwrap()
    }

    fn place_in(session: &mut GameSession, order: &[usize]) {
        for &i in order {
            session.place_tile(i).unwrap();
        }
    }

    #[test]
    fn test_new_session_starts_on_first_level() {
        let session = GameSession::new(two_level_catalog(), 5);
        assert_eq!(session.current_level_index(), 0);
        assert_eq!(session.level().id(), 1);
        assert!(session.sequence().is_empty());
        assert_eq!(session.bank().count(), 3);
        assert_eq!(session.validation(), ValidationState::None);
        assert_eq!(session.completed(), &[false, false]);
        assert!(!session.finished());
    }

    #[test]
    fn test_same_seed_same_bank_order() {
        let a = GameSession::new(two_level_catalog(), 77);
        let b = GameSession::new(two_level_catalog(), 77);
        assert_eq!(a.bank().collect::<Vec<_>>(), b.bank().collect::<Vec<_>>());
    }

    #[test]
    fn test_check_correct_locks_and_completes() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        assert_eq!(solve(&mut session), Verdict::Correct);

        assert_eq!(session.validation(), ValidationState::Success);
        assert_eq!(session.feedback(), Some(FEEDBACK_CORRECT));
        assert_eq!(session.hint(), None);
        assert!(session.progress().is_complete(0));
        assert!(session.can_advance());

        assert_eq!(session.undo(), Err(ActionError::Locked));
        assert_eq!(session.check(), Err(ActionError::Locked));
        assert_eq!(session.place_bank_tile(0), Err(ActionError::Locked));
    }

    #[test]
    fn test_check_incorrect_records_review_and_stays_editable() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        place_in(&mut session, &[1, 0, 2]);

        assert_eq!(
            session.check().unwrap(),
            Verdict::Incorrect {
                sentence: "played They soccer.".to_string()
            }
        );
        assert_eq!(session.validation(), ValidationState::Error);
        assert_eq!(session.feedback(), Some(FEEDBACK_INCORRECT));
        assert_eq!(session.hint(), Some(HINT_TIME_CLUE));
        assert_eq!(session.review_entries().len(), 1);
        assert!(!session.can_advance());

        // Editing clears feedback.
        assert_eq!(session.undo(), Ok(2));
        assert_eq!(session.validation(), ValidationState::None);
        assert_eq!(session.feedback(), None);
    }

    #[test]
    fn test_error_can_be_rechecked_without_editing() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        place_in(&mut session, &[2, 1, 0]);
        assert!(!session.check().unwrap().is_correct());
        assert!(!session.check().unwrap().is_correct());
        assert_eq!(session.review_entries().len(), 1);
    }

    #[test]
    fn test_check_partial_sequence_rejected() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        session.place_tile(0).unwrap();
        assert_eq!(
            session.check(),
            Err(ActionError::SequenceIncomplete {
                placed: 1,
                needed: 3
            })
        );
        assert_eq!(session.validation(), ValidationState::None);
        assert!(session.review_entries().is_empty());
    }

    #[test]
    fn test_advance_requires_success() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        assert_eq!(session.advance(), Err(ActionError::NotValidated));
        assert_eq!(session.current_level_index(), 0);

        solve(&mut session);
        session.advance().unwrap();
        assert_eq!(session.current_level_index(), 1);
        assert_eq!(session.validation(), ValidationState::None);
        assert!(session.sequence().is_empty());
        assert_eq!(session.bank().count(), 2);
    }

    #[test]
    fn test_advance_on_last_level_rejected() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        solve(&mut session);
        session.advance().unwrap();
        solve(&mut session);

        assert!(session.is_last_level());
        assert!(!session.can_advance());
        assert_eq!(session.advance(), Err(ActionError::LastLevel));
        assert_eq!(session.current_level_index(), 1);
    }

    #[test]
    fn test_finished_only_after_last_level() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        solve(&mut session);
        assert!(!session.finished());
        session.advance().unwrap();
        solve(&mut session);
        assert!(session.finished());
    }

    #[test]
    fn test_review_opens_once_after_finishing() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        assert_eq!(session.open_review().err(), Some(ActionError::NotFinished));

        solve(&mut session);
        session.advance().unwrap();
        solve(&mut session);

        assert!(session.review_available());
        assert!(session.open_review().is_ok());
        assert!(session.review_opened());
        assert!(!session.review_available());
        assert_eq!(
            session.open_review().err(),
            Some(ActionError::ReviewAlreadyOpened)
        );
    }

    #[test]
    fn test_speech_cancels_before_speaking_and_on_drop() {
        let observer = RecordingSpeaker::new();
        let mut session = GameSession::new(two_level_catalog(), 1).with_speaker(observer.clone());

        place_in(&mut session, &[1, 0, 2]);
        session.check().unwrap();
        assert!(observer.events().is_empty());

        solve(&mut session);
        assert_eq!(
            observer.events(),
            vec![
                SpeechEvent::Cancel,
                SpeechEvent::Speak("They played soccer.".to_string())
            ]
        );

        drop(session);
        assert_eq!(observer.events().last(), Some(&SpeechEvent::Cancel));
    }

    #[test]
    fn test_apply_action_maps_to_operations() {
        let mut session = GameSession::new(two_level_catalog(), 1);
        assert!(!session.apply_action(PuzzleAction::Undo));
        assert!(!session.apply_action(PuzzleAction::Check));
        assert!(!session.apply_action(PuzzleAction::Advance));
        assert!(!session.apply_action(PuzzleAction::PlaceBankTile(3)));

        let first = session.bank().next().unwrap();
        assert!(session.apply_action(PuzzleAction::PlaceBankTile(0)));
        assert_eq!(session.sequence(), &[first]);
        assert!(session.apply_action(PuzzleAction::Undo));
        assert!(session.sequence().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = GameSession::new(two_level_catalog(), 3);
        session.place_tile(0).unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.level_id, 1);
        assert_eq!(snap.level_count, 2);
        assert_eq!(snap.scenario, "scenario 1");
        assert_eq!(snap.assembled.len(), 1);
        assert_eq!(snap.assembled[0].text, "They");
        assert_eq!(snap.bank.len(), 2);
        assert!(snap.bank.iter().all(|t| t.index != 0));
        assert!(snap.can_undo());
        assert!(!snap.can_check());
        assert!(!snap.review_available);
    }

    #[test]
    fn test_token_views_follow_sequence_and_bank() {
        let mut session = GameSession::new(two_level_catalog(), 8);
        session.place_tile(2).unwrap();
        session.place_tile(0).unwrap();

        let assembled: Vec<(usize, &str)> = session
            .assembled_tokens()
            .map(|(i, t)| (i, t.text.as_str()))
            .collect();
        assert_eq!(assembled, vec![(2, "soccer"), (0, "They")]);

        let bank: Vec<(usize, &str)> = session
            .bank_tokens()
            .map(|(i, t)| (i, t.text.as_str()))
            .collect();
        assert_eq!(bank, vec![(1, "played")]);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut session = GameSession::new(two_level_catalog(), 3);
        let mut snap = SessionSnapshot::default();
        session.snapshot_into(&mut snap);
        assert_eq!(snap.bank.len(), 3);

        solve(&mut session);
        session.snapshot_into(&mut snap);
        assert!(snap.bank.is_empty());
        assert_eq!(snap.assembled.len(), 3);
        assert_eq!(snap.validation, ValidationState::Success);
        assert_eq!(snap.completed, vec![true, false]);
        assert!(snap.can_advance);
    }
}
