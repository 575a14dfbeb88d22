//! Validator - compares an assembled sentence with the canonical answer
//!
//! Comparison is on rendered text, byte for byte. Tiles with identical text are
//! therefore interchangeable; index order alone is never consulted.

use crate::error::ActionError;
use crate::types::{render_sentence, Level};

/// Outcome of checking a complete sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    /// Wrong order; carries the sentence the learner built.
    Incorrect { sentence: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Render the sentence for `sequence` (tile indices into `level`).
///
/// Indices outside the level are skipped.
pub fn render(sequence: &[usize], level: &Level) -> String {
    render_sentence(
        sequence
            .iter()
            .filter_map(|&i| level.token(i))
            .map(|t| t.text.as_str()),
    )
}

/// Judge a sequence against the level's canonical sentence.
///
/// A partial sequence is never judged.
pub fn check(sequence: &[usize], level: &Level) -> Result<Verdict, ActionError> {
    if sequence.len() != level.tile_count() {
        return Err(ActionError::SequenceIncomplete {
            placed: sequence.len(),
            needed: level.tile_count(),
        });
    }

    let sentence = render(sequence, level);
    if sentence == level.canonical_sentence() {
        Ok(Verdict::Correct)
    } else {
        Ok(Verdict::Incorrect { sentence })
    }
}
