//! Tile sequencer - bank vs. assembled sequence for the level in play
//!
//! The sequencer stores only the shuffled bank order and the placement order.
//! The bank is always derived as "shuffled order minus placed tiles", so the
//! partition invariant (sequence and bank are disjoint and together cover every
//! tile index) holds by construction, and undo restores the exact bank order.

use crate::error::ActionError;
use crate::rng::SimpleRng;
use crate::types::ValidationState;

#[derive(Debug, Clone, Default)]
pub struct TileSequencer {
    /// Bank order chosen when the level was entered.
    shuffled: Vec<usize>,
    /// Placement order.
    sequence: Vec<usize>,
    /// Indexed by tile; true while the tile is in `sequence`.
    placed: Vec<bool>,
    validation: ValidationState,
}

impl TileSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a level with `tile_count` tiles and draw a fresh bank order.
    pub fn enter_level(&mut self, tile_count: usize, rng: &mut SimpleRng) {
        self.shuffled = rng.shuffled_range(tile_count);
        self.sequence.clear();
        self.placed.clear();
        self.placed.resize(tile_count, false);
        self.validation = ValidationState::None;
    }

    /// Append tile `index` to the sequence.
    pub fn place(&mut self, index: usize) -> Result<(), ActionError> {
        if self.validation == ValidationState::Success {
            return Err(ActionError::Locked);
        }
        if !self.in_bank(index) {
            return Err(ActionError::TileNotInBank { index });
        }

        self.sequence.push(index);
        self.placed[index] = true;
        self.validation = ValidationState::None;
        Ok(())
    }

    /// Remove the last placed tile, returning its index.
    pub fn undo(&mut self) -> Result<usize, ActionError> {
        if self.validation == ValidationState::Success {
            return Err(ActionError::Locked);
        }
        let index = self.sequence.pop().ok_or(ActionError::NothingToUndo)?;
        self.placed[index] = false;
        self.validation = ValidationState::None;
        Ok(index)
    }

    pub fn in_bank(&self, index: usize) -> bool {
        self.placed.get(index) == Some(&false)
    }

    /// Tile index at bank position `pos`, if any.
    pub fn bank_tile(&self, pos: usize) -> Option<usize> {
        self.bank().nth(pos)
    }

    /// Unplaced tiles in shuffled order.
    pub fn bank(&self) -> impl Iterator<Item = usize> + '_ {
        self.shuffled.iter().copied().filter(|&i| !self.placed[i])
    }

    pub fn bank_len(&self) -> usize {
        self.shuffled.len() - self.sequence.len()
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn shuffled_order(&self) -> &[usize] {
        &self.shuffled
    }

    pub fn tile_count(&self) -> usize {
        self.shuffled.len()
    }

    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    /// Record the outcome of a check. Only the validator should call this.
    pub(crate) fn set_validation(&mut self, state: ValidationState) {
        self.validation = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_TILES;

    fn entered(n: usize, seed: u32) -> TileSequencer {
        let mut seq = TileSequencer::new();
        seq.enter_level(n, &mut SimpleRng::new(seed));
        seq
    }

    fn assert_partition(seq: &TileSequencer) {
        let n = seq.tile_count();
        let mut seen = vec![0u8; n];
        for &i in seq.sequence() {
            seen[i] += 1;
        }
        for i in seq.bank() {
            seen[i] += 1;
        }
        assert!(seen.iter().all(|&c| c == 1), "partition broken: {:?}", seen);
    }

    #[test]
    fn test_enter_level_puts_every_tile_in_bank() {
        let seq = entered(5, 42);
        assert!(seq.sequence().is_empty());
        assert_eq!(seq.bank_len(), 5);
        assert_eq!(seq.bank().collect::<Vec<_>>(), seq.shuffled_order());
        assert_eq!(seq.validation(), ValidationState::None);
        assert_partition(&seq);
    }

    #[test]
    fn test_place_moves_tile_from_bank_to_sequence() {
        let mut seq = entered(5, 42);
        seq.place(3).unwrap();
        seq.place(0).unwrap();
        assert_eq!(seq.sequence(), &[3, 0]);
        assert!(!seq.in_bank(3));
        assert_eq!(seq.bank_len(), 3);
        assert_partition(&seq);
    }

    #[test]
    fn test_place_rejects_placed_or_out_of_range() {
        let mut seq = entered(3, 1);
        seq.place(1).unwrap();
        assert_eq!(seq.place(1), Err(ActionError::TileNotInBank { index: 1 }));
        assert_eq!(seq.place(3), Err(ActionError::TileNotInBank { index: 3 }));
        assert_eq!(
            seq.place(MAX_TILES + 4),
            Err(ActionError::TileNotInBank {
                index: MAX_TILES + 4
            })
        );
        assert_eq!(seq.sequence(), &[1]);
    }

    #[test]
    fn test_undo_restores_bank_order() {
        let mut seq = entered(5, 9);
        let before: Vec<usize> = seq.bank().collect();
        let idx = before[2];

        seq.place(idx).unwrap();
        assert_eq!(seq.undo(), Ok(idx));

        assert!(seq.sequence().is_empty());
        assert_eq!(seq.bank().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_undo_on_empty_sequence() {
        let mut seq = entered(4, 5);
        assert_eq!(seq.undo(), Err(ActionError::NothingToUndo));
    }

    #[test]
    fn test_changes_reset_error_state() {
        let mut seq = entered(2, 5);
        seq.place(0).unwrap();
        seq.set_validation(ValidationState::Error);
        seq.place(1).unwrap();
        assert_eq!(seq.validation(), ValidationState::None);

        seq.set_validation(ValidationState::Error);
        seq.undo().unwrap();
        assert_eq!(seq.validation(), ValidationState::None);
    }

    #[test]
    fn test_success_locks_sequence() {
        let mut seq = entered(2, 5);
        seq.place(0).unwrap();
        seq.place(1).unwrap();
        seq.set_validation(ValidationState::Success);

        assert_eq!(seq.undo(), Err(ActionError::Locked));
        assert_eq!(seq.sequence(), &[0, 1]);
        assert_eq!(seq.validation(), ValidationState::Success);
    }

    #[test]
    fn test_bank_tile_by_position() {
        let mut seq = entered(4, 77);
        let bank: Vec<usize> = seq.bank().collect();
        assert_eq!(seq.bank_tile(0), Some(bank[0]));
        seq.place(bank[0]).unwrap();
        assert_eq!(seq.bank_tile(0), Some(bank[1]));
        assert_eq!(seq.bank_tile(3), None);
    }

    #[test]
    fn test_random_walk_keeps_partition() {
        let mut rng = SimpleRng::new(31337);
        let mut seq = entered(MAX_TILES, 8);
        for _ in 0..500 {
            if rng.next_range(3) == 0 {
                let _ = seq.undo();
            } else if seq.bank_len() > 0 {
                let pos = rng.next_range(seq.bank_len() as u32) as usize;
                let idx = seq.bank_tile(pos).unwrap();
                seq.place(idx).unwrap();
            }
            assert_partition(&seq);
        }
    }

    #[test]
    fn test_enter_level_resets_previous_state() {
        let mut rng = SimpleRng::new(4);
        let mut seq = TileSequencer::new();
        seq.enter_level(3, &mut rng);
        seq.place(0).unwrap();
        seq.set_validation(ValidationState::Error);

        seq.enter_level(5, &mut rng);
        assert!(seq.sequence().is_empty());
        assert_eq!(seq.bank_len(), 5);
        assert_eq!(seq.validation(), ValidationState::None);
    }

    #[test]
    fn test_level_larger_than_max_tiles_is_playable() {
        let n = MAX_TILES + 2;
        let mut seq = entered(n, 6);
        assert_eq!(seq.bank_len(), n);
        assert_partition(&seq);

        for i in 0..n {
            seq.place(i).unwrap();
        }
        assert_eq!(seq.sequence(), (0..n).collect::<Vec<_>>().as_slice());
        assert_eq!(seq.bank().count(), 0);
        assert_eq!(seq.undo(), Ok(n - 1));
        assert!(seq.in_bank(n - 1));
    }
}
