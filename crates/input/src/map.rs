//! Key mapping from terminal events to puzzle actions.

use crate::types::{PuzzleAction, MAX_TILES};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Bank position addressed by a digit key: `1`..`9` are positions 0..8 and
/// `0` is position 9.
pub fn bank_position(c: char) -> Option<usize> {
    let d = c.to_digit(10)? as usize;
    let pos = if d == 0 { 9 } else { d - 1 };
    (pos < MAX_TILES).then_some(pos)
}

/// Map keyboard input to puzzle actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PuzzleAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Tiles
        KeyCode::Char(c) if c.is_ascii_digit() => bank_position(c).map(PuzzleAction::PlaceBankTile),
        KeyCode::Backspace | KeyCode::Char('u') | KeyCode::Char('U') => Some(PuzzleAction::Undo),

        // Level flow
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => Some(PuzzleAction::Check),
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Some(PuzzleAction::Advance),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PuzzleAction::OpenReview),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_digit_keys_place_bank_tiles() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(PuzzleAction::PlaceBankTile(0))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('5'))),
            Some(PuzzleAction::PlaceBankTile(4))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('0'))),
            Some(PuzzleAction::PlaceBankTile(9))
        );
    }

    #[test]
    fn test_bank_position_rejects_non_digits() {
        assert_eq!(bank_position('a'), None);
        assert_eq!(bank_position('9'), Some(8));
    }

    #[test]
    fn test_flow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(PuzzleAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(PuzzleAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(PuzzleAction::Check)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(PuzzleAction::Advance)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(PuzzleAction::Advance)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(PuzzleAction::OpenReview)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_is_quit_not_check() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c), None);
        assert!(should_quit(ctrl_c));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
