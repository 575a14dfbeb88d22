//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionSnapshot, TileView};
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{Role, ValidationState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const TITLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(129, 140, 248)).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(130, 130, 140)).dim();
const NEUTRAL_TILE: CellStyle = CellStyle::fg(Rgb::new(230, 230, 230));
const ERROR_TILE: CellStyle = CellStyle::fg(Rgb::new(239, 68, 68)).bold();
const SUCCESS: CellStyle = CellStyle::fg(Rgb::new(52, 211, 153)).bold();
const FAILURE: CellStyle = CellStyle::fg(Rgb::new(248, 113, 113)).bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(192, 132, 252));
const KEY: CellStyle = CellStyle::fg(Rgb::new(250, 204, 21)).bold();

/// Colour of a tile after a correct answer.
pub fn role_style(role: Role) -> CellStyle {
    let fg = match role {
        Role::Subject => Rgb::new(96, 165, 250),
        Role::Verb => Rgb::new(248, 113, 113),
        Role::Object => Rgb::new(74, 222, 128),
        Role::Place => Rgb::new(190, 190, 190),
        Role::Time => Rgb::new(192, 132, 252),
    };
    CellStyle::fg(fg).bold()
}

/// Lightweight terminal view of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Columns left blank at the left edge.
    margin: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { margin: 2 }
    }
}

/// Line cursor used while laying out a frame.
struct Layout {
    x: u16,
    y: u16,
    right: u16,
}

impl Layout {
    fn newline(&mut self, n: u16) {
        self.y = self.y.saturating_add(n);
    }
}

impl GameView {
    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared here.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let mut at = Layout {
            x: self.margin,
            y: 1,
            right: viewport.width.saturating_sub(self.margin),
        };

        self.draw_header(fb, snap, &mut at);
        self.draw_drop_zone(fb, snap, &mut at);
        self.draw_controls(fb, snap, &mut at);
        self.draw_feedback(fb, snap, &mut at);
        self.draw_bank(fb, snap, &mut at);
        self.draw_progress(fb, snap, &mut at);

        if snap.review_available {
            at.newline(1);
            fb.put_str(at.x, at.y, "All levels complete!", SUCCESS);
            at.newline(1);
            let x = fb.put_str(at.x, at.y, "Press ", TEXT);
            let x = fb.put_str(x, at.y, "R", KEY);
            fb.put_str(
                x,
                at.y,
                " to compare your wrong sentences with the correct answers.",
                TEXT,
            );
            at.newline(1);
        }

        if snap.review_opened {
            self.draw_review(fb, snap, &mut at);
        }

        if viewport.height > 0 {
            fb.put_str(at.x, viewport.height - 1, "Q: quit", MUTED);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        fb.put_str(at.x, at.y, "Sentence Structure Puzzle", TITLE);
        at.newline(1);
        fb.put_str(
            at.x,
            at.y,
            "Build a sentence with all the tiles. Time clues tell you the verb tense.",
            MUTED,
        );
        at.newline(2);

        let x = fb.put_str(at.x, at.y, "LEVEL ", LABEL);
        let x = fb.put_str(x, at.y, &snap.level_id.to_string(), LABEL);
        fb.put_str(x, at.y, &format!(" of {}", snap.level_count), LABEL);
        at.newline(1);

        let x = fb.put_str(at.x, at.y, "Scenario: ", TEXT);
        fb.put_str(x, at.y, &snap.scenario, TEXT.bold());
        at.newline(2);
    }

    fn draw_drop_zone(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        fb.put_str(at.x, at.y, "Your sentence", LABEL);
        at.newline(1);

        if snap.assembled.is_empty() {
            fb.put_str(
                at.x,
                at.y,
                "Press the number keys to place word tiles in order.",
                MUTED,
            );
            at.newline(1);
        } else {
            let style = |tile: &TileView| match snap.validation {
                ValidationState::Success => role_style(tile.role),
                ValidationState::Error => ERROR_TILE,
                ValidationState::None => NEUTRAL_TILE,
            };
            self.draw_tiles(fb, at, &snap.assembled, |_| None, style);
        }
        at.newline(1);
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        let mut x = at.x;
        x = self.draw_control(fb, x, at.y, "Bksp", "Undo", snap.can_undo());
        x = self.draw_control(fb, x, at.y, "Enter", "Check", snap.can_check());
        if snap.is_last_level {
            if snap.validation == ValidationState::Success {
                fb.put_str(x, at.y, "All levels finished", SUCCESS);
            }
        } else {
            self.draw_control(fb, x, at.y, "N", "Next level", snap.can_advance);
        }
        at.newline(2);
    }

    fn draw_control(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        key: &str,
        label: &str,
        enabled: bool,
    ) -> u16 {
        let (key_style, label_style) = if enabled { (KEY, TEXT) } else { (MUTED, MUTED) };
        let x = fb.put_str(x, y, "[", label_style);
        let x = fb.put_str(x, y, key, key_style);
        let x = fb.put_str(x, y, "] ", label_style);
        let x = fb.put_str(x, y, label, label_style);
        x.saturating_add(3)
    }

    fn draw_feedback(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        if let Some(feedback) = snap.feedback {
            let style = match snap.validation {
                ValidationState::Success => SUCCESS,
                _ => FAILURE,
            };
            fb.put_str(at.x, at.y, feedback, style);
        }
        at.newline(1);
        if let Some(hint) = snap.hint {
            fb.put_str(at.x, at.y, hint, HINT);
        }
        at.newline(2);
    }

    fn draw_bank(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        fb.put_str(at.x, at.y, "Word tiles", LABEL);
        at.newline(1);

        if snap.bank.is_empty() {
            fb.put_str(at.x, at.y, "All tiles are in the sentence.", MUTED);
            at.newline(1);
        } else {
            let style = if snap.editable() { NEUTRAL_TILE } else { MUTED };
            self.draw_tiles(fb, at, &snap.bank, bank_key, |_| style);
        }
        at.newline(1);
    }

    fn draw_progress(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        let mut x = fb.put_str(at.x, at.y, "Progress ", LABEL);
        for (i, &done) in snap.completed.iter().enumerate() {
            let style = if i == snap.level_index { KEY } else if done { SUCCESS } else { MUTED };
            fb.put_char(x, at.y, if done { '■' } else { '□' }, style);
            x = x.saturating_add(2);
        }
        let summary = format!("{}/{}", snap.completed_count(), snap.completed.len());
        fb.put_str(x.saturating_add(1), at.y, &summary, TEXT);
        at.newline(1);
    }

    fn draw_review(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, at: &mut Layout) {
        at.newline(1);
        fb.put_str(at.x, at.y, "Review Mode - Compare and Learn", TITLE);
        at.newline(1);

        if snap.review.is_empty() {
            fb.put_str(
                at.x,
                at.y,
                "Great job! There are no incorrect sentences to review.",
                SUCCESS,
            );
            at.newline(1);
            return;
        }

        for item in &snap.review {
            let header = format!("Level {} - {}", item.level_id, item.scenario);
            fb.put_str(at.x, at.y, &header, LABEL);
            at.newline(1);
            let x = fb.put_str(at.x + 2, at.y, "Yours:   ", MUTED);
            fb.put_str(x, at.y, &item.incorrect_sentence, FAILURE);
            at.newline(1);
            let x = fb.put_str(at.x + 2, at.y, "Correct: ", MUTED);
            fb.put_str(x, at.y, &item.correct_sentence, SUCCESS);
            at.newline(1);
        }
    }

    /// Draw tiles as `[ text ]` chips, wrapping at the right margin.
    fn draw_tiles(
        &self,
        fb: &mut FrameBuffer,
        at: &mut Layout,
        tiles: &[TileView],
        key: impl Fn(usize) -> Option<char>,
        style: impl Fn(&TileView) -> CellStyle,
    ) {
        let mut x = at.x;
        for (pos, tile) in tiles.iter().enumerate() {
            let label = key(pos);
            let chip_w = text_width(&tile.text) + 4 + if label.is_some() { 2 } else { 0 };
            if x > at.x && x.saturating_add(chip_w) > at.right {
                at.newline(1);
                x = at.x;
            }

            if let Some(k) = label {
                fb.put_char(x, at.y, k, KEY);
                x = x.saturating_add(2);
            }
            let s = style(tile);
            x = fb.put_str(x, at.y, "[ ", s);
            x = fb.put_str(x, at.y, &tile.text, s);
            x = fb.put_str(x, at.y, " ]", s);
            x = x.saturating_add(1);
        }
        at.newline(1);
    }
}

/// Digit key for a bank position (matches the input mapping).
fn bank_key(pos: usize) -> Option<char> {
    match pos {
        0..=8 => char::from_digit(pos as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_keys_follow_digit_row() {
        assert_eq!(bank_key(0), Some('1'));
        assert_eq!(bank_key(8), Some('9'));
        assert_eq!(bank_key(9), Some('0'));
        assert_eq!(bank_key(10), None);
    }

    #[test]
    fn role_styles_are_distinct() {
        let roles = [Role::Subject, Role::Verb, Role::Object, Role::Place, Role::Time];
        for (i, a) in roles.iter().enumerate() {
            for b in roles.iter().skip(i + 1) {
                assert_ne!(role_style(*a).fg, role_style(*b).fg);
            }
        }
    }
}
