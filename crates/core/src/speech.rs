//! Speech collaborator interface.
//!
//! Playback is fire-and-forget. Callers cancel before every `speak` so at most
//! one utterance is active at a time; implementations swallow their own
//! failures (speech is best-effort).

pub trait Speaker {
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
}

/// Speaker that does nothing. Used when no TTS backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _text: &str) {}

    fn cancel(&mut self) {}
}

/// One call observed by a [`RecordingSpeaker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Speak(String),
    Cancel,
}

/// Speaker that records calls into a shared log.
///
/// Handy for headless front ends and tests that need to observe playback
/// requests after handing the speaker to a session.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpeaker {
    log: std::rc::Rc<std::cell::RefCell<Vec<SpeechEvent>>>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SpeechEvent> {
        self.log.borrow().clone()
    }

    /// Last spoken text, if any.
    pub fn last_spoken(&self) -> Option<String> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            SpeechEvent::Speak(t) => Some(t.clone()),
            SpeechEvent::Cancel => None,
        })
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, text: &str) {
        self.log.borrow_mut().push(SpeechEvent::Speak(text.to_string()));
    }

    fn cancel(&mut self) {
        self.log.borrow_mut().push(SpeechEvent::Cancel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_speaker_shares_log_between_clones() {
        let observer = RecordingSpeaker::new();
        let mut speaker = observer.clone();
        speaker.cancel();
        speaker.speak("They played soccer.");

        assert_eq!(
            observer.events(),
            vec![
                SpeechEvent::Cancel,
                SpeechEvent::Speak("They played soccer.".to_string())
            ]
        );
        assert_eq!(observer.last_spoken().as_deref(), Some("They played soccer."));
    }
}
