//! Process-backed speech: runs an external TTS command per utterance.

use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::core::Speaker;

/// Speaks by spawning `program args... <text>` and not waiting for it.
///
/// Only one child is tracked. Starting a new utterance or calling `cancel`
/// kills and reaps it.
#[derive(Debug)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl CommandSpeaker {
    /// Parse a whitespace-separated command line. Returns `None` if it is blank.
    pub fn new(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            child: None,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) {
        self.cancel();

        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                debug!(program = %self.program, pid = child.id(), "speech started");
                self.child = Some(child);
            }
            Err(e) => warn!(program = %self.program, error = %e, "speech command failed to start"),
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Already exited is fine.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}
