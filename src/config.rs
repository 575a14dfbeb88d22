//! Start-up configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Runtime configuration for the `sentence-puzzle` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Shuffle seed for the session.
    pub seed: u32,
    /// JSON catalog to load instead of the built-in levels.
    pub catalog_path: Option<PathBuf>,
    /// TTS command line (program followed by arguments). `None` disables speech.
    pub speech_command: Option<String>,
    /// Log file. `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("PUZZLE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let catalog_path = non_empty(lookup("PUZZLE_CATALOG")).map(PathBuf::from);

        let speech_command = match lookup("PUZZLE_SPEECH_CMD") {
            Some(cmd) => {
                let cmd = cmd.trim();
                if cmd.is_empty() || cmd.eq_ignore_ascii_case("off") {
                    None
                } else {
                    Some(cmd.to_string())
                }
            }
            None => default_speech_command().map(str::to_string),
        };

        let log_path = non_empty(lookup("PUZZLE_LOG_PATH")).map(PathBuf::from);

        Self {
            seed,
            catalog_path,
            speech_command,
            log_path,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

/// Platform TTS command used when `PUZZLE_SPEECH_CMD` is unset.
pub fn default_speech_command() -> Option<&'static str> {
    if cfg!(target_os = "macos") {
        Some("say")
    } else if cfg!(target_os = "linux") {
        Some("espeak")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_explicit_values() {
        let cfg = config(&[
            ("PUZZLE_SEED", "42"),
            ("PUZZLE_CATALOG", "levels.json"),
            ("PUZZLE_SPEECH_CMD", "espeak -s 140"),
            ("PUZZLE_LOG_PATH", " /tmp/puzzle.log "),
        ]);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("levels.json")));
        assert_eq!(cfg.speech_command.as_deref(), Some("espeak -s 140"));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/puzzle.log")));
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.catalog_path, None);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.speech_command.as_deref(), default_speech_command());
    }

    #[test]
    fn test_speech_can_be_disabled() {
        assert_eq!(config(&[("PUZZLE_SPEECH_CMD", "off")]).speech_command, None);
        assert_eq!(config(&[("PUZZLE_SPEECH_CMD", "OFF")]).speech_command, None);
        assert_eq!(config(&[("PUZZLE_SPEECH_CMD", "  ")]).speech_command, None);
    }

    #[test]
    fn test_unparsable_seed_falls_back() {
        // Falls back to the clock; it just must not panic.
        let _ = config(&[("PUZZLE_SEED", "not-a-number")]);
        assert_eq!(config(&[("PUZZLE_SEED", " 7 ")]).seed, 7);
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = AppConfig::from_env();
    }
}
