//! Terminal sentence puzzle (default binary).
//!
//! Single-threaded loop: render the session snapshot, block for a terminal
//! event, map it to a puzzle action, apply it.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentence_puzzle::config::AppConfig;
use sentence_puzzle::core::{GameSession, LevelCatalog, SessionSnapshot};
use sentence_puzzle::input::{handle_key_event, should_quit};
use sentence_puzzle::speech::CommandSpeaker;
use sentence_puzzle::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const DEFAULT_LOG_FILTER: &str = "sentence_puzzle=info,sentence_puzzle_core=info";

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    let catalog = match &config.catalog_path {
        Some(path) => LevelCatalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => LevelCatalog::builtin(),
    };
    info!(
        seed = config.seed,
        levels = catalog.len(),
        speech = config.speech_command.as_deref().unwrap_or("off"),
        "starting session"
    );

    let session = GameSession::new(catalog, config.seed);
    let session = match config.speech_command.as_deref().and_then(CommandSpeaker::new) {
        Some(speaker) => session.with_speaker(speaker),
        None => session,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("opening log {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(
                        level_index = session.current_level_index(),
                        completed = session.progress().completed_count(),
                        "quit"
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
