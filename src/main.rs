//! Terminal Recycling Challenge runner (default binary).
//!
//! One cooperative loop: render, wait for input until the next frame, apply
//! the action, then let the session catch up with real time so countdown
//! ticks and pair clears fire on schedule.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use recycling_challenge::engine::{Session, SessionConfig};
use recycling_challenge::input::{handle_key_event, should_quit};
use recycling_challenge::term::{FrameBuffer, ScreenView, TerminalRenderer, Viewport};
use recycling_challenge::types::{Phase, UiAction};

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}

/// Logs go to a file; the terminal belongs to the game.
fn init_logging(config: &SessionConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &SessionConfig) -> Result<()> {
    let mut session = Session::from_config(config);
    info!(
        seed = session.game().seed(),
        frame_ms = config.frame_ms,
        "session started"
    );

    let view = ScreenView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(config.frame_ms);
    let started = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session.snapshot(), viewport, &mut fb);
        term.present(&fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(rounds = session.leaderboard().len(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, session.phase()) {
                        session.apply(action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if session.phase() == Phase::Playing {
                        if let Some(id) = view.card_at(viewport, mouse.column, mouse.row) {
                            session.apply(UiAction::Tap(id));
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Catch the session clock up with wall time.
        let now_ms = started.elapsed().as_millis() as u64;
        session.advance(now_ms.saturating_sub(session.now_ms()));
    }
}
