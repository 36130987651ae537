//! Terminal runner (default binary).
//!
//! Usage: `blockfall [settings.json]`
//!
//! Reads keys with crossterm, feeds the collected intents to the engine once per
//! tick together with the measured elapsed time, and redraws the board through
//! the framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Game, TickOutcome};
use blockfall::input::{handle_key_event, IntentQueue, KeyCommand};
use blockfall::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use blockfall::Settings;

fn main() -> Result<()> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;
    init_logging(&settings)?;

    let mut game = Game::try_new(settings.game).context("create game")?;
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(lines_cleared = game.lines_cleared(), "exiting");
    result
}

/// Log to `settings.log_file` when set; stdout belongs to the board.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("parse log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game, settings: &Settings) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut intents = IntentQueue::new();

    let tick_duration = Duration::from_millis(settings.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(KeyCommand::Quit) => return Ok(()),
                    Some(KeyCommand::Restart) => {
                        intents.clear();
                        game.restart();
                    }
                    Some(KeyCommand::Intent(intent)) => {
                        intents.push(intent);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            match game.tick(elapsed_ms, intents.as_slice()) {
                TickOutcome::Locked { lines_cleared } if lines_cleared > 0 => {
                    debug!(lines_cleared, total = game.lines_cleared(), "lines cleared");
                }
                _ => {}
            }
            intents.clear();

            let dropped = intents.take_dropped();
            if dropped > 0 {
                warn!(dropped, "intent queue overflowed");
            }
        }
    }
}
