//! Blockfall terminal runner.
//!
//! One loop renders the current snapshot, waits for input until the tick
//! clock is due, then dispatches keys and gravity ticks to the engine.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, LevelFilter};

use blockfall::clock::{dispatch_action, tick_if_due, TickClock};
use blockfall::config::AppConfig;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::event_log::EventLog;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Input poll timeout while the clock is stopped.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let event_log = match config.log_path.as_deref() {
        Some(path) => {
            let log = EventLog::open(path)?;
            log.install_logger(LevelFilter::Debug)?;
            Some(log)
        }
        None => None,
    };
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, event_log.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(log) = &event_log {
        log.flush();
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, event_log: Option<&EventLog>) -> Result<()> {
    let mut game = GameState::with_config(config.game, config.seed);
    info!(
        "fall interval {:?}, sped up {:?}",
        game.config().normal_fall,
        game.config().fast_fall
    );
    let mut clock = TickClock::new(game.fall_interval());
    clock.start(Instant::now());

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = clock.time_until_due(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch_action(&mut game, &mut clock, action, Instant::now());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if tick_if_due(&mut game, &mut clock, Instant::now()).is_some() {
            if let Some(ev) = game.take_last_event() {
                if let Some(log) = event_log {
                    game.snapshot_into(&mut snap);
                    log.record_lock(&ev, &snap);
                }
            }
        }
    }
}
