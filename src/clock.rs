//! Tick clock: the periodic timer that drives `GameState::tick`.
//!
//! It behaves like a restartable GUI timer: it can be stopped (pause, game
//! over), started again by the next input, and its delay can change while it
//! runs. All methods take `now` explicitly so the clock is testable without
//! sleeping.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::{GameState, RandomSource, TickOutcome};
use crate::types::{GameAction, GameStatus};

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickClock {
    /// A stopped clock with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start (or restart) the clock; the first tick is one interval away.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Change the delay. A shorter delay pulls the pending deadline in, so a
    /// speed-up is felt immediately; a longer one applies from the next tick.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if let Some(due) = self.next_due {
            let sooner = now + interval;
            if sooner < due {
                self.next_due = Some(sooner);
            }
        }
    }

    /// Time left until the next tick, or `None` while stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Returns true (and schedules the following tick) when a tick is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Apply a host action to `game`, keeping `clock` in step with its status.
///
/// Input that arrives while the clock is stopped restarts it first, except
/// after game over where only `Restart` brings it back. The clock is stopped
/// again whenever the action leaves the game paused or over.
pub fn dispatch_action<R: RandomSource>(
    game: &mut GameState<R>,
    clock: &mut TickClock,
    action: GameAction,
    now: Instant,
) -> bool {
    let revives = game.status() != GameStatus::GameOver || action == GameAction::Restart;
    if !clock.is_running() && revives {
        clock.set_interval(game.fall_interval(), now);
        clock.start(now);
    }

    let applied = game.apply_action(action);
    debug!(
        "{} applied={applied} status={}",
        action.as_str(),
        game.status().as_str()
    );

    if game.status() != GameStatus::Running {
        clock.stop();
    }
    applied
}

/// Follow the game's fall interval and run one gravity tick if it is due.
///
/// Returns `None` when no tick fired. A tick that ends the game stops the clock.
pub fn tick_if_due<R: RandomSource>(
    game: &mut GameState<R>,
    clock: &mut TickClock,
    now: Instant,
) -> Option<TickOutcome> {
    clock.set_interval(game.fall_interval(), now);
    if !clock.poll(now) {
        return None;
    }

    let outcome = game.tick();
    if outcome == TickOutcome::GameOver {
        clock.stop();
    }
    Some(outcome)
}
