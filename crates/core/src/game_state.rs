//! Game state module - the tick-driven state machine
//!
//! This module ties together the grid, pieces, the piece factory, collision
//! checks and line clearing. It owns the score, the active and queued pieces,
//! the lifecycle status and the current fall interval.
//!
//! Every entry point runs to completion synchronously; hosts that receive
//! timer and input callbacks on different threads must serialize them.

use std::time::Duration;

use log::{debug, error, info};

use crate::collision::{fits_placement, overlaps_locked};
use crate::factory::PieceFactory;
use crate::grid::Grid;
use crate::line_clear::clear_full_rows;
use crate::pieces::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::GameConfig;

/// What a call to [`GameState::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Inert,
    /// The active piece moved down one row
    Fell,
    /// The active piece locked and the queued piece took its place
    Locked { rows_cleared: u32 },
    /// The active piece locked and its successor spawned onto occupied cells
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    active: Piece,
    next: Piece,
    factory: PieceFactory<R>,
    config: GameConfig,
    status: GameStatus,
    score: u32,
    fall_interval: Duration,
    rows_cleared: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by the host).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new running game with default timing and the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        Self::with_factory(config, PieceFactory::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a running game drawing pieces from `factory`.
    ///
    /// The first draw becomes the active piece, the second the queued one.
    pub fn with_factory(config: GameConfig, mut factory: PieceFactory<R>) -> Self {
        let active = factory.create_random_piece();
        let next = factory.create_random_piece();

        Self {
            grid: Grid::new(),
            active,
            next,
            factory,
            config,
            status: GameStatus::Running,
            score: 0,
            fall_interval: config.normal_fall,
            rows_cleared: 0,
            pieces_locked: 0,
            last_event: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece_kind(&self) -> PieceKind {
        self.next.kind()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy of the locked cells, for rendering
    pub fn grid_snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Direct grid access for test harnesses and scripted setups
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Interval the tick source should currently use
    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);

        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next.kind();
        out.status = self.status;
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.pieces_locked = self.pieces_locked;
        out.fall_interval_ms = self.fall_interval.as_millis() as u64;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Gravity step: move down one row, or lock and spawn the next piece
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Inert;
        }

        let candidate = self.active.propose(Direction::Down);
        if fits_placement(&self.grid, &self.active, candidate) {
            self.active.commit(candidate);
            return TickOutcome::Fell;
        }

        self.lock_active()
    }

    /// Apply a player command if the result fits; otherwise do nothing
    pub fn command(&mut self, command: Command) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        let candidate = self.active.propose(command.into());
        if !fits_placement(&self.grid, &self.active, candidate) {
            return false;
        }

        self.active.commit(candidate);
        true
    }

    /// Override the fall interval until the active piece locks
    pub fn set_fall_speed(&mut self, interval: Duration) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.fall_interval = interval;
        true
    }

    /// Switch to the configured fast interval
    pub fn speed_up(&mut self) -> bool {
        self.set_fall_speed(self.config.fast_fall)
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        info!("game paused at score {}", self.score);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        info!("game resumed");
        true
    }

    /// Start over on an empty grid, continuing the same random sequence
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = self.factory.create_random_piece();
        self.next = self.factory.create_random_piece();
        self.status = GameStatus::Running;
        self.score = 0;
        self.fall_interval = self.config.normal_fall;
        self.rows_cleared = 0;
        self.pieces_locked = 0;
        self.last_event = None;
        info!("game restarted");
    }

    /// Apply a host action
    ///
    /// While paused, the first input resumes play before being handled.
    /// `Pause` therefore always leaves the game paused.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.status == GameStatus::Paused && action != GameAction::Restart {
            self.resume();
        }

        match action {
            GameAction::MoveLeft => self.command(Command::Left),
            GameAction::MoveRight => self.command(Command::Right),
            GameAction::Rotate => self.command(Command::Rotate),
            GameAction::SoftDrop => self.speed_up(),
            GameAction::Pause => self.pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Lock the active piece, clear rows, score, and promote the queued piece
    fn lock_active(&mut self) -> TickOutcome {
        let piece = self.active;
        let kind = piece.kind();

        for (col, row) in piece.cells() {
            let res = self.grid.set(col, row, Cell::Occupied(kind));
            debug_assert!(res.is_ok(), "locked cell outside grid: {res:?}");
            if let Err(err) = res {
                error!("failed to lock {} piece: {err}", kind.as_str());
            }
        }

        let rows = clear_full_rows(&mut self.grid) as u32;
        let score_delta = rows * SCORE_PER_ROW;
        self.score += score_delta;
        self.rows_cleared += rows;
        self.pieces_locked += 1;

        // The speed-up only lasts for the piece that just locked.
        self.fall_interval = self.config.normal_fall;

        let upcoming = self.factory.create_random_piece();
        self.active = std::mem::replace(&mut self.next, upcoming);

        let game_over = overlaps_locked(&self.grid, &self.active.cells());

        debug!(
            "locked {} piece, cleared {rows} row(s), score {}",
            kind.as_str(),
            self.score
        );

        self.last_event = Some(LockEvent {
            kind,
            rows_cleared: rows,
            score_delta,
            game_over,
        });

        if game_over {
            self.status = GameStatus::GameOver;
            info!(
                "game over: {} piece spawned onto locked cells, final score {}",
                self.active.kind().as_str(),
                self.score
            );
            return TickOutcome::GameOver;
        }

        TickOutcome::Locked { rows_cleared: rows }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Placement;

    /// Always returns the same index.
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn next_below(&mut self, bound: u32) -> u32 {
            self.0 % bound
        }
    }

    fn bars() -> GameState<Fixed> {
        GameState::with_factory(GameConfig::default(), PieceFactory::new(Fixed(1)))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.pieces_locked, 0);
        assert_eq!(state.active.placement(), Placement::SPAWN);
        assert_eq!(state.next.placement(), Placement::SPAWN);
        assert_eq!(state.fall_interval, Duration::from_millis(NORMAL_FALL_MS));
        assert!(state.last_event.is_none());
        assert_eq!(state.config(), &GameConfig::default());
    }

    #[test]
    fn test_tick_moves_piece_down() {
        let mut state = bars();
        assert_eq!(state.tick(), TickOutcome::Fell);
        assert_eq!(state.active.anchor(), (SPAWN_COLUMN, SPAWN_ROW + 1));
    }

    #[test]
    fn test_lock_promotes_queued_piece() {
        let mut state = GameState::new(12345);
        let queued = state.next;

        let mut outcome = TickOutcome::Fell;
        for _ in 0..GRID_HEIGHT {
            outcome = state.tick();
            if outcome != TickOutcome::Fell {
                break;
            }
        }

        assert_eq!(outcome, TickOutcome::Locked { rows_cleared: 0 });
        assert_eq!(state.active, queued);
        assert_eq!(state.pieces_locked, 1);
        assert_eq!(state.grid.occupied_count(), PIECE_CELLS);
    }

    #[test]
    fn test_speed_up_resets_on_lock() {
        let mut state = bars();
        assert!(state.speed_up());
        assert_eq!(state.fall_interval, Duration::from_millis(FAST_FALL_MS));

        while state.tick() == TickOutcome::Fell {}

        assert_eq!(state.fall_interval, Duration::from_millis(NORMAL_FALL_MS));
    }

    #[test]
    fn test_pause_resume() {
        let mut state = bars();
        assert!(state.pause());
        assert!(!state.pause());
        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.tick(), TickOutcome::Inert);
        assert!(!state.command(Command::Left));
        assert!(!state.set_fall_speed(Duration::from_millis(1)));
        assert_eq!(state.active.placement(), Placement::SPAWN);

        assert!(state.resume());
        assert!(!state.resume());
        assert_eq!(state.tick(), TickOutcome::Fell);
    }

    #[test]
    fn test_action_while_paused_resumes_first() {
        let mut state = bars();
        state.pause();

        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.active.anchor().0, SPAWN_COLUMN - 1);
    }

    #[test]
    fn test_pause_action_while_paused_stays_paused() {
        let mut state = bars();
        state.pause();
        state.apply_action(GameAction::Pause);
        assert_eq!(state.status, GameStatus::Paused);
    }

    #[test]
    fn test_last_event_set_on_lock() {
        let mut state = bars();
        while state.tick() == TickOutcome::Fell {}

        let ev = state.take_last_event().expect("lock should record an event");
        assert_eq!(ev.kind, PieceKind::Bar);
        assert_eq!(ev.rows_cleared, 0);
        assert!(!ev.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = bars();
        while state.tick() == TickOutcome::Fell {}
        state.score = 40;
        state.pause();

        state.apply_action(GameAction::Restart);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.pieces_locked, 0);
        assert_eq!(state.grid.occupied_count(), 0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = bars();
        state.tick();
        let snap = state.snapshot();

        assert_eq!(snap.active.row, 1);
        assert_eq!(snap.next, PieceKind::Bar);
        assert_eq!(snap.fall_interval_ms, NORMAL_FALL_MS);
        assert!(snap.playable());
    }
}
