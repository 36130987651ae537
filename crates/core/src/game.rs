//! Game module - ties the grid, the active piece and the randomizer together
//!
//! [`Game::tick`] is the only entry point that advances play. Each call:
//!
//! 1. erases the active piece's footprint from the grid,
//! 2. applies the intents received since the previous tick, in order,
//! 3. advances the lock timer and the gravity clock by the elapsed time,
//! 4. on a due gravity step, moves the piece down one row, locking it if it
//!    cannot move and the lock delay has run out,
//! 5. stamps the footprint back.
//!
//! Locking stamps the piece permanently, clears completed rows and spawns the
//! next piece. A spawn that does not fit ends the game: the grid is wiped and
//! every later tick is a no-op until [`Game::restart`].

use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::piece::{ActivePiece, PieceTiming};
use crate::rng::PieceRandomizer;
use crate::types::{Intent, TetrominoKind};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Created, first piece not spawned yet
    Ready,
    Playing,
    /// A spawned piece did not fit
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Nothing to advance (not started or no active piece)
    Idle,
    /// The active piece is still falling
    Continued,
    /// The active piece locked and a new one spawned
    Locked { lines_cleared: usize },
    /// The game is over (ended on this tick or earlier)
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    randomizer: PieceRandomizer,
    status: GameStatus,
    /// Monotonic id for spawned pieces
    piece_id: u32,
    /// Plain count of cleared rows; there is no score or level
    lines_cleared: u32,
}

impl Game {
    /// Create a game with an empty grid.
    ///
    /// The configuration is trusted; use [`Game::try_new`] for external input.
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self::with_grid(config, grid)
    }

    /// Validate `config` and create a game
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a game on a pre-filled grid (the grid must match the config's size)
    pub fn with_grid(config: GameConfig, grid: Grid) -> Self {
        debug_assert_eq!(grid.bounds(), config.bounds());
        Self {
            config,
            grid,
            active: None,
            randomizer: PieceRandomizer::new(config.seed),
            status: GameStatus::Ready,
            piece_id: 0,
            lines_cleared: 0,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) -> GameStatus {
        if self.status != GameStatus::Ready {
            return self.status;
        }
        info!(seed = self.config.seed, "game started");
        self.spawn()
    }

    /// Wipe the grid and start over, continuing the randomizer's sequence
    pub fn restart(&mut self) -> GameStatus {
        self.grid.reset_to_empty();
        self.active = None;
        self.status = GameStatus::Ready;
        self.lines_cleared = 0;
        info!(piece_id = self.piece_id, "game restarted");
        self.spawn()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Rows cleared since the game (re)started
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    fn timing(&self) -> PieceTiming {
        PieceTiming {
            step_delay_ms: self.config.step_delay_ms,
            lock_delay_ms: self.config.lock_delay_ms,
        }
    }

    /// Spawn a uniformly random piece
    pub fn spawn(&mut self) -> GameStatus {
        let kind = self.randomizer.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a piece of `kind` at the configured anchor.
    ///
    /// If it does not fit, the game ends and the grid is cleared.
    pub fn spawn_kind(&mut self, kind: TetrominoKind) -> GameStatus {
        if self.status == GameStatus::GameOver {
            return self.status;
        }

        let piece = ActivePiece::new(kind, self.config.spawn, self.timing());

        if !piece.is_valid(&self.grid) {
            self.end_game(kind);
            return self.status;
        }

        self.grid.stamp(piece.cells(), piece.position(), kind);
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.status = GameStatus::Playing;
        debug!(piece_id = self.piece_id, kind = kind.as_str(), "spawned");

        self.status
    }

    fn end_game(&mut self, kind: TetrominoKind) {
        info!(
            kind = kind.as_str(),
            lines_cleared = self.lines_cleared,
            "spawn blocked, game over"
        );
        self.grid.reset_to_empty();
        self.active = None;
        self.status = GameStatus::GameOver;
    }

    /// Advance the game by `elapsed_ms`, applying `intents` in order
    pub fn tick(&mut self, elapsed_ms: u32, intents: &[Intent]) -> TickOutcome {
        match self.status {
            GameStatus::GameOver => return TickOutcome::GameOver,
            GameStatus::Ready => return TickOutcome::Idle,
            GameStatus::Playing => {}
        }

        let Some(mut piece) = self.active.take() else {
            return TickOutcome::Idle;
        };

        self.grid.erase(piece.cells(), piece.position());

        for &intent in intents {
            if intent == Intent::HardDrop {
                piece.hard_drop(&self.grid);
                return self.lock(piece);
            }
            self.apply_intent(&mut piece, intent);
        }

        let step_due = piece.advance_timers(elapsed_ms);
        if step_due && !piece.try_move(&self.grid, 0, -1) && piece.lock_delay_expired() {
            return self.lock(piece);
        }

        self.grid.stamp(piece.cells(), piece.position(), piece.kind());
        self.active = Some(piece);
        TickOutcome::Continued
    }

    fn apply_intent(&self, piece: &mut ActivePiece, intent: Intent) -> bool {
        if let Some((dx, dy)) = intent.translation() {
            return piece.try_move(&self.grid, dx, dy);
        }
        if let Some(direction) = intent.rotation() {
            return piece.rotate(&self.grid, direction);
        }
        false
    }

    /// Stamp `piece` permanently, clear rows and spawn the next piece
    fn lock(&mut self, piece: ActivePiece) -> TickOutcome {
        self.grid.stamp(piece.cells(), piece.position(), piece.kind());

        let lines_cleared = self.grid.clear_completed_lines();
        self.lines_cleared += lines_cleared as u32;
        debug!(
            piece_id = self.piece_id,
            kind = piece.kind().as_str(),
            position = ?piece.position(),
            lines_cleared,
            "locked"
        );

        match self.spawn() {
            GameStatus::GameOver => TickOutcome::GameOver,
            _ => TickOutcome::Locked { lines_cleared },
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
