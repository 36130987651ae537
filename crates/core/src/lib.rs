//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules: the grid, the active piece with
//! SRS rotation, gravity and lock timing, line clearing and game over. It has
//! **no dependencies** on a terminal or any other I/O; a driver feeds it elapsed
//! time and player intents and reads the grid back.
//!
//! # Module Structure
//!
//! - [`grid`]: centered occupancy map with collision checks and line clearing
//! - [`shapes`]: tetromino footprints and SRS wall kick tables
//! - [`piece`]: the active piece, its rotation and its two timers
//! - [`game`]: the per-tick protocol tying grid and piece together
//! - [`rng`]: seeded uniform piece selection
//! - [`config`]: board size, spawn anchor and timing, validated up front
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, GameConfig, GameStatus, TickOutcome};
//! use blockfall_types::{Intent, TetrominoKind};
//!
//! let mut game = Game::try_new(GameConfig::default()).unwrap();
//! assert_eq!(game.spawn_kind(TetrominoKind::O), GameStatus::Playing);
//!
//! game.tick(16, &[Intent::MoveLeft, Intent::RotateCw]);
//! let outcome = game.tick(16, &[Intent::HardDrop]);
//! assert_eq!(outcome, TickOutcome::Locked { lines_cleared: 0 });
//! ```
//!
//! # Timing
//!
//! Time only moves when [`Game::tick`] is called with the milliseconds elapsed
//! since the previous call. A piece steps down once per step delay and locks on a
//! failed step once the lock delay has passed since its last successful move.

pub mod config;
pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game::{Game, GameStatus, TickOutcome};
pub use grid::{Bounds, Grid};
pub use piece::{wrap, ActivePiece, PieceTiming};
pub use rng::{PieceRandomizer, SimpleRng};
pub use shapes::{shape, spawn_cells, TetrominoShape};
