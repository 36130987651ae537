//! Game configuration and startup validation
//!
//! A [`GameConfig`] is checked once before a game is built. Anything that would
//! make play ill-defined (a board too small for an I piece, a spawn anchor that
//! puts a piece outside the board, gravity that never waits) is rejected here
//! so the rules engine itself never has to fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Bounds;
use crate::shapes::spawn_cells;
use crate::types::{
    CellOffset, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH, LOCK_DELAY_MS, SPAWN_POSITION,
    STEP_DELAY_MS,
};

/// Smallest supported board edge (an upright I piece needs four rows)
pub const MIN_BOARD_EDGE: i32 = 4;

/// Largest supported board edge (keeps the rendered frame within `u16` terminal coordinates)
pub const MAX_BOARD_EDGE: i32 = u16::MAX as i32 / 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is smaller than {}x{}", MIN_BOARD_EDGE, MIN_BOARD_EDGE)]
    BoardTooSmall { width: i32, height: i32 },

    #[error("board {width}x{height} is larger than {}x{}", MAX_BOARD_EDGE, MAX_BOARD_EDGE)]
    BoardTooLarge { width: i32, height: i32 },

    #[error("{} piece spawned at ({}, {}) would leave the board", .kind.as_str(), .spawn.0, .spawn.1)]
    SpawnOutOfBounds {
        kind: TetrominoKind,
        spawn: CellOffset,
    },

    #[error("step delay must be greater than zero")]
    ZeroStepDelay,
}

/// Rules engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Anchor new pieces appear at
    pub spawn: CellOffset,
    pub step_delay_ms: u32,
    pub lock_delay_ms: u32,
    /// Seed for the piece randomizer
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn: SPAWN_POSITION,
            step_delay_ms: STEP_DELAY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.width, self.height)
    }

    /// Check that the configuration describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_EDGE || self.height < MIN_BOARD_EDGE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        if self.width > MAX_BOARD_EDGE || self.height > MAX_BOARD_EDGE {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        if self.step_delay_ms == 0 {
            return Err(ConfigError::ZeroStepDelay);
        }

        let bounds = self.bounds();
        for kind in TetrominoKind::ALL {
            let inside = spawn_cells(kind)
                .iter()
                .all(|&(dx, dy)| bounds.contains(self.spawn.0 + dx, self.spawn.1 + dy));
            if !inside {
                return Err(ConfigError::SpawnOutOfBounds {
                    kind,
                    spawn: self.spawn,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_small_board() {
        let config = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooSmall {
                width: 3,
                height: 20
            })
        );
    }

    #[test]
    fn test_rejects_huge_board() {
        let config = GameConfig {
            width: 1_000_000,
            height: 1_000_000,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooLarge {
                width: 1_000_000,
                height: 1_000_000
            })
        );

        let tall = GameConfig {
            height: MAX_BOARD_EDGE + 1,
            ..GameConfig::default()
        };
        assert!(matches!(
            tall.validate(),
            Err(ConfigError::BoardTooLarge { .. })
        ));

        let edge = GameConfig {
            width: MAX_BOARD_EDGE,
            ..GameConfig::default()
        };
        assert_eq!(edge.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_step_delay() {
        let config = GameConfig {
            step_delay_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStepDelay));
    }

    #[test]
    fn test_rejects_spawn_above_board() {
        let config = GameConfig {
            spawn: (-1, 9),
            ..GameConfig::default()
        };
        // The I piece is the first kind checked and its row-1 cells hit row 10.
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnOutOfBounds {
                kind: TetrominoKind::I,
                spawn: (-1, 9)
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::BoardTooSmall {
                width: 2,
                height: 2
            }
            .to_string(),
            "board 2x2 is smaller than 4x4"
        );
        assert_eq!(
            ConfigError::SpawnOutOfBounds {
                kind: TetrominoKind::T,
                spawn: (0, 12)
            }
            .to_string(),
            "T piece spawned at (0, 12) would leave the board"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "width": 12, "lock_delay_ms": 250 }"#).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.lock_delay_ms, 250);
        assert_eq!(config.height, BOARD_HEIGHT);
        assert_eq!(config.spawn, SPAWN_POSITION);
    }
}
