//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the rules engine, the input mapper and the terminal renderer alike.
//!
//! # Coordinates
//!
//! Cells are addressed as `(col, row)` with the row axis pointing **up**.
//! The board is centered on the origin: a 10x20 board spans columns `-5..5`
//! and rows `-10..10`.
//!
//! # Defaults
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver tick interval (~60 FPS) |
//! | `STEP_DELAY_MS` | 1000 | Interval between gravity steps |
//! | `LOCK_DELAY_MS` | 500 | Grace period after the last successful move |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, RotationDirection, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = TetrominoKind::from_str("t").unwrap();
//! assert_eq!(kind, TetrominoKind::T);
//!
//! assert_eq!(Intent::RotateCcw.rotation(), Some(RotationDirection::CounterClockwise));
//! assert_eq!(RotationDirection::Clockwise.sign(), 1);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Anchor at which new pieces appear, relative to the board center
pub const SPAWN_POSITION: CellOffset = (-1, 8);

/// Driver tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Interval between gravity steps (1000ms = one row per second)
pub const STEP_DELAY_MS: u32 = 1000;

/// Time a piece must go without a successful move before it may lock
pub const LOCK_DELAY_MS: u32 = 500;

/// Integer `(col, row)` pair, used both for absolute cells and local offsets
pub type CellOffset = (i32, i32);

/// The four cells of a tetromino
pub type Footprint = [CellOffset; 4];

/// Cell on the grid (None = empty, Some = painted by a piece kind)
pub type Cell = Option<TetrominoKind>;

/// The seven tetromino kinds
///
/// - **I**: straight bar, rotates around a cell corner
/// - **O**: 2x2 square, rotates around a cell corner
/// - **T**, **J**, **L**, **S**, **Z**: rotate around a cell center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl TetrominoKind {
    /// Every kind, in table order
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::J,
        TetrominoKind::L,
        TetrominoKind::S,
        TetrominoKind::Z,
    ];

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_str("I"), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_str("z"), Some(TetrominoKind::Z));
    /// assert_eq!(TetrominoKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "o" => Some(TetrominoKind::O),
            "t" => Some(TetrominoKind::T),
            "j" => Some(TetrominoKind::J),
            "l" => Some(TetrominoKind::L),
            "s" => Some(TetrominoKind::S),
            "z" => Some(TetrominoKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "I",
            TetrominoKind::O => "O",
            TetrominoKind::T => "T",
            TetrominoKind::J => "J",
            TetrominoKind::L => "L",
            TetrominoKind::S => "S",
            TetrominoKind::Z => "Z",
        }
    }

    /// Whether the kind pivots on a cell corner rather than a cell center
    pub fn pivots_between_cells(&self) -> bool {
        matches!(self, TetrominoKind::I | TetrominoKind::O)
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// +1 for clockwise, -1 for counter-clockwise
    pub fn sign(&self) -> i32 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Discrete player intents delivered to the engine once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    RotateCw,
    RotateCcw,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
}

impl Intent {
    /// Parse an intent from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotatecw" => Some(Intent::RotateCw),
            "rotateccw" => Some(Intent::RotateCcw),
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RotateCw => "rotateCw",
            Intent::RotateCcw => "rotateCcw",
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
        }
    }

    /// Translation requested by a movement intent
    pub fn translation(&self) -> Option<CellOffset> {
        match self {
            Intent::MoveLeft => Some((-1, 0)),
            Intent::MoveRight => Some((1, 0)),
            Intent::SoftDrop => Some((0, -1)),
            _ => None,
        }
    }

    /// Rotation requested by a rotation intent
    pub fn rotation(&self) -> Option<RotationDirection> {
        match self {
            Intent::RotateCw => Some(RotationDirection::Clockwise),
            Intent::RotateCcw => Some(RotationDirection::CounterClockwise),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        assert_eq!(STEP_DELAY_MS, 1000);
        assert_eq!(LOCK_DELAY_MS, 500);
        assert_eq!(TICK_MS, 16);
        assert_eq!(SPAWN_POSITION, (-1, 8));
    }

    #[test]
    fn kind_string_roundtrip() {
        for kind in TetrominoKind::ALL {
            assert_eq!(TetrominoKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn intent_parse() {
        assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
        assert_eq!(Intent::from_str("ROTATECW"), Some(Intent::RotateCw));
        assert_eq!(Intent::from_str("hold"), None);
    }

    #[test]
    fn intent_translation_and_rotation_are_exclusive() {
        assert_eq!(Intent::SoftDrop.translation(), Some((0, -1)));
        assert_eq!(Intent::SoftDrop.rotation(), None);
        assert_eq!(Intent::HardDrop.translation(), None);
        assert_eq!(Intent::HardDrop.rotation(), None);
        assert_eq!(
            Intent::RotateCw.rotation().map(|d| d.inverse()),
            Some(RotationDirection::CounterClockwise)
        );
    }

    #[test]
    fn only_i_and_o_pivot_between_cells() {
        let corner: Vec<_> = TetrominoKind::ALL
            .into_iter()
            .filter(|k| k.pivots_between_cells())
            .collect();
        assert_eq!(corner, vec![TetrominoKind::I, TetrominoKind::O]);
    }
}
