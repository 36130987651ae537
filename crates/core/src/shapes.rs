//! Shapes module - tetromino footprints and SRS wall kick tables
//!
//! Every kind has a spawn-orientation footprint (four offsets around its pivot)
//! and a wall kick table. Tables are static and looked up by kind; nothing here
//! is ever mutated. Reference: https://tetris.wiki/Super_Rotation_System

use crate::types::{CellOffset, Footprint, TetrominoKind};

/// Number of translations tried per rotation (the first is always `(0, 0)`)
pub const KICK_ATTEMPTS: usize = 5;

/// Number of rotation-state pairs in a kick table
pub const KICK_ROWS: usize = 8;

/// Wall kick data: `KICK_ROWS` rows of `KICK_ATTEMPTS` translations
pub type KickTable = [[CellOffset; KICK_ATTEMPTS]; KICK_ROWS];

/// Static per-kind shape data
#[derive(Debug, PartialEq, Eq)]
pub struct TetrominoShape {
    pub kind: TetrominoKind,
    /// Footprint in spawn orientation (rotation state 0)
    pub cells: Footprint,
    pub wall_kicks: &'static KickTable,
}

/// Look up the shape data for a kind
pub fn shape(kind: TetrominoKind) -> &'static TetrominoShape {
    match kind {
        TetrominoKind::I => &I_SHAPE,
        TetrominoKind::O => &O_SHAPE,
        TetrominoKind::T => &T_SHAPE,
        TetrominoKind::J => &J_SHAPE,
        TetrominoKind::L => &L_SHAPE,
        TetrominoKind::S => &S_SHAPE,
        TetrominoKind::Z => &Z_SHAPE,
    }
}

/// Footprint of a kind in spawn orientation
pub fn spawn_cells(kind: TetrominoKind) -> Footprint {
    shape(kind).cells
}

static I_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::I,
    cells: [(-1, 1), (0, 1), (1, 1), (2, 1)],
    wall_kicks: &I_KICKS,
};

static J_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::J,
    cells: [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_KICKS,
};

static L_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::L,
    cells: [(1, 1), (-1, 0), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_KICKS,
};

static O_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::O,
    cells: [(0, 1), (1, 1), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_KICKS,
};

static S_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::S,
    cells: [(0, 1), (1, 1), (-1, 0), (0, 0)],
    wall_kicks: &JLOSTZ_KICKS,
};

static T_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::T,
    cells: [(0, 1), (-1, 0), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_KICKS,
};

static Z_SHAPE: TetrominoShape = TetrominoShape {
    kind: TetrominoKind::Z,
    cells: [(-1, 1), (0, 1), (0, 0), (1, 0)],
    wall_kicks: &JLOSTZ_KICKS,
};

/// I piece kick table
static I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Kick table shared by J, L, O, S, T and Z
static JLOSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];
