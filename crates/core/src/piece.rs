//! Active piece module - the single controllable tetromino
//!
//! An [`ActivePiece`] owns its local cell offsets, its anchor on the grid, its
//! rotation state and two independent timers:
//!
//! - **step timer**: counts down to the next gravity step, reset on every step
//! - **lock timer**: counts up from the last successful move, reset by any move
//!
//! Every transform is validated against the [`Grid`] before it is committed, so a
//! piece is never half-applied. The piece never writes to the grid itself; the
//! game controller erases and stamps its footprint around each tick.

use crate::grid::Grid;
use crate::shapes::shape;
use crate::types::{CellOffset, Footprint, RotationDirection, TetrominoKind};

/// Number of rotation states (0 = spawn orientation)
pub const ROTATION_STATES: i32 = 4;

/// Wrap `input` into `[min, max)`, correct for negative inputs
///
/// The result never equals `max`: an input an exact multiple of the range
/// below `min` maps to `min` (`wrap(-4, 0, 4) == 0`).
pub fn wrap(input: i32, min: i32, max: i32) -> i32 {
    min + (input - min).rem_euclid(max - min)
}

/// Timing parameters a piece is spawned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceTiming {
    pub step_delay_ms: u32,
    pub lock_delay_ms: u32,
}

/// The falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: TetrominoKind,
    cells: Footprint,
    position: CellOffset,
    rotation: i32,
    timing: PieceTiming,
    /// Time left until the next gravity step
    step_timer_ms: u32,
    /// Time since the last successful move
    lock_timer_ms: u32,
}

impl ActivePiece {
    /// Create a piece in spawn orientation at `position`
    pub fn new(kind: TetrominoKind, position: CellOffset, timing: PieceTiming) -> Self {
        Self {
            kind,
            cells: shape(kind).cells,
            position,
            rotation: 0,
            timing,
            step_timer_ms: timing.step_delay_ms,
            lock_timer_ms: 0,
        }
    }

    pub fn kind(&self) -> TetrominoKind {
        self.kind
    }

    /// Local cell offsets for the current rotation
    pub fn cells(&self) -> &Footprint {
        &self.cells
    }

    /// Anchor on the grid
    pub fn position(&self) -> CellOffset {
        self.position
    }

    /// Rotation state in `0..4`
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn timing(&self) -> PieceTiming {
        self.timing
    }

    pub fn step_timer_ms(&self) -> u32 {
        self.step_timer_ms
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    /// Absolute cells currently covered by the piece
    pub fn footprint(&self) -> Footprint {
        self.cells
            .map(|(dx, dy)| (self.position.0 + dx, self.position.1 + dy))
    }

    /// Whether the piece fits at its current position
    pub fn is_valid(&self, grid: &Grid) -> bool {
        grid.is_valid_placement(&self.cells, self.position)
    }

    /// Whether the piece is resting on the floor or another cell
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        let below = (self.position.0, self.position.1 - 1);
        !grid.is_valid_placement(&self.cells, below)
    }

    /// Try to translate the piece. On success the lock timer restarts
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> bool {
        let candidate = (self.position.0 + dx, self.position.1 + dy);

        if !grid.is_valid_placement(&self.cells, candidate) {
            return false;
        }

        self.position = candidate;
        self.lock_timer_ms = 0;
        true
    }

    /// Move straight down until blocked. Returns the distance travelled
    pub fn hard_drop(&mut self, grid: &Grid) -> u32 {
        let mut distance = 0;
        while self.try_move(grid, 0, -1) {
            distance += 1;
        }
        distance
    }

    /// Rotate a quarter turn with SRS wall kicks.
    ///
    /// Either the rotated (possibly kicked) orientation is adopted, or the piece
    /// is restored exactly as it was and false is returned.
    pub fn rotate(&mut self, grid: &Grid, direction: RotationDirection) -> bool {
        let original_rotation = self.rotation;
        let sign = direction.sign();

        self.rotation = wrap(self.rotation + sign, 0, ROTATION_STATES);
        self.apply_rotation_matrix(sign);

        if !self.test_wall_kicks(grid, self.rotation, sign) {
            self.rotation = original_rotation;
            self.apply_rotation_matrix(-sign);
            return false;
        }

        true
    }

    /// Rotate every local offset a quarter turn (`sign = 1` is clockwise).
    ///
    /// Corner-pivot kinds shift each cell by (-0.5, -0.5) before rotating and
    /// round the result up. The math runs on doubled coordinates so both cases
    /// stay exact integers and a turn followed by its inverse is the identity.
    fn apply_rotation_matrix(&mut self, sign: i32) {
        let corner_pivot = self.kind.pivots_between_cells();

        for cell in self.cells.iter_mut() {
            let (x, y) = *cell;
            *cell = if corner_pivot {
                let (hx, hy) = (2 * x - 1, 2 * y - 1);
                (ceil_half(sign * hy), ceil_half(-sign * hx))
            } else {
                (sign * y, -sign * x)
            };
        }
    }

    fn test_wall_kicks(&mut self, grid: &Grid, rotation: i32, sign: i32) -> bool {
        let kicks = shape(self.kind).wall_kicks;
        let index = wall_kick_index(rotation, sign, kicks.len() as i32);

        kicks[index]
            .iter()
            .any(|&(dx, dy)| self.try_move(grid, dx, dy))
    }

    /// Advance both timers by `elapsed_ms`.
    ///
    /// Returns true when a gravity step is due; the step timer is rearmed.
    pub fn advance_timers(&mut self, elapsed_ms: u32) -> bool {
        self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
        self.step_timer_ms = self.step_timer_ms.saturating_sub(elapsed_ms);

        if self.step_timer_ms == 0 {
            self.step_timer_ms = self.timing.step_delay_ms;
            return true;
        }

        false
    }

    /// Whether the lock delay has run out since the last successful move
    pub fn lock_delay_expired(&self) -> bool {
        self.lock_timer_ms >= self.timing.lock_delay_ms
    }
}

/// Kick table row for a rotation that has just arrived in state `rotation`
fn wall_kick_index(rotation: i32, sign: i32, rows: i32) -> usize {
    let mut index = rotation * 2;
    if sign < 0 {
        index -= 1;
    }
    wrap(index, 0, rows) as usize
}

/// `ceil(v / 2)` for any integer `v`
#[inline(always)]
fn ceil_half(v: i32) -> i32 {
    (v + 1).div_euclid(2)
}
