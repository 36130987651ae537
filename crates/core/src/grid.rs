//! Grid module - the occupancy map pieces are validated against
//!
//! The grid is a `width x height` map of cells, each either empty or painted with
//! the kind of the piece that occupies it. It is the single tile store of the game:
//! the active piece is stamped into it every tick and erased again before the next
//! transform is computed, and locked pieces simply stay stamped.
//!
//! Coordinates: `(col, row)` with rows growing upward and the board centered on the
//! origin. Storage is a flat row-major vector allocated once and never resized.
//! Reads outside the bounds are well-defined (`None`), which the row-collapse loop
//! relies on when it copies from the row above the top edge.

use crate::types::{Cell, CellOffset, Footprint, TetrominoKind};

/// Axis-aligned integer rectangle, max edges exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Bounds {
    /// Bounds of a `width x height` board centered on the origin
    pub fn centered(width: i32, height: i32) -> Self {
        let x_min = -width / 2;
        let y_min = -height / 2;
        Self {
            x_min,
            y_min,
            x_max: x_min + width,
            y_max: y_min + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    #[inline(always)]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x_min && col < self.x_max && row >= self.y_min && row < self.y_max
    }
}

/// The game grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bounds: Bounds,
    /// Flat array of cells, row-major from the bottom row up
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid of the given size
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::centered(width, height);
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            bounds,
            cells: vec![None; len],
        }
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if !self.bounds.contains(col, row) {
            return None;
        }
        let x = (col - self.bounds.x_min) as usize;
        let y = (row - self.bounds.y_min) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Get the cell at `(col, row)`, or None if out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set the cell at `(col, row)`. Returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and painted
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Check that every absolute cell of `footprint + anchor` is inside the
    /// bounds and empty
    pub fn is_valid_placement(&self, footprint: &Footprint, anchor: CellOffset) -> bool {
        footprint.iter().all(|&(dx, dy)| {
            let (col, row) = (anchor.0 + dx, anchor.1 + dy);
            matches!(self.get(col, row), Some(None))
        })
    }

    /// Paint all four cells of `footprint + anchor` with `tile`.
    ///
    /// No validity check: callers validate first. Cells outside the bounds
    /// cannot be stored and are dropped.
    pub fn stamp(&mut self, footprint: &Footprint, anchor: CellOffset, tile: TetrominoKind) {
        for &(dx, dy) in footprint {
            self.set(anchor.0 + dx, anchor.1 + dy, Some(tile));
        }
    }

    /// Clear all four cells of `footprint + anchor`
    pub fn erase(&mut self, footprint: &Footprint, anchor: CellOffset) {
        for &(dx, dy) in footprint {
            self.set(anchor.0 + dx, anchor.1 + dy, None);
        }
    }

    /// Check if a row is completely filled. Rows outside the bounds never are
    pub fn is_row_full(&self, row: i32) -> bool {
        if row < self.bounds.y_min || row >= self.bounds.y_max {
            return false;
        }
        (self.bounds.x_min..self.bounds.x_max).all(|col| self.is_occupied(col, row))
    }

    /// Remove `row` and shift every row above it down by one.
    ///
    /// The copy runs up to `y_max - 1`, whose source row `y_max` is outside the
    /// bounds and therefore reads as empty, so the top row ends up cleared.
    fn collapse_row(&mut self, row: i32) {
        let Bounds { x_min, x_max, y_max, .. } = self.bounds;

        for col in x_min..x_max {
            self.set(col, row, None);
        }

        for r in row..y_max {
            for col in x_min..x_max {
                let above = self.get(col, r + 1).flatten();
                self.set(col, r, above);
            }
        }
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// After a collapse the same row index is checked again, because the row
    /// above has just moved into it. Returns the number of rows removed.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.bounds.y_min;

        while row < self.bounds.y_max {
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }

        cleared
    }

    /// Clear the entire grid
    pub fn reset_to_empty(&mut self) {
        self.cells.fill(None);
    }

    /// Number of painted cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Cells of one row from `x_min` to `x_max - 1`, or None if out of bounds
    pub fn row(&self, row: i32) -> Option<&[Cell]> {
        let start = self.index(self.bounds.x_min, row)?;
        Some(&self.cells[start..start + self.bounds.width() as usize])
    }
}
