//! BoardView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The grid's rows grow upward while screen rows
//! grow downward, so the top grid row lands on the first screen row inside the
//! border.

use crate::core::{Game, GameStatus, Grid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TetrominoKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Smallest panel worth drawing
const MIN_PANEL_WIDTH: u16 = 12;

const KEY_HELP: [&str; 6] = [
    "A/D  move",
    "S    soft drop",
    "SPC  hard drop",
    "Q/E  rotate",
    "R    restart",
    "ESC  quit",
];

/// Renders the board with a border, a side panel and a game-over overlay.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of the bordered board for `grid`
    ///
    /// Saturates at `u16::MAX` for boards larger than any terminal.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        let w = to_u16(grid.width())
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let h = to_u16(grid.height()).saturating_add(2);
        (w, h)
    }

    /// Render `game` into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(SCREEN_BG, SCREEN_BG).into_cell(' '));

        let grid = game.grid();
        let (frame_w, frame_h) = self.frame_size(grid);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let bounds = grid.bounds();
        let rows = (bounds.y_min..bounds.y_max)
            .rev()
            .zip(start_y.saturating_add(1)..viewport.height);
        for (row, py) in rows {
            let cols = (bounds.x_min..bounds.x_max).zip(0..viewport.width);
            for (col, screen_col) in cols {
                let px = start_x
                    .saturating_add(1)
                    .saturating_add(screen_col.saturating_mul(self.cell_w));
                if px >= viewport.width {
                    break;
                }
                match grid.get(col, row).flatten() {
                    Some(kind) => {
                        let style = CellStyle::new(kind_color(kind), BOARD_BG).bold();
                        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                    }
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
                        fb.fill_rect(px, py, self.cell_w, 1, '·', style);
                    }
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, game, viewport, panel_x, start_y);

        if game.status() == GameStatus::GameOver {
            let text = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            let mid_y = start_y.saturating_add(frame_h / 2);
            draw_centered(fb, start_x, frame_w, mid_y, "GAME OVER", text);
            draw_centered(fb, start_x, frame_w, mid_y.saturating_add(1), "R to restart", text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if viewport.width.saturating_sub(panel_x) < MIN_PANEL_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y.saturating_add(1), game.lines_cleared(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "PIECE", label);
        let kind = game.active().map(|p| p.kind().as_str()).unwrap_or("-");
        fb.put_str(panel_x, y.saturating_add(1), kind, value);
        y = y.saturating_add(3);

        let dim = value.dim();
        for line in KEY_HELP {
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    // Edges past the framebuffer are clipped anyway.
    for dx in 1..(w - 1).min(fb.width()) {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..(h - 1).min(fb.height()) {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x.saturating_add(w.saturating_sub(text_w) / 2), y, text, style);
}

fn to_u16(v: i32) -> u16 {
    u16::try_from(v).unwrap_or(if v < 0 { 0 } else { u16::MAX })
}

fn kind_color(kind: TetrominoKind) -> Rgb {
    match kind {
        TetrominoKind::I => Rgb::new(80, 220, 220),
        TetrominoKind::O => Rgb::new(240, 220, 80),
        TetrominoKind::T => Rgb::new(200, 120, 220),
        TetrominoKind::S => Rgb::new(100, 220, 120),
        TetrominoKind::Z => Rgb::new(220, 80, 80),
        TetrominoKind::J => Rgb::new(80, 120, 220),
        TetrominoKind::L => Rgb::new(255, 165, 0),
    }
}
