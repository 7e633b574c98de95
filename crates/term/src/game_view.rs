//! GameView: projects a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and only reads the snapshot.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

/// Color of each kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Square => Rgb::new(255, 165, 0),
        PieceKind::Bar => Rgb::new(100, 220, 120),
        PieceKind::LShape => Rgb::new(220, 80, 80),
        PieceKind::TShape => Rgb::new(240, 220, 80),
        PieceKind::ZShape => Rgb::new(80, 120, 220),
    }
}

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for the board, side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.frame(viewport);
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            Style::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(fb, frame, border);

        for (row, codes) in snap.grid.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, frame, col as u16, row as u16, kind),
                    None => self.fill_cell(
                        fb,
                        frame,
                        col as u16,
                        row as u16,
                        '·',
                        Style::new(Rgb::new(90, 90, 100), PLAY_BG).dim(),
                    ),
                }
            }
        }

        for &(col, row) in snap.active.cells.iter() {
            if col >= 0 && col < GRID_WIDTH as i8 && row >= 0 && row < GRID_HEIGHT as i8 {
                self.draw_block(fb, frame, col as u16, row as u16, snap.active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused() {
            draw_overlay_text(fb, frame, "PAUSED");
        } else if snap.game_over() {
            draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (GRID_WIDTH as u16) * self.cell_w + 2;
        let h = (GRID_HEIGHT as u16) * self.cell_h + 2;
        // Leave room for the side panel when centering horizontally.
        let total_w = w + 2 + SIDE_PANEL_W;
        Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, kind: PieceKind) {
        let style = Style::new(piece_color(kind), PLAY_BG).bold();
        self.fill_cell(fb, frame, col, row, BLOCK, style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, col: u16, row: u16, ch: char, style: Style) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.rows_cleared),
            ("PIECES", snap.pieces_locked),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let style = Style::new(piece_color(snap.next), Rgb::new(0, 0, 0));
        for (dx, dy) in get_shape(snap.next, 0) {
            let x = panel_x + (dx as u16) * self.cell_w;
            fb.fill_rect(x, y + dy as u16, self.cell_w, 1, BLOCK, style);
        }
        y = y.saturating_add(5);

        fb.put_str(panel_x, y, "SPEED", label);
        let speed = u32::try_from(snap.fall_interval_ms).unwrap_or(u32::MAX);
        fb.put_u32(panel_x, y + 1, speed, value);
        let digits = speed.checked_ilog10().unwrap_or(0) as u16 + 1;
        fb.put_str(panel_x + digits + 1, y + 1, "ms", value.dim());
    }
}

/// Columns reserved to the right of the board.
const SIDE_PANEL_W: u16 = 12;

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, mid_y, text, style);
}
