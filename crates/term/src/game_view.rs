//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Only the visible rows are drawn; the hidden
//! spawn buffer at the top of the grid is skipped.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Position, HIDDEN_ROWS};

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
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Where the board frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let visible_rows = snap.rows.saturating_sub(HIDDEN_ROWS);
        let board_w = snap.columns.saturating_mul(self.cell_w);
        let board_h = visible_rows.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            board_w,
            board_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        // Locked cells.
        for row in HIDDEN_ROWS..snap.rows {
            for column in 0..snap.columns {
                match PieceKind::from_id(snap.cell(row, column)) {
                    Some(kind) => self.draw_tile(fb, frame, row, column, '█', piece_style(kind)),
                    None => self.draw_tile(
                        fb,
                        frame,
                        row,
                        column,
                        '·',
                        CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
            for pos in active.ghost {
                self.draw_position(fb, frame, snap, pos, '░', ghost);
            }
            for pos in active.tiles {
                self.draw_position(fb, frame, snap, pos, '█', piece_style(active.kind));
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_overlay_text(fb, frame, 0, "GAME OVER");
            draw_overlay_text(fb, frame, 1, "R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw a grid position if it is inside the visible area.
    fn draw_position(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        let visible = pos.row >= HIDDEN_ROWS as i32
            && pos.row < snap.rows as i32
            && pos.column >= 0
            && pos.column < snap.columns as i32;
        if visible {
            self.draw_tile(fb, frame, pos.row as u16, pos.column as u16, ch, style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        column: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame
            .x
            .saturating_add(1)
            .saturating_add(column.saturating_mul(self.cell_w));
        let py = frame
            .y
            .saturating_add(1)
            .saturating_add(row.saturating_sub(HIDDEN_ROWS).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.next.as_str(), piece_style(snap.next).bold());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        match snap.hold {
            Some(kind) if snap.can_hold => {
                fb.put_str(panel_x, y, kind.as_str(), piece_style(kind).bold())
            }
            Some(kind) => fb.put_str(panel_x, y, kind.as_str(), piece_style(kind).dim()),
            None => fb.put_str(panel_x, y, "-", value),
        }
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    };
    CellStyle::new(fg, BOARD_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    // Only the part inside the framebuffer is worth drawing.
    for dx in 1..(w - 1).min(fb.width()) {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..(h - 1).min(fb.height()) {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}

/// Centered text on the board, `line` rows below the middle.
fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
    let y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold());
}
