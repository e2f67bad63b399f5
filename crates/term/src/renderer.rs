//! TerminalRenderer: flushes framebuffers to a terminal.
//!
//! The first frame, and any frame after a size change or `invalidate`, is a
//! full redraw. Later frames only re-emit the runs of cells that changed.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// A horizontal stretch of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Runs of cells that differ between two same-sized frames, row by row.
pub fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> ChangedRuns<'a> {
    ChangedRuns {
        prev,
        next,
        x: 0,
        y: 0,
    }
}

/// Iterator returned by [`changed_runs`]; scans left to right, top to bottom.
pub struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        while self.y < self.next.height() {
            let old = self.prev.row(self.y);
            let new = self.next.row(self.y);
            let differs = |x: usize| old.get(x) != Some(&new[x]);

            let mut x = self.x as usize;
            while x < new.len() && !differs(x) {
                x += 1;
            }
            if x == new.len() {
                self.x = 0;
                self.y += 1;
                continue;
            }

            let start = x;
            while x < new.len() && differs(x) {
                x += 1;
            }
            self.x = x as u16;
            return Some(Run {
                x: start as u16,
                y: self.y,
                len: (x - start) as u16,
            });
        }
        None
    }
}

/// Writes cells as crossterm commands, only switching style when it changes.
struct CellEncoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellEncoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> io::Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            self.out
                .queue(SetAttribute(Attribute::Reset))?
                .queue(SetColors(Colors::new(style.fg.into(), style.bg.into())))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = CellEncoder::new(out);
    for y in 0..fb.height() {
        enc.move_to(0, y)?;
        for &cell in fb.row(y) {
            enc.cell(cell)?;
        }
    }
    enc.finish()
}

/// Encode only the changed runs between two same-sized frames into `out`.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    let mut enc = CellEncoder::new(out);
    for run in changed_runs(prev, next) {
        enc.move_to(run.x, run.y)?;
        let row = next.row(run.y);
        for &cell in &row[run.x as usize..(run.x + run.len) as usize] {
            enc.cell(cell)?;
        }
    }
    enc.finish()
}

/// Owns the output stream and the previously drawn frame.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Next draw is a full redraw (after a resize, say).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb` and keep it as the diff base for the next frame.
    ///
    /// On return `fb` holds the previous frame's buffer so the caller can
    /// render into it again without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out
            .write_all(&self.buf)
            .and_then(|_| self.out.flush())
            .context("failed to write to terminal")
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}
