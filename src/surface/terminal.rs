//! Double-buffered terminal output.

use crate::ansi::{self, AnsiWriter};
use crate::cell::Cell;
use crate::error::Result;
use crate::surface::{CellBuffer, Surface};
use crate::terminal::terminal_size;
use std::io::{self, Write};

/// A [`Surface`] backed by a terminal.
///
/// Cells are painted into a back grid. [`flush`](Surface::flush) compares it
/// with what the terminal already shows, writes escape sequences for the
/// cells that differ, places the cursor and flushes the writer. The first
/// flush and the first after [`resize`](Self::resize) or
/// [`invalidate`](Self::invalidate) redraw everything.
pub struct TerminalSurface<W: Write> {
    writer: AnsiWriter<W>,
    back: CellBuffer,
    front: Option<CellBuffer>,
    cursor: Option<(u32, u32)>,
}

impl TerminalSurface<io::Stdout> {
    /// A surface covering the terminal on stdout.
    pub fn stdout() -> io::Result<Self> {
        let (width, height) = terminal_size()?;
        Ok(Self::new(io::stdout(), u32::from(width), u32::from(height)))
    }
}

impl<W: Write> TerminalSurface<W> {
    /// A surface of `width x height` cells writing to `writer`.
    pub fn new(writer: W, width: u32, height: u32) -> Self {
        Self {
            writer: AnsiWriter::new(writer),
            back: CellBuffer::new(width, height),
            front: None,
            cursor: None,
        }
    }

    /// Change the size. Content is cleared and fully redrawn on next flush.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.back = CellBuffer::new(width, height);
        self.invalidate();
    }

    /// Forget what the terminal shows; the next flush redraws every cell.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// The grid as painted so far.
    #[must_use]
    pub fn cells(&self) -> &CellBuffer {
        &self.back
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_changes(&mut self) -> usize {
        let (width, height) = self.back.size();
        let mut changed = 0;
        // The terminal cursor may have moved since the last frame.
        self.writer.forget_cursor();
        for y in 0..height {
            for x in 0..width {
                let Some(cell) = self.back.get(x, y) else {
                    continue;
                };
                let unchanged = self
                    .front
                    .as_ref()
                    .and_then(|front| front.get(x, y))
                    .is_some_and(|old| old == cell);
                if unchanged {
                    continue;
                }
                self.writer.write_cell_at(y, x, cell);
                if x + 1 == width {
                    self.writer.forget_cursor();
                }
                changed += 1;
            }
        }
        changed
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> (u32, u32) {
        self.back.size()
    }

    fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        self.back.set_cell(x, y, cell);
    }

    fn set_cursor(&mut self, position: Option<(u32, u32)>) {
        self.cursor = position;
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.write_str(ansi::sync::BEGIN);
        self.writer.write_str(ansi::CURSOR_HIDE);
        let changed = self.write_changes();
        self.writer.reset();

        let (width, height) = self.back.size();
        match self.cursor {
            Some((x, y)) if x < width && y < height => {
                self.writer.forget_cursor();
                self.writer.move_cursor(y, x);
                self.writer.write_str(ansi::CURSOR_SHOW);
            }
            _ => {}
        }
        self.writer.write_str(ansi::sync::END);
        self.writer.flush()?;

        tracing::trace!(changed, "surface flushed");
        match &mut self.front {
            Some(front) => front.clone_from(&self.back),
            None => self.front = Some(self.back.clone()),
        }
        Ok(())
    }
}
