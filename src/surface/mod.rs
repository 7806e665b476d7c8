//! Display surfaces widgets paint onto.
//!
//! Widgets never talk to a terminal directly. They write cells and a cursor
//! position into a [`Surface`]; the host decides when to [`flush`](Surface::flush).
//!
//! - [`CellBuffer`]: in-memory grid, used by tests and for off-screen drawing
//! - [`TerminalSurface`]: double-buffered grid that emits ANSI escapes for
//!   the cells that changed since the last flush

mod buffer;
mod terminal;

pub use buffer::CellBuffer;
pub use terminal::TerminalSurface;

use crate::cell::Cell;
use crate::error::Result;

/// A rectangular grid of cells with a cursor.
pub trait Surface {
    /// Width and height in cells.
    fn size(&self) -> (u32, u32);

    /// Write one cell. Writes outside the surface are ignored.
    fn set_cell(&mut self, x: u32, y: u32, cell: Cell);

    /// Show the cursor at `(x, y)`, or hide it with `None`.
    fn set_cursor(&mut self, position: Option<(u32, u32)>);

    /// Make everything written so far visible.
    fn flush(&mut self) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        (**self).set_cell(x, y, cell);
    }

    fn set_cursor(&mut self, position: Option<(u32, u32)>) {
        (**self).set_cursor(position);
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
