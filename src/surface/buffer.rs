//! In-memory cell grid.

use crate::cell::Cell;
use crate::error::Result;
use crate::surface::Surface;

/// Plain grid of cells implementing [`Surface`].
///
/// Nothing is ever shown; `flush` only counts. Handy for tests and for
/// composing a frame before copying it elsewhere.
///
/// # Examples
///
/// ```
/// use editbox::{Cell, CellBuffer, Style, Surface};
///
/// let mut surface = CellBuffer::new(4, 1);
/// surface.set_cell(1, 0, Cell::new('x', Style::NONE));
/// assert_eq!(surface.row_text(0), " x  ");
/// ```
#[derive(Clone, Debug)]
pub struct CellBuffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    cursor: Option<(u32, u32)>,
    flush_count: usize,
}

impl CellBuffer {
    /// Create a blank buffer. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            cursor: None,
            flush_count: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Characters of row `y` as a string, blanks included.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }

    /// Every row joined with `'\n'`.
    #[must_use]
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(u32, u32)> {
        self.cursor
    }

    /// How many times [`Surface::flush`] has been called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }
}

impl Surface for CellBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell;
        }
    }

    fn set_cursor(&mut self, position: Option<(u32, u32)>) {
        self.cursor = position;
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::Style;

    #[test]
    fn test_buffer_new_clamps_to_one() {
        let buf = CellBuffer::new(0, 0);
        assert_eq!(buf.size(), (1, 1));
        assert_eq!(buf.cells().len(), 1);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut buf = CellBuffer::new(2, 2);
        buf.set_cell(2, 0, Cell::new('x', Style::NONE));
        buf.set_cell(0, 2, Cell::new('x', Style::NONE));
        assert_eq!(buf.to_text(), "  \n  ");
        assert!(buf.get(2, 0).is_none());
    }

    #[test]
    fn test_set_and_get() {
        let mut buf = CellBuffer::new(3, 2);
        let style = Style::new(Color::RED, Color::Default);
        buf.set_cell(2, 1, Cell::new('z', style));
        let cell = buf.get(2, 1).unwrap();
        assert_eq!(cell.ch, 'z');
        assert_eq!(cell.fg, Color::RED);
        assert_eq!(buf.row_text(1), "  z");
        assert_eq!(buf.row_text(5), "");
    }

    #[test]
    fn test_cursor_and_flush_count() {
        let mut buf = CellBuffer::new(3, 2);
        assert_eq!(buf.cursor(), None);
        buf.set_cursor(Some((1, 1)));
        buf.flush().unwrap();
        buf.flush().unwrap();
        assert_eq!(buf.cursor(), Some((1, 1)));
        assert_eq!(buf.flush_count(), 2);
    }
}
