//! Static text.

use crate::cell::Cell;
use crate::style::Style;
use crate::surface::Surface;

/// Paint `text` on one row starting at `(x, y)`.
///
/// The row is `width` cells wide, or as wide as the text when `width` is 0.
/// Longer text is cut off; shorter text is padded with blanks.
///
/// ```
/// use editbox::{CellBuffer, Style, label};
///
/// let mut surface = CellBuffer::new(6, 1);
/// label(&mut surface, 1, 0, 3, Style::NONE, "hello");
/// assert_eq!(surface.row_text(0), " hel  ");
/// ```
pub fn label<S: Surface + ?Sized>(
    surface: &mut S,
    x: u32,
    y: u32,
    width: u32,
    style: Style,
    text: &str,
) {
    let width = if width == 0 {
        u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
    } else {
        width
    };
    let mut chars = text.chars();
    for col in 0..width {
        let ch = chars.next().unwrap_or(' ');
        surface.set_cell(x.saturating_add(col), y, Cell::new(ch, style));
    }
}

/// Paint `text` as a block, one [`label`] per `'\n'`-separated line.
///
/// A `width` of 0 means the widest line and a `height` of 0 the number of
/// lines. Rows past the last line are blank.
pub fn text_block<S: Surface + ?Sized>(
    surface: &mut S,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    style: Style,
    text: &str,
) {
    let lines: Vec<&str> = text.split('\n').collect();
    let width = if width == 0 {
        let widest = lines.iter().map(|line| line.chars().count()).max();
        u32::try_from(widest.unwrap_or(0)).unwrap_or(u32::MAX)
    } else {
        width
    };
    let height = if height == 0 {
        u32::try_from(lines.len()).unwrap_or(u32::MAX)
    } else {
        height
    };
    if width == 0 {
        return;
    }
    for row in 0..height {
        let line = lines.get(row as usize).copied().unwrap_or("");
        label(surface, x, y.saturating_add(row), width, style, line);
    }
}
