//! Terminal cell type representing a single character position.
//!
//! A display is a grid of cells, each holding one character plus the colors
//! and attributes it is drawn with. Every character occupies exactly one
//! column.
//!
//! # Examples
//!
//! ```
//! use editbox::{Cell, Color, Style};
//!
//! let cell = Cell::new('A', Style::new(Color::GREEN, Color::Default));
//! assert_eq!(cell.ch, 'A');
//!
//! // Blank cells render as a space.
//! assert_eq!(Cell::default().ch, ' ');
//! ```

use crate::color::Color;
use crate::style::{Style, TextAttributes};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Cell {
    /// Create a cell drawing `ch` with `style`.
    #[must_use]
    pub const fn new(ch: char, style: Style) -> Self {
        Self {
            ch,
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
        }
    }

    /// A space painted in `style`.
    #[must_use]
    pub const fn blank(style: Style) -> Self {
        Self::new(' ', style)
    }

    /// The style this cell is drawn with.
    #[must_use]
    pub const fn style(&self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            attributes: self.attributes,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::NONE)
    }
}
