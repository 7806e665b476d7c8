//! Viewport over a text buffer: wrapping, autoexpand, scrolling, rendering.
//!
//! A [`Viewport`] owns one [`TextBuffer`] and shows it in a fixed-width
//! rectangle. Three coordinate spaces are involved:
//!
//! - **buffer space**: `(column, line)` as stored in the buffer
//! - **viewport space**: `(column, row)` after soft wrapping; row 0 is the
//!   first visual row of the whole text, not of the visible window
//! - **screen space**: viewport space minus the scroll origin plus the
//!   rectangle's top-left corner
//!
//! In wrap mode a line of length `L` occupies `max(L, 1).div_ceil(width)`
//! visual rows, and `line_offsets[y]` is the row where line `y` starts.
//!
//! # Examples
//!
//! ```
//! use editbox::{Position, Viewport, ViewportOptions};
//!
//! let mut view = Viewport::new(ViewportOptions {
//!     width: 3,
//!     height: 3,
//!     wrap: true,
//!     ..ViewportOptions::default()
//! })
//! .unwrap();
//! view.buffer_mut().set_text("1234567\n12\n1234\n1");
//! view.update_geometry();
//!
//! assert_eq!(view.line_offsets(), &[0, 3, 4, 6]);
//! assert_eq!(view.buffer_to_viewport(Position::new(4, 0)), Position::new(1, 1));
//! ```

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::style::Style;
use crate::surface::Surface;
use crate::text::buffer::{Position, TextBuffer};
use crate::text::command::Command;
use crate::text::line::LINE_TERMINATOR;

/// Glyph drawn for a line terminator when terminators are shown.
pub const TERMINATOR_GLYPH: char = '\u{2424}';

/// Viewport configuration, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportOptions {
    /// Left edge on the surface.
    pub x: u32,
    /// Top edge on the surface.
    pub y: u32,
    pub width: u32,
    /// Initial height; also the minimum height when autoexpanding.
    pub height: u32,
    /// Soft-wrap lines at `width` instead of scrolling horizontally.
    pub wrap: bool,
    /// Grow and shrink with the content, between `height` and `max_height`.
    pub autoexpand: bool,
    /// Autoexpand ceiling. `None` or `Some(0)` pins it to `height`.
    pub max_height: Option<u32>,
    pub style: Style,
    /// Draw terminators as `␤` instead of blanks.
    pub show_line_terminators: bool,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 40,
            height: 1,
            wrap: false,
            autoexpand: false,
            max_height: None,
            style: Style::NONE,
            show_line_terminators: false,
        }
    }
}

/// A text buffer shown through a rectangular window.
#[derive(Clone, Debug)]
pub struct Viewport {
    buffer: TextBuffer,
    options: ViewportOptions,
    width: usize,
    height: usize,
    min_height: usize,
    max_height: usize,
    line_offsets: Vec<usize>,
    virtual_height: usize,
    scroll: Position,
    cursor: Position,
}

impl Viewport {
    /// Create a viewport over an empty buffer.
    ///
    /// Fails with [`Error::InvalidDimensions`] for a zero width or height and
    /// with [`Error::InvalidHeightRange`] when autoexpand is on and
    /// `max_height` is below `height`.
    pub fn new(options: ViewportOptions) -> Result<Self> {
        if options.width == 0 || options.height == 0 {
            return Err(Error::InvalidDimensions {
                width: options.width,
                height: options.height,
            });
        }
        let min_height = options.height as usize;
        let max_height = match options.max_height {
            Some(max) if options.autoexpand && max > 0 => max as usize,
            _ => min_height,
        };
        if max_height < min_height {
            return Err(Error::InvalidHeightRange {
                min: options.height,
                max: max_height as u32,
            });
        }

        let mut view = Self {
            buffer: TextBuffer::new(),
            options,
            width: options.width as usize,
            height: min_height,
            min_height,
            max_height,
            line_offsets: Vec::new(),
            virtual_height: 1,
            scroll: Position::default(),
            cursor: Position::default(),
        };
        view.update_geometry();
        Ok(view)
    }

    /// Create a viewport and type `text` into it.
    pub fn with_text(options: ViewportOptions, text: &str) -> Result<Self> {
        let mut view = Self::new(options)?;
        view.buffer.set_text(text);
        view.update_geometry();
        Ok(view)
    }

    #[must_use]
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable access to the buffer.
    ///
    /// Call [`update_geometry`](Self::update_geometry) (or `render`) before
    /// reading viewport-space state after editing through this.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current height; only autoexpand changes it.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn min_height(&self) -> usize {
        self.min_height
    }

    #[must_use]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Rows the whole text needs, as of the last geometry update.
    #[must_use]
    pub fn virtual_height(&self) -> usize {
        self.virtual_height
    }

    /// First visual row of every buffer line, as of the last geometry update.
    #[must_use]
    pub fn line_offsets(&self) -> &[usize] {
        &self.line_offsets
    }

    /// Cursor in viewport space, as of the last geometry update.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Viewport-space position shown at the top-left corner.
    #[must_use]
    pub fn scroll(&self) -> Position {
        self.scroll
    }

    /// Where the cursor lands on the surface after the last render.
    #[must_use]
    pub fn screen_cursor(&self) -> (u32, u32) {
        let x = self.cursor.x.saturating_sub(self.scroll.x);
        let y = self.cursor.y.saturating_sub(self.scroll.y);
        (self.options.x + x as u32, self.options.y + y as u32)
    }

    /// Recompute line offsets, virtual height, autoexpanded height and the
    /// viewport-space cursor from the current buffer.
    pub fn update_geometry(&mut self) {
        let width = self.width;
        let wrap = self.options.wrap;

        self.line_offsets.clear();
        let mut extra_rows = 0;
        for (y, line) in self.buffer.lines().iter().enumerate() {
            self.line_offsets.push(y + extra_rows);
            if wrap {
                extra_rows += line.len().saturating_sub(1) / width;
            }
        }
        self.virtual_height = self.line_offsets.len() + extra_rows;

        if self.options.autoexpand {
            let wanted = self.virtual_height;
            let height = if wanted > self.height {
                wanted.min(self.max_height)
            } else if wanted < self.height {
                wanted.max(self.min_height)
            } else {
                self.height
            };
            if height != self.height {
                tracing::debug!(from = self.height, to = height, "viewport height changed");
                self.height = height;
            }
        }

        self.cursor = self.buffer_to_viewport(self.buffer.cursor());
    }

    /// Map a buffer position to viewport space using the current offsets.
    ///
    /// # Panics
    ///
    /// Panics in wrap mode if `pos.y` has no offset, i.e. the buffer grew
    /// since the last [`update_geometry`](Self::update_geometry).
    #[must_use]
    pub fn buffer_to_viewport(&self, pos: Position) -> Position {
        if self.options.wrap {
            Position::new(
                pos.x % self.width,
                self.line_offsets[pos.y] + pos.x / self.width,
            )
        } else {
            pos
        }
    }

    /// Adjust the scroll origin so the cursor is inside the window.
    ///
    /// Vertically the window never extends past the last content row while
    /// the content is taller than the window. A cursor parked after a full
    /// wrapped last row sits on the row below the text, and that row counts
    /// as content. Calling this twice in a row changes nothing the second
    /// time.
    pub fn scroll_to_cursor(&mut self) {
        let (width, height) = (self.width, self.height);
        let cursor = self.cursor;

        if !self.options.wrap {
            if cursor.x >= self.scroll.x + width {
                self.scroll.x = cursor.x + 1 - width;
            } else if cursor.x < self.scroll.x {
                self.scroll.x = cursor.x;
            }
        }

        // A cursor after the last code point of a full wrapped row sits on
        // the row below the text; count that row as content.
        let content_rows = self.virtual_height.max(cursor.y + 1);
        if content_rows > height {
            if cursor.y >= self.scroll.y + height {
                self.scroll.y = cursor.y + 1 - height;
            } else if cursor.y < self.scroll.y {
                self.scroll.y = cursor.y;
            }
            if content_rows < self.scroll.y + height {
                self.scroll.y = content_rows - height;
            }
        } else {
            self.scroll.y = 0;
        }
    }

    pub fn move_left(&mut self) {
        self.buffer.move_left();
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
    }

    pub fn move_to_line_start(&mut self) {
        self.buffer.move_to_line_start();
    }

    pub fn move_to_line_end(&mut self) {
        self.buffer.move_to_line_end();
    }

    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(ch);
    }

    pub fn delete_forward(&mut self) {
        self.buffer.delete_forward();
    }

    pub fn delete_backward(&mut self) {
        self.buffer.delete_backward();
    }

    /// Move one visual row down.
    ///
    /// In wrap mode this walks the rows of a wrapped line before crossing to
    /// the next line, aiming for the sticky column within the row.
    pub fn move_down(&mut self) {
        if !self.options.wrap {
            self.buffer.move_vertical(1);
            return;
        }

        let width = self.width;
        let Position { x, y } = self.buffer.cursor();
        let line = self.buffer.current_line();
        let len = line.len();

        // Next row of the same line.
        if x + width < len {
            self.buffer.place_cursor(x + width, y);
            return;
        }
        // The next row exists but is shorter than the cursor column.
        if x % width + (len - x) > width {
            let end = line.printable_end();
            self.buffer.place_cursor(end, y);
            return;
        }

        let Some(next) = self.buffer.line(y + 1) else {
            return;
        };
        let target = if next.is_empty() {
            0
        } else {
            let column = self.buffer.last_x() % width;
            if column >= next.len() {
                next.printable_end()
            } else {
                column
            }
        };
        self.buffer.place_cursor(target, y + 1);
    }

    /// Move one visual row up. Mirror image of [`move_down`](Self::move_down).
    pub fn move_up(&mut self) {
        if !self.options.wrap {
            self.buffer.move_vertical(-1);
            return;
        }

        let width = self.width;
        let Position { x, y } = self.buffer.cursor();
        let sticky = self.buffer.last_x() % width;
        let column = x % width;

        // Previous row of the same line, same column.
        if column == sticky && x >= width {
            self.buffer.place_cursor(x - width, y);
            return;
        }
        // Previous row of the same line, back at the sticky column.
        let back = width + column - sticky;
        if column < sticky && x >= back {
            self.buffer.place_cursor(x - back, y);
            return;
        }
        if y == 0 {
            return;
        }

        let end = self.buffer.lines()[y - 1].printable_end();
        let target = if sticky >= end {
            end
        } else {
            let end_column = end % width;
            if end_column <= sticky {
                end
            } else {
                end - end_column + sticky
            }
        };
        self.buffer.place_cursor(target, y - 1);
    }

    /// Repeat [`move_down`](Self::move_down) once per visible row.
    pub fn page_down(&mut self) {
        for _ in 0..self.height {
            self.move_down();
        }
    }

    /// Repeat [`move_up`](Self::move_up) once per visible row.
    pub fn page_up(&mut self) {
        for _ in 0..self.height {
            self.move_up();
        }
    }

    /// Execute one editing or navigation command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Insert(ch) => self.insert(ch),
            Command::DeleteForward => self.delete_forward(),
            Command::DeleteBackward => self.delete_backward(),
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::LineStart => self.move_to_line_start(),
            Command::LineEnd => self.move_to_line_end(),
            Command::PageUp => self.page_up(),
            Command::PageDown => self.page_down(),
        }
    }

    /// Paint the visible window and place the cursor. Does not flush.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.update_geometry();
        self.scroll_to_cursor();

        let (width, height) = (self.width, self.height);
        let mut view = vec![' '; width * height];
        for (y, line) in self.buffer.lines().iter().enumerate() {
            if self.line_offsets[y] >= self.scroll.y + height {
                break;
            }
            for (x, &ch) in line.chars().iter().enumerate() {
                let pos = self.buffer_to_viewport(Position::new(x, y));
                if pos.x < self.scroll.x || pos.y < self.scroll.y {
                    continue;
                }
                let (col, row) = (pos.x - self.scroll.x, pos.y - self.scroll.y);
                if col >= width || row >= height {
                    continue;
                }
                view[row * width + col] = match ch {
                    LINE_TERMINATOR if self.options.show_line_terminators => TERMINATOR_GLYPH,
                    LINE_TERMINATOR => ' ',
                    other => other,
                };
            }
        }

        let style = self.options.style;
        for (idx, &ch) in view.iter().enumerate() {
            let (col, row) = (idx % width, idx / width);
            surface.set_cell(
                self.options.x + col as u32,
                self.options.y + row as u32,
                Cell::new(ch, style),
            );
        }
        surface.set_cursor(Some(self.screen_cursor()));
        tracing::trace!(
            cursor_x = self.cursor.x,
            cursor_y = self.cursor.y,
            scroll_y = self.scroll.y,
            "viewport rendered"
        );
    }
}
