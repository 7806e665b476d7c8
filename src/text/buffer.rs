//! Line-oriented text storage with a cursor.
//!
//! [`TextBuffer`] keeps its text as a list of [`Line`]s split after every
//! `'\n'`, plus a cursor in buffer coordinates and the sticky column used for
//! vertical movement. It knows nothing about widths, wrapping or scrolling;
//! that is the job of [`Viewport`](super::Viewport).
//!
//! # Examples
//!
//! ```
//! use editbox::{Position, TextBuffer};
//!
//! let mut buf = TextBuffer::with_text("12\n1");
//! assert_eq!(buf.line_count(), 2);
//! assert_eq!(buf.cursor(), Position::new(1, 1));
//!
//! buf.set_cursor(0, 1);
//! buf.delete_backward(); // joins the two lines
//! assert_eq!(buf.text(), "121");
//! assert_eq!(buf.cursor(), Position::new(2, 0));
//! ```

use crate::text::line::{LINE_TERMINATOR, Line};

/// Column/row pair, in buffer or viewport space depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Editable text with a cursor and a sticky column.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    lines: Vec<Line>,
    cursor: Position,
    last_x: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create an empty buffer: one empty line, cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            cursor: Position::default(),
            last_x: 0,
        }
    }

    /// Create a buffer by typing `text` into an empty one.
    ///
    /// The cursor ends up after the last inserted code point.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut buf = Self::new();
        buf.set_text(text);
        buf
    }

    /// Concatenation of every line, terminators included.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.iter().map(ToString::to_string).collect()
    }

    /// Insert every code point of `text` at the cursor, in order.
    pub fn set_text(&mut self, text: &str) {
        tracing::trace!(chars = text.chars().count(), "set_text");
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, y: usize) -> Option<&Line> {
        self.lines.get(y)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line under the cursor.
    #[must_use]
    pub fn current_line(&self) -> &Line {
        &self.lines[self.cursor.y]
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Column vertical movement tries to return to.
    #[must_use]
    pub fn last_x(&self) -> usize {
        self.last_x
    }

    /// Place the cursor explicitly and make `x` the sticky column.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a line index or `x` lies past the end of line `y`.
    #[track_caller]
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.place_cursor(x, y);
        self.last_x = x;
    }

    /// Like [`set_cursor`](Self::set_cursor) but keeps the sticky column.
    #[track_caller]
    pub(crate) fn place_cursor(&mut self, x: usize, y: usize) {
        assert!(y < self.lines.len(), "y position out of range");
        assert!(x <= self.lines[y].len(), "x position out of range");
        self.cursor = Position::new(x, y);
    }

    /// Insert `ch` at the cursor and advance past it.
    ///
    /// A `'\n'` splits the current line after the terminator and moves the
    /// cursor to the start of the new line.
    pub fn insert(&mut self, ch: char) {
        let Position { x, y } = self.cursor;
        self.lines[y].insert(x, ch);
        self.cursor.x += 1;
        if ch == LINE_TERMINATOR {
            let tail = self.lines[y].split_off(self.cursor.x);
            self.lines.insert(y + 1, tail);
            self.cursor.y += 1;
            self.cursor.x = 0;
        }
        self.last_x = self.cursor.x;
    }

    /// Delete the code point under the cursor.
    ///
    /// Deleting a terminator joins the following line onto this one. The
    /// cursor does not move.
    pub fn delete_forward(&mut self) {
        let Position { x, y } = self.cursor;
        let removed = self.lines[y].remove(x);
        if removed == Some(LINE_TERMINATOR) && y + 1 < self.lines.len() {
            let mut next = self.lines.remove(y + 1);
            self.lines[y].append(&mut next);
        }
    }

    /// Delete the code point before the cursor. No-op at the origin.
    pub fn delete_backward(&mut self) {
        if self.cursor == Position::default() {
            return;
        }
        self.move_left();
        self.delete_forward();
    }

    pub fn move_right(&mut self) {
        let len = self.current_line().len();
        self.cursor.x += 1;
        if self.cursor.x >= len {
            if self.cursor.y + 1 < self.lines.len() {
                self.cursor.y += 1;
                self.cursor.x = 0;
            } else {
                self.cursor.x = len;
            }
        }
        self.last_x = self.cursor.x;
    }

    pub fn move_left(&mut self) {
        if self.cursor.x > 0 {
            self.cursor.x -= 1;
        } else if self.cursor.y > 0 {
            self.cursor.y -= 1;
            // Lands before the previous line's terminator.
            self.cursor.x = self.current_line().len().saturating_sub(1);
        }
        self.last_x = self.cursor.x;
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.x = 0;
        self.last_x = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.x = self.current_line().printable_end();
        self.last_x = self.cursor.x;
    }

    /// Move `dy` lines up (negative) or down, aiming for the sticky column.
    ///
    /// Nothing happens when the target line does not exist. The sticky column
    /// itself is left alone so a run of vertical moves keeps returning to it.
    pub fn move_vertical(&mut self, dy: isize) {
        let Some(y) = self.cursor.y.checked_add_signed(dy) else {
            return;
        };
        if y >= self.lines.len() {
            return;
        }
        self.cursor.y = y;
        let len = self.lines[y].len();
        self.cursor.x = if len == 0 {
            0
        } else if self.last_x >= len {
            len - 1
        } else {
            self.last_x
        };
    }
}
