//! Buffered ANSI output writer with state tracking.

use crate::ansi::{self, attr};
use crate::cell::Cell;
use crate::color::Color;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Buffered writer that tracks ANSI state to minimize escape sequences.
///
/// Nothing reaches the wrapped writer until [`flush`](Self::flush).
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,

    // Current state for delta encoding; `None` means unknown.
    current_fg: Option<Color>,
    current_bg: Option<Color>,
    current_attrs: TextAttributes,

    // Cursor position, if known
    cursor: Option<(u32, u32)>,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            current_fg: None,
            current_bg: None,
            current_attrs: TextAttributes::empty(),
            cursor: None,
        }
    }

    /// Forget all tracked state, so the next writes are emitted in full.
    pub fn reset_state(&mut self) {
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
        self.cursor = None;
    }

    /// Forget where the cursor is, so the next move is absolute.
    ///
    /// Needed after anything that moves the terminal cursor behind the
    /// writer's back, such as writing into the last column.
    pub fn forget_cursor(&mut self) {
        self.cursor = None;
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to position, using relative moves if shorter.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        match self.cursor {
            Some(at) if at == (row, col) => return,
            Some((cur_row, cur_col)) => {
                let dy = i64::from(row) - i64::from(cur_row);
                let dx = i64::from(col) - i64::from(cur_col);
                // ESC[r;cH = 4 + digits
                let abs_cost = 4 + digits(row + 1) + digits(col + 1);
                let rel_cost = move_cost(dy) + move_cost(dx);
                match (i32::try_from(dx), i32::try_from(dy)) {
                    (Ok(dx), Ok(dy)) if rel_cost < abs_cost => {
                        let _ = ansi::write_cursor_move(&mut self.buffer, dx, dy);
                    }
                    _ => {
                        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
                    }
                }
            }
            None => {
                let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
            }
        }
        self.cursor = Some((row, col));
    }

    /// Set foreground color if different from current.
    pub fn set_fg(&mut self, color: Color) {
        if self.current_fg != Some(color) {
            let _ = ansi::write_fg_color(&mut self.buffer, color);
            self.current_fg = Some(color);
        }
    }

    /// Set background color if different from current.
    pub fn set_bg(&mut self, color: Color) {
        if self.current_bg != Some(color) {
            let _ = ansi::write_bg_color(&mut self.buffer, color);
            self.current_bg = Some(color);
        }
    }

    /// Set text attributes, only writing changes.
    pub fn set_attributes(&mut self, attrs: TextAttributes) {
        if self.current_attrs == attrs {
            return;
        }

        let mut removed = self.current_attrs - attrs;
        if !removed.is_empty() {
            // 22 clears bold and dim together; re-add whichever survives.
            if removed.intersects(TextAttributes::BOLD | TextAttributes::DIM) {
                removed |= self.current_attrs & (TextAttributes::BOLD | TextAttributes::DIM);
            }
            let codes = [
                (TextAttributes::BOLD | TextAttributes::DIM, attr::RESET_INTENSITY),
                (TextAttributes::ITALIC, attr::RESET_ITALIC),
                (TextAttributes::UNDERLINE, attr::RESET_UNDERLINE),
                (TextAttributes::BLINK, attr::RESET_BLINK),
                (TextAttributes::INVERSE, attr::RESET_INVERSE),
                (TextAttributes::HIDDEN, attr::RESET_HIDDEN),
                (TextAttributes::STRIKETHROUGH, attr::RESET_STRIKETHROUGH),
            ];
            self.buffer.extend_from_slice(b"\x1b[");
            let mut first = true;
            for (flags, code) in codes {
                if removed.intersects(flags) {
                    if !first {
                        self.buffer.push(b';');
                    }
                    self.buffer.extend_from_slice(code.as_bytes());
                    first = false;
                }
            }
            self.buffer.push(b'm');
            self.current_attrs -= removed;
        }

        let to_add = attrs - self.current_attrs;
        let _ = ansi::write_attributes(&mut self.buffer, to_add);
        self.current_attrs = attrs;
    }

    /// Write a cell at the current cursor position.
    pub fn write_cell(&mut self, cell: &Cell) {
        self.set_attributes(cell.attributes);
        self.set_fg(cell.fg);
        self.set_bg(cell.bg);

        let ch = if cell.ch.is_control() { ' ' } else { cell.ch };
        let mut buf = [0u8; 4];
        self.buffer
            .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());

        if let Some((row, col)) = self.cursor {
            self.cursor = Some((row, col + 1));
        }
    }

    /// Write a cell at a specific position.
    pub fn write_cell_at(&mut self, row: u32, col: u32, cell: &Cell) {
        self.move_cursor(row, col);
        self.write_cell(cell);
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Bytes written since the last flush.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer without flushing.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }
}

/// Count decimal digits in a number.
fn digits(n: u32) -> usize {
    if n == 0 { 1 } else { (n.ilog10() + 1) as usize }
}

/// Bytes needed for a relative move of `delta` along one axis.
fn move_cost(delta: i64) -> usize {
    if delta == 0 {
        0
    } else {
        let magnitude = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
        3 + digits(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn output(writer: &AnsiWriter<Vec<u8>>) -> String {
        String::from_utf8_lossy(writer.buffer()).into_owned()
    }

    #[test]
    fn test_ansi_writer_basic() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_str("Hello");
        assert_eq!(writer.buffer(), b"Hello");
        assert!(writer.get_ref().is_empty());
        writer.flush().unwrap();
        assert_eq!(writer.into_inner(), b"Hello");
    }

    #[test]
    fn test_first_move_is_absolute() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.move_cursor(5, 10);
        assert_eq!(output(&writer), "\x1b[6;11H");
    }

    #[test]
    fn test_short_moves_are_relative() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.move_cursor(20, 30);
        writer.clear_buffer();
        writer.move_cursor(20, 33);
        assert_eq!(output(&writer), "\x1b[3C");
        writer.clear_buffer();
        writer.move_cursor(20, 33);
        assert_eq!(output(&writer), "");
    }

    #[test]
    fn test_color_caching() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_fg(Color::RED);
        let len1 = writer.buffer().len();
        writer.set_fg(Color::RED);
        assert_eq!(writer.buffer().len(), len1);
        writer.set_fg(Color::BLUE);
        assert!(writer.buffer().len() > len1);
    }

    #[test]
    fn test_attribute_changes() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_attributes(TextAttributes::BOLD | TextAttributes::UNDERLINE);
        assert_eq!(output(&writer), "\x1b[1;4m");

        writer.clear_buffer();
        writer.set_attributes(TextAttributes::UNDERLINE);
        assert_eq!(output(&writer), "\x1b[22m");

        writer.clear_buffer();
        writer.set_attributes(TextAttributes::DIM);
        assert_eq!(output(&writer), "\x1b[24m\x1b[2m");
    }

    #[test]
    fn test_dropping_bold_keeps_dim() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_attributes(TextAttributes::BOLD | TextAttributes::DIM);
        writer.clear_buffer();
        writer.set_attributes(TextAttributes::DIM);
        assert_eq!(output(&writer), "\x1b[22m\x1b[2m");
    }

    #[test]
    fn test_write_cell_advances_cursor() {
        let mut writer = AnsiWriter::new(Vec::new());
        let cell = Cell::new('A', Style::new(Color::RED, Color::Default));
        writer.write_cell_at(0, 0, &cell);
        assert_eq!(output(&writer), "\x1b[1;1H\x1b[31m\x1b[49mA");

        writer.clear_buffer();
        writer.write_cell_at(0, 1, &Cell::new('B', cell.style()));
        assert_eq!(output(&writer), "B");
    }

    #[test]
    fn test_control_characters_are_blanked() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.write_cell(&Cell::new('\x1b', Style::NONE));
        assert!(output(&writer).ends_with(' '));
    }

    #[test]
    fn test_reset_forgets_colors() {
        let mut writer = AnsiWriter::new(Vec::new());
        writer.set_fg(Color::GREEN);
        writer.reset();
        writer.clear_buffer();
        writer.set_fg(Color::GREEN);
        assert_eq!(output(&writer), "\x1b[32m");
    }
}
