//! Editable text field.

use crate::error::Result;
use crate::input::{Event, KeyCode};
use crate::style::Style;
use crate::surface::Surface;
use crate::text::{Command, Viewport, ViewportOptions};
use crate::widget::Widget;

/// Edit box configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditBoxOptions {
    pub viewport: ViewportOptions,
    /// Keys that end [`Widget::run_until_exit`] instead of editing.
    pub exit_keys: Vec<KeyCode>,
}

impl Default for EditBoxOptions {
    fn default() -> Self {
        Self {
            viewport: ViewportOptions::default(),
            exit_keys: vec![KeyCode::Esc],
        }
    }
}

/// A [`Viewport`] driven by key presses.
///
/// Keys map to editing commands through [`Command::from_key`]; pasted text
/// is typed in character by character.
#[derive(Clone, Debug)]
pub struct EditBox {
    view: Viewport,
    exit_keys: Vec<KeyCode>,
}

impl EditBox {
    pub fn new(options: EditBoxOptions) -> Result<Self> {
        Ok(Self {
            view: Viewport::new(options.viewport)?,
            exit_keys: options.exit_keys,
        })
    }

    /// A one-line field that scrolls sideways. Esc, Enter and Tab exit.
    pub fn input(x: u32, y: u32, width: u32, style: Style) -> Result<Self> {
        Self::new(EditBoxOptions {
            viewport: ViewportOptions {
                x,
                y,
                width,
                height: 1,
                style,
                ..ViewportOptions::default()
            },
            exit_keys: vec![KeyCode::Esc, KeyCode::Enter, KeyCode::Tab],
        })
    }

    /// A multi-line area, soft-wrapped if `wrap`. Esc and Tab exit.
    pub fn textarea(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        style: Style,
        wrap: bool,
    ) -> Result<Self> {
        Self::new(EditBoxOptions {
            viewport: ViewportOptions {
                x,
                y,
                width,
                height,
                wrap,
                style,
                ..ViewportOptions::default()
            },
            exit_keys: vec![KeyCode::Esc, KeyCode::Tab],
        })
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.view.text()
    }

    /// Replace the content; the cursor ends up after the last character.
    pub fn set_text(&mut self, text: &str) {
        self.view.buffer_mut().set_text(text);
        self.view.update_geometry();
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.view
    }

    #[must_use]
    pub fn exit_keys(&self) -> &[KeyCode] {
        &self.exit_keys
    }

    fn paste(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    self.view.insert('\n');
                }
                '\n' => self.view.insert('\n'),
                ch if ch.is_control() => {}
                ch => self.view.insert(ch),
            }
        }
    }
}

impl Widget for EditBox {
    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => {
                if self.exit_keys.contains(&key.code) {
                    return false;
                }
                if let Some(command) = Command::from_key(key) {
                    self.view.apply(command);
                }
            }
            Event::Paste(text) => self.paste(text),
            Event::Resize { .. } => {}
        }
        true
    }

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.view.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::input::{KeyEvent, QueuedInput};
    use crate::surface::CellBuffer;
    use crate::text::Position;

    fn type_text(ebox: &mut EditBox, text: &str) {
        for ch in text.chars() {
            let event = match ch {
                '\n' => Event::from(KeyCode::Enter),
                ch => Event::from(KeyEvent::char(ch)),
            };
            assert!(ebox.handle_event(&event));
        }
    }

    #[test]
    fn test_input_exit_keys() {
        let mut ebox = EditBox::input(0, 0, 10, Style::NONE).unwrap();
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Tab] {
            assert!(!ebox.handle_event(&code.into()), "{code:?}");
        }
        assert!(ebox.handle_event(&KeyCode::Left.into()));
        assert_eq!(ebox.viewport().height(), 1);
        assert!(!ebox.viewport().options().wrap);
    }

    #[test]
    fn test_textarea_enter_inserts_newline() {
        let mut ebox = EditBox::textarea(0, 0, 10, 3, Style::NONE, true).unwrap();
        type_text(&mut ebox, "ab\ncd");
        assert_eq!(ebox.text(), "ab\ncd");
        assert!(!ebox.handle_event(&KeyCode::Tab.into()));
        assert!(!ebox.handle_event(&KeyCode::Esc.into()));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut ebox = EditBox::new(EditBoxOptions::default()).unwrap();
        assert!(ebox.handle_event(&KeyEvent::with_ctrl(KeyCode::Char('x')).into()));
        assert!(ebox.handle_event(&KeyCode::F(5).into()));
        assert!(ebox.handle_event(&Event::Resize {
            width: 10,
            height: 10
        }));
        assert_eq!(ebox.text(), "");
    }

    #[test]
    fn test_paste_normalises_line_endings() {
        let mut ebox = EditBox::textarea(0, 0, 10, 3, Style::NONE, false).unwrap();
        assert!(ebox.handle_event(&Event::Paste("a\r\nb\rc\td".to_string())));
        assert_eq!(ebox.text(), "a\nb\ncd");
        assert_eq!(ebox.viewport().buffer().cursor(), Position::new(2, 2));
    }

    #[test]
    fn test_backspace_across_lines() {
        let mut ebox = EditBox::textarea(0, 0, 10, 3, Style::NONE, false).unwrap();
        type_text(&mut ebox, "12\n1");
        for _ in 0..2 {
            ebox.handle_event(&KeyCode::Backspace.into());
        }
        assert_eq!(ebox.text(), "12");
        assert_eq!(ebox.viewport().buffer().cursor(), Position::new(2, 0));
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut ebox = EditBox::textarea(0, 0, 4, 2, Style::NONE, true).unwrap();
        ebox.set_text("abcdef");
        assert_eq!(ebox.viewport().cursor(), Position::new(2, 1));
    }

    #[test]
    fn test_run_until_exit_repaints_once_per_batch() {
        let mut ebox = EditBox::input(1, 0, 4, Style::NONE).unwrap();
        let mut input = QueuedInput::new();
        input.push_str("abc");
        input.push_key(KeyCode::Tab);
        input.push_str("zzz");

        let mut surface = CellBuffer::new(6, 1);
        let exit = ebox.run_until_exit(&mut input, &mut surface).unwrap();
        assert_eq!(exit, Event::from(KeyCode::Tab));
        assert_eq!(ebox.text(), "abc");
        assert_eq!(surface.row_text(0), " abc  ");
        assert_eq!(surface.cursor(), Some((4, 0)));
        assert_eq!(surface.flush_count(), 2);
        // Keys after the exit key stay queued.
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_run_until_exit_reports_closed_input() {
        let mut ebox = EditBox::input(0, 0, 4, Style::NONE).unwrap();
        let mut input = QueuedInput::new();
        input.push_str("x");
        let mut surface = CellBuffer::new(4, 1);
        let err = ebox.run_until_exit(&mut input, &mut surface).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
        assert_eq!(ebox.text(), "x");
    }

    #[test]
    fn test_rejects_zero_width() {
        assert!(matches!(
            EditBox::input(0, 0, 0, Style::NONE),
            Err(Error::InvalidDimensions { width: 0, .. })
        ));
    }
}
