//! Editing commands and the default key bindings.

use crate::input::{KeyCode, KeyEvent};

/// One editing or navigation step on a [`Viewport`](crate::text::Viewport).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Insert a character at the cursor; `'\n'` splits the line.
    Insert(char),
    DeleteForward,
    DeleteBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

impl Command {
    /// Map a key press to a command using the default bindings.
    ///
    /// Printable characters insert themselves unless Ctrl or Alt is held.
    /// Keys without a binding, Tab among them, give `None`.
    ///
    /// ```
    /// use editbox::{Command, KeyCode, KeyEvent};
    ///
    /// assert_eq!(Command::from_key(&KeyEvent::char('x')), Some(Command::Insert('x')));
    /// assert_eq!(Command::from_key(&KeyCode::Enter.into()), Some(Command::Insert('\n')));
    /// assert_eq!(Command::from_key(&KeyCode::Tab.into()), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let command = match key.code {
            KeyCode::Left => Self::MoveLeft,
            KeyCode::Right => Self::MoveRight,
            KeyCode::Up => Self::MoveUp,
            KeyCode::Down => Self::MoveDown,
            KeyCode::Home => Self::LineStart,
            KeyCode::End => Self::LineEnd,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Backspace => Self::DeleteBackward,
            KeyCode::Delete => Self::DeleteForward,
            KeyCode::Enter => Self::Insert('\n'),
            KeyCode::Char(ch) if !key.ctrl() && !key.alt() && !ch.is_control() => {
                Self::Insert(ch)
            }
            _ => return None,
        };
        Some(command)
    }
}
