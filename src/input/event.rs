//! Terminal event types.

use crate::input::keyboard::{KeyCode, KeyEvent};

/// A terminal event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event.
    Key(KeyEvent),
    /// Paste event (bracketed paste mode).
    Paste(String),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Get the key event if this is one.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// The key code of a key event, ignoring modifiers.
    #[must_use]
    pub fn key_code(&self) -> Option<KeyCode> {
        self.key().map(|e| e.code)
    }

    #[must_use]
    pub fn is_paste(&self) -> bool {
        matches!(self, Self::Paste(_))
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<KeyCode> for Event {
    fn from(code: KeyCode) -> Self {
        Self::Key(KeyEvent::key(code))
    }
}
