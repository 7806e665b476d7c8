//! A single line of editable text.

use std::fmt;

/// The terminator a line may end with.
pub const LINE_TERMINATOR: char = '\n';

/// One line of the buffer, stored as code points.
///
/// Every line except the last ends with [`LINE_TERMINATOR`]. The terminator
/// occupies a column like any other code point but is never drawn literally.
///
/// Positions passed to the mutating methods must lie in `0..=len`; anything
/// else is a caller bug and panics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<char>,
}

impl Line {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn check_position(&self, pos: usize) {
        assert!(pos <= self.chars.len(), "x position out of range");
    }

    /// Insert `ch` at `pos`, shifting the tail right.
    #[track_caller]
    pub fn insert(&mut self, pos: usize, ch: char) {
        self.check_position(pos);
        self.chars.insert(pos, ch);
    }

    /// Split at `pos`: `self` keeps `[0, pos)` and the tail is returned.
    #[track_caller]
    #[must_use = "the split-off tail is a new line"]
    pub fn split_off(&mut self, pos: usize) -> Self {
        self.check_position(pos);
        Self {
            chars: self.chars.split_off(pos),
        }
    }

    /// Remove the code point at `pos`. `None` when `pos == len`.
    #[track_caller]
    pub fn remove(&mut self, pos: usize) -> Option<char> {
        self.check_position(pos);
        (pos < self.chars.len()).then(|| self.chars.remove(pos))
    }

    /// Move every code point of `other` onto the end of this line.
    pub fn append(&mut self, other: &mut Self) {
        self.chars.append(&mut other.chars);
    }

    #[must_use]
    pub fn last_char(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Whether the line ends with [`LINE_TERMINATOR`].
    #[must_use]
    pub fn has_terminator(&self) -> bool {
        self.last_char() == Some(LINE_TERMINATOR)
    }

    /// Column just past the last printable code point.
    ///
    /// This is where End places the cursor: before the terminator if there
    /// is one, otherwise at the end of the line.
    #[must_use]
    pub fn printable_end(&self) -> usize {
        if self.has_terminator() {
            self.chars.len() - 1
        } else {
            self.chars.len()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}
