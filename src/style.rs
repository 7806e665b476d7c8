//! Text styling with attributes and colors.
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`Style`]: Foreground, background, and attributes applied to a cell
//!
//! # Examples
//!
//! ```
//! use editbox::{Color, Style, TextAttributes};
//!
//! let field = Style::new(Color::WHITE, Color::Indexed(63));
//! let cursor_row = field.with_attributes(TextAttributes::BOLD);
//! assert!(cursor_row.attributes.contains(TextAttributes::BOLD));
//! ```

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

/// Colors and attributes applied to every cell a widget paints.
///
/// `Color::Default` means "use terminal default" rather than a specific
/// color, so an unstyled widget respects the user's terminal theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Style {
    /// Style with terminal default colors and no attributes.
    pub const NONE: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        attributes: TextAttributes::empty(),
    };

    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Color) -> Self {
        Self { fg: color, ..self }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Color) -> Self {
        Self { bg: color, ..self }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Style with foreground and background exchanged.
    ///
    /// Used for highlighted rows when no explicit highlight style is given.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
            attributes: self.attributes,
        }
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_default() && self.bg.is_default() && self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builders() {
        let style = Style::NONE
            .with_fg(Color::RED)
            .with_bg(Color::BLACK)
            .with_attributes(TextAttributes::BOLD | TextAttributes::UNDERLINE);

        assert_eq!(style.fg, Color::RED);
        assert_eq!(style.bg, Color::BLACK);
        assert!(style.attributes.contains(TextAttributes::BOLD));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_reversed_keeps_attributes() {
        let style = Style::new(Color::WHITE, Color::Indexed(63))
            .with_attributes(TextAttributes::ITALIC)
            .reversed();
        assert_eq!(style.fg, Color::Indexed(63));
        assert_eq!(style.bg, Color::WHITE);
        assert_eq!(style.attributes, TextAttributes::ITALIC);
    }

    #[test]
    fn test_is_empty() {
        assert!(Style::NONE.is_empty());
        assert!(Style::default().is_empty());
        assert!(!Style::NONE.with_bg(Color::BLUE).is_empty());
    }
}
