//! Terminal color type.
//!
//! Character-cell displays address colors in three ways: the terminal's own
//! default, an index into the 256-color palette, or a 24-bit RGB triple. The
//! [`Color`] enum covers all three and knows how to parse hex strings.
//!
//! # Examples
//!
//! ```
//! use editbox::Color;
//!
//! let accent = Color::from_hex("#1a1a2e").unwrap();
//! assert_eq!(accent, Color::Rgb(0x1a, 0x1a, 0x2e));
//!
//! // Palette colors map straight to the terminal's 256-color table.
//! let blue = Color::Indexed(63);
//! assert!(!blue.is_default());
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Foreground or background color of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Whatever the terminal uses when no color is set.
    #[default]
    Default,
    /// Entry of the 256-color palette (0-15 are the classic ANSI colors).
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB) and 6-char (#RRGGBB) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::Rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Check if this is the terminal default color.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "default" => Ok(Self::Default),
            other => {
                if let Ok(index) = other.parse::<u8>() {
                    return Ok(Self::Indexed(index));
                }
                Self::from_hex(other).ok_or_else(|| Error::InvalidColor(other.to_string()))
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Indexed(index) => write!(f, "{index}"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
