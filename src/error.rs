//! Error types for editbox.

use std::fmt;
use std::io;

/// Result type alias for editbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for editbox operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Widget dimension error (zero width or height).
    InvalidDimensions { width: u32, height: u32 },
    /// Autoexpand bounds where the maximum is below the minimum.
    InvalidHeightRange { min: u32, max: u32 },
    /// A selection list was given no selectable (non-empty) items.
    NoSelectableItems,
    /// The input source ended before an exit key arrived.
    InputClosed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::InvalidHeightRange { min, max } => {
                write!(f, "invalid height range: max {max} is below min {min}")
            }
            Self::NoSelectableItems => f.write_str("selection list has no selectable items"),
            Self::InputClosed => f.write_str("input closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
