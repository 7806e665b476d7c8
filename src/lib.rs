//! `editbox` - text-entry widgets for character-cell terminals
//!
//! A line-oriented text buffer behind a wrap-aware viewport (autoexpand,
//! scroll-to-cursor), a scrolling select list and static labels. Widgets
//! paint onto any [`Surface`] and pull input from any [`EventSource`], so
//! the same code drives a real terminal or an in-memory grid in tests.
//!
//! # Quick Start
//!
//! ```no_run
//! use editbox::{
//!     ChannelInput, EditBox, Style, TerminalInput, TerminalSession, TerminalSurface, Widget,
//! };
//!
//! fn main() -> editbox::Result<()> {
//!     let _session = TerminalSession::start()?;
//!     let mut surface = TerminalSurface::stdout()?;
//!     let mut input = ChannelInput::spawn(TerminalInput::stdin())?;
//!
//!     let mut field = EditBox::input(2, 1, 30, Style::NONE)?;
//!     field.run_until_exit(&mut input, &mut surface)?;
//!     Ok(())
//! }
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow text::TextBuffer etc
#![allow(clippy::missing_errors_doc)] // Errors are listed on the Error enum
#![allow(clippy::missing_panics_doc)] // Panics are documented where callers can cause them
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::too_many_arguments)] // Widget constructors take a full rectangle plus style

pub mod ansi;
pub mod cell;
pub mod color;
pub mod error;
pub mod input;
pub mod style;
pub mod surface;
pub mod terminal;
pub mod text;
pub mod widget;

// Re-export core types at crate root
pub use cell::Cell;
pub use color::Color;
pub use error::{Error, Result};
pub use style::{Style, TextAttributes};

// Re-export input types
pub use input::{
    ChannelInput, Event, EventSource, InputParser, KeyCode, KeyEvent, KeyModifiers, QueuedInput,
    TerminalInput,
};

// Re-export commonly used types
pub use surface::{CellBuffer, Surface, TerminalSurface};
pub use terminal::{RawModeGuard, TerminalSession, enable_raw_mode, is_tty, terminal_size};
pub use text::{Command, Line, Position, TextBuffer, Viewport, ViewportOptions};
pub use widget::{EditBox, EditBoxOptions, SelectList, SelectOptions, Widget, label, text_block};
