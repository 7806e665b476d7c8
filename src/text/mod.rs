//! Line-oriented text editing.
//!
//! - [`Line`]: the characters of one line, terminator included
//! - [`TextBuffer`]: the lines plus a cursor, with the editing primitives
//! - [`Viewport`]: a buffer seen through a fixed-width window, with soft
//!   wrapping, automatic height and scrolling
//! - [`Command`]: the editing steps keys map to
//!
//! # Examples
//!
//! ```
//! use editbox::{TextBuffer, Viewport, ViewportOptions};
//!
//! let mut buffer = TextBuffer::with_text("hello");
//! buffer.move_to_line_end();
//! buffer.insert('!');
//! assert_eq!(buffer.text(), "hello!");
//!
//! let options = ViewportOptions {
//!     width: 4,
//!     height: 1,
//!     wrap: true,
//!     autoexpand: true,
//!     max_height: Some(5),
//!     ..ViewportOptions::default()
//! };
//! let view = Viewport::with_text(options, "hello!").unwrap();
//! assert_eq!(view.height(), 2);
//! ```

mod buffer;
mod command;
mod line;
mod view;

pub use buffer::{Position, TextBuffer};
pub use command::Command;
pub use line::{LINE_TERMINATOR, Line};
pub use view::{TERMINATOR_GLYPH, Viewport, ViewportOptions};
