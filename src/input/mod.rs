//! Terminal input.
//!
//! Raw bytes are decoded by [`InputParser`] into [`Event`]s; an
//! [`EventSource`] delivers them to widgets one at a time.

mod event;
mod keyboard;
mod parser;
mod source;

pub use event::Event;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, MAX_PASTE_BUFFER_SIZE, ParseError, ParseResult};
pub use source::{ChannelInput, EventSource, INPUT_QUEUE_CAPACITY, QueuedInput, TerminalInput};
