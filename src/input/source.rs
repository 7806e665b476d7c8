//! Where events come from.
//!
//! Widgets pull events through the [`EventSource`] trait so the same edit
//! loop runs against a real terminal, a background reader thread, or a
//! scripted queue in tests.
//!
//! - [`QueuedInput`]: events prepared up front
//! - [`TerminalInput`]: bytes from any [`Read`] decoded by [`InputParser`]
//! - [`ChannelInput`]: another source moved onto a reader thread, with
//!   events handed over through a bounded queue

use crate::error::{Error, Result};
use crate::input::event::Event;
use crate::input::keyboard::{KeyCode, KeyEvent};
use crate::input::parser::{InputParser, ParseError};
use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Capacity of the queue between the reader thread and [`ChannelInput`].
pub const INPUT_QUEUE_CAPACITY: usize = 256;

const ESC: u8 = 0x1b;

/// A stream of terminal events.
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> Result<Event>;

    /// Return an event that is already available, without blocking.
    fn try_event(&mut self) -> Result<Option<Event>> {
        Ok(None)
    }
}

impl<T: EventSource + ?Sized> EventSource for &mut T {
    fn next_event(&mut self) -> Result<Event> {
        (**self).next_event()
    }

    fn try_event(&mut self) -> Result<Option<Event>> {
        (**self).try_event()
    }
}

impl<T: EventSource + ?Sized> EventSource for Box<T> {
    fn next_event(&mut self) -> Result<Event> {
        (**self).next_event()
    }

    fn try_event(&mut self) -> Result<Option<Event>> {
        (**self).try_event()
    }
}

/// Scripted events. Running out is [`Error::InputClosed`].
///
/// # Examples
///
/// ```
/// use editbox::{EventSource, KeyCode, QueuedInput};
///
/// let mut input = QueuedInput::new();
/// input.push_str("hi");
/// input.push_key(KeyCode::Esc);
/// assert_eq!(input.len(), 3);
/// assert!(input.next_event().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueuedInput {
    events: VecDeque<Event>,
}

impl QueuedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queue a key press without modifiers.
    pub fn push_key(&mut self, code: KeyCode) {
        self.push(Event::Key(KeyEvent::key(code)));
    }

    /// Queue one key press per character; `'\n'` becomes Enter.
    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => self.push_key(KeyCode::Enter),
                ch => self.push_key(KeyCode::Char(ch)),
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for QueuedInput {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl EventSource for QueuedInput {
    fn next_event(&mut self) -> Result<Event> {
        self.events.pop_front().ok_or(Error::InputClosed)
    }

    fn try_event(&mut self) -> Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

/// Events decoded from a byte stream.
///
/// Bytes are read in chunks and kept until they form a complete event.
/// Unrecognized sequences and invalid bytes are skipped.
pub struct TerminalInput<R> {
    reader: R,
    parser: InputParser,
    pending: Vec<u8>,
    zero_read_is_timeout: bool,
}

impl<R: Read> TerminalInput<R> {
    /// Decode a finite stream: end of input is [`Error::InputClosed`].
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: InputParser::new(),
            pending: Vec::new(),
            zero_read_is_timeout: false,
        }
    }

    /// Decode a raw-mode terminal, where a zero-byte read means the read
    /// timed out rather than that input ended.
    ///
    /// A lone ESC still pending after a timeout is reported as the Esc key.
    pub fn raw(reader: R) -> Self {
        Self {
            zero_read_is_timeout: true,
            ..Self::new(reader)
        }
    }

    /// Replace the parser, e.g. to change the paste limit.
    #[must_use]
    pub fn with_parser(mut self, parser: InputParser) -> Self {
        self.parser = parser;
        self
    }

    /// Decode one event from the pending bytes, if a whole one is there.
    fn decode_pending(&mut self) -> Option<Event> {
        loop {
            match self.parser.parse(&self.pending) {
                Ok((event, consumed)) => {
                    self.pending.drain(..consumed);
                    return Some(event);
                }
                Err(ParseError::Empty | ParseError::Incomplete) => return None,
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    tracing::debug!(sequence = ?String::from_utf8_lossy(&seq), "skipping unrecognized input");
                    self.pending.drain(..seq.len().min(self.pending.len()));
                }
                Err(ParseError::InvalidUtf8) => {
                    tracing::debug!(byte = self.pending[0], "skipping invalid UTF-8 byte");
                    self.pending.drain(..1);
                }
                Err(ParseError::PasteBufferOverflow) => {
                    tracing::debug!(bytes = self.pending.len(), "dropping oversized paste");
                    self.pending.clear();
                }
            }
        }
    }

    fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; 1024];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(n) => {
                    self.pending.extend_from_slice(&chunk[..n]);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn take_lone_escape(&mut self) -> Option<Event> {
        (self.pending.first() == Some(&ESC)).then(|| {
            self.pending.drain(..1);
            Event::Key(KeyEvent::key(KeyCode::Esc))
        })
    }
}

impl TerminalInput<io::Stdin> {
    /// Standard input of a terminal in raw mode.
    #[must_use]
    pub fn stdin() -> Self {
        Self::raw(io::stdin())
    }
}

impl<R: Read> EventSource for TerminalInput<R> {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            if let Some(event) = self.decode_pending() {
                return Ok(event);
            }
            if self.fill()? > 0 {
                continue;
            }
            if let Some(event) = self.take_lone_escape() {
                return Ok(event);
            }
            if !self.zero_read_is_timeout {
                if !self.pending.is_empty() {
                    tracing::debug!(bytes = self.pending.len(), "input ended mid-sequence");
                }
                return Err(Error::InputClosed);
            }
        }
    }

    fn try_event(&mut self) -> Result<Option<Event>> {
        Ok(self.decode_pending())
    }
}

/// Events produced on a dedicated reader thread.
///
/// The thread forwards every event (and the first error, after which it
/// stops) through a bounded queue of [`INPUT_QUEUE_CAPACITY`] entries.
pub struct ChannelInput {
    rx: Receiver<Result<Event>>,
}

impl ChannelInput {
    /// Move `source` onto a new reader thread.
    pub fn spawn<S>(mut source: S) -> Result<Self>
    where
        S: EventSource + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(INPUT_QUEUE_CAPACITY);
        thread::Builder::new()
            .name("editbox-input".to_string())
            .spawn(move || {
                loop {
                    let event = source.next_event();
                    let failed = event.is_err();
                    if tx.send(event).is_err() || failed {
                        break;
                    }
                }
                tracing::debug!("input thread exiting");
            })?;
        Ok(Self { rx })
    }
}

impl EventSource for ChannelInput {
    fn next_event(&mut self) -> Result<Event> {
        self.rx.recv().map_err(|_| Error::InputClosed)?
    }

    fn try_event(&mut self) -> Result<Option<Event>> {
        match self.rx.try_recv() {
            Ok(event) => event.map(Some),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::InputClosed),
        }
    }
}
