//! ANSI sequence parser for terminal input.
//!
//! Parses raw bytes from the terminal into structured events. Supports:
//! - Printable ASCII and UTF-8 characters
//! - Control characters (Enter, Tab, Backspace, Ctrl+letter)
//! - CSI and SS3 sequences for arrows, Home/End and function keys, with
//!   xterm-style modifier parameters
//! - Tilde sequences (Insert, Delete, Page Up/Down, F5+)
//! - Alt+key as ESC followed by the key
//! - Bracketed paste mode
//! - XTWINOPS resize reports
//!
//! The parser is stateless between calls: when a sequence is cut short it
//! reports [`ParseError::Incomplete`] and expects to be called again with the
//! same bytes plus whatever arrived since.

// Parser has many match arms for different terminal sequences
#![allow(clippy::match_same_arms)]
// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]

use crate::input::event::Event;
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence. Holds every byte of the sequence, so
    /// its length is the number of bytes to skip.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 lead byte. Skip one byte.
    InvalidUtf8,
    /// A bracketed paste grew past the size limit without its end marker.
    /// The pending bytes should be discarded.
    PasteBufferOverflow,
}

/// Result of parsing input: the event and how many bytes it used.
pub type ParseResult = Result<(Event, usize), ParseError>;

/// Maximum size for paste content to prevent unbounded memory growth (10 MB).
pub const MAX_PASTE_BUFFER_SIZE: usize = 10 * 1024 * 1024;

const PASTE_START: &[u8] = b"\x1b[200~";
const PASTE_END: &[u8] = b"\x1b[201~";

/// Decoder from terminal bytes to [`Event`]s.
#[derive(Clone, Debug)]
pub struct InputParser {
    max_paste: usize,
}

impl Default for InputParser {
    fn default() -> Self {
        Self {
            max_paste: MAX_PASTE_BUFFER_SIZE,
        }
    }
}

impl InputParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with a custom bracketed paste limit.
    #[must_use]
    pub fn with_paste_limit(max_paste: usize) -> Self {
        Self { max_paste }
    }

    /// Parse bytes into an event.
    ///
    /// Returns the event and number of bytes consumed, or an error.
    /// Call repeatedly, advancing past consumed bytes, until
    /// `Err(ParseError::Empty)` or `Err(ParseError::Incomplete)` is returned.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let first = input[0];

        match first {
            // Escape sequence
            0x1b => self.parse_escape(input),
            0x00 => Ok((KeyEvent::key(KeyCode::Null).into(), 1)),
            0x08 | 0x7f => Ok((KeyEvent::key(KeyCode::Backspace).into(), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab).into(), 1)),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter).into(), 1)),
            0x01..=0x1a => {
                // Ctrl+A through Ctrl+Z
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)).into(), 1))
            }
            // Regular characters (ASCII)
            0x20..=0x7e => Ok((KeyEvent::char(first as char).into(), 1)),
            // UTF-8 sequences
            0x80..=0xff => self.parse_utf8(input),
            _ => Ok((KeyEvent::char(first as char).into(), 1)),
        }
    }

    /// Parse an escape sequence.
    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // Could be just Escape or start of sequence
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            // CSI sequence: ESC [
            b'[' => self.parse_csi(input),
            // SS3 sequence: ESC O (alternate function keys)
            b'O' => self.parse_ss3(input),
            // Alt+key: ESC <char>
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::with_alt(KeyCode::Char(c)).into(), 2))
            }
            // Double escape, or escape followed by a control byte
            _ => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        // Find the final byte (0x40-0x7e)
        let Some(end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|pos| pos + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let final_byte = input[end];
        let params = &input[2..end];
        let consumed = end + 1;

        match final_byte {
            b'A' => self.parse_modified_key(params, KeyCode::Up, consumed),
            b'B' => self.parse_modified_key(params, KeyCode::Down, consumed),
            b'C' => self.parse_modified_key(params, KeyCode::Right, consumed),
            b'D' => self.parse_modified_key(params, KeyCode::Left, consumed),
            b'H' => self.parse_modified_key(params, KeyCode::Home, consumed),
            b'F' => self.parse_modified_key(params, KeyCode::End, consumed),
            b'P' => self.parse_modified_key(params, KeyCode::F(1), consumed),
            b'Q' => self.parse_modified_key(params, KeyCode::F(2), consumed),
            b'S' => self.parse_modified_key(params, KeyCode::F(4), consumed),
            b'Z' => Ok((KeyEvent::key(KeyCode::BackTab).into(), consumed)),

            // Tilde sequences: ESC [ <number> ~
            b'~' => self.parse_tilde_key(input, params, consumed),

            // X10 mouse report: ESC [ M followed by three raw bytes
            b'M' if params.is_empty() => {
                if input.len() < consumed + 3 {
                    return Err(ParseError::Incomplete);
                }
                Err(ParseError::UnrecognizedSequence(
                    input[..consumed + 3].to_vec(),
                ))
            }

            // Resize (some terminals)
            b't' => self.parse_resize(input, params, consumed),

            _ => Err(ParseError::UnrecognizedSequence(input[..consumed].to_vec())),
        }
    }

    /// Parse a key with modifiers from CSI params.
    fn parse_modified_key(&self, params: &[u8], base_key: KeyCode, consumed: usize) -> ParseResult {
        let modifiers = if params.is_empty() {
            KeyModifiers::empty()
        } else {
            self.parse_modifiers(params)?
        };
        Ok((KeyEvent::new(base_key, modifiers).into(), consumed))
    }

    /// Parse modifiers from CSI parameter bytes.
    fn parse_modifiers(&self, params: &[u8]) -> Result<KeyModifiers, ParseError> {
        // Format: 1;N where N encodes modifiers
        // N = 1 + (shift ? 1 : 0) + (alt ? 2 : 0) + (ctrl ? 4 : 0)
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let mut mods = KeyModifiers::empty();
        if let Some(n) = s.split(';').nth(1).and_then(|p| p.parse::<u8>().ok()) {
            let n = n.saturating_sub(1);
            if n & 1 != 0 {
                mods |= KeyModifiers::SHIFT;
            }
            if n & 2 != 0 {
                mods |= KeyModifiers::ALT;
            }
            if n & 4 != 0 {
                mods |= KeyModifiers::CTRL;
            }
        }
        Ok(mods)
    }

    /// Parse tilde key sequences (Insert, Delete, Page Up/Down, F5+).
    fn parse_tilde_key(&self, input: &[u8], params: &[u8], consumed: usize) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let num: u8 = s
            .split(';')
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0);
        let modifiers = self.parse_modifiers(params)?;

        let code = match num {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            11 => KeyCode::F(1),
            12 => KeyCode::F(2),
            13 => KeyCode::F(3),
            14 => KeyCode::F(4),
            15 => KeyCode::F(5),
            17 => KeyCode::F(6),
            18 => KeyCode::F(7),
            19 => KeyCode::F(8),
            20 => KeyCode::F(9),
            21 => KeyCode::F(10),
            23 => KeyCode::F(11),
            24 => KeyCode::F(12),
            25 => KeyCode::F(13),
            26 => KeyCode::F(14),
            28 => KeyCode::F(15),
            29 => KeyCode::F(16),
            31 => KeyCode::F(17),
            32 => KeyCode::F(18),
            33 => KeyCode::F(19),
            34 => KeyCode::F(20),
            200 if s == "200" => return self.parse_paste(input),
            _ => {
                return Err(ParseError::UnrecognizedSequence(
                    input[..consumed].to_vec(),
                ));
            }
        };

        Ok((KeyEvent::new(code, modifiers).into(), consumed))
    }

    /// Parse SS3 sequences (ESC O ...).
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let code = match input[2] {
            b'P' => KeyCode::F(1),
            b'Q' => KeyCode::F(2),
            b'R' => KeyCode::F(3),
            b'S' => KeyCode::F(4),
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'M' => KeyCode::Enter,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };

        Ok((KeyEvent::key(code).into(), 3))
    }

    /// Parse resize sequence (CSI 8 ; height ; width t).
    ///
    /// Only handles XTWINOPS format. Anything else, including non-numeric
    /// sizes, is returned as unrecognized.
    fn parse_resize(&self, input: &[u8], params: &[u8], consumed: usize) -> ParseResult {
        let unrecognized = || ParseError::UnrecognizedSequence(input[..consumed].to_vec());
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let parts: Vec<&str> = s.split(';').collect();

        if parts.len() >= 3 && parts[0] == "8" {
            let height: u16 = parts[1].parse().map_err(|_| unrecognized())?;
            let width: u16 = parts[2].parse().map_err(|_| unrecognized())?;
            Ok((Event::Resize { width, height }, consumed))
        } else {
            Err(unrecognized())
        }
    }

    /// Parse bracketed paste content. `input` starts with the start marker.
    fn parse_paste(&self, input: &[u8]) -> ParseResult {
        let body = &input[PASTE_START.len()..];

        match find_subsequence(body, PASTE_END) {
            Some(pos) if pos <= self.max_paste => {
                let content = String::from_utf8_lossy(&body[..pos]).into_owned();
                Ok((
                    Event::Paste(content),
                    PASTE_START.len() + pos + PASTE_END.len(),
                ))
            }
            Some(_) => Err(ParseError::PasteBufferOverflow),
            // Keep waiting only while the end marker could still fit.
            None if body.len() > self.max_paste + PASTE_END.len() => {
                Err(ParseError::PasteBufferOverflow)
            }
            None => Err(ParseError::Incomplete),
        }
    }

    /// Parse a UTF-8 character sequence.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];

        // Determine expected byte length
        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;

        Ok((KeyEvent::char(c).into(), expected_len))
    }
}

/// Find a subsequence in a slice.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
