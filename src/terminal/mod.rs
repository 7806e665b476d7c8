//! Terminal session setup and teardown.

mod raw;

pub use raw::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};

use crate::ansi::sequences;
use std::io::{self, Write};

/// Terminal modes held for the lifetime of an interactive session.
///
/// Every mode switched on is switched off again by [`cleanup`](Self::cleanup),
/// which also runs on drop.
///
/// # Examples
///
/// ```
/// use editbox::TerminalSession;
///
/// let mut session = TerminalSession::new(Vec::new());
/// session.enter_alt_screen().unwrap();
/// session.hide_cursor().unwrap();
/// session.cleanup().unwrap();
/// assert!(!session.is_alt_screen());
/// ```
pub struct TerminalSession<W: Write> {
    writer: W,
    alt_screen: bool,
    cursor_hidden: bool,
    bracketed_paste: bool,
    raw_mode_guard: Option<RawModeGuard>,
}

impl TerminalSession<io::Stdout> {
    /// Raw mode, alternate screen, hidden cursor and bracketed paste on
    /// stdout, as an interactive editor wants them.
    pub fn start() -> io::Result<Self> {
        let mut session = Self::new(io::stdout());
        session.enter_raw_mode()?;
        session.enter_alt_screen()?;
        session.hide_cursor()?;
        session.enable_bracketed_paste()?;
        session.clear()?;
        session.flush()?;
        tracing::debug!("terminal session started");
        Ok(session)
    }
}

impl<W: Write> TerminalSession<W> {
    /// Wrap `writer` without changing any mode yet.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            alt_screen: false,
            cursor_hidden: false,
            bracketed_paste: false,
            raw_mode_guard: None,
        }
    }

    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode_guard.is_some()
    }

    #[must_use]
    pub fn is_alt_screen(&self) -> bool {
        self.alt_screen
    }

    /// Put stdin into raw mode.
    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        if self.raw_mode_guard.is_none() {
            self.raw_mode_guard = Some(enable_raw_mode()?);
        }
        Ok(())
    }

    /// Restore the terminal mode saved by [`enter_raw_mode`](Self::enter_raw_mode).
    pub fn exit_raw_mode(&mut self) {
        self.raw_mode_guard = None;
    }

    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        if !self.alt_screen {
            self.writer.write_all(sequences::ALT_SCREEN_ON.as_bytes())?;
            self.alt_screen = true;
        }
        Ok(())
    }

    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        if self.alt_screen {
            self.writer.write_all(sequences::ALT_SCREEN_OFF.as_bytes())?;
            self.alt_screen = false;
        }
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        if !self.cursor_hidden {
            self.writer.write_all(sequences::CURSOR_HIDE.as_bytes())?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            self.writer.write_all(sequences::CURSOR_SHOW.as_bytes())?;
            self.cursor_hidden = false;
        }
        Ok(())
    }

    /// Ask the terminal to wrap pasted text in `ESC[200~ ... ESC[201~`.
    pub fn enable_bracketed_paste(&mut self) -> io::Result<()> {
        if !self.bracketed_paste {
            self.writer
                .write_all(sequences::BRACKETED_PASTE_ON.as_bytes())?;
            self.bracketed_paste = true;
        }
        Ok(())
    }

    pub fn disable_bracketed_paste(&mut self) -> io::Result<()> {
        if self.bracketed_paste {
            self.writer
                .write_all(sequences::BRACKETED_PASTE_OFF.as_bytes())?;
            self.bracketed_paste = false;
        }
        Ok(())
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::CLEAR_SCREEN.as_bytes())?;
        self.writer.write_all(sequences::CURSOR_HOME.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Undo every mode this session switched on.
    pub fn cleanup(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::RESET.as_bytes())?;
        self.disable_bracketed_paste()?;
        self.show_cursor()?;
        self.leave_alt_screen()?;
        self.exit_raw_mode();
        self.flush()
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(err) = self.cleanup() {
            tracing::debug!(%err, "terminal cleanup failed");
        }
    }
}
