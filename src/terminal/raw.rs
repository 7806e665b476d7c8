//! Raw mode terminal handling.
//!
//! Raw mode turns off line buffering, echo and signal keys so the edit loop
//! sees every key press as it happens. Reads time out after 100ms, which
//! [`TerminalInput::raw`](crate::input::TerminalInput::raw) uses to tell a
//! lone Esc from the start of an escape sequence.
//!
//! # Safety
//! termios and ioctl are only reachable through libc FFI.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Terminal attributes saved on entering raw mode, put back on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Switch the terminal behind `fd` to raw mode.
    ///
    /// Fails on anything that is not a terminal.
    pub fn new<F: AsRawFd>(fd: &F) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd)?;

        let mut raw = original;
        raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
        raw.c_oflag &= !libc::OPOST;
        raw.c_cflag |= libc::CS8;
        // Ctrl+C and Ctrl+Z arrive as keys instead of signals.
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = 1;

        set_termios(fd, &raw)?;
        tracing::debug!(fd, "raw mode enabled");
        Ok(Self { fd, original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = set_termios(self.fd, &self.original) {
            tracing::debug!(fd = self.fd, %err, "failed to restore terminal mode");
        }
    }
}

/// Enter raw mode for stdin.
pub fn enable_raw_mode() -> io::Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin())
}

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty accepts any fd value.
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Columns and rows of the terminal on stdout.
///
/// A terminal reporting a zero dimension is an error.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    // SAFETY: winsize is plain old data.
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: TIOCGWINSZ writes into the winsize we pass.
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    // SAFETY: termios is plain old data.
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr writes into the termios we pass.
    if unsafe { libc::tcgetattr(fd, &mut termios) } == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr only reads the termios we pass.
    if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) } == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
