//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Color;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Run a sequence writer against a scratch buffer and return the text.
fn to_string(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Generate the SGR sequence selecting a foreground color.
#[must_use]
pub fn fg_color(color: Color) -> String {
    to_string(|w| write_fg_color(w, color))
}

/// Generate the SGR sequence selecting a background color.
#[must_use]
pub fn bg_color(color: Color) -> String {
    to_string(|w| write_bg_color(w, color))
}

/// Write a u8 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// Write a u32 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u32_decimal(w: &mut impl Write, n: u32) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    let mut buf = [0u8; 10];
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Write one color selection. `base` is 30 for foreground, 40 for background.
fn write_color(w: &mut impl Write, color: Color, base: u8) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    match color {
        Color::Default => write_u8_decimal(w, base + 9)?,
        // Classic colors use the short codes: 30-37/40-47 and 90-97/100-107.
        Color::Indexed(idx) if idx < 8 => write_u8_decimal(w, base + idx)?,
        Color::Indexed(idx) if idx < 16 => write_u8_decimal(w, base + 60 + idx - 8)?,
        Color::Indexed(idx) => {
            write_u8_decimal(w, base + 8)?;
            w.write_all(b";5;")?;
            write_u8_decimal(w, idx)?;
        }
        Color::Rgb(r, g, b) => {
            write_u8_decimal(w, base + 8)?;
            w.write_all(b";2;")?;
            write_u8_decimal(w, r)?;
            w.write_all(b";")?;
            write_u8_decimal(w, g)?;
            w.write_all(b";")?;
            write_u8_decimal(w, b)?;
        }
    }
    w.write_all(b"m")
}

/// Write the SGR sequence selecting a foreground color.
pub fn write_fg_color(w: &mut impl Write, color: Color) -> io::Result<()> {
    write_color(w, color, 30)
}

/// Write the SGR sequence selecting a background color.
pub fn write_bg_color(w: &mut impl Write, color: Color) -> io::Result<()> {
    write_color(w, color, 40)
}

/// SGR codes switching on each attribute, in flag order.
const ATTRIBUTE_CODES: [(TextAttributes, &str); 8] = [
    (TextAttributes::BOLD, "1"),
    (TextAttributes::DIM, "2"),
    (TextAttributes::ITALIC, "3"),
    (TextAttributes::UNDERLINE, "4"),
    (TextAttributes::BLINK, "5"),
    (TextAttributes::INVERSE, "7"),
    (TextAttributes::HIDDEN, "8"),
    (TextAttributes::STRIKETHROUGH, "9"),
];

/// Generate SGR sequence for text attributes.
#[must_use]
pub fn attributes(attrs: TextAttributes) -> String {
    to_string(|w| write_attributes(w, attrs))
}

/// Write SGR sequence for text attributes. Writes nothing for no attributes.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    let mut codes = ATTRIBUTE_CODES
        .iter()
        .filter(|(flag, _)| attrs.contains(*flag))
        .map(|(_, code)| *code)
        .peekable();
    if codes.peek().is_none() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    for (i, code) in codes.enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        w.write_all(code.as_bytes())?;
    }
    w.write_all(b"m")
}

/// Generate cursor position sequence (0-indexed in, 1-indexed out).
#[must_use]
pub fn cursor_position(row: u32, col: u32) -> String {
    to_string(|w| write_cursor_position(w, row, col))
}

/// Write cursor position sequence to a writer.
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u32_decimal(w, row + 1)?;
    w.write_all(b";")?;
    write_u32_decimal(w, col + 1)?;
    w.write_all(b"H")
}

/// Generate relative cursor movement.
#[must_use]
pub fn cursor_move(dx: i32, dy: i32) -> String {
    to_string(|w| write_cursor_move(w, dx, dy))
}

/// Write relative cursor movement to a writer.
pub fn write_cursor_move(w: &mut impl Write, dx: i32, dy: i32) -> io::Result<()> {
    if dy != 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dy.unsigned_abs())?;
        w.write_all(if dy < 0 { b"A" } else { b"B" })?;
    }
    if dx != 0 {
        w.write_all(b"\x1b[")?;
        write_u32_decimal(w, dx.unsigned_abs())?;
        w.write_all(if dx > 0 { b"C" } else { b"D" })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_colors() {
        assert_eq!(fg_color(Color::Default), "\x1b[39m");
        assert_eq!(fg_color(Color::RED), "\x1b[31m");
        assert_eq!(fg_color(Color::Indexed(9)), "\x1b[91m");
        assert_eq!(fg_color(Color::Indexed(63)), "\x1b[38;5;63m");
        assert_eq!(fg_color(Color::Rgb(255, 0, 128)), "\x1b[38;2;255;0;128m");
    }

    #[test]
    fn test_bg_colors() {
        assert_eq!(bg_color(Color::Default), "\x1b[49m");
        assert_eq!(bg_color(Color::BLUE), "\x1b[44m");
        assert_eq!(bg_color(Color::Indexed(15)), "\x1b[107m");
        assert_eq!(bg_color(Color::Indexed(255)), "\x1b[48;5;255m");
        assert_eq!(bg_color(Color::Rgb(1, 22, 3)), "\x1b[48;2;1;22;3m");
    }

    #[test]
    fn test_attributes() {
        assert_eq!(attributes(TextAttributes::empty()), "");
        assert_eq!(attributes(TextAttributes::BOLD), "\x1b[1m");
        assert_eq!(
            attributes(TextAttributes::BOLD | TextAttributes::UNDERLINE | TextAttributes::INVERSE),
            "\x1b[1;4;7m"
        );
        assert_eq!(attributes(TextAttributes::STRIKETHROUGH), "\x1b[9m");
    }

    #[test]
    fn test_cursor_position_is_one_based() {
        assert_eq!(cursor_position(0, 0), "\x1b[1;1H");
        assert_eq!(cursor_position(9, 119), "\x1b[10;120H");
        assert_eq!(cursor_position(12_344, 0), "\x1b[12345;1H");
    }

    #[test]
    fn test_cursor_move_relative() {
        assert_eq!(cursor_move(0, 0), "");
        assert_eq!(cursor_move(3, 0), "\x1b[3C");
        assert_eq!(cursor_move(-2, 0), "\x1b[2D");
        assert_eq!(cursor_move(0, -1), "\x1b[1A");
        assert_eq!(cursor_move(5, 12), "\x1b[12B\x1b[5C");
    }
}
