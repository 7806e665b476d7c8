//! Helpers shared by the integration tests.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Shared test helper; not every integration test uses every helper

use editbox::{CellBuffer, Event, KeyCode, Position, QueuedInput, Viewport, ViewportOptions};
use tracing::Level;

/// Route library logs to the test output. Safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Every row of the surface between `|` marks, so trailing blanks show.
pub fn frame(surface: &CellBuffer) -> String {
    (0..surface.height())
        .map(|y| format!("|{}|", surface.row_text(y)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A soft-wrapping viewport at the origin holding `text`, cursor at the end.
pub fn wrapped(width: u32, height: u32, text: &str) -> Viewport {
    Viewport::with_text(
        ViewportOptions {
            width,
            height,
            wrap: true,
            ..ViewportOptions::default()
        },
        text,
    )
    .expect("valid viewport geometry")
}

/// A horizontally scrolling viewport at the origin holding `text`.
pub fn unwrapped(width: u32, height: u32, text: &str) -> Viewport {
    Viewport::with_text(
        ViewportOptions {
            width,
            height,
            ..ViewportOptions::default()
        },
        text,
    )
    .expect("valid viewport geometry")
}

/// Put the buffer cursor at `(x, y)` and refresh the viewport geometry.
pub fn place(view: &mut Viewport, x: usize, y: usize) {
    view.buffer_mut().set_cursor(x, y);
    view.update_geometry();
}

/// Viewport-space cursor as a tuple, after refreshing geometry.
pub fn view_cursor(view: &mut Viewport) -> (usize, usize) {
    view.update_geometry();
    let Position { x, y } = view.cursor();
    (x, y)
}

/// Typed text followed by the given keys.
pub fn script(text: &str, keys: &[KeyCode]) -> QueuedInput {
    let mut input = QueuedInput::new();
    input.push_str(text);
    for &key in keys {
        input.push(Event::from(key));
    }
    input
}
