//! Fuzz target for viewport editing.
//!
//! Replays arbitrary command sequences against arbitrarily shaped viewports
//! and checks that geometry and scrolling stay consistent.

#![no_main]

use arbitrary::Arbitrary;
use editbox::{CellBuffer, Command, Viewport, ViewportOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Session {
    width: u8,
    height: u8,
    extra_height: u8,
    wrap: bool,
    autoexpand: bool,
    text: String,
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(char),
    DeleteForward,
    DeleteBackward,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Render,
}

fuzz_target!(|session: Session| {
    let width = u32::from(session.width % 16) + 1;
    let height = u32::from(session.height % 8) + 1;
    let options = ViewportOptions {
        width,
        height,
        wrap: session.wrap,
        autoexpand: session.autoexpand,
        max_height: Some(height + u32::from(session.extra_height % 8)),
        ..ViewportOptions::default()
    };
    let Ok(mut view) = Viewport::with_text(options, &session.text) else {
        return;
    };
    let mut surface = CellBuffer::new(width, height + 8);

    for op in session.ops.into_iter().take(256) {
        let command = match op {
            Op::Insert(ch) => Command::Insert(ch),
            Op::DeleteForward => Command::DeleteForward,
            Op::DeleteBackward => Command::DeleteBackward,
            Op::Left => Command::MoveLeft,
            Op::Right => Command::MoveRight,
            Op::Up => Command::MoveUp,
            Op::Down => Command::MoveDown,
            Op::Home => Command::LineStart,
            Op::End => Command::LineEnd,
            Op::PageUp => Command::PageUp,
            Op::PageDown => Command::PageDown,
            Op::Render => {
                view.render(&mut surface);
                let (x, y) = surface.cursor().expect("viewport always places the cursor");
                assert!(x < width);
                assert!((y as usize) < view.height());
                continue;
            }
        };
        view.apply(command);
        view.update_geometry();
        view.scroll_to_cursor();

        let (cursor, scroll) = (view.cursor(), view.scroll());
        assert!(cursor.y >= scroll.y && cursor.y < scroll.y + view.height());
        assert!(cursor.x >= scroll.x && cursor.x < scroll.x + view.width());
        assert_eq!(view.line_offsets().len(), view.buffer().line_count());
    }
});
