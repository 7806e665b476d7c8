//! Editing flows: buffer operations end to end, and widgets driven by
//! queued, decoded and threaded input.

mod common;

use std::io::Cursor;

use common::{frame, init_logging, script};
use editbox::{
    CellBuffer, ChannelInput, EditBox, EditBoxOptions, Error, Event, EventSource, KeyCode,
    KeyEvent, Position, QueuedInput, Style, TerminalInput, TextBuffer, ViewportOptions, Widget,
};

// ============================================================================
// Buffer operations
// ============================================================================

#[test]
fn test_backspace_walks_back_to_empty() {
    let mut buf = TextBuffer::with_text("12\n1");
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.cursor(), Position::new(1, 1));

    buf.delete_backward();
    assert_eq!(buf.text(), "12\n");
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.cursor(), Position::new(0, 1));

    buf.delete_backward();
    assert_eq!(buf.text(), "12");
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.cursor(), Position::new(2, 0));

    buf.delete_backward();
    buf.delete_backward();
    assert_eq!(buf.text(), "");
    assert_eq!(buf.line_count(), 1);
    assert_eq!(buf.cursor(), Position::new(0, 0));
}

#[test]
fn test_delete_forward_joins_then_stops_at_end() {
    let mut buf = TextBuffer::with_text("12\n3\n45");
    buf.set_cursor(0, 1);

    buf.delete_forward();
    assert_eq!(buf.text(), "12\n\n45");
    assert_eq!(buf.line_count(), 3);

    buf.delete_forward();
    assert_eq!(buf.text(), "12\n45");
    assert_eq!(buf.line_count(), 2);

    buf.delete_forward();
    buf.delete_forward();
    buf.delete_forward();
    assert_eq!(buf.text(), "12\n");
    assert_eq!(buf.line_count(), 2);
    assert_eq!(buf.cursor(), Position::new(0, 1));
}

#[test]
fn test_line_end_stops_before_terminator() {
    let mut buf = TextBuffer::with_text("12\n3\n45");
    buf.set_cursor(0, 0);
    buf.move_to_line_end();
    assert_eq!(buf.cursor(), Position::new(2, 0));

    buf.set_cursor(0, 2);
    buf.move_to_line_end();
    assert_eq!(buf.cursor(), Position::new(2, 2));
}

#[test]
fn test_vertical_moves_onto_empty_line() {
    let mut buf = TextBuffer::with_text("12\n");
    assert_eq!(buf.cursor(), Position::new(0, 1));

    buf.move_vertical(-1);
    assert_eq!(buf.cursor(), Position::new(0, 0));
    buf.move_vertical(1);
    assert_eq!(buf.cursor(), Position::new(0, 1));
}

// ============================================================================
// Widgets over queued input
// ============================================================================

#[test]
fn test_input_field_scrolls_sideways() {
    init_logging();
    let mut input = script("hello world", &[KeyCode::Enter]);
    let mut surface = CellBuffer::new(8, 1);
    let mut field = EditBox::input(0, 0, 6, Style::NONE).unwrap();

    let exit = field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(exit, Event::from(KeyCode::Enter));
    assert_eq!(field.text(), "hello world");
    // Cursor past the last character sits in the last column.
    assert_eq!(frame(&surface), "|world   |");
    assert_eq!(surface.cursor(), Some((5, 0)));
}

#[test]
fn test_textarea_edits_in_the_middle() {
    let mut input = script(
        "first\nthird",
        &[
            KeyCode::Up,
            KeyCode::End,
            KeyCode::Enter,
            KeyCode::Char('2'),
            KeyCode::Down,
            KeyCode::Home,
            KeyCode::Delete,
            KeyCode::Esc,
        ],
    );
    let mut surface = CellBuffer::new(10, 4);
    let mut area = EditBox::textarea(0, 0, 10, 4, Style::NONE, false).unwrap();

    area.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(area.text(), "first\n2\nhird");
    assert_eq!(
        frame(&surface),
        "|first     |\n|2         |\n|hird      |\n|          |"
    );
    assert_eq!(surface.cursor(), Some((0, 2)));
}

#[test]
fn test_paste_lands_at_cursor() {
    let mut input = QueuedInput::new();
    input.push_str("ad");
    input.push_key(KeyCode::Left);
    input.push(Event::Paste("b\r\nc".to_string()));
    input.push_key(KeyCode::Esc);

    let mut surface = CellBuffer::new(5, 3);
    let mut area = EditBox::textarea(0, 0, 5, 3, Style::NONE, true).unwrap();
    area.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(area.text(), "ab\ncd");
    assert_eq!(area.viewport().buffer().cursor(), Position::new(1, 1));
}

#[test]
fn test_autoexpand_box_grows_with_input() {
    let mut field = EditBox::new(EditBoxOptions {
        viewport: ViewportOptions {
            width: 4,
            height: 1,
            wrap: true,
            autoexpand: true,
            max_height: Some(3),
            ..ViewportOptions::default()
        },
        ..EditBoxOptions::default()
    })
    .unwrap();
    let mut surface = CellBuffer::new(4, 3);

    let mut input = script("abcdefg", &[KeyCode::Esc]);
    field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(field.viewport().height(), 2);
    assert_eq!(frame(&surface), "|abcd|\n|efg |\n|    |");

    let mut input = script("hijklmnop", &[KeyCode::Esc]);
    field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(field.viewport().height(), 3);
    assert_eq!(field.viewport().virtual_height(), 4);
    // The cursor wrapped onto a fifth row, so the window follows it there.
    assert_eq!(frame(&surface), "|ijkl|\n|mnop|\n|    |");
    assert_eq!(surface.cursor(), Some((0, 2)));
}

#[test]
fn test_closed_input_ends_the_loop() {
    let mut input = script("abc", &[]);
    let mut surface = CellBuffer::new(5, 1);
    let mut field = EditBox::input(0, 0, 5, Style::NONE).unwrap();

    let err = field.run_until_exit(&mut input, &mut surface).unwrap_err();
    assert!(matches!(err, Error::InputClosed));
    assert_eq!(field.text(), "abc");
}

// ============================================================================
// Widgets over decoded byte streams
// ============================================================================

#[test]
fn test_field_from_terminal_bytes() {
    init_logging();
    let bytes = b"ab\x1b[Dx\x7f\x1b[Cc\x1b[200~ok\x1b[201~\r".to_vec();
    let mut input = TerminalInput::new(Cursor::new(bytes));
    let mut surface = CellBuffer::new(10, 1);
    let mut field = EditBox::input(0, 0, 10, Style::NONE).unwrap();

    let exit = field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(exit, Event::from(KeyCode::Enter));
    assert_eq!(field.text(), "abcok");
    assert_eq!(surface.row_text(0), "abcok     ");
}

#[test]
fn test_trailing_escape_exits() {
    let mut input = TerminalInput::new(Cursor::new(b"hi\x1b".to_vec()));
    let mut surface = CellBuffer::new(4, 1);
    let mut field = EditBox::input(0, 0, 4, Style::NONE).unwrap();

    let exit = field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(exit, Event::from(KeyCode::Esc));
    assert_eq!(field.text(), "hi");
}

#[test]
fn test_ctrl_keys_do_not_edit() {
    let mut input = TerminalInput::new(Cursor::new(b"a\x01\x05b\x1b".to_vec()));
    let mut field = EditBox::input(0, 0, 4, Style::NONE).unwrap();
    let mut surface = CellBuffer::new(4, 1);

    field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(field.text(), "ab");
}

// ============================================================================
// Threaded input
// ============================================================================

#[test]
fn test_channel_input_drives_widget() {
    init_logging();
    let source = script("typed", &[KeyCode::Backspace, KeyCode::Tab]);
    let mut input = ChannelInput::spawn(source).unwrap();
    let mut surface = CellBuffer::new(6, 1);
    let mut field = EditBox::input(0, 0, 6, Style::NONE).unwrap();

    let exit = field.run_until_exit(&mut input, &mut surface).unwrap();
    assert_eq!(exit, Event::Key(KeyEvent::key(KeyCode::Tab)));
    assert_eq!(field.text(), "type");
    assert_eq!(surface.row_text(0), "type  ");

    // The source ran dry after Tab, so the thread reports it and stops.
    assert!(matches!(input.next_event(), Err(Error::InputClosed)));
    assert!(matches!(input.next_event(), Err(Error::InputClosed)));
}
