//! Cursor walks through soft-wrapped text.
//!
//! Each walk starts from a known buffer position and records the
//! viewport-space cursor after every step, so a regression shows up as the
//! first row where the path diverges.

mod common;

use common::{place, view_cursor, wrapped};
use editbox::{Position, Viewport};

const WALK_TEXT: &str = "11122233\n4445\n6667778\n\n0\n11122233\n44";

fn walk(view: &mut Viewport, steps: usize, step: fn(&mut Viewport)) -> Vec<(usize, usize)> {
    (0..steps)
        .map(|_| {
            step(view);
            view_cursor(view)
        })
        .collect()
}

// ============================================================================
// Buffer to viewport mapping
// ============================================================================

#[test]
fn test_buffer_to_viewport_across_lines() {
    let view = wrapped(3, 3, "1234567\n12\n1234\n1");
    assert_eq!(view.line_offsets(), &[0, 3, 4, 6]);

    let cases = [
        ((0, 0), (0, 0)),
        ((4, 0), (1, 1)),
        ((6, 0), (0, 2)),
        ((7, 0), (1, 2)),
        ((8, 0), (2, 2)),
        ((1, 1), (1, 3)),
        ((2, 1), (2, 3)),
        ((1, 2), (1, 4)),
        ((3, 2), (0, 5)),
        ((4, 2), (1, 5)),
    ];
    for ((bx, by), (vx, vy)) in cases {
        assert_eq!(
            view.buffer_to_viewport(Position::new(bx, by)),
            Position::new(vx, vy),
            "buffer ({bx}, {by})"
        );
    }
}

#[test]
fn test_walk_text_offsets() {
    let view = wrapped(3, 3, WALK_TEXT);
    assert_eq!(view.line_offsets(), &[0, 3, 5, 8, 9, 10, 13]);
    assert_eq!(view.virtual_height(), 14);
}

// ============================================================================
// Downward walks
// ============================================================================

#[test]
fn test_move_down_through_wrapped_rows() {
    common::init_logging();
    let mut view = wrapped(3, 3, WALK_TEXT);
    view.buffer_mut().set_cursor(0, 0);
    view.move_right();
    view.move_right();
    assert_eq!(view_cursor(&mut view), (2, 0));

    let path = walk(&mut view, 12, Viewport::move_down);
    assert_eq!(
        path,
        [
            (2, 1),
            (2, 2),
            (2, 3),
            (1, 4),
            (2, 5),
            (2, 6),
            (1, 7),
            (0, 8),
            (1, 9),
            (2, 10),
            (2, 11),
            (2, 12),
        ]
    );
}

#[test]
fn test_move_down_single_line() {
    let mut view = wrapped(3, 3, "11122233");
    view.buffer_mut().set_cursor(0, 0);
    view.move_right();
    view.move_right();
    assert_eq!(view_cursor(&mut view), (2, 0));

    let path = walk(&mut view, 3, Viewport::move_down);
    // The last row holds "33"; the cursor clamps to its end and stays.
    assert_eq!(path, [(2, 1), (2, 2), (2, 2)]);
}

#[test]
fn test_move_down_stops_on_last_row() {
    let mut view = wrapped(3, 3, WALK_TEXT);
    place(&mut view, 1, 6);
    let before = view.cursor();
    view.move_down();
    assert_eq!(view_cursor(&mut view), (before.x, before.y));
}

// ============================================================================
// Upward walks
// ============================================================================

#[test]
fn test_move_up_through_wrapped_rows() {
    common::init_logging();
    let mut view = wrapped(3, 3, WALK_TEXT);
    view.buffer_mut().set_cursor(0, 6);
    view.move_right();
    view.move_right();
    assert_eq!(view_cursor(&mut view), (2, 13));

    let path = walk(&mut view, 14, Viewport::move_up);
    assert_eq!(
        path,
        [
            (2, 12),
            (2, 11),
            (2, 10),
            (1, 9),
            (0, 8),
            (1, 7),
            (2, 6),
            (2, 5),
            (1, 4),
            (2, 3),
            (2, 2),
            (2, 1),
            (2, 0),
            (2, 0),
        ]
    );
}

#[test]
fn test_down_then_up_returns_to_sticky_column() {
    let mut view = wrapped(3, 3, WALK_TEXT);
    view.buffer_mut().set_cursor(1, 0);
    view.update_geometry();

    for _ in 0..6 {
        view.move_down();
    }
    for _ in 0..6 {
        view.move_up();
    }
    assert_eq!(view_cursor(&mut view), (1, 0));
    assert_eq!(view.buffer().last_x(), 1);
}

// ============================================================================
// Paging and scrolling
// ============================================================================

#[test]
fn test_page_down_keeps_cursor_visible() {
    let mut view = wrapped(3, 3, WALK_TEXT);
    place(&mut view, 0, 0);
    view.scroll_to_cursor();
    assert_eq!(view.scroll().y, 0);

    view.page_down();
    view.update_geometry();
    view.scroll_to_cursor();
    let (cursor, scroll) = (view.cursor(), view.scroll());
    assert_eq!(cursor, Position::new(0, 3));
    assert!(cursor.y >= scroll.y && cursor.y < scroll.y + view.height());
}

#[test]
fn test_scroll_never_leaves_blank_rows_below_text() {
    let mut view = wrapped(3, 3, WALK_TEXT);
    view.scroll_to_cursor();
    // Cursor sits on the final row, so the window ends there.
    assert_eq!(view.cursor(), Position::new(2, 13));
    assert_eq!(view.scroll().y, 11);

    place(&mut view, 0, 3);
    view.scroll_to_cursor();
    assert_eq!(view.scroll().y, 8);
}
