//! Interactive widgets and static labels.
//!
//! A widget paints itself onto a [`Surface`] and reacts to [`Event`]s. The
//! host owns both; [`Widget::run_until_exit`] is the usual loop tying them
//! together until the user presses one of the widget's exit keys.
//!
//! # Examples
//!
//! ```
//! use editbox::{CellBuffer, EditBox, Event, KeyCode, QueuedInput, Style, Widget};
//!
//! let mut input = QueuedInput::new();
//! input.push_str("hi");
//! input.push_key(KeyCode::Enter);
//!
//! let mut surface = CellBuffer::new(10, 1);
//! let mut field = EditBox::input(0, 0, 10, Style::NONE).unwrap();
//! let exit = field.run_until_exit(&mut input, &mut surface).unwrap();
//!
//! assert_eq!(exit, Event::from(KeyCode::Enter));
//! assert_eq!(field.text(), "hi");
//! assert_eq!(surface.row_text(0), "hi        ");
//! ```

mod edit_box;
mod label;
mod select;

pub use edit_box::{EditBox, EditBoxOptions};
pub use label::{label, text_block};
pub use select::{SelectList, SelectOptions};

use crate::error::Result;
use crate::input::{Event, EventSource};
use crate::surface::Surface;

/// Something that draws itself and handles input.
pub trait Widget {
    /// Process one event. Returns `false` when the event is an exit key and
    /// the widget wants to give up focus.
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Paint the widget. Does not flush.
    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S);

    /// Run the widget until an exit key arrives and return that event.
    ///
    /// The widget is painted and flushed first. Afterwards every blocking
    /// read is followed by handling whatever else is already queued, then a
    /// single repaint. Errors from `input` or `surface` end the loop.
    fn run_until_exit<I, S>(&mut self, input: &mut I, surface: &mut S) -> Result<Event>
    where
        I: EventSource + ?Sized,
        S: Surface + ?Sized,
    {
        self.render(surface);
        surface.flush()?;
        tracing::debug!("widget loop started");

        loop {
            let event = input.next_event()?;
            let mut exit = (!self.handle_event(&event)).then_some(event);
            let mut handled = 1usize;
            while exit.is_none() {
                let Some(event) = input.try_event()? else {
                    break;
                };
                handled += 1;
                if !self.handle_event(&event) {
                    exit = Some(event);
                }
            }

            if handled > 1 || exit.is_none() {
                self.render(surface);
                surface.flush()?;
            }
            tracing::trace!(handled, "events handled");
            if let Some(event) = exit {
                tracing::debug!(?event, "widget loop exited");
                return Ok(event);
            }
        }
    }
}
