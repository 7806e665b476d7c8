//! Scrolling list with a single selected item.

use crate::error::{Error, Result};
use crate::input::{Event, KeyCode};
use crate::style::{Style, TextAttributes};
use crate::surface::Surface;
use crate::widget::Widget;
use crate::widget::label::label;

/// Select list configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptions {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    /// Visible rows.
    pub height: u32,
    /// Style of unselected rows.
    pub style: Style,
    pub selected_style: Style,
    /// Keys that end [`Widget::run_until_exit`].
    pub exit_keys: Vec<KeyCode>,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 20,
            height: 5,
            style: Style::NONE,
            selected_style: Style::NONE.with_attributes(TextAttributes::INVERSE),
            exit_keys: vec![KeyCode::Enter, KeyCode::Esc, KeyCode::Tab],
        }
    }
}

/// A list of text items, one of them selected.
///
/// Empty items act as separators: they are shown but the selection skips
/// over them.
///
/// # Examples
///
/// ```
/// use editbox::{SelectList, SelectOptions};
///
/// let mut list = SelectList::new(
///     SelectOptions { height: 3, ..SelectOptions::default() },
///     ["red", "", "green", "blue"],
/// )
/// .unwrap();
/// list.cursor_down();
/// assert_eq!(list.text(), "green");
/// assert_eq!(list.selected_index(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SelectList {
    items: Vec<String>,
    /// Indices of the non-empty items, ascending.
    selectable: Vec<usize>,
    /// Position in `selectable`.
    cursor: usize,
    /// First visible item.
    scroll: usize,
    options: SelectOptions,
}

impl SelectList {
    /// Fails on a zero width or height and when every item is empty.
    pub fn new<I>(options: SelectOptions, items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if options.width == 0 || options.height == 0 {
            return Err(Error::InvalidDimensions {
                width: options.width,
                height: options.height,
            });
        }
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let selectable: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_empty())
            .map(|(idx, _)| idx)
            .collect();
        if selectable.is_empty() {
            return Err(Error::NoSelectableItems);
        }

        let mut list = Self {
            items,
            selectable,
            cursor: 0,
            scroll: 0,
            options,
        };
        list.scroll_to_cursor();
        Ok(list)
    }

    fn height(&self) -> usize {
        self.options.height as usize
    }

    fn scroll_to_cursor(&mut self) {
        let selected = self.selected_index();
        let height = self.height();
        if selected - self.scroll.min(selected) >= height {
            self.scroll = selected + 1 - height;
        }
        if selected < self.scroll {
            self.scroll = selected;
        }
    }

    /// Rows a page moves by; one row stays in view.
    fn page(&self) -> usize {
        self.height().saturating_sub(1).max(1)
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.selectable.len() {
            self.cursor += 1;
        }
        self.scroll_to_cursor();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.scroll_to_cursor();
    }

    pub fn page_down(&mut self) {
        self.cursor = (self.cursor + self.page()).min(self.selectable.len() - 1);
        self.scroll_to_cursor();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page());
        self.scroll_to_cursor();
    }

    /// Index into [`items`](Self::items) of the selected item.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selectable[self.cursor]
    }

    /// Position of the selection among the selectable items.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible item.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// The selected item.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.items[self.selected_index()]
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn options(&self) -> &SelectOptions {
        &self.options
    }
}

impl Widget for SelectList {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Some(code) = event.key_code() else {
            return true;
        };
        if self.options.exit_keys.contains(&code) {
            return false;
        }
        match code {
            KeyCode::Down => self.cursor_down(),
            KeyCode::Up => self.cursor_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            _ => {}
        }
        true
    }

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let SelectOptions {
            x,
            y,
            width,
            height,
            style,
            selected_style,
            ..
        } = self.options;
        let selected = self.selected_index();
        for row in 0..height {
            let index = self.scroll + row as usize;
            let text = self.items.get(index).map_or("", String::as_str);
            let style = if index == selected {
                selected_style
            } else {
                style
            };
            label(surface, x, y.saturating_add(row), width, style, text);
        }
        surface.set_cursor(None);
    }
}
