#![forbid(unsafe_code)]

//! Widgets and the capability trait that connects them to the run loop.
//!
//! A form is an ordered list of [`Widget`] trait objects. The run loop
//! negotiates layout in two phases (measure every widget, then size
//! every widget at one shared width), draws by asking each widget for
//! one line at a time, and routes input to whichever widget holds
//! focus.
//!
//! # Capability model
//!
//! Only measurement, sizing, and rendering are required. Focus and
//! input handling are optional capabilities with defaulted methods
//! returning `None`, which reads as "not my key" and "not focusable"
//! respectively. A read-only widget like [`Label`] implements nothing
//! beyond the required three; the run loop skips it during focus
//! traversal and never sends it input.
//!
//! # Call order
//!
//! For each run: every `preferred_width`, then exactly one `layout`
//! per widget, and only then any `render_line`, `focus`, `put_char`,
//! or `put_action`. Widgets may cache layout results under that
//! contract.

use std::borrow::Cow;
use std::ops::Range;

use tform_core::event::Action;

pub mod label;
pub mod text_field;

pub use label::Label;
pub use text_field::TextField;

/// A renderable, optionally interactive form element.
pub trait Widget {
    /// Columns this widget would like, measured before sizing.
    ///
    /// The run loop sizes every widget at
    /// `min(screen_width - 1, max(preferred widths))`.
    fn preferred_width(&self) -> u16;

    /// Size the widget at `max_width` columns and return its height in
    /// rows.
    ///
    /// `screen_height` caps how many rows are worth producing; content
    /// beyond it can never be shown. Returns 0 when the widget cannot
    /// size itself, which fails the whole run.
    fn layout(&mut self, max_width: u16, screen_height: u16) -> u16;

    /// The rendered line at widget-relative row `y`, where
    /// `y <` the height returned by [`Widget::layout`].
    fn render_line(&self, y: u16) -> Line<'_>;

    /// Take focus, returning the widget-relative cursor position.
    ///
    /// `from_above` tells the widget which direction focus arrived
    /// from. `None` means the widget does not take focus; the run loop
    /// skips it during traversal.
    fn focus(&mut self, _from_above: bool) -> Option<Cursor> {
        None
    }

    /// Offer a typed character to the focused widget.
    ///
    /// `None` means character input is not supported; the key is
    /// dropped.
    fn put_char(&mut self, _ch: char) -> Option<Update> {
        None
    }

    /// Offer a control action to the focused widget.
    ///
    /// `None` means the action was not consumed; the run loop then
    /// applies its own meaning (Enter accepts, Esc cancels, Up/Down
    /// move focus).
    fn put_action(&mut self, _action: Action) -> Option<Update> {
        None
    }
}

/// One rendered line and its video attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: Cow<'a, str>,
    pub reversed: bool,
}

impl<'a> Line<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>, reversed: bool) -> Self {
        Self {
            text: text.into(),
            reversed,
        }
    }

    /// A line in normal video.
    pub fn normal(text: impl Into<Cow<'a, str>>) -> Self {
        Self::new(text, false)
    }

    /// A line in reverse video.
    pub fn reversed(text: impl Into<Cow<'a, str>>) -> Self {
        Self::new(text, true)
    }
}

/// Widget-relative cursor position: `x` column within the widget's
/// width, `y` row within its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

impl Cursor {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Result of a consumed input: where the cursor goes and which
/// widget-relative rows need redrawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub cursor: Cursor,
    /// Half-open row range to redraw; may be empty.
    pub dirty: Range<u16>,
}

impl Update {
    pub fn new(cursor: Cursor, dirty: Range<u16>) -> Self {
        Self { cursor, dirty }
    }

    /// A consumed input that changed nothing on screen.
    pub fn unchanged(cursor: Cursor) -> Self {
        Self {
            cursor,
            dirty: 0..0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait stays object safe; the run
    // loop dispatches through `&mut dyn Widget`.
    fn _takes_dyn(_: &mut dyn Widget) {}

    #[test]
    fn defaults_decline_every_capability() {
        struct Fixed;
        impl Widget for Fixed {
            fn preferred_width(&self) -> u16 {
                3
            }
            fn layout(&mut self, _max_width: u16, _screen_height: u16) -> u16 {
                1
            }
            fn render_line(&self, _y: u16) -> Line<'_> {
                Line::normal("abc")
            }
        }

        let mut w = Fixed;
        assert_eq!(w.focus(true), None);
        assert_eq!(w.put_char('a'), None);
        assert_eq!(w.put_action(Action::Enter), None);
    }

    #[test]
    fn unchanged_update_has_empty_dirty_range() {
        let update = Update::unchanged(Cursor::new(2, 0));
        assert!(update.dirty.is_empty());
        assert_eq!(update.cursor, Cursor::new(2, 0));
    }
}
