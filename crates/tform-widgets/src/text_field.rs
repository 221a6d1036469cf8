#![forbid(unsafe_code)]

//! Single-line editable text field.
//!
//! A [`TextField`] renders as one reverse-video line: the tail of its
//! buffer, one blank cursor cell, and padding out to the layout width.
//! When the text outgrows the window the view slides right one
//! codepoint per insertion, keeping the cursor pinned at the rightmost
//! column; backspace slides it back.
//!
//! Input is ASCII-printable only (0x20-0x7E). The buffer itself is
//! full UTF-8 (`set_text` takes any string), so deletion still has to
//! respect codepoint boundaries.

use tform_core::event::Action;
use tform_text::EditBuffer;
use tform_text::utf8;

use crate::{Cursor, Line, Update, Widget};

/// Editable single-line field with a codepoint cap.
#[derive(Debug, Clone)]
pub struct TextField {
    buffer: EditBuffer,
    /// Maximum codepoints the field will hold.
    max_chars: u16,
    /// Byte offset where the visible window starts. Always on a
    /// codepoint boundary, with at most `width - 1` codepoints from
    /// here to the end.
    first_visible: usize,
    /// Column count fixed by the last `layout`.
    width: u16,
    /// Whether Enter is swallowed instead of accepting the form.
    consume_enter: bool,
}

impl TextField {
    /// Create an empty field holding at most `max_chars` codepoints.
    pub fn new(max_chars: u16) -> Self {
        Self {
            buffer: EditBuffer::new(),
            max_chars,
            first_visible: 0,
            width: 0,
            consume_enter: false,
        }
    }

    /// Swallow Enter instead of letting it accept the form (builder).
    pub fn with_consume_enter(mut self, consume: bool) -> Self {
        self.consume_enter = consume;
        self
    }

    /// Prefill the text (builder). Truncates like [`TextField::set_text`].
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Swallow Enter instead of letting it accept the form.
    pub fn set_consume_enter(&mut self, consume: bool) {
        self.consume_enter = consume;
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Consume the field, keeping its contents.
    pub fn into_text(self) -> String {
        self.buffer.into_string()
    }

    /// Replace the contents, silently truncating to the codepoint cap.
    pub fn set_text(&mut self, text: &str) {
        let kept = match text.char_indices().nth(usize::from(self.max_chars)) {
            Some((cut, _)) => &text[..cut],
            None => text,
        };
        self.buffer.set(kept);
        self.rewind_window();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.first_visible = 0;
    }

    /// Recompute the window start: walk back from the end until
    /// `width - 1` codepoints are behind it or the text starts.
    fn rewind_window(&mut self) {
        let bytes = self.buffer.as_str().as_bytes();
        let mut offset = bytes.len();
        for _ in 0..self.width.saturating_sub(1) {
            match utf8::prev_boundary(bytes, offset) {
                Some(prev) => offset = prev,
                None => break,
            }
        }
        self.first_visible = offset;
    }

    fn cursor(&self) -> Cursor {
        let count = self.buffer.char_count().min(usize::from(u16::MAX)) as u16;
        Cursor::new(count.min(self.width.saturating_sub(1)), 0)
    }
}

impl Widget for TextField {
    fn preferred_width(&self) -> u16 {
        // One extra column keeps the cursor cell visible at full text.
        self.max_chars.saturating_add(1)
    }

    fn layout(&mut self, max_width: u16, _screen_height: u16) -> u16 {
        self.width = max_width.min(self.max_chars.saturating_add(1));
        self.rewind_window();
        1
    }

    fn render_line(&self, _y: u16) -> Line<'_> {
        let visible = &self.buffer.as_str()[self.first_visible..];
        let mut cells = String::with_capacity(usize::from(self.width));
        cells.push_str(visible);
        for _ in visible.chars().count()..usize::from(self.width) {
            cells.push(' ');
        }
        Line::reversed(cells)
    }

    fn focus(&mut self, _from_above: bool) -> Option<Cursor> {
        Some(self.cursor())
    }

    fn put_char(&mut self, ch: char) -> Option<Update> {
        if !(' '..='~').contains(&ch) {
            return None;
        }
        if self.buffer.char_count() >= usize::from(self.max_chars) {
            return Some(Update::unchanged(self.cursor()));
        }
        self.buffer.push_ascii(ch as u8);
        if self.buffer.char_count() >= usize::from(self.width) {
            let bytes = self.buffer.as_str().as_bytes();
            self.first_visible = utf8::next_boundary(bytes, self.first_visible);
        }
        Some(Update::new(self.cursor(), 0..1))
    }

    fn put_action(&mut self, action: Action) -> Option<Update> {
        match action {
            Action::Backspace => {
                if self.buffer.pop_char().is_some() {
                    self.rewind_window();
                    Some(Update::new(self.cursor(), 0..1))
                } else {
                    Some(Update::unchanged(self.cursor()))
                }
            }
            Action::Enter if self.consume_enter => Some(Update::unchanged(self.cursor())),
            _ => None,
        }
    }
}
