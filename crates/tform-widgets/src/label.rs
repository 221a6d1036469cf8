#![forbid(unsafe_code)]

//! Read-only wrapping text label.
//!
//! A [`Label`] owns its text and, after layout, a list of byte-range
//! spans into it: one span per rendered line. Lines break at `\n`
//! (excluded from the output) or after exactly the layout width in
//! codepoints. Content past the screen height is truncated, not
//! scrolled; the surrounding form scrolls as a whole instead.

use std::ops::Range;

use crate::{Line, Widget};

/// Wrapping read-only label.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    /// Byte ranges of `text`, one per line. Rebuilt by every `layout`.
    spans: Vec<Range<usize>>,
}

impl Label {
    /// Create a label; it has no lines until the run lays it out.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }
}

impl Widget for Label {
    fn preferred_width(&self) -> u16 {
        let longest = self
            .text
            .split('\n')
            .map(|segment| segment.chars().count())
            .max()
            .unwrap_or(0);
        longest.min(usize::from(u16::MAX)) as u16
    }

    fn layout(&mut self, max_width: u16, screen_height: u16) -> u16 {
        self.spans.clear();
        let max_width = usize::from(max_width);
        let mut start = 0;
        let mut count = 0;
        for (offset, ch) in self.text.char_indices() {
            if ch == '\n' {
                self.spans.push(start..offset);
                start = offset + 1;
                count = 0;
            } else {
                if count >= max_width && max_width > 0 {
                    self.spans.push(start..offset);
                    start = offset;
                    count = 0;
                }
                count += 1;
            }
        }
        // The tail is always a line, even when empty: trailing `\n`
        // renders as a blank last line.
        self.spans.push(start..self.text.len());
        self.spans.truncate(usize::from(screen_height));
        self.spans.len() as u16
    }

    fn render_line(&self, y: u16) -> Line<'_> {
        // Rows past the laid-out height render blank.
        match self.spans.get(usize::from(y)) {
            Some(span) => Line::normal(&self.text[span.clone()]),
            None => Line::normal(""),
        }
    }
}
