#![forbid(unsafe_code)]

//! Growable single-line edit buffer.
//!
//! [`EditBuffer`] wraps a `String` and keeps the codepoint count cached
//! so widgets can ask for it without rescanning. `String` already gives
//! the growth discipline the toolkit needs: geometric reallocation, and
//! the old allocation stays intact until the new one is committed.
//!
//! Interactive input appends one ASCII byte at a time ([`push_ascii`])
//! and deletes one codepoint at a time ([`pop_char`]); full replacement
//! goes through [`set`]. All paths keep the contents valid UTF-8.
//!
//! [`push_ascii`]: EditBuffer::push_ascii
//! [`pop_char`]: EditBuffer::pop_char
//! [`set`]: EditBuffer::set

use crate::utf8;

/// A growable UTF-8 buffer with a cached codepoint count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    chars: usize,
}

impl EditBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to empty, keeping the allocation.
    pub fn clear(&mut self) {
        self.text.clear();
        self.chars = 0;
    }

    /// Replace the contents and recount codepoints.
    pub fn set(&mut self, value: &str) {
        self.text.clear();
        self.text.push_str(value);
        self.chars = value.chars().count();
    }

    /// Append one printable ASCII byte (0x20–0x7E).
    ///
    /// Control bytes and non-ASCII bytes are silently ignored: the
    /// interactive input path only ever produces printables, and a raw
    /// byte ≥ 0x80 would corrupt the UTF-8 contents.
    pub fn push_ascii(&mut self, byte: u8) {
        if (0x20..0x7f).contains(&byte) {
            self.text.push(byte as char);
            self.chars += 1;
        }
    }

    /// Remove the last codepoint, returning it. `None` when empty.
    pub fn pop_char(&mut self) -> Option<char> {
        let start = utf8::prev_boundary(self.text.as_bytes(), self.text.len())?;
        let ch = self.text[start..].chars().next();
        self.text.truncate(start);
        self.chars -= 1;
        ch
    }

    /// Byte at `index`, `None` past the end.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// The contents as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the buffer into its contents.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of codepoints.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.chars
    }
}
