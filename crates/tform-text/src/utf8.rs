#![forbid(unsafe_code)]

//! Codepoint boundary arithmetic over raw UTF-8 bytes.
//!
//! These functions navigate byte offsets in a UTF-8 sequence without
//! decoding it: a continuation byte is recognized by its top two bits
//! (`10xxxxxx`), so stepping to the previous or next codepoint start is
//! a short scan. They are pure and do not validate their input; callers
//! own the precondition that `bytes` holds valid UTF-8 and `offset` lies
//! on a codepoint boundary at or before `bytes.len()`.

/// Whether `byte` is a UTF-8 continuation byte (`10xxxxxx`).
#[must_use]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Byte offset of the codepoint boundary preceding `offset`.
///
/// Returns `None` at the start of the buffer. Precondition: `offset` is
/// a codepoint boundary with `offset <= bytes.len()`.
#[must_use]
pub fn prev_boundary(bytes: &[u8], offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    let mut i = offset - 1;
    while i > 0 && is_continuation(bytes[i]) {
        i -= 1;
    }
    Some(i)
}

/// Byte offset just past the codepoint starting at `offset`.
///
/// Identity at or past the end of the buffer, mirroring the no-op at a
/// terminator in classic C string walks.
#[must_use]
pub fn next_boundary(bytes: &[u8], offset: usize) -> usize {
    if offset >= bytes.len() {
        return offset;
    }
    let mut i = offset + 1;
    while i < bytes.len() && is_continuation(bytes[i]) {
        i += 1;
    }
    i
}

/// Byte length of the codepoint starting at `offset` (0 at the end).
#[must_use]
pub fn char_len(bytes: &[u8], offset: usize) -> usize {
    next_boundary(bytes, offset) - offset
}
