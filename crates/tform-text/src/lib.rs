#![forbid(unsafe_code)]

//! Text handling for tform.
//!
//! This crate provides the two text primitives the widgets build on:
//! - [`utf8`] - codepoint boundary arithmetic over raw UTF-8 bytes
//! - [`EditBuffer`] - a growable single-line edit buffer with a cached
//!   codepoint count
//!
//! Everything here works at codepoint granularity. Grapheme clustering
//! and display-cell widths are out of scope for the toolkit: one
//! codepoint occupies one column.
//!
//! # Example
//! ```
//! use tform_text::EditBuffer;
//!
//! let mut buf = EditBuffer::new();
//! buf.set("héllo");
//! assert_eq!(buf.char_count(), 5);
//! buf.pop_char();
//! assert_eq!(buf.as_str(), "héll");
//! ```

pub mod buffer;
pub mod utf8;

pub use buffer::EditBuffer;
