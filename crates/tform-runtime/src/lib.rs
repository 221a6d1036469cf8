#![forbid(unsafe_code)]

//! Run-loop engine: drives a widget list against a terminal until the
//! user accepts or cancels the form.
//!
//! [`run`] executes one complete interaction: layout negotiation,
//! initial draw, focus acquisition, then a blocking key-dispatch loop
//! with scroll-to-reveal focus traversal. The result is a single
//! run-wide [`Outcome`], or an [`Error`] when the run could not
//! complete at all.

use std::fmt;
use std::io;

pub mod runner;

pub use runner::run;

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed the form with Enter.
    Accepted,
    /// The user aborted with Esc, or the content cannot fit the
    /// screen.
    Cancelled,
}

/// A run that could not complete.
#[derive(Debug)]
pub enum Error {
    /// Terminal I/O failed.
    Io(io::Error),
    /// The widget at `index` reported zero height from layout.
    Unsized { index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Unsized { index } => {
                write!(f, "widget {index} reported zero height from layout")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
