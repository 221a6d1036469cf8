#![forbid(unsafe_code)]

//! tform public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```no_run
//! use tform::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let session = Session::acquire()?;
//!     let mut term = CrosstermTerminal::new(&session);
//!
//!     let mut prompt = Label::new("name:");
//!     let mut name = TextField::new(32);
//!
//!     let outcome = {
//!         let mut widgets: Vec<&mut dyn Widget> = vec![&mut prompt, &mut name];
//!         run(&mut term, &mut widgets)?
//!     };
//!     drop(term);
//!     drop(session);
//!
//!     if outcome == Outcome::Accepted {
//!         println!("hello, {}", name.text());
//!     }
//!     Ok(())
//! }
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tform_core::event::{Action, Key};
pub use tform_core::session::Session;
pub use tform_core::terminal::{CrosstermTerminal, Terminal};

// --- Text re-exports -------------------------------------------------------

pub use tform_text::EditBuffer;

// --- Widget re-exports -----------------------------------------------------

pub use tform_widgets::{Cursor, Label, Line, TextField, Update, Widget};

// --- Runtime re-exports ----------------------------------------------------

pub use tform_runtime::{Error, Outcome, run};

/// Standard result type for tform APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CrosstermTerminal, Error, Key, Label, Outcome, Result, Session, Terminal, TextField,
        Widget, run,
    };

    pub use crate::{core, runtime, text, widgets};
}

pub use tform_core as core;
pub use tform_runtime as runtime;
pub use tform_text as text;
pub use tform_widgets as widgets;
