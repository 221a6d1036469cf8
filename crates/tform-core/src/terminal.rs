#![forbid(unsafe_code)]

//! Terminal driver boundary.
//!
//! The run loop talks to the screen only through the [`Terminal`]
//! trait: cursor movement, attribute-tagged text, viewport scrolling,
//! and blocking key reads. [`CrosstermTerminal`] is the production
//! implementation; tests use the scripted double from
//! [`crate::testing`].
//!
//! Scroll direction is named for the viewport, not the content:
//! `scroll_down` reveals rows below the current view (on a real
//! terminal the existing lines move up), `scroll_up` reveals rows
//! above it.

use std::io::{self, Write};

use crate::event::Key;
use crate::session::Session;

/// Screen and input operations the run loop depends on.
///
/// Output calls may buffer; [`Terminal::flush`] commits them. All
/// coordinates are `(x, y)` with the origin at the top-left cell.
/// Every method takes `&mut self`: the run loop owns the driver
/// exclusively, and uniform receivers let test doubles record every
/// call.
pub trait Terminal {
    /// Current size as `(columns, rows)`.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// Clear the whole screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Move the cursor to column `x`, row `y`.
    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()>;

    /// Write `text` at the cursor, in reverse video when `reversed`.
    fn print(&mut self, text: &str, reversed: bool) -> io::Result<()>;

    /// Clear from the cursor to the end of the current row.
    fn clear_to_eol(&mut self) -> io::Result<()>;

    /// Shift the viewport up by `rows`: blank rows enter at the top.
    fn scroll_up(&mut self, rows: u16) -> io::Result<()>;

    /// Shift the viewport down by `rows`: blank rows enter at the
    /// bottom.
    fn scroll_down(&mut self, rows: u16) -> io::Result<()>;

    /// Block until a key the toolkit dispatches on arrives.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Commit buffered output to the screen.
    fn flush(&mut self) -> io::Result<()>;
}

/// Production driver over Crossterm and stdout.
///
/// Holding a [`Session`] handle keeps the terminal in raw mode for the
/// driver's whole lifetime, so a driver without a live session cannot
/// be constructed.
#[derive(Debug)]
pub struct CrosstermTerminal {
    _session: Session,
    out: io::Stdout,
}

impl CrosstermTerminal {
    /// Create a driver sharing `session`.
    #[must_use]
    pub fn new(session: &Session) -> Self {
        Self {
            _session: session.clone(),
            out: io::stdout(),
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    fn clear(&mut self) -> io::Result<()> {
        crossterm::queue!(
            self.out,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0),
        )
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        crossterm::queue!(self.out, crossterm::cursor::MoveTo(x, y))
    }

    fn print(&mut self, text: &str, reversed: bool) -> io::Result<()> {
        if reversed {
            crossterm::queue!(
                self.out,
                crossterm::style::SetAttribute(crossterm::style::Attribute::Reverse),
                crossterm::style::Print(text),
                crossterm::style::SetAttribute(crossterm::style::Attribute::Reset),
            )
        } else {
            crossterm::queue!(self.out, crossterm::style::Print(text))
        }
    }

    fn clear_to_eol(&mut self) -> io::Result<()> {
        crossterm::queue!(
            self.out,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::UntilNewLine),
        )
    }

    fn scroll_up(&mut self, rows: u16) -> io::Result<()> {
        if rows == 0 {
            return Ok(());
        }
        // Crossterm names the command for the content motion: the
        // viewport moving up makes the lines move down.
        crossterm::queue!(self.out, crossterm::terminal::ScrollDown(rows))
    }

    fn scroll_down(&mut self, rows: u16) -> io::Result<()> {
        if rows == 0 {
            return Ok(());
        }
        crossterm::queue!(self.out, crossterm::terminal::ScrollUp(rows))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let crossterm::event::Event::Key(event) = crossterm::event::read()? {
                if let Some(key) = Key::from_crossterm(&event) {
                    return Ok(key);
                }
            }
            // Resize, mouse, focus, and unmapped keys are not part of
            // the dispatch contract; keep waiting.
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

// CrosstermTerminal is exercised interactively (see the demo crate);
// unit tests here would fight the test runner for the controlling
// terminal. Engine behavior is tested against the scripted double in
// `crate::testing`.
