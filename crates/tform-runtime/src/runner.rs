#![forbid(unsafe_code)]

//! The run loop.
//!
//! One [`run`] call is one complete form interaction, in phases:
//!
//! 1. An empty widget list accepts immediately, before any terminal
//!    call.
//! 2. Measure: every widget reports a preferred width; the shared
//!    layout width is `min(screen_width - 1, max(preferred))`.
//! 3. Size: every widget is laid out at that width, in order. A zero
//!    height fails the run; a single widget taller than the screen
//!    cancels it before anything is drawn.
//! 4. Initial draw: widgets render top to bottom, clipped at the
//!    bottom of the screen. Content below the fold waits for a scroll.
//! 5. Focus seek: the first widget that accepts focus gets it, with a
//!    scroll-to-reveal if it sits below the fold. No focusable widget
//!    means there is nothing to interact with; the run accepts.
//! 6. Dispatch: block on one key at a time. Printable ASCII goes to
//!    the focused widget's `put_char`; everything else maps to an
//!    [`Action`] offered to `put_action`. Unconsumed actions belong to
//!    the engine: Enter accepts, Esc cancels, Up/Down move focus to
//!    the nearest focusable neighbor with a minimal scroll-to-reveal.
//!
//! Scrolling is minimal in both directions: exactly the rows needed to
//! bring the target widget fully on screen, redrawing only the rows
//! the scroll exposed.

use std::io;
use std::ops::Range;

use tform_core::event::Action;
use tform_core::terminal::Terminal;
use tform_widgets::{Cursor, Update, Widget};

use crate::{Error, Outcome};

/// Drive `widgets` against `term` until the user accepts or cancels.
///
/// Widgets are laid out top to bottom in slice order and keep their
/// state after the run, so callers can read results back out of them
/// or run the same list again.
///
/// # Errors
///
/// [`Error::Io`] when the terminal fails, [`Error::Unsized`] when a
/// widget reports zero height from layout.
pub fn run(term: &mut impl Terminal, widgets: &mut [&mut dyn Widget]) -> Result<Outcome, Error> {
    if widgets.is_empty() {
        return Ok(Outcome::Accepted);
    }

    let (screen_w, screen_h) = term.size()?;
    let preferred = widgets
        .iter()
        .map(|widget| widget.preferred_width())
        .max()
        .unwrap_or(0);
    let chosen = preferred.min(screen_w.saturating_sub(1));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        widgets = widgets.len(),
        screen_w,
        screen_h,
        chosen,
        "run starting"
    );

    let mut heights = Vec::with_capacity(widgets.len());
    let mut tops = Vec::with_capacity(widgets.len());
    let mut total: u32 = 0;
    for (index, widget) in widgets.iter_mut().enumerate() {
        let height = widget.layout(chosen, screen_h);
        if height == 0 {
            return Err(Error::Unsized { index });
        }
        if height > screen_h {
            #[cfg(feature = "tracing")]
            tracing::warn!(index, height, screen_h, "widget taller than the screen");
            return Ok(Outcome::Cancelled);
        }
        tops.push(total);
        heights.push(height);
        total += u32::from(height);
    }

    let mut engine = Engine {
        term,
        widgets,
        heights,
        tops,
        screen_h,
        scroll: 0,
        focus: 0,
        cursor: Cursor::new(0, 0),
    };
    engine.drive()
}

/// State for one run: geometry caches, the scroll offset, and focus.
/// Virtual rows index the full laid-out content; the screen shows the
/// `screen_h` of them starting at `scroll`.
struct Engine<'a, 'w, T: Terminal> {
    term: &'a mut T,
    widgets: &'a mut [&'w mut dyn Widget],
    heights: Vec<u16>,
    /// Virtual row of each widget's first line.
    tops: Vec<u32>,
    screen_h: u16,
    /// Virtual row currently at the top of the screen.
    scroll: u32,
    focus: usize,
    /// Focused widget's cursor, widget-relative.
    cursor: Cursor,
}

impl<T: Terminal> Engine<'_, '_, T> {
    fn drive(&mut self) -> Result<Outcome, Error> {
        self.term.clear()?;
        self.draw_virtual_rows(0..u32::from(self.screen_h))?;

        let Some((index, cursor)) = self.seek_first_focus() else {
            self.term.flush()?;
            #[cfg(feature = "tracing")]
            tracing::debug!("no focusable widget, run accepted");
            return Ok(Outcome::Accepted);
        };
        self.focus = index;
        self.cursor = cursor;
        self.ensure_focus_visible()?;

        loop {
            self.place_cursor()?;
            self.term.flush()?;
            let key = self.term.read_key()?;

            if let Some(ch) = key.printable() {
                if let Some(update) = self.widgets[self.focus].put_char(ch) {
                    self.apply_update(update)?;
                }
                continue;
            }
            let Some(action) = key.action() else {
                // Characters outside printable ASCII have no meaning
                // here.
                continue;
            };
            if let Some(update) = self.widgets[self.focus].put_action(action) {
                self.apply_update(update)?;
                continue;
            }
            match action {
                Action::Enter => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("run accepted");
                    return Ok(Outcome::Accepted);
                }
                Action::Esc => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("run cancelled");
                    return Ok(Outcome::Cancelled);
                }
                Action::Up => self.refocus_up()?,
                Action::Down => self.refocus_down()?,
                Action::Backspace | Action::Left | Action::Right | Action::Tab => {}
            }
        }
    }

    /// First widget in order that takes focus.
    fn seek_first_focus(&mut self) -> Option<(usize, Cursor)> {
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            if let Some(cursor) = widget.focus(true) {
                return Some((index, cursor));
            }
        }
        None
    }

    /// Move focus to the nearest focusable widget above, if any.
    fn refocus_up(&mut self) -> Result<(), Error> {
        for index in (0..self.focus).rev() {
            if let Some(cursor) = self.widgets[index].focus(false) {
                return self.adopt_focus(index, cursor);
            }
        }
        Ok(())
    }

    /// Move focus to the nearest focusable widget below, if any.
    fn refocus_down(&mut self) -> Result<(), Error> {
        for index in self.focus + 1..self.widgets.len() {
            if let Some(cursor) = self.widgets[index].focus(true) {
                return self.adopt_focus(index, cursor);
            }
        }
        Ok(())
    }

    fn adopt_focus(&mut self, index: usize, cursor: Cursor) -> Result<(), Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!(from = self.focus, to = index, "focus moved");
        self.focus = index;
        self.cursor = cursor;
        self.ensure_focus_visible()
    }

    /// Scroll exactly enough to bring the focused widget fully on
    /// screen, drawing only the rows the scroll exposed. Widgets that
    /// merely shifted are never redrawn.
    fn ensure_focus_visible(&mut self) -> Result<(), Error> {
        let top = self.tops[self.focus];
        let bottom = top + u32::from(self.heights[self.focus]);
        let window_bottom = self.scroll + u32::from(self.screen_h);

        if bottom > window_bottom {
            let delta = bottom - window_bottom;
            #[cfg(feature = "tracing")]
            tracing::debug!(rows = delta, "scrolling down to reveal focus");
            self.scroll_down_by(delta)?;
            self.scroll += delta;
            let exposed = delta.min(u32::from(self.screen_h));
            let window_bottom = self.scroll + u32::from(self.screen_h);
            self.draw_virtual_rows(window_bottom - exposed..window_bottom)?;
        } else if top < self.scroll {
            let delta = self.scroll - top;
            #[cfg(feature = "tracing")]
            tracing::debug!(rows = delta, "scrolling up to reveal focus");
            self.scroll_up_by(delta)?;
            self.scroll -= delta;
            let exposed = delta.min(u32::from(self.screen_h));
            self.draw_virtual_rows(self.scroll..self.scroll + exposed)?;
        }
        Ok(())
    }

    // The driver shifts in u16 steps; virtual offsets are u32, so very
    // tall content scrolls in chunks.
    fn scroll_down_by(&mut self, rows: u32) -> io::Result<()> {
        let mut left = rows;
        while left > 0 {
            let step = left.min(u32::from(u16::MAX)) as u16;
            self.term.scroll_down(step)?;
            left -= u32::from(step);
        }
        Ok(())
    }

    fn scroll_up_by(&mut self, rows: u32) -> io::Result<()> {
        let mut left = rows;
        while left > 0 {
            let step = left.min(u32::from(u16::MAX)) as u16;
            self.term.scroll_up(step)?;
            left -= u32::from(step);
        }
        Ok(())
    }

    /// Redraw the focused widget's dirty lines and adopt its cursor.
    fn apply_update(&mut self, update: Update) -> Result<(), Error> {
        let top = self.tops[self.focus];
        let dirty = top + u32::from(update.dirty.start)..top + u32::from(update.dirty.end);
        self.draw_virtual_rows(dirty)?;
        self.cursor = update.cursor;
        Ok(())
    }

    /// Draw every widget line whose virtual row falls both in `rows`
    /// and in the visible window.
    fn draw_virtual_rows(&mut self, rows: Range<u32>) -> Result<(), Error> {
        let lo = rows.start.max(self.scroll);
        let hi = rows.end.min(self.scroll + u32::from(self.screen_h));
        if lo >= hi {
            return Ok(());
        }
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            let top = self.tops[index];
            if top >= hi {
                break;
            }
            let bottom = top + u32::from(self.heights[index]);
            if bottom <= lo {
                continue;
            }
            for vrow in top.max(lo)..bottom.min(hi) {
                let line = widget.render_line((vrow - top) as u16);
                self.term.move_to(0, (vrow - self.scroll) as u16)?;
                self.term.print(&line.text, line.reversed)?;
                self.term.clear_to_eol()?;
            }
        }
        Ok(())
    }

    /// Park the terminal cursor on the focused widget's cursor cell.
    fn place_cursor(&mut self) -> io::Result<()> {
        let row = self.tops[self.focus] + u32::from(self.cursor.y) - self.scroll;
        self.term.move_to(self.cursor.x, row as u16)
    }
}
