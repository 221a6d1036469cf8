#![forbid(unsafe_code)]

//! Scripted terminal double for engine tests.
//!
//! [`ScriptedTerminal`] implements [`Terminal`] against an in-memory
//! cell grid with a fixed size and a pre-fed key script. Every driver
//! call is recorded as a [`TermOp`], so tests can assert not just on
//! the final screen contents but on exactly which operations the
//! engine issued, which is how redraw-minimality gets checked.
//!
//! Out-of-bounds cursor moves and prints are errors rather than clips:
//! a coordinate bug in the caller should fail the test loudly, not
//! vanish at the screen edge.

use std::collections::VecDeque;
use std::io;

use crate::event::Key;
use crate::terminal::Terminal;

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOp {
    Size,
    Clear,
    MoveTo(u16, u16),
    Print { text: String, reversed: bool },
    ClearToEol,
    ScrollUp(u16),
    ScrollDown(u16),
    ReadKey,
    Flush,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    reversed: bool,
}

impl Cell {
    const BLANK: Self = Self {
        ch: ' ',
        reversed: false,
    };
}

/// In-memory terminal with a fixed size and a scripted key queue.
#[derive(Debug)]
pub struct ScriptedTerminal {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: (u16, u16),
    keys: VecDeque<Key>,
    ops: Vec<TermOp>,
}

impl ScriptedTerminal {
    /// Create a blank screen of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
            cursor: (0, 0),
            keys: VecDeque::new(),
            ops: Vec::new(),
        }
    }

    /// Append keys to the script, in the order they will be read.
    pub fn feed(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Every driver call made so far, in order.
    #[must_use]
    pub fn ops(&self) -> &[TermOp] {
        &self.ops
    }

    /// Current cursor position as `(x, y)`.
    #[must_use]
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Text of row `y` with trailing blanks trimmed.
    ///
    /// # Panics
    ///
    /// Panics if `y` is off screen.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        assert!(y < self.height, "row {y} out of range");
        let row: String = (0..self.width).map(|x| self.cell(x, y).ch).collect();
        row.trim_end().to_string()
    }

    /// Character at `(x, y)`.
    #[must_use]
    pub fn char_at(&self, x: u16, y: u16) -> char {
        self.cell(x, y).ch
    }

    /// Whether the cell at `(x, y)` was printed in reverse video.
    #[must_use]
    pub fn reversed_at(&self, x: u16, y: u16) -> bool {
        self.cell(x, y).reversed
    }

    /// Total rows scrolled up (viewport moved toward the top).
    #[must_use]
    pub fn scrolled_up(&self) -> u16 {
        self.ops
            .iter()
            .map(|op| match op {
                TermOp::ScrollUp(rows) => *rows,
                _ => 0,
            })
            .sum()
    }

    /// Total rows scrolled down (viewport moved toward the bottom).
    #[must_use]
    pub fn scrolled_down(&self) -> u16 {
        self.ops
            .iter()
            .map(|op| match op {
                TermOp::ScrollDown(rows) => *rows,
                _ => 0,
            })
            .sum()
    }

    fn cell(&self, x: u16, y: u16) -> Cell {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of range");
        self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> &mut Cell {
        &mut self.cells[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    fn blank_row(&mut self, y: u16) {
        for x in 0..self.width {
            *self.cell_mut(x, y) = Cell::BLANK;
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        self.ops.push(TermOp::Size);
        Ok((self.width, self.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::Clear);
        self.cells.fill(Cell::BLANK);
        self.cursor = (0, 0);
        Ok(())
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.ops.push(TermOp::MoveTo(x, y));
        if x >= self.width || y >= self.height {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("move_to ({x}, {y}) outside {}x{}", self.width, self.height),
            ));
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn print(&mut self, text: &str, reversed: bool) -> io::Result<()> {
        self.ops.push(TermOp::Print {
            text: text.to_string(),
            reversed,
        });
        // The cursor may legitimately land one past the last column
        // after a full-width print; only writing from there is an
        // error.
        let (mut x, y) = self.cursor;
        for ch in text.chars() {
            if x >= self.width {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("print past column {} on row {y}", self.width),
                ));
            }
            *self.cell_mut(x, y) = Cell { ch, reversed };
            x += 1;
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn clear_to_eol(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::ClearToEol);
        let (x, y) = self.cursor;
        for col in x..self.width {
            *self.cell_mut(col, y) = Cell::BLANK;
        }
        Ok(())
    }

    fn scroll_up(&mut self, rows: u16) -> io::Result<()> {
        self.ops.push(TermOp::ScrollUp(rows));
        // Viewport up: content moves down, blanks enter at the top.
        for _ in 0..rows.min(self.height) {
            self.cells.rotate_right(usize::from(self.width));
            self.blank_row(0);
        }
        Ok(())
    }

    fn scroll_down(&mut self, rows: u16) -> io::Result<()> {
        self.ops.push(TermOp::ScrollDown(rows));
        // Viewport down: content moves up, blanks enter at the bottom.
        for _ in 0..rows.min(self.height) {
            self.cells.rotate_left(usize::from(self.width));
            self.blank_row(self.height - 1);
        }
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.ops.push(TermOp::ReadKey);
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::Flush);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_writes_cells_and_advances_cursor() {
        let mut term = ScriptedTerminal::new(10, 3);
        term.move_to(2, 1).unwrap();
        term.print("ab", false).unwrap();
        assert_eq!(term.char_at(2, 1), 'a');
        assert_eq!(term.char_at(3, 1), 'b');
        assert_eq!(term.row_text(1), "  ab");
        assert_eq!(term.cursor(), (4, 1));
    }

    #[test]
    fn print_records_reverse_video() {
        let mut term = ScriptedTerminal::new(10, 2);
        term.print("hi", true).unwrap();
        assert!(term.reversed_at(0, 0));
        assert!(term.reversed_at(1, 0));
        assert!(!term.reversed_at(2, 0));
    }

    #[test]
    fn out_of_bounds_move_is_an_error() {
        let mut term = ScriptedTerminal::new(4, 2);
        let err = term.move_to(4, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn print_past_right_edge_is_an_error() {
        let mut term = ScriptedTerminal::new(3, 1);
        let err = term.print("abcd", false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn full_width_print_parks_cursor_past_the_edge() {
        let mut term = ScriptedTerminal::new(3, 1);
        term.print("abc", false).unwrap();
        assert_eq!(term.cursor(), (3, 0));
        term.clear_to_eol().unwrap();
        assert_eq!(term.row_text(0), "abc");
    }

    #[test]
    fn scroll_down_shifts_content_up() {
        let mut term = ScriptedTerminal::new(5, 3);
        term.move_to(0, 0).unwrap();
        term.print("top", false).unwrap();
        term.move_to(0, 1).unwrap();
        term.print("mid", false).unwrap();
        term.scroll_down(1).unwrap();
        assert_eq!(term.row_text(0), "mid");
        assert_eq!(term.row_text(1), "");
        assert_eq!(term.scrolled_down(), 1);
    }

    #[test]
    fn scroll_up_shifts_content_down() {
        let mut term = ScriptedTerminal::new(5, 3);
        term.move_to(0, 0).unwrap();
        term.print("top", false).unwrap();
        term.scroll_up(2).unwrap();
        assert_eq!(term.row_text(0), "");
        assert_eq!(term.row_text(2), "top");
        assert_eq!(term.scrolled_up(), 2);
    }

    #[test]
    fn clear_to_eol_blanks_from_cursor() {
        let mut term = ScriptedTerminal::new(6, 1);
        term.print("abcdef", false).unwrap();
        term.move_to(2, 0).unwrap();
        term.clear_to_eol().unwrap();
        assert_eq!(term.row_text(0), "ab");
    }

    #[test]
    fn read_key_drains_script_then_errors() {
        let mut term = ScriptedTerminal::new(4, 2);
        term.feed([Key::Char('x'), Key::Enter]);
        assert_eq!(term.read_key().unwrap(), Key::Char('x'));
        assert_eq!(term.read_key().unwrap(), Key::Enter);
        let err = term.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn ops_record_call_order() {
        let mut term = ScriptedTerminal::new(4, 2);
        term.clear().unwrap();
        term.move_to(1, 0).unwrap();
        term.print("z", true).unwrap();
        term.flush().unwrap();
        assert_eq!(
            term.ops(),
            [
                TermOp::Clear,
                TermOp::MoveTo(1, 0),
                TermOp::Print {
                    text: "z".to_string(),
                    reversed: true
                },
                TermOp::Flush,
            ]
        );
    }
}
