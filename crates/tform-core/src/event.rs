#![forbid(unsafe_code)]

//! Canonical key input types.
//!
//! [`Key`] is the decoded terminal input the run loop dispatches on: a
//! plain character or one of the named control keys. [`Action`] is the
//! widget-facing subset, everything a widget may consume through its
//! action capability. The split keeps raw input decoding out of the
//! widget contract: widgets never see characters the toolkit does not
//! route to them.
//!
//! Mapping policy: key release events and Ctrl/Alt-modified characters
//! are dropped at decode time, so only clean printables and the named
//! keys ever reach the engine. Anything else the terminal reports is
//! ignored input.

use crossterm::event as cte;

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key without Ctrl/Alt held.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
}

impl Key {
    /// Convert a Crossterm key event into a [`Key`].
    ///
    /// Returns `None` for release events, for characters with Ctrl or
    /// Alt held, and for keys the toolkit does not dispatch on.
    #[must_use]
    pub fn from_crossterm(event: &cte::KeyEvent) -> Option<Self> {
        if event.kind == cte::KeyEventKind::Release {
            return None;
        }
        match event.code {
            cte::KeyCode::Char(c) => {
                let chorded = event
                    .modifiers
                    .intersects(cte::KeyModifiers::CONTROL | cte::KeyModifiers::ALT);
                if chorded { None } else { Some(Self::Char(c)) }
            }
            cte::KeyCode::Enter => Some(Self::Enter),
            cte::KeyCode::Esc => Some(Self::Esc),
            cte::KeyCode::Backspace => Some(Self::Backspace),
            cte::KeyCode::Tab => Some(Self::Tab),
            cte::KeyCode::Up => Some(Self::Up),
            cte::KeyCode::Down => Some(Self::Down),
            cte::KeyCode::Left => Some(Self::Left),
            cte::KeyCode::Right => Some(Self::Right),
            _ => None,
        }
    }

    /// The key as a printable ASCII character (0x20–0x7E), if it is one.
    #[must_use]
    pub fn printable(self) -> Option<char> {
        match self {
            Self::Char(c) if (' '..='~').contains(&c) => Some(c),
            _ => None,
        }
    }

    /// The widget-facing action for this key, `None` for characters.
    #[must_use]
    pub fn action(self) -> Option<Action> {
        match self {
            Self::Char(_) => None,
            Self::Enter => Some(Action::Enter),
            Self::Esc => Some(Action::Esc),
            Self::Backspace => Some(Action::Backspace),
            Self::Tab => Some(Action::Tab),
            Self::Up => Some(Action::Up),
            Self::Down => Some(Action::Down),
            Self::Left => Some(Action::Left),
            Self::Right => Some(Action::Right),
        }
    }
}

/// A navigation or control action offered to the focused widget.
///
/// A widget that leaves an action unconsumed hands it back to the run
/// loop, which interprets Enter/Esc as termination and Up/Down as focus
/// traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Enter/Return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Tab.
    Tab,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn maps_plain_char() {
        let ev = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(Key::from_crossterm(&ev), Some(Key::Char('a')));
    }

    #[test]
    fn shift_chars_pass_through() {
        let ev = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(Key::from_crossterm(&ev), Some(Key::Char('A')));
    }

    #[test]
    fn ctrl_and_alt_chars_are_dropped() {
        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Key::from_crossterm(&ctrl), None);
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(Key::from_crossterm(&alt), None);
    }

    #[test]
    fn release_events_are_dropped() {
        let ev = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Key::from_crossterm(&ev), None);
    }

    #[test]
    fn repeat_events_pass_through() {
        let ev = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(Key::from_crossterm(&ev), Some(Key::Char('a')));
    }

    #[test]
    fn maps_named_keys() {
        for (code, key) in [
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Esc, Key::Esc),
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Tab, Key::Tab),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Left, Key::Left),
            (KeyCode::Right, Key::Right),
        ] {
            let ev = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(Key::from_crossterm(&ev), Some(key));
        }
    }

    #[test]
    fn unhandled_keys_are_dropped() {
        for code in [KeyCode::Delete, KeyCode::Home, KeyCode::F(1), KeyCode::BackTab] {
            let ev = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(Key::from_crossterm(&ev), None);
        }
    }

    #[test]
    fn printable_covers_ascii_range() {
        assert_eq!(Key::Char(' ').printable(), Some(' '));
        assert_eq!(Key::Char('~').printable(), Some('~'));
        assert_eq!(Key::Char('é').printable(), None);
        assert_eq!(Key::Enter.printable(), None);
    }

    #[test]
    fn action_covers_every_named_key() {
        assert_eq!(Key::Char('a').action(), None);
        assert_eq!(Key::Enter.action(), Some(Action::Enter));
        assert_eq!(Key::Esc.action(), Some(Action::Esc));
        assert_eq!(Key::Backspace.action(), Some(Action::Backspace));
        assert_eq!(Key::Tab.action(), Some(Action::Tab));
        assert_eq!(Key::Up.action(), Some(Action::Up));
        assert_eq!(Key::Down.action(), Some(Action::Down));
        assert_eq!(Key::Left.action(), Some(Action::Left));
        assert_eq!(Key::Right.action(), Some(Action::Right));
    }
}
