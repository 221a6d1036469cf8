#![forbid(unsafe_code)]

//! End-to-end form flows through the public facade.

use tform::EditBuffer;
use tform::core::testing::ScriptedTerminal;
use tform::prelude::*;

fn type_str(term: &mut ScriptedTerminal, text: &str) {
    term.feed(text.chars().map(Key::Char));
}

#[test]
fn login_form_accepts_and_keeps_field_contents() {
    let mut term = ScriptedTerminal::new(80, 24);
    type_str(&mut term, "ava");
    term.feed([Key::Down]);
    type_str(&mut term, "db-1");
    term.feed([Key::Enter]);

    let mut heading = Label::new("quick connect\n");
    let mut user_label = Label::new("user:");
    let mut user = TextField::new(16);
    let mut host_label = Label::new("host:");
    let mut host = TextField::new(16);

    let outcome = {
        let mut widgets: Vec<&mut dyn Widget> = vec![
            &mut heading,
            &mut user_label,
            &mut user,
            &mut host_label,
            &mut host,
        ];
        run(&mut term, &mut widgets).unwrap()
    };

    assert_eq!(outcome, Outcome::Accepted);
    assert_eq!(user.text(), "ava");
    assert_eq!(host.text(), "db-1");

    assert_eq!(term.row_text(0), "quick connect");
    assert_eq!(term.row_text(2), "user:");
    assert_eq!(term.row_text(3), "ava");
    assert_eq!(term.row_text(4), "host:");
    assert_eq!(term.row_text(5), "db-1");
}

#[test]
fn cancelled_form_still_reports_what_was_typed() {
    let mut term = ScriptedTerminal::new(80, 24);
    type_str(&mut term, "half");
    term.feed([Key::Esc]);

    let mut field = TextField::new(16);
    let outcome = {
        let mut widgets: Vec<&mut dyn Widget> = vec![&mut field];
        run(&mut term, &mut widgets).unwrap()
    };

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(field.text(), "half");
}

#[test]
fn edit_buffer_is_reusable_outside_the_widgets() {
    let mut buf = EditBuffer::new();
    buf.set("résumé");
    assert_eq!(buf.char_count(), 6);
    buf.pop_char();
    assert_eq!(buf.as_str(), "résum");
}
