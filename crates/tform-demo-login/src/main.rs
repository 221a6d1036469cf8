#![forbid(unsafe_code)]

//! Interactive login-form demo.
//!
//! Draws a short form on the real terminal, runs it to completion, and
//! prints what was entered. Run with `cargo run -p tform-demo-login`.

use tform::prelude::*;

fn main() {
    match login() {
        Ok(Some((user, host))) => println!("connecting {user}@{host}"),
        Ok(None) => println!("cancelled"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Run the form to completion. `None` means the user backed out.
fn login() -> Result<Option<(String, String)>> {
    let session = Session::acquire()?;
    let mut term = CrosstermTerminal::new(&session);

    let mut heading =
        Label::new("quick connect\n\nUp/Down switch fields, Enter accepts, Esc cancels.\n");
    let mut user_label = Label::new("user:");
    let mut user = TextField::new(32);
    let mut host_label = Label::new("host:");
    let mut host = TextField::new(64);

    let outcome = {
        let mut widgets: Vec<&mut dyn Widget> = vec![
            &mut heading,
            &mut user_label,
            &mut user,
            &mut host_label,
            &mut host,
        ];
        run(&mut term, &mut widgets)?
    };

    // Park the cursor on the bottom row so shell output lands below
    // the form once the session restores the terminal.
    let (_, rows) = term.size()?;
    term.move_to(0, rows.saturating_sub(1))?;
    term.flush()?;
    drop(term);
    drop(session);
    println!();

    match outcome {
        Outcome::Accepted => Ok(Some((user.into_text(), host.into_text()))),
        Outcome::Cancelled => Ok(None),
    }
}
