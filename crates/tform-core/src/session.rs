#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`Session::acquire`] puts the terminal into raw mode and returns a
//! cloneable handle. Handles share one underlying session: acquiring
//! while a session is already live joins it instead of re-entering raw
//! mode, and the terminal is restored when the last handle drops.
//!
//! # Lifecycle Guarantees
//!
//! 1. **Shared ownership** - Nested `acquire` calls join the live
//!    session. Raw mode is entered once and left once.
//!
//! 2. **Drop restores the terminal** - When the last handle drops, the
//!    style attributes are reset, the cursor is shown, and raw mode is
//!    disabled.
//!
//! 3. **Panic safety** - A process-wide panic hook restores the
//!    terminal before the panic message prints, so the message is
//!    readable rather than smeared across a raw-mode screen.
//!
//! 4. **Signal safety (unix)** - SIGINT and SIGTERM restore the
//!    terminal and exit with the conventional `128 + signal` status.
//!
//! # Usage
//!
//! ```no_run
//! use tform_core::session::Session;
//!
//! let session = Session::acquire()?;
//! // Terminal is in raw mode until `session` (and any clones) drop.
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock, Weak};

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// The live session, if any. Handles hold the strong references; this
/// registry only lets a later `acquire` join them.
static ACTIVE: Mutex<Weak<Shared>> = Mutex::new(Weak::new());

/// A handle on the terminal session.
///
/// Cheap to clone. The terminal stays in raw mode for as long as at
/// least one handle is alive.
#[derive(Debug, Clone)]
pub struct Session {
    shared: Arc<Shared>,
}

impl Session {
    /// Enter raw mode, or join the session that already holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the signal
    /// watcher cannot be installed.
    pub fn acquire() -> io::Result<Self> {
        let mut active = ACTIVE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(shared) = active.upgrade() {
            return Ok(Self { shared });
        }
        let shared = Arc::new(Shared::enter()?);
        *active = Arc::downgrade(&shared);
        Ok(Self { shared })
    }

    /// Whether a session is currently live.
    #[must_use]
    pub fn active() -> bool {
        ACTIVE
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .upgrade()
            .is_some()
    }

    /// A session handle that never touches the real terminal.
    ///
    /// Registers in the same registry as [`Session::acquire`], so code
    /// under test observes the normal shared-lifecycle behavior.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn headless() -> Self {
        let mut active = ACTIVE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(shared) = active.upgrade() {
            return Self { shared };
        }
        let shared = Arc::new(Shared {
            raw: false,
            #[cfg(unix)]
            signal_guard: None,
        });
        *active = Arc::downgrade(&shared);
        Self { shared }
    }
}

#[derive(Debug)]
struct Shared {
    /// Whether this session actually entered raw mode.
    raw: bool,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl Shared {
    fn enter() -> io::Result<Self> {
        install_panic_hook();

        #[cfg(unix)]
        let signal_guard = Some(SignalGuard::new()?);

        crossterm::terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode enabled");

        Ok(Self {
            raw: true,
            #[cfg(unix)]
            signal_guard,
        })
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        if self.raw {
            restore_terminal();
            #[cfg(feature = "tracing")]
            tracing::info!("terminal restored");
        }
    }
}

/// Reset attributes, show the cursor, leave raw mode. Errors are
/// ignored: there is no better recovery than trying the next step.
fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(
        stdout,
        crossterm::style::SetAttribute(crossterm::style::Attribute::Reset),
        crossterm::cursor::Show,
    );
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                #[cfg(feature = "tracing")]
                tracing::warn!(signal, "termination signal received, restoring terminal");
                restore_terminal();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
