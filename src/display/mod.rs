//! Full-screen display session
//!
//! Drives the rainbow animation in the terminal:
//!
//! - `state`: `Session` (animation offset, dimensions, lifecycle)
//! - `input`: crossterm event → `SessionEvent`
//! - `terminal`: raw-mode guard and frame output
//!
//! # Event loop
//!
//! Single-threaded. The loop waits for a terminal event for at most the
//! time left until the next tick. A timeout is a tick; the following tick
//! is scheduled only once the current one has fired, so at most one is
//! ever pending. After every event the frame is recomposed and redrawn.

mod input;
pub mod state;
mod terminal;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info, warn};

pub use input::{is_quit_key, translate_event};
pub use state::{InputResult, Session, SessionEvent, SessionState};
pub use terminal::{draw_frame, frame_output, TerminalGuard};

/// Source of terminal events.
pub trait EventSource {
    /// Wait up to `timeout` for the next event. `None` means the wait
    /// timed out.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Events from the real terminal via crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll terminal events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Run a session in the current terminal until the user quits.
pub fn run(session: &mut Session) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let (cols, rows) = match crossterm::terminal::size() {
        Ok(size) => size,
        Err(e) => {
            warn!(error = %e, "failed to query terminal size, waiting for a resize");
            (0, 0)
        }
    };
    session.handle(SessionEvent::Resize(cols, rows));
    info!(text = %session.text(), cols, rows, "display session started");

    let mut stdout = io::stdout();
    run_loop(session, &mut CrosstermEvents, &mut stdout)?;

    info!("display session ended");
    Ok(())
}

/// The event loop, independent of the real terminal.
pub fn run_loop(
    session: &mut Session,
    events: &mut impl EventSource,
    out: &mut impl Write,
) -> Result<()> {
    let interval = session.animation().interval();
    let mut next_tick = Instant::now() + interval;
    let mut last_size = None;
    let mut last_state = None;

    loop {
        let Some(frame) = session.view() else { break };
        let state = session.state();
        let entered_idle = state == SessionState::Idle && last_state != Some(SessionState::Idle);
        paint(state, &frame, entered_idle, out)?;
        last_state = Some(state);

        let size = session.font_size();
        if size != last_size {
            debug!(?size, "font size selected");
            last_size = size;
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        let event = match events.next_event(timeout)? {
            Some(raw) => match translate_event(raw) {
                Some(event) => event,
                None => continue,
            },
            None => {
                next_tick = Instant::now() + interval;
                SessionEvent::Tick
            }
        };

        if let SessionEvent::Resize(cols, rows) = event {
            debug!(cols, rows, "terminal resized");
        }

        if session.handle(event) == InputResult::Quit {
            break;
        }
    }

    Ok(())
}

/// The idle placeholder covers one row, so the screen is cleared once when
/// the session (re)enters `Idle`.
fn paint(state: SessionState, frame: &str, clear: bool, out: &mut impl Write) -> Result<()> {
    match state {
        SessionState::Active(dims) => draw_frame(out, frame, dims.height),
        _ => {
            if clear {
                write!(out, "\x1b[2J")?;
            }
            draw_frame(out, frame, 1)
        }
    }
}
