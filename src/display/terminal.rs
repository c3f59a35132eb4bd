//! Terminal setup and frame output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Raw mode + alternate screen for the lifetime of the guard.
///
/// Dropping the guard restores the terminal, so every exit path out of the
/// loop (including `?` and panics) leaves the shell usable.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Build the escape stream that paints `frame` over a `height`-row screen.
///
/// Each screen row is addressed explicitly and cleared to the end of the
/// line, so rows from the previous frame never linger. Frame lines past the
/// bottom of the screen are dropped.
pub fn frame_output(frame: &str, height: u16) -> String {
    let mut lines = frame.split('\n');
    let mut output = String::with_capacity(frame.len() + height as usize * 8);

    for row in 0..height {
        output.push_str(&format!("\x1b[{};1H", row + 1));
        if let Some(line) = lines.next() {
            output.push_str(line);
        }
        output.push_str("\x1b[K");
    }

    output
}

/// Write one frame to `out` in a single write.
pub fn draw_frame(out: &mut impl Write, frame: &str, height: u16) -> Result<()> {
    write!(out, "{}", frame_output(frame, height))?;
    out.flush()?;
    Ok(())
}
