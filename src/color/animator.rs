//! Rainbow animation state and the colouring pass.

use std::time::Duration;

use super::{ansi, PALETTE};

/// Fixed animation period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Rotation of the palette across the glyph cells.
///
/// `offset` is the only animated value. It is advanced exactly once per
/// tick by the presentation loop and read during colouring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    offset: usize,
    interval: Duration,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            interval: TICK_INTERVAL,
        }
    }

    /// Current palette offset, always in `0..PALETTE.len()`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Move the rainbow one step.
    pub fn advance(&mut self) {
        self.offset = (self.offset + 1) % PALETTE.len();
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Colour every visible cell of `plain` starting at palette entry `offset`.
///
/// Spaces and newlines pass through. Every other character takes the next
/// palette colour; the index advances per coloured cell and carries over
/// from one row to the next, which makes the bands run diagonally.
pub fn apply_colors(plain: &str, offset: usize) -> String {
    let mut out = String::with_capacity(plain.len() * 8);
    let mut index = offset % PALETTE.len();

    for ch in plain.chars() {
        if ch == ' ' || ch == '\n' {
            out.push(ch);
        } else {
            ansi::push_colored(ch, PALETTE[index], &mut out);
            index = (index + 1) % PALETTE.len();
        }
    }

    out
}
