//! ANSI escape helpers for frame output.

use super::Rgb;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Append a 24-bit foreground escape for `color` to `buf`.
pub fn push_fg(color: Rgb, buf: &mut String) {
    buf.push_str("\x1b[38;2;");
    buf.push_str(&color.r.to_string());
    buf.push(';');
    buf.push_str(&color.g.to_string());
    buf.push(';');
    buf.push_str(&color.b.to_string());
    buf.push('m');
}

/// Append `ch` wrapped in `color` and a reset.
pub fn push_colored(ch: char, color: Rgb, buf: &mut String) {
    push_fg(color, buf);
    buf.push(ch);
    buf.push_str(RESET);
}
