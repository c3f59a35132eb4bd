//! Shared helpers for integration tests.

/// Remove ANSI CSI escape sequences (`ESC [ ... final`).
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Frame lines with leading padding kept.
pub fn frame_lines(frame: &str) -> Vec<&str> {
    frame.split('\n').collect()
}

/// Index of the first line containing glyph ink.
pub fn first_ink_row(frame: &str) -> Option<usize> {
    frame_lines(frame).iter().position(|line| !line.trim().is_empty())
}
