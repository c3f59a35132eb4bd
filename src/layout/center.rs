//! Centering of a coloured block within the terminal.

/// Shown when even the smallest font overflows the terminal width.
pub const TOO_SMALL: &str = "Terminal too small";

/// Shown until the terminal has reported its size.
pub const LOADING: &str = "Loading...";

/// Center a (possibly coloured) block.
///
/// `display_width` is the plain block's width; `block` may contain escape
/// sequences so it is never measured here. Every row gets the same left
/// padding so the block keeps a straight left edge. Empty rows are dropped.
/// If the block is wider than the terminal the "too small" frame is
/// returned instead.
pub fn center(block: &str, display_width: usize, width: u16, height: u16) -> String {
    let width = width as usize;
    if display_width > width {
        return too_small(width as u16, height);
    }

    let padding = " ".repeat(width.saturating_sub(display_width) / 2);
    let lines: Vec<String> = block
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| format!("{padding}{line}"))
        .collect();

    let vertical = (height as usize).saturating_sub(lines.len()) / 2;
    let mut frame = "\n".repeat(vertical);
    frame.push_str(&lines.join("\n"));
    frame
}

/// The "too small" frame: the message centered by character count on row
/// `height / 2`.
pub fn too_small(width: u16, height: u16) -> String {
    let padding = (width as usize).saturating_sub(TOO_SMALL.chars().count()) / 2;
    format!(
        "{}{}{}",
        "\n".repeat(height as usize / 2),
        " ".repeat(padding),
        TOO_SMALL
    )
}
