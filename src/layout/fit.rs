//! Font-size selection.

use tracing::trace;

use crate::font::{render, FontSize};
use crate::text::Text;

/// Pick the largest size whose rendering fits the terminal.
///
/// Large and Medium must fit the width and meet their minimum height
/// (15 and 12 rows). Small is the unconditional fallback and may still
/// overflow; the caller handles that with the "too small" frame.
pub fn select_font_size(text: &Text, width: u16, height: u16) -> FontSize {
    for size in [FontSize::Large, FontSize::Medium] {
        let rendered = render(text, size).width();
        let tall_enough = size.min_terminal_height().map_or(true, |min| height >= min);
        trace!(%size, rendered, width, height, tall_enough, "checking font size");
        if rendered <= width as usize && tall_enough {
            return size;
        }
    }
    FontSize::Small
}
