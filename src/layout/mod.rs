//! Layout engine
//!
//! Turns text plus terminal dimensions into a complete frame:
//! pick a font size → render → colour → center.
//!
//! - `fit`: font-size selection
//! - `center`: horizontal/vertical centering and the fallback frames

mod center;
mod fit;

pub use center::{center, too_small, LOADING, TOO_SMALL};
pub use fit::select_font_size;

use crate::color::apply_colors;
use crate::font::{render, FontSize};
use crate::text::Text;

/// Terminal viewport size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// False until the terminal has reported a non-zero size.
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Rendering choices fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Use this size instead of adaptive selection.
    pub size: Option<FontSize>,
    /// Emit rainbow escapes (off when `NO_COLOR` is set).
    pub color: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            size: None,
            color: true,
        }
    }
}

/// Size that will be used for `text` in a terminal of `dims`.
pub fn effective_font_size(text: &Text, dims: Dimensions, options: &ViewOptions) -> FontSize {
    options
        .size
        .unwrap_or_else(|| select_font_size(text, dims.width, dims.height))
}

/// Compose one full frame.
///
/// Unknown dimensions yield the loading placeholder; a block wider than
/// the terminal yields the "too small" frame.
pub fn compose_frame(text: &Text, dims: Dimensions, offset: usize, options: &ViewOptions) -> String {
    if !dims.is_known() {
        return LOADING.to_string();
    }

    let size = effective_font_size(text, dims, options);
    let block = render(text, size);
    if block.width() > dims.width as usize {
        return too_small(dims.width, dims.height);
    }

    let plain = block.to_plain();
    let body = if options.color {
        apply_colors(&plain, offset)
    } else {
        plain
    };
    center(&body, block.width(), dims.width, dims.height)
}
