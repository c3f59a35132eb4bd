//! Block-letter fonts
//!
//! Three independent glyph atlases (small, medium, large) and the renderer
//! that composes text into a multi-row block.
//!
//! # Architecture
//!
//! - `small` / `medium` / `large`: static glyph tables, one `match` per size
//! - `render`: text → `RenderedBlock`, plus display-width measurement
//! - `error`: `RenderError` for size names that cannot be parsed
//!
//! Atlases cover `0-9`, `.`, `$`, space and the letters of `ERROR` and
//! `HELLO`. Anything else renders as a blank of the size's default width.

mod error;
mod large;
mod medium;
mod render;
mod small;

use std::fmt;
use std::str::FromStr;

pub use error::RenderError;
pub use render::{display_width, render, RenderedBlock};

/// One glyph: a fixed number of rows, each the same column width.
pub type Glyph = &'static [&'static str];

/// Font size used to render text.
///
/// Ordered by rendered size, so `Large > Medium > Small`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// All sizes from largest to smallest (selection order).
    pub const DESCENDING: [FontSize; 3] = [FontSize::Large, FontSize::Medium, FontSize::Small];

    /// Number of glyph rows at this size.
    pub fn rows(self) -> usize {
        match self {
            FontSize::Small => small::ROWS,
            FontSize::Medium => medium::ROWS,
            FontSize::Large => large::ROWS,
        }
    }

    /// Width of the blank cell used for characters missing from the atlas.
    pub fn default_width(self) -> usize {
        match self {
            FontSize::Small => 7,
            FontSize::Medium => 9,
            FontSize::Large => 13,
        }
    }

    /// Spaces between two ordinary glyphs.
    pub fn separator(self) -> &'static str {
        match self {
            FontSize::Small => "  ",
            FontSize::Medium => "   ",
            FontSize::Large => "    ",
        }
    }

    /// Spaces between a glyph and a neighbouring decimal point.
    pub fn decimal_separator(self) -> &'static str {
        match self {
            FontSize::Small => " ",
            FontSize::Medium | FontSize::Large => "  ",
        }
    }

    /// Minimum terminal height (glyph rows plus margin) for this size to be
    /// chosen by the layout engine. `None` means no requirement.
    pub fn min_terminal_height(self) -> Option<u16> {
        match self {
            FontSize::Small => None,
            FontSize::Medium => Some(12),
            FontSize::Large => Some(15),
        }
    }

    /// Lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontSize {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(FontSize::Small),
            "medium" | "m" => Ok(FontSize::Medium),
            "large" | "l" => Ok(FontSize::Large),
            _ => Err(RenderError::UnsupportedFontSize(s.to_string())),
        }
    }
}

/// Look up the glyph for an (already upper-cased) character.
///
/// Returns `None` when the atlas has no glyph for `ch`.
pub fn lookup(ch: char, size: FontSize) -> Option<Glyph> {
    match size {
        FontSize::Small => small::glyph(ch),
        FontSize::Medium => medium::glyph(ch),
        FontSize::Large => large::glyph(ch),
    }
}
