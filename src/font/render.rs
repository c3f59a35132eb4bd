//! Text → block rendering.
//!
//! Composes a `Text` row by row from the atlas for one `FontSize`.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use super::{lookup, FontSize};
use crate::text::Text;

/// Plain (uncoloured) block produced by `render`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    rows: Vec<String>,
    width: usize,
}

impl RenderedBlock {
    /// Rows in top-to-bottom order. Always `size.rows()` entries.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Terminal column width of the widest non-empty row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// True when no row has any content (empty input text).
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Rows joined with `\n`, the form the colour animator consumes.
    pub fn to_plain(&self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

/// Render `text` as block letters at `size`.
///
/// Characters missing from the atlas become blanks of
/// `size.default_width()` columns. Adjacent glyphs are separated by
/// `size.separator()`, or `size.decimal_separator()` when either of them
/// is a decimal point.
pub fn render(text: &Text, size: FontSize) -> RenderedBlock {
    let chars: Vec<char> = text.upper().chars().collect();
    let blank = " ".repeat(size.default_width());
    let glyphs: Vec<_> = chars.iter().map(|&ch| lookup(ch, size)).collect();

    let rows: Vec<String> = (0..size.rows())
        .map(|r| {
            let mut line = String::new();
            for (i, glyph) in glyphs.iter().enumerate() {
                match glyph {
                    Some(glyph) => line.push_str(glyph[r]),
                    None => line.push_str(&blank),
                }
                if let Some(&next) = chars.get(i + 1) {
                    if chars[i] == '.' || next == '.' {
                        line.push_str(size.decimal_separator());
                    } else {
                        line.push_str(size.separator());
                    }
                }
            }
            line
        })
        .collect();

    let width = display_width(&rows);
    RenderedBlock { rows, width }
}

/// Maximum terminal column width over the non-empty rows.
///
/// Uses `unicode-width`, so wide or combining characters count by the
/// columns they occupy rather than by `char` count.
pub fn display_width<S: AsRef<str>>(rows: &[S]) -> usize {
    rows.iter()
        .map(|row| -> &str { row.as_ref() })
        .filter(|row| !row.is_empty())
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Text {
        Text::new(s)
    }

    #[test]
    fn row_count_matches_size() {
        for size in FontSize::DESCENDING {
            let block = render(&text("HELLO"), size);
            assert_eq!(block.rows().len(), size.rows());
        }
    }

    #[test]
    fn hello_widths_per_size() {
        // 5 glyphs + 4 ordinary separators
        assert_eq!(render(&text("HELLO"), FontSize::Small).width(), 5 * 7 + 4 * 2);
        assert_eq!(render(&text("HELLO"), FontSize::Medium).width(), 5 * 9 + 4 * 3);
        assert_eq!(render(&text("HELLO"), FontSize::Large).width(), 5 * 13 + 4 * 4);
    }

    #[test]
    fn input_is_case_folded() {
        assert_eq!(
            render(&text("hello"), FontSize::Medium),
            render(&text("HELLO"), FontSize::Medium)
        );
    }

    #[test]
    fn decimal_point_uses_narrow_separator_at_large() {
        let block = render(&text("$9999.99"), FontSize::Large);
        // $ + 6 digits at 14, dot at 9; four 4-space gaps, two 2-space gaps
        // around the dot, and one 4-space gap between the last two digits.
        let expected = 7 * 14 + 9 + 5 * 4 + 2 * 2;
        assert_eq!(expected, 131);
        for row in block.rows() {
            assert_eq!(row.chars().count(), expected);
        }
        assert_eq!(block.width(), expected);
    }

    #[test]
    fn decimal_point_row_contents_at_large() {
        let block = render(&text("9.9"), FontSize::Large);
        let bottom = &block.rows()[9];
        let nine = lookup('9', FontSize::Large).unwrap()[9];
        let dot = lookup('.', FontSize::Large).unwrap()[9];
        assert_eq!(bottom, &format!("{nine}  {dot}  {nine}"));
    }

    #[test]
    fn decimal_separator_at_small_is_one_space() {
        let block = render(&text("1.5"), FontSize::Small);
        assert_eq!(block.width(), 7 + 1 + 7 + 1 + 7);
    }

    #[test]
    fn no_trailing_separator() {
        let block = render(&text("0"), FontSize::Medium);
        assert_eq!(block.rows()[0], lookup('0', FontSize::Medium).unwrap()[0]);
    }

    #[test]
    fn unknown_characters_render_as_default_blank() {
        for size in FontSize::DESCENDING {
            let block = render(&text("\u{1b}"), size);
            for row in block.rows() {
                assert_eq!(row, &" ".repeat(size.default_width()));
            }
        }
    }

    #[test]
    fn unknown_character_between_glyphs_keeps_spacing() {
        let block = render(&text("1?1"), FontSize::Small);
        assert_eq!(block.width(), 7 + 2 + 7 + 2 + 7);
        assert_eq!(block.rows()[0], format!("{}{}{}", "  ███    ", "       ", "    ███  "));
    }

    #[test]
    fn empty_text_renders_nothing() {
        let block = render(&text(""), FontSize::Large);
        assert!(block.is_empty());
        assert_eq!(block.width(), 0);
        assert_eq!(block.rows().len(), 10);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render(&text("$42.00"), FontSize::Medium).to_plain();
        let b = render(&text("$42.00"), FontSize::Medium).to_plain();
        assert_eq!(a, b);
    }

    #[test]
    fn width_never_shrinks_as_text_grows() {
        let full = "$1234.56 HELLO ERROR";
        for size in FontSize::DESCENDING {
            let mut prev = 0;
            for end in 0..=full.len() {
                let width = render(&text(&full[..end]), size).width();
                assert!(width >= prev, "{size}: width dropped at {end}");
                prev = width;
            }
        }
    }

    #[test]
    fn display_width_ignores_empty_rows_and_counts_columns() {
        assert_eq!(display_width(&["", "███", "█"]), 3);
        assert_eq!(display_width::<&str>(&[]), 0);
        // Fullwidth characters occupy two columns each.
        assert_eq!(display_width(&["ＡＢ"]), 4);
    }

    #[test]
    fn to_plain_joins_rows_with_newlines() {
        let block = render(&text("1"), FontSize::Small);
        assert_eq!(block.to_plain().lines().count(), 5);
        assert_eq!(block.to_string(), block.to_plain());
    }
}
