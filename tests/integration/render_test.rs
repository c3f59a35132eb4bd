//! Glyph rendering scenarios through the public API.

use ccusage_rainbow::font::{display_width, lookup};
use ccusage_rainbow::{render, FontSize, Text};

// ============================================================================
// Atlas
// ============================================================================

#[test]
fn every_supported_char_exists_in_every_size() {
    for size in FontSize::DESCENDING {
        for ch in "0123456789.$ EROLH".chars() {
            let glyph = lookup(ch, size).unwrap_or_else(|| panic!("{ch:?} missing at {size}"));
            assert_eq!(glyph.len(), size.rows(), "{ch:?} at {size}");
        }
    }
}

#[test]
fn lowercase_is_not_in_the_atlas_but_renders_upper() {
    assert!(lookup('h', FontSize::Small).is_none());
    assert_eq!(
        render(&Text::new("hello"), FontSize::Small),
        render(&Text::new("HELLO"), FontSize::Small)
    );
}

// ============================================================================
// Widths
// ============================================================================

#[test]
fn hello_widths_per_size() {
    let text = Text::new("HELLO");
    assert_eq!(render(&text, FontSize::Small).width(), 43);
    assert_eq!(render(&text, FontSize::Medium).width(), 57);
    assert_eq!(render(&text, FontSize::Large).width(), 81);
}

#[test]
fn bankrupt_at_large_is_131_columns() {
    let block = render(&Text::new("$9999.99"), FontSize::Large);
    assert_eq!(block.rows().len(), 10);
    assert_eq!(block.width(), 131);
    for row in block.rows() {
        assert_eq!(display_width(&[row]), 131);
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_text_renders_nothing_visible() {
    let block = render(&Text::new(""), FontSize::Medium);
    assert_eq!(block.width(), 0);
    assert!(block.is_empty());
}

#[test]
fn control_characters_become_default_width_blanks() {
    for size in FontSize::DESCENDING {
        let block = render(&Text::new("\t"), size);
        assert_eq!(block.width(), size.default_width());
        for row in block.rows() {
            assert_eq!(row.chars().count(), size.default_width());
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let text = Text::new("$42.00");
    assert_eq!(render(&text, FontSize::Large), render(&text, FontSize::Large));
}
