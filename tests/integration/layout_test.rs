//! Frame composition scenarios: size selection, centering and fallbacks.

use ccusage_rainbow::color::AnimationState;
use ccusage_rainbow::layout::{effective_font_size, select_font_size, LOADING, TOO_SMALL};
use ccusage_rainbow::{compose_frame, Dimensions, FontSize, Text, ViewOptions};

use crate::helpers::{first_ink_row, frame_lines, strip_ansi};

fn plain() -> ViewOptions {
    ViewOptions {
        size: None,
        color: false,
    }
}

// ============================================================================
// Size selection
// ============================================================================

#[test]
fn hello_in_a_roomy_terminal_is_large() {
    assert_eq!(select_font_size(&Text::new("HELLO"), 120, 30), FontSize::Large);
}

#[test]
fn short_terminal_caps_the_size() {
    let hello = Text::new("HELLO");
    assert_eq!(select_font_size(&hello, 120, 14), FontSize::Medium);
    assert_eq!(select_font_size(&hello, 120, 11), FontSize::Small);
}

#[test]
fn narrow_terminal_caps_the_size() {
    let hello = Text::new("HELLO");
    assert_eq!(select_font_size(&hello, 80, 30), FontSize::Medium);
    assert_eq!(select_font_size(&hello, 56, 30), FontSize::Small);
}

#[test]
fn forced_size_skips_selection() {
    let options = ViewOptions {
        size: Some(FontSize::Small),
        color: false,
    };
    let dims = Dimensions::new(200, 50);
    assert_eq!(effective_font_size(&Text::new("HELLO"), dims, &options), FontSize::Small);
}

// ============================================================================
// Centering
// ============================================================================

#[test]
fn hello_frame_is_centered_both_ways() {
    let frame = compose_frame(&Text::new("HELLO"), Dimensions::new(120, 30), 0, &plain());
    let lines = frame_lines(&frame);

    // (30 - 10) / 2 blank lines, then ten glyph rows.
    assert_eq!(first_ink_row(&frame), Some(10));
    assert_eq!(lines.len(), 20);
    for line in &lines[10..] {
        assert!(line.starts_with(&" ".repeat(19)));
        assert!(line.chars().count() <= 19 + 81);
    }
}

#[test]
fn colored_frame_matches_plain_frame_once_stripped() {
    let text = Text::new("$12.34");
    let dims = Dimensions::new(100, 20);
    let colored = compose_frame(&text, dims, 3, &ViewOptions::default());
    assert!(colored.contains("\x1b[38;2;"));
    assert_eq!(strip_ansi(&colored), compose_frame(&text, dims, 3, &plain()));
}

#[test]
fn seven_ticks_restore_the_frame() {
    let text = Text::new("ERROR");
    let dims = Dimensions::new(100, 20);
    let options = ViewOptions::default();
    let mut animation = AnimationState::new();
    let first = compose_frame(&text, dims, animation.offset(), &options);

    animation.advance();
    assert_ne!(compose_frame(&text, dims, animation.offset(), &options), first);

    for _ in 1..7 {
        animation.advance();
    }
    assert_eq!(compose_frame(&text, dims, animation.offset(), &options), first);
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn tiny_terminal_shows_message_on_middle_row() {
    let frame = compose_frame(&Text::new("HELLO"), Dimensions::new(10, 10), 0, &plain());
    assert_eq!(frame_lines(&frame)[5], TOO_SMALL);
    assert_eq!(first_ink_row(&frame), Some(5));
}

#[test]
fn forced_size_that_overflows_shows_message() {
    let options = ViewOptions {
        size: Some(FontSize::Large),
        color: true,
    };
    let frame = compose_frame(&Text::new("HELLO"), Dimensions::new(60, 20), 0, &options);
    assert_eq!(frame, format!("{}{}{}", "\n".repeat(10), " ".repeat(21), TOO_SMALL));
}

#[test]
fn unknown_dimensions_show_loading() {
    let hello = Text::new("HELLO");
    assert_eq!(compose_frame(&hello, Dimensions::default(), 0, &plain()), LOADING);
    assert_eq!(compose_frame(&hello, Dimensions::new(80, 0), 0, &plain()), LOADING);
}
