//! Large atlas: 10 rows.
//!
//! Digits, `$` and space are 14 columns wide, letters 13 and the decimal
//! point 9. Unknown characters fall back to a 13-column blank.

use super::Glyph;

/// Number of rows in every large glyph.
pub const ROWS: usize = 10;

const DIGIT_0: Glyph = &[
    "  ██████████  ",
    " ████    ████ ",
    "████      ████",
    "████      ████",
    "████      ████",
    "████      ████",
    "████      ████",
    "████      ████",
    " ████    ████ ",
    "  ██████████  ",
];
const DIGIT_1: Glyph = &[
    "     ████     ",
    "  ███████     ",
    "     ████     ",
    "     ████     ",
    "     ████     ",
    "     ████     ",
    "     ████     ",
    "     ████     ",
    "     ████     ",
    "██████████████",
];
const DIGIT_2: Glyph = &[
    "  ███████████ ",
    " ████     ████",
    "          ████",
    "         ████ ",
    "       ████   ",
    "     ████     ",
    "   ████       ",
    " ████         ",
    "████          ",
    "██████████████",
];
const DIGIT_3: Glyph = &[
    "  ███████████ ",
    " ████     ████",
    "          ████",
    "          ████",
    "     █████████",
    "          ████",
    "          ████",
    "          ████",
    " ████     ████",
    "  ███████████ ",
];
const DIGIT_4: Glyph = &[
    "████      ████",
    "████      ████",
    "████      ████",
    "████      ████",
    "██████████████",
    "          ████",
    "          ████",
    "          ████",
    "          ████",
    "          ████",
];
const DIGIT_5: Glyph = &[
    "██████████████",
    "████          ",
    "████          ",
    "████          ",
    "█████████████ ",
    "          ████",
    "          ████",
    "          ████",
    " ████     ████",
    "  ███████████ ",
];
const DIGIT_6: Glyph = &[
    "  ███████████ ",
    " ████     ████",
    "████          ",
    "████          ",
    "█████████████ ",
    "████      ████",
    "████      ████",
    "████      ████",
    " ████     ████",
    "  ███████████ ",
];
const DIGIT_7: Glyph = &[
    "██████████████",
    "██████████████",
    "          ████",
    "         ████ ",
    "        ████  ",
    "       ████   ",
    "      ████    ",
    "     ████     ",
    "    ████      ",
    "   ████       ",
];
const DIGIT_8: Glyph = &[
    "  ██████████  ",
    " ████    ████ ",
    "████      ████",
    " ████    ████ ",
    "  ██████████  ",
    " ████    ████ ",
    "████      ████",
    "████      ████",
    " ████    ████ ",
    "  ██████████  ",
];
const DIGIT_9: Glyph = &[
    "  ██████████  ",
    " ████    ████ ",
    "████      ████",
    "████      ████",
    " █████████████",
    "          ████",
    "          ████",
    "          ████",
    " ████     ███ ",
    "  ██████████  ",
];
const DOT: Glyph = &[
    "         ",
    "         ",
    "         ",
    "         ",
    "         ",
    "         ",
    "         ",
    " ██████  ",
    " ██████  ",
    " ██████  ",
];
const DOLLAR: Glyph = &[
    "     ████     ",
    "  ███████████ ",
    " ████ ███     ",
    "████  ████    ",
    " ███████████  ",
    "  ███████████ ",
    "     ████ ████",
    "████████  ████",
    " ███████████  ",
    "     ████     ",
];
const SPACE: Glyph = &[
    "              ",
    "              ",
    "              ",
    "              ",
    "              ",
    "              ",
    "              ",
    "              ",
    "              ",
    "              ",
];
const E: Glyph = &[
    "█████████████",
    "████         ",
    "████         ",
    "████         ",
    "█████████    ",
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "█████████████",
];
const R: Glyph = &[
    "████████████ ",
    "████     ████",
    "████     ████",
    "████     ████",
    "████████████ ",
    "████   ████  ",
    "████    ████ ",
    "████     ████",
    "████     ████",
    "████     ████",
];
const O: Glyph = &[
    "  █████████  ",
    " ████   ████ ",
    "████     ████",
    "████     ████",
    "████     ████",
    "████     ████",
    "████     ████",
    "████     ████",
    " ████   ████ ",
    "  █████████  ",
];
const L: Glyph = &[
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "████         ",
    "█████████████",
];
const H: Glyph = &[
    "████     ████",
    "████     ████",
    "████     ████",
    "████     ████",
    "█████████████",
    "████     ████",
    "████     ████",
    "████     ████",
    "████     ████",
    "████     ████",
];

/// Look up the large glyph for an upper-cased character.
pub fn glyph(ch: char) -> Option<Glyph> {
    let g = match ch {
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '5' => DIGIT_5,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '8' => DIGIT_8,
        '9' => DIGIT_9,
        '.' => DOT,
        '$' => DOLLAR,
        ' ' => SPACE,
        'E' => E,
        'R' => R,
        'O' => O,
        'L' => L,
        'H' => H,
        _ => return None,
    };
    Some(g)
}
