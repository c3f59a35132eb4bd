//! Rainbow colouring
//!
//! - `ansi`: 24-bit foreground escape sequences
//! - `animator`: animation offset and the per-cell colouring pass

mod animator;
pub mod ansi;

pub use animator::{apply_colors, AnimationState, TICK_INTERVAL};

/// A 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The rainbow, red to violet.
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0xFF, 0x00, 0x00), // red
    Rgb::new(0xFF, 0x80, 0x00), // orange
    Rgb::new(0xFF, 0xFF, 0x00), // yellow
    Rgb::new(0x00, 0xFF, 0x00), // green
    Rgb::new(0x00, 0x80, 0xFF), // blue
    Rgb::new(0x40, 0x00, 0xFF), // indigo
    Rgb::new(0x80, 0x00, 0xFF), // violet
];
