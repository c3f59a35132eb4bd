//! ccusage-rainbow
//!
//! Shows a short string (normally your ccusage total cost) as huge
//! block-letter ASCII art with an animated rainbow, picking the largest
//! font that fits the terminal.
//!
//! Pipeline per frame: `layout` picks a `FontSize`, `font` renders the
//! glyph rows, `color` paints them, `layout` centers the result and
//! `display` writes it to the alternate screen.

pub mod cli;
pub mod color;
pub mod config;
pub mod cost;
pub mod display;
pub mod font;
pub mod layout;
pub mod text;

pub use config::Config;
pub use display::Session;
pub use font::{render, FontSize, RenderError, RenderedBlock};
pub use layout::{compose_frame, Dimensions, ViewOptions};
pub use text::Text;
