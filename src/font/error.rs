//! Font errors.

/// Errors raised by the font layer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported font size '{0}' (expected small, medium or large)")]
    UnsupportedFontSize(String),
}
