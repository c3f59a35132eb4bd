//! The text being displayed.

use std::fmt;

/// Immutable text to render as block letters.
///
/// Created once per session from the command line or the cost source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Literal shown when the cost source fails.
    pub const ERROR: &'static str = "ERROR";
    /// Literal shown by the hidden `--hi` flag.
    pub const HELLO: &'static str = "HELLO";
    /// Literal shown by the hidden `--bankrupt` flag.
    pub const BANKRUPT: &'static str = "$9999.99";

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Upper-cased content used for glyph lookup.
    pub fn upper(&self) -> String {
        self.content.to_uppercase()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
