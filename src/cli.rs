//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can build the man page from it.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::font::FontSize;
use crate::text::Text;

/// Version string with git SHA and build date.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("CCR_BUILD_DATE"),
    ")"
);

/// Version string with build date (release builds carry no git hash).
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CCR_BUILD_DATE"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "ccusage-rainbow",
    version,
    long_version = LONG_VERSION,
    about = "Display rainbow colored total cost from ccusage",
    long_about = "Fetches your total cost from ccusage and displays it as large ASCII \
                  text with animated rainbow colors.\n\n\
                  Press q, Esc or Ctrl+C to quit."
)]
pub struct Cli {
    /// Text to display instead of the ccusage total
    pub text: Option<String>,

    /// Font size to use instead of picking the largest that fits
    #[arg(long, value_name = "SIZE", value_parser = parse_font_size)]
    pub size: Option<FontSize>,

    /// Config file (default: <config dir>/ccusage-rainbow/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    #[arg(long, hide = true)]
    pub hi: bool,

    #[arg(long, hide = true)]
    pub bankrupt: bool,
}

fn parse_font_size(s: &str) -> Result<FontSize, String> {
    s.parse::<FontSize>().map_err(|e| e.to_string())
}

impl Cli {
    /// Text given directly on the command line, if any.
    ///
    /// Precedence: positional text, `--hi`, `--bankrupt`. `None` means the
    /// cost source should be queried.
    pub fn literal_text(&self) -> Option<Text> {
        if let Some(text) = &self.text {
            Some(Text::new(text.as_str()))
        } else if self.hi {
            Some(Text::new(Text::HELLO))
        } else if self.bankrupt {
            Some(Text::new(Text::BANKRUPT))
        } else {
            None
        }
    }
}
