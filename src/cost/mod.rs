//! Cost data from ccusage
//!
//! Runs `ccusage -j` (by default through `npx`) and extracts the total
//! cost to display. Any failure is reported to the caller, which swaps in
//! the `ERROR` literal before the text reaches the renderer.

mod error;

use std::process::Command;

use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

pub use error::CostError;

use crate::config::SourceConfig;
use crate::text::Text;

/// Top-level `ccusage -j` report.
///
/// Decoding is lenient: a missing or `null` field takes its zero value, so
/// a partial report still yields a cost.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub daily: Vec<DailyUsage>,
    #[serde(deserialize_with = "null_as_default")]
    pub totals: Totals,
}

/// Usage for one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub input_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub output_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_creation_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_read_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_cost: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub models_used: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub model_breakdowns: Vec<ModelBreakdown>,
}

/// Per-model share of one day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelBreakdown {
    #[serde(deserialize_with = "null_as_default")]
    pub model_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub input_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub output_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_creation_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_read_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cost: f64,
}

/// Totals across the whole report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
    #[serde(deserialize_with = "null_as_default")]
    pub input_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub output_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_creation_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_read_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_cost: f64,
}

/// `null` decodes to the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Totals {
    /// Dollar amount with two decimals, e.g. `$12.34`.
    pub fn format_cost(&self) -> String {
        format!("${:.2}", self.total_cost)
    }
}

impl CostResponse {
    pub fn from_json(bytes: &[u8]) -> Result<Self, CostError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Something that can produce a cost report.
pub trait CostSource {
    /// Human-readable description for logs and errors.
    fn describe(&self) -> String;

    /// Fetch and parse one report.
    fn fetch(&self) -> Result<CostResponse, CostError>;
}

/// Runs an external command and parses its stdout as a report.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl From<&SourceConfig> for CommandSource {
    fn from(config: &SourceConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

impl CostSource for CommandSource {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn fetch(&self) -> Result<CostResponse, CostError> {
        let command = self.describe();
        debug!(%command, "running cost command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| CostError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CostError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        CostResponse::from_json(&output.stdout)
    }
}

/// Fetch the total cost as display text, or `ERROR` if anything fails.
pub fn fetch_text(source: &dyn CostSource) -> Text {
    match source.fetch() {
        Ok(report) => {
            let text = report.totals.format_cost();
            info!(source = %source.describe(), %text, "fetched total cost");
            Text::new(text)
        }
        Err(e) => {
            warn!(source = %source.describe(), error = %e, "cost fetch failed");
            Text::new(Text::ERROR)
        }
    }
}
