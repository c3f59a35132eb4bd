//! Cost source errors.

use std::process::ExitStatus;

/// Errors that can occur while fetching cost data.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse cost JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
