//! sispmctl adapter error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use outlet_domain::error::OutletError;

/// Errors from running the power-control utility.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The process could not be started (missing binary, permissions, …).
    #[error("failed to run {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error("{} exited with {status}{}", .program.display(), stderr_suffix(.stderr))]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl From<CommandError> for OutletError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Failed { .. } => Self::ExternalCommandFailed {
                reason: err.to_string(),
            },
            CommandError::Spawn { .. } => Self::unexpected(err),
        }
    }
}
