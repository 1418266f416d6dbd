//! Tasmota adapter error types.

use outlet_domain::error::OutletError;

/// Errors specific to the Tasmota adapter.
#[derive(Debug, thiserror::Error)]
pub enum TasmotaError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the connection failed.
    #[error("request for {command:?} failed")]
    Transport {
        command: String,
        #[source]
        source: reqwest::Error,
    },

    /// The plug answered with a non-success status.
    #[error("plug answered {status} to {command:?}")]
    Status {
        command: String,
        status: reqwest::StatusCode,
    },
}

impl From<TasmotaError> for OutletError {
    fn from(err: TasmotaError) -> Self {
        match err {
            TasmotaError::Status { .. } => Self::ExternalCommandFailed {
                reason: err.to_string(),
            },
            other => Self::unexpected(other),
        }
    }
}
