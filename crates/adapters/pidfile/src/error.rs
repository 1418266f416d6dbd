//! PID-file specific error type.

use std::path::PathBuf;

use outlet_domain::error::OutletError;

/// Errors originating from the lock marker on disk.
#[derive(Debug, thiserror::Error)]
pub enum PidFileError {
    /// The marker could not be created for a reason other than "already exists".
    #[error("failed to create lock marker {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The marker was created but the PID could not be written to it.
    #[error("failed to write lock marker {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Checking for the marker failed.
    #[error("failed to inspect lock marker {}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<PidFileError> for OutletError {
    fn from(err: PidFileError) -> Self {
        Self::unexpected(err)
    }
}
