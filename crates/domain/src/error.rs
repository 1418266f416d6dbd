//! Common error types used across the workspace.
//!
//! Every layer defines its own typed errors and converts into
//! [`OutletError`] at the port boundary, so the entry point only ever
//! classifies one type.

/// Top-level error for a delayed power-off run.
#[derive(Debug, thiserror::Error)]
pub enum OutletError {
    /// The process input could not be turned into an outlet target.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Another delayed power-off holds the lock marker.
    #[error("delayed power-off already running")]
    AlreadyRunning {
        /// Process id recorded in the marker, when it could be read.
        holder: Option<u32>,
    },

    /// The power-control mechanism ran but reported failure.
    #[error("power-control command failed: {reason}")]
    ExternalCommandFailed {
        /// Human readable description (exit status, HTTP status, …).
        reason: String,
    },

    /// A termination signal arrived before the power-off fired.
    #[error("interrupted before power-off")]
    Interrupted,

    /// Any other platform-level failure (lock write, missing binary, …).
    #[error("unexpected error: {0}")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl OutletError {
    /// Wrap an arbitrary error as [`OutletError::Unexpected`].
    pub fn unexpected<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Unexpected(err.into())
    }
}

/// Reasons the process input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The process expects exactly one positional argument.
    #[error("expected exactly one argument, got {0}")]
    ArgumentCount(usize),

    /// The identifier was an empty string.
    #[error("outlet identifier is empty")]
    Empty,

    /// The identifier contained something other than ASCII digits.
    #[error("outlet identifier {0:?} is not a number")]
    NotANumber(String),

    /// The identifier is numeric but too large.
    #[error("outlet identifier {0:?} is out of range")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_input_error_into_invalid_input() {
        let err: OutletError = InputError::Empty.into();
        assert!(matches!(err, OutletError::InvalidInput(InputError::Empty)));
    }

    #[test]
    fn should_display_argument_count() {
        let err = OutletError::from(InputError::ArgumentCount(2));
        assert_eq!(
            err.to_string(),
            "invalid input: expected exactly one argument, got 2"
        );
    }

    #[test]
    fn should_wrap_io_error_as_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = OutletError::unexpected(io);
        assert!(matches!(err, OutletError::Unexpected(_)));
        assert_eq!(err.to_string(), "unexpected error: denied");
    }

    #[test]
    fn should_expose_source_for_unexpected() {
        let err = OutletError::unexpected("boom");
        assert!(std::error::Error::source(&err).is_some());
    }
}
