//! Sequence outcome — the coarse result the entry point turns into an exit status.

use std::fmt;

use crate::error::OutletError;

/// How a delayed power-off run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceOutcome {
    /// The outlet was switched off.
    Completed,
    /// Another run held the lock.
    AlreadyRunning,
    /// The process input was malformed.
    InvalidInput,
    /// The power-control mechanism reported failure.
    ExternalCommandFailed,
    /// A signal ended the run before the power-off fired.
    Interrupted,
    /// Anything else.
    UnexpectedError,
}

impl SequenceOutcome {
    /// Classify the result of a run.
    #[must_use]
    pub fn from_result(result: &Result<(), OutletError>) -> Self {
        match result {
            Ok(()) => Self::Completed,
            Err(err) => Self::from(err),
        }
    }

    /// Process exit status: `0` for [`Completed`](Self::Completed), `1` otherwise.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Completed => 0,
            _ => 1,
        }
    }

    /// Whether the run switched the outlet off.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<&OutletError> for SequenceOutcome {
    fn from(err: &OutletError) -> Self {
        match err {
            OutletError::InvalidInput(_) => Self::InvalidInput,
            OutletError::AlreadyRunning { .. } => Self::AlreadyRunning,
            OutletError::ExternalCommandFailed { .. } => Self::ExternalCommandFailed,
            OutletError::Interrupted => Self::Interrupted,
            OutletError::Unexpected(_) => Self::UnexpectedError,
        }
    }
}

impl fmt::Display for SequenceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Completed => "completed",
            Self::AlreadyRunning => "already_running",
            Self::InvalidInput => "invalid_input",
            Self::ExternalCommandFailed => "external_command_failed",
            Self::Interrupted => "interrupted",
            Self::UnexpectedError => "unexpected_error",
        };
        f.write_str(s)
    }
}
