//! Sequence state — lifecycle of one delayed power-off.
//!
//! ```text
//! Idle ──► Locked ──► Waiting ──► Firing ──► Done
//!   │         │          │           │
//!   └─────────┴──────────┴───────────┴──► Failed
//! ```

use std::fmt;

/// Where a delayed power-off currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceState {
    /// Nothing has happened yet.
    Idle,
    /// The lock marker is held.
    Locked,
    /// The delay is running.
    Waiting,
    /// The power-off command is in flight.
    Firing,
    /// The outlet was switched off.
    Done,
    /// The run ended without switching the outlet off successfully.
    Failed,
}

impl SequenceState {
    /// Whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Locked)
                | (Self::Locked, Self::Waiting)
                | (Self::Waiting, Self::Firing)
                | (Self::Firing, Self::Done)
                | (Self::Idle | Self::Locked | Self::Waiting | Self::Firing, Self::Failed)
        )
    }
}

impl fmt::Display for SequenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Locked => "locked",
            Self::Waiting => "waiting",
            Self::Firing => "firing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}
