//! # outlet-adapter-pidfile
//!
//! Filesystem lock marker for the delayed power-off.
//!
//! ## Responsibilities
//! - Implement the `LockGuard` port defined in `outlet-app::ports::lock`
//! - Create the marker exclusively (`O_CREAT | O_EXCL`) and record the owning PID
//! - Remove the marker when the token is released or dropped
//!
//! A marker left behind by a process that was killed outright (`SIGKILL`,
//! power loss) is indistinguishable from a live one and blocks later runs
//! until it is removed by hand.
//!
//! ## Dependency rule
//! Depends on `outlet-app` (for port traits) and `outlet-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod lock;

pub use error::PidFileError;
pub use lock::{DEFAULT_PATH, PidFileLock, PidFileToken};
