//! # outlet-app
//!
//! Application layer — the delayed power-off use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `LockGuard` — exclusive marker that at most one delayed power-off is pending
//!   - `OutletController` — switch an outlet off through some external mechanism
//! - Provide the `DelaySequencer` that ties lock, wait and power-off together
//! - Provide **in-process infrastructure** (an in-memory lock) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `outlet-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod in_process_lock;
pub mod ports;
pub mod sequencer;
