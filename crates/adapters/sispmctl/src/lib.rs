//! # outlet-adapter-sispmctl
//!
//! Drives GEMBIRD SIS-PM power strips through the `sispmctl` utility.
//!
//! ## Responsibilities
//! - Implement the `OutletController` port defined in `outlet-app::ports::controller`
//! - Run `<binary> <off_flag> <outlet>` exactly once per call, without retry
//! - Map a non-zero exit status to `ExternalCommandFailed` and a spawn failure to `Unexpected`
//!
//! ## Dependency rule
//! Depends on `outlet-app` (port traits) and `outlet-domain` only.

mod config;
mod controller;
mod error;

pub use config::SispmctlConfig;
pub use controller::SispmctlController;
pub use error::CommandError;
