//! # outlet-adapter-tasmota
//!
//! Talks to smart plugs running the Tasmota firmware through its
//! `/cm?cmnd=…` HTTP command endpoint.
//!
//! ## Responsibilities
//! - Format the auto-off rule (`Rule1`) that powers the plug on when an event
//!   fires and arms `RuleTimer1` to power it off again
//! - Send single commands (`Rule1 …`, `Event …`, `Power Off`) as fire-and-forget GETs
//! - Implement the `OutletController` port so a plug can stand in for `sispmctl`
//!
//! Responses are not parsed and nothing is retried.
//!
//! ## Dependency rule
//! Depends on `outlet-app` (port traits) and `outlet-domain` only.

mod client;
mod config;
mod error;
mod rule;

pub use client::TasmotaClient;
pub use config::TasmotaConfig;
pub use error::TasmotaError;
pub use rule::auto_off_rule;
