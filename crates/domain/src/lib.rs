//! # outlet-domain
//!
//! Pure domain model for the delayed power-off tools.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **outlet target** (which physical socket to switch)
//! - Define the **sequence states** of a delayed power-off and their legal transitions
//! - Define the **sequence outcome** reported to the entry point and its exit status
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod outcome;
pub mod sequence;
pub mod target;
