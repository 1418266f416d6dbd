//! # tasmota-switch — smart-plug companion
//!
//! Composition root for switching a Tasmota plug from the command line.
//!
//! ## Responsibilities
//! - Parse `<address> <on|off>`
//! - Build the plug settings from `TASMOTA_EVENT`, `TASMOTA_AUTO_OFF_MINUTES`
//!   and `TASMOTA_TIMEOUT_SECS`
//! - `on`: install the auto-off rule and fire its event (plug on, off again
//!   after the configured minutes)
//! - `off`: switch the plug off immediately
//!
//! The log filter comes from `RUST_LOG`, then `TASMOTA_LOG`.
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod args;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use outlet_adapter_tasmota::{TasmotaClient, TasmotaConfig};

use crate::args::{Invocation, Switch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let invocation = Invocation::parse(std::env::args().skip(1))?;
    let config = config_from_env(|key| std::env::var(key).ok())?;
    let client = TasmotaClient::new(&invocation.address, config)?;

    match invocation.switch {
        Switch::On => client
            .power_on_with_auto_off()
            .await
            .with_context(|| format!("failed to switch {} on", invocation.address))?,
        Switch::Off => client
            .power_off_now()
            .await
            .with_context(|| format!("failed to switch {} off", invocation.address))?,
    }

    info!(address = %invocation.address, switch = %invocation.switch, "command sent");
    Ok(())
}

fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<TasmotaConfig> {
    let mut config = TasmotaConfig::default();
    if let Some(val) = lookup("TASMOTA_EVENT") {
        config.event_name = val;
    }
    if let Some(val) = lookup("TASMOTA_AUTO_OFF_MINUTES") {
        config.auto_off_minutes = val
            .parse()
            .with_context(|| format!("TASMOTA_AUTO_OFF_MINUTES must be a number, got {val:?}"))?;
    }
    if let Some(val) = lookup("TASMOTA_TIMEOUT_SECS") {
        config.timeout_secs = val
            .parse()
            .with_context(|| format!("TASMOTA_TIMEOUT_SECS must be a number, got {val:?}"))?;
    }
    Ok(config)
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("TASMOTA_LOG"))
        .unwrap_or_else(|_| "tasmota_switch=info,outlet=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
