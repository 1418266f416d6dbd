//! Tasmota client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Settings for talking to one Tasmota plug.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TasmotaConfig {
    /// Name of the rule event that powers the plug on and arms the timer.
    pub event_name: String,
    /// Minutes the plug stays on after the event fired.
    pub auto_off_minutes: u64,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl TasmotaConfig {
    /// How long the plug stays on.
    #[must_use]
    pub fn auto_off_delay(&self) -> Duration {
        Duration::from_secs(self.auto_off_minutes.saturating_mul(60))
    }

    /// HTTP request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TasmotaConfig {
    fn default() -> Self {
        Self {
            event_name: "auto_off".to_string(),
            auto_off_minutes: 15,
            timeout_secs: 10,
        }
    }
}
