//! `TasmotaClient` — fire-and-forget commands to one plug.

use tracing::debug;

use outlet_app::ports::OutletController;
use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

use crate::config::TasmotaConfig;
use crate::error::TasmotaError;
use crate::rule::auto_off_rule;

/// HTTP client bound to the plug at `address` (`host` or `host:port`).
#[derive(Debug, Clone)]
pub struct TasmotaClient {
    http: reqwest::Client,
    address: String,
    config: TasmotaConfig,
}

impl TasmotaClient {
    /// Create a client for the plug at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`TasmotaError::Client`] if the HTTP client cannot be built.
    pub fn new(address: impl Into<String>, config: TasmotaConfig) -> Result<Self, TasmotaError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(TasmotaError::Client)?;
        Ok(Self {
            http,
            address: address.into(),
            config,
        })
    }

    /// Plug address this client talks to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Install the auto-off rule, then fire its event: the plug powers on and
    /// switches itself off after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns the first failing request; the event is not sent if the rule
    /// could not be installed.
    pub async fn power_on_with_auto_off(&self) -> Result<(), TasmotaError> {
        self.arm_auto_off().await?;
        self.send(&format!("Event {}", self.config.event_name)).await
    }

    /// Install the auto-off rule without firing it.
    ///
    /// # Errors
    ///
    /// Returns [`TasmotaError::Transport`] or [`TasmotaError::Status`].
    pub async fn arm_auto_off(&self) -> Result<(), TasmotaError> {
        let rule = auto_off_rule(&self.config.event_name, self.config.auto_off_delay());
        self.send(&format!("Rule1 {rule}")).await
    }

    /// Switch the plug's main relay off immediately.
    ///
    /// # Errors
    ///
    /// Returns [`TasmotaError::Transport`] or [`TasmotaError::Status`].
    pub async fn power_off_now(&self) -> Result<(), TasmotaError> {
        self.send("Power Off").await
    }

    /// Send one console command.
    ///
    /// # Errors
    ///
    /// Returns [`TasmotaError::Transport`] if the request fails and
    /// [`TasmotaError::Status`] for a non-2xx answer.
    pub async fn send(&self, command: &str) -> Result<(), TasmotaError> {
        debug!(address = %self.address, command, "sending Tasmota command");
        let response = self
            .http
            .get(format!("http://{}/cm", self.address))
            .query(&[("cmnd", command)])
            .send()
            .await
            .map_err(|source| TasmotaError::Transport {
                command: command.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TasmotaError::Status {
                command: command.to_string(),
                status,
            })
        }
    }
}

impl OutletController for TasmotaClient {
    async fn power_off(&self, target: OutletTarget) -> Result<(), OutletError> {
        self.send(&format!("Power{target} Off"))
            .await
            .map_err(OutletError::from)
    }
}
