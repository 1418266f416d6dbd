//! Configuration loading — TOML file with environment variable overrides.
//!
//! Reads the file named by `OUTLET_OFF_CONFIG` (default
//! `/etc/outlet-off.toml`). Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use outlet_adapter_pidfile::DEFAULT_PATH as DEFAULT_LOCK_PATH;
use outlet_adapter_sispmctl::SispmctlConfig;
use outlet_app::sequencer::DEFAULT_DELAY;

/// Config file read when `OUTLET_OFF_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/outlet-off.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lock marker settings.
    pub lock: LockConfig,
    /// Timing of the delayed power-off.
    pub sequence: SequenceConfig,
    /// Power-control command.
    pub controller: SispmctlConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Background execution settings.
    pub daemon: DaemonConfig,
}

/// Lock marker configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Path of the PID file.
    pub path: PathBuf,
}

/// Delay configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Seconds between arming and switching off.
    pub delay_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
    /// Where the detached process writes its log. The caller's stderr when unset.
    pub file: Option<PathBuf>,
}

/// Background execution configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Return to the caller immediately and wait in a background process.
    pub detach: bool,
}

impl Config {
    /// Load configuration from the configured file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("OUTLET_OFF_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("OUTLET_OFF_LOCK_PATH") {
            self.lock.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("OUTLET_OFF_DELAY_SECS") {
            self.sequence.delay_secs = val.parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "OUTLET_OFF_DELAY_SECS must be a number of seconds, got {val:?}"
                ))
            })?;
        }
        if let Some(val) = lookup("OUTLET_OFF_SISPMCTL") {
            self.controller.binary = PathBuf::from(val);
        }
        if let Some(val) = lookup("OUTLET_OFF_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("OUTLET_OFF_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("OUTLET_OFF_FOREGROUND") {
            self.daemon.detach = matches!(val.as_str(), "0" | "false" | "");
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence.delay_secs == 0 {
            return Err(ConfigError::Validation(
                "delay_secs must be non-zero".to_string(),
            ));
        }
        if self.lock.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "lock path must not be empty".to_string(),
            ));
        }
        if self.controller.binary.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "controller binary must not be empty".to_string(),
            ));
        }
        if self.controller.off_flag.is_empty() {
            return Err(ConfigError::Validation(
                "controller off_flag must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl SequenceConfig {
    /// The wait as a [`Duration`].
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOCK_PATH),
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            delay_secs: DEFAULT_DELAY.as_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "outlet=info".to_string(),
            file: None,
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self { detach: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
