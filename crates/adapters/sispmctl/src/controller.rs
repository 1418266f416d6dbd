//! `SispmctlController` — `OutletController` that shells out to `sispmctl`.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use outlet_app::ports::OutletController;
use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

use crate::config::SispmctlConfig;
use crate::error::CommandError;

/// Switches outlets off by running the configured power-control command.
#[derive(Debug, Clone)]
pub struct SispmctlController {
    binary: PathBuf,
    off_flag: String,
}

impl SispmctlController {
    /// Create a controller from its configuration.
    #[must_use]
    pub fn new(config: SispmctlConfig) -> Self {
        Self {
            binary: config.binary,
            off_flag: config.off_flag,
        }
    }

    /// Executable this controller runs.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    async fn switch_off(&self, target: OutletTarget) -> Result<(), CommandError> {
        debug!(
            program = %self.binary.display(),
            flag = %self.off_flag,
            outlet = %target,
            "running power-control command"
        );

        let output = Command::new(&self.binary)
            .arg(&self.off_flag)
            .arg(target.to_string())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                program: self.binary.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(CommandError::Failed {
            program: self.binary.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl OutletController for SispmctlController {
    async fn power_off(&self, target: OutletTarget) -> Result<(), OutletError> {
        self.switch_off(target).await.map_err(OutletError::from)
    }
}
