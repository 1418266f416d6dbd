//! sispmctl command configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// How to invoke the power-control utility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SispmctlConfig {
    /// Path to the executable.
    pub binary: PathBuf,
    /// Flag that switches an outlet off.
    pub off_flag: String,
}

impl Default for SispmctlConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("/usr/bin/sispmctl"),
            off_flag: "-f".to_string(),
        }
    }
}
