//! `PidFileLock` — `LockGuard` backed by a marker file holding the owner's PID.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use outlet_app::ports::LockGuard;
use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

use crate::error::PidFileError;

/// Marker location used by the print-queue backend.
pub const DEFAULT_PATH: &str = "/run/sispmctl_turnoff.pid";

/// Lock whose slot is "a file exists at `path`".
#[derive(Debug, Clone)]
pub struct PidFileLock {
    path: PathBuf,
}

impl PidFileLock {
    /// Create a lock using the marker at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the marker.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PID recorded in the marker, if the marker exists and is readable.
    #[must_use]
    pub fn holder(&self) -> Option<u32> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| content.trim().parse().ok())
    }

    fn create(&self) -> Result<PidFileToken, OutletError> {
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(OutletError::AlreadyRunning {
                    holder: self.holder(),
                });
            }
            Err(source) => {
                return Err(PidFileError::Create {
                    path: self.path.clone(),
                    source,
                }
                .into());
            }
        };

        // From here on the marker is ours; the token removes it if writing fails.
        let token = PidFileToken {
            path: self.path.clone(),
            released: false,
        };
        writeln!(file, "{}", std::process::id())
            .and_then(|()| file.sync_all())
            .map_err(|source| PidFileError::Write {
                path: self.path.clone(),
                source,
            })?;
        Ok(token)
    }
}

impl LockGuard for PidFileLock {
    type Token = PidFileToken;

    fn acquire(&self, target: OutletTarget) -> Result<Self::Token, OutletError> {
        let token = self.create()?;
        debug!(outlet = %target, path = %self.path.display(), "PID file created");
        Ok(token)
    }

    fn is_held(&self) -> Result<bool, OutletError> {
        self.path.try_exists().map_err(|source| {
            PidFileError::Inspect {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    fn release(&self, token: Self::Token) {
        token.release();
    }
}

/// Ownership of the marker file. Removes the file when released or dropped.
#[derive(Debug)]
pub struct PidFileToken {
    path: PathBuf,
    released: bool,
}

impl PidFileToken {
    /// Location of the owned marker.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the marker now.
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "PID file removed"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!(path = %self.path.display(), error = %err, "failed to remove PID file"),
        }
    }
}

impl Drop for PidFileToken {
    fn drop(&mut self) {
        self.remove();
    }
}
