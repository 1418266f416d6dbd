//! Detaching from the invoking caller.
//!
//! The print queue must not block for the whole delay, so the first process
//! re-spawns itself in its own process group with stdin and stdout closed and
//! exits. The child is started with [`DETACHED_ARG`] in front of the outlet
//! number; it strips the flag again and runs the sequence in the foreground.
//! The environment is passed on untouched, so nothing leaks into the
//! power-control command.

use std::fs::OpenOptions;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

/// Leading argument that marks the re-spawned background process.
pub const DETACHED_ARG: &str = "--detached";

/// Split off a leading [`DETACHED_ARG`].
///
/// Returns whether the flag was present and the remaining arguments.
pub fn strip_detached_flag<I>(args: I) -> (bool, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    let detached = args.first().is_some_and(|first| first == DETACHED_ARG);
    if detached {
        args.remove(0);
    }
    (detached, args)
}

/// Start the background process for `target` and return its PID.
///
/// The child's stderr (its log output) is appended to `log_file`. Without a
/// log file the child keeps the caller's stderr, so its failures stay
/// visible after the caller has exited.
///
/// # Errors
///
/// Returns a [`DetachError`] if the executable cannot be located, the log
/// file cannot be opened, or the process cannot be spawned.
pub fn spawn_detached(target: OutletTarget, log_file: Option<&Path>) -> Result<u32, DetachError> {
    let exe = std::env::current_exe().map_err(DetachError::CurrentExe)?;
    let stderr = match log_file {
        Some(path) => OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(Stdio::from)
            .map_err(|source| DetachError::LogFile {
                path: path.to_path_buf(),
                source,
            })?,
        None => Stdio::inherit(),
    };

    let child = Command::new(exe)
        .arg(DETACHED_ARG)
        .arg(target.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(stderr)
        .process_group(0)
        .spawn()
        .map_err(DetachError::Spawn)?;

    Ok(child.id())
}

/// Errors while starting the background process.
#[derive(Debug, thiserror::Error)]
pub enum DetachError {
    /// The path of the running executable is unknown.
    #[error("failed to locate own executable")]
    CurrentExe(#[source] std::io::Error),
    /// The log file could not be opened for appending.
    #[error("failed to open log file {}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The background process could not be started.
    #[error("failed to spawn background process")]
    Spawn(#[source] std::io::Error),
}

impl From<DetachError> for OutletError {
    fn from(err: DetachError) -> Self {
        Self::unexpected(err)
    }
}
