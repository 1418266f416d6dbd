//! # outlet-offd — delayed power-off backend
//!
//! Composition root for the print-queue backend that switches a SIS-PM
//! outlet off some time after the last job.
//!
//! ## Responsibilities
//! - Validate the single positional argument (the outlet number)
//! - Load configuration (config file, env vars) and initialise logging
//! - Refuse early when another delayed power-off holds the lock marker
//! - Detach into a background process so the caller is not blocked
//! - Wire the PID-file lock and the `sispmctl` controller into the sequencer
//! - Turn SIGTERM/SIGINT/SIGHUP/SIGQUIT into cancellation of the wait
//! - Log the outcome once and exit `0` on success, `1` otherwise
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;
mod detach;

use std::future::Future;
use std::process::ExitCode;

use tokio::signal::unix::{SignalKind, signal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use outlet_adapter_pidfile::PidFileLock;
use outlet_adapter_sispmctl::SispmctlController;
use outlet_app::ports::LockGuard;
use outlet_app::sequencer::DelaySequencer;
use outlet_domain::error::OutletError;
use outlet_domain::outcome::SequenceOutcome;
use outlet_domain::target::OutletTarget;

use crate::config::{Config, LoggingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let (detached, args) = detach::strip_detached_flag(std::env::args().skip(1));
    let target = OutletTarget::from_args(args);
    let config = Config::load();
    let filter = config.as_ref().map_or_else(
        |_| LoggingConfig::default().filter,
        |config| config.logging.filter.clone(),
    );
    init_tracing(&filter);

    let result = match (target, config) {
        (Err(err), _) => Err(OutletError::from(err)),
        (Ok(_), Err(err)) => Err(OutletError::unexpected(err)),
        (Ok(target), Ok(config)) => run(target, config, detached).await,
    };

    let outcome = SequenceOutcome::from_result(&result);
    if let Err(err) = &result {
        error!(%outcome, "ERROR: {err}");
    }
    ExitCode::from(outcome.exit_code())
}

async fn run(target: OutletTarget, config: Config, detached: bool) -> Result<(), OutletError> {
    let lock = PidFileLock::new(&config.lock.path);
    if lock.is_held()? {
        return Err(OutletError::AlreadyRunning {
            holder: lock.holder(),
        });
    }

    if config.daemon.detach && !detached {
        let pid = detach::spawn_detached(target, config.logging.file.as_deref())?;
        info!(outlet = %target, pid, "delayed power-off handed to background process");
        return Ok(());
    }

    let shutdown = shutdown_signal().map_err(OutletError::unexpected)?;
    let controller = SispmctlController::new(config.controller);
    DelaySequencer::new(lock, controller, config.sequence.delay())
        .run(target, shutdown)
        .await
}

/// Resolve on the first SIGTERM, SIGINT, SIGHUP or SIGQUIT.
///
/// Every catchable signal whose default action ends the process is handled,
/// so the lock marker is always removed on the way out. Handlers are
/// installed before returning; a signal that arrives while the sequence is
/// starting is not lost.
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()> + Send> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sighup = signal(SignalKind::hangup())?;
    let mut sigquit = signal(SignalKind::quit())?;
    Ok(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("received SIGTERM"),
            _ = sigint.recv() => info!("received SIGINT"),
            _ = sighup.recv() => info!("received SIGHUP"),
            _ = sigquit.recv() => info!("received SIGQUIT"),
        }
    })
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
