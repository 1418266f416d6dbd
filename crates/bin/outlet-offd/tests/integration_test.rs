//! End-to-end tests for the `outlet-offd` executable.
//!
//! Each test runs the real binary against a temporary lock path and a shell
//! script standing in for `sispmctl` that appends its arguments to a file.
//! No config file is read and nothing outside the temp directory is touched.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;

struct Fixture {
    dir: tempfile::TempDir,
    lock: PathBuf,
    calls: PathBuf,
    binary: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        Self::with_command_exit(0)
    }

    /// Fixture whose fake power-control command exits with `code`.
    fn with_command_exit(code: i32) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let lock = dir.path().join("turnoff.pid");
        let calls = dir.path().join("calls.log");
        let binary = dir.path().join("sispmctl");
        fs::write(
            &binary,
            format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\nexit {code}\n",
                calls.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
        Self {
            dir,
            lock,
            calls,
            binary,
        }
    }

    fn command(&self, args: &[&str], delay_secs: u64) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_outlet-offd"));
        cmd.args(args)
            .env("OUTLET_OFF_CONFIG", self.dir.path().join("absent.toml"))
            .env("OUTLET_OFF_LOCK_PATH", &self.lock)
            .env("OUTLET_OFF_SISPMCTL", &self.binary)
            .env("OUTLET_OFF_DELAY_SECS", delay_secs.to_string())
            .env("OUTLET_OFF_FOREGROUND", "1")
            .env("OUTLET_OFF_LOG", "outlet=debug")
            .env_remove("RUST_LOG")
            .env_remove("OUTLET_OFF_LOG_FILE")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> ExitStatus {
        self.command(args, 1).status().unwrap()
    }

    fn calls(&self) -> Option<String> {
        fs::read_to_string(&self.calls).ok()
    }

    fn log_file(&self) -> PathBuf {
        self.dir.path().join("outlet-off.log")
    }
}

fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    condition()
}

fn wait_for_exit(child: &mut Child, timeout: Duration) -> ExitStatus {
    let mut status = None;
    let exited = wait_until(timeout, || {
        status = child.try_wait().unwrap();
        status.is_some()
    });
    assert!(exited, "process did not exit in time");
    status.unwrap()
}

fn send_signal(child: &Child, signal: Signal) {
    let pid = Pid::from_raw(i32::try_from(child.id()).unwrap());
    kill(pid, signal).unwrap();
}

fn exists(path: &Path) -> bool {
    path.try_exists().unwrap()
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn should_power_off_outlet_after_delay_and_remove_lock() {
    let fx = Fixture::new();
    let started = Instant::now();
    let mut child = fx.command(&["3"], 1).spawn().unwrap();

    let mut recorded = None;
    assert!(
        wait_until(Duration::from_secs(5), || {
            recorded = fs::read_to_string(&fx.lock)
                .ok()
                .and_then(|content| content.trim().parse::<u32>().ok());
            recorded.is_some()
        }),
        "lock marker should appear while waiting"
    );
    assert_eq!(recorded, Some(child.id()));
    assert!(fx.calls().is_none(), "must not fire before the delay");

    let status = wait_for_exit(&mut child, Duration::from_secs(10));

    assert!(status.success());
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(fx.calls().as_deref(), Some("-f 3\n"));
    assert!(!exists(&fx.lock));
}

#[test]
fn should_hand_over_to_background_process_when_detaching() {
    let fx = Fixture::new();
    let log = fx.log_file();

    let status = fx
        .command(&["5"], 1)
        .env_remove("OUTLET_OFF_FOREGROUND")
        .env("OUTLET_OFF_LOG_FILE", &log)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(
        wait_until(Duration::from_secs(10), || fx.calls().is_some()
            && !exists(&fx.lock)),
        "background process should power off and clean up"
    );
    assert_eq!(fx.calls().as_deref(), Some("-f 5\n"));
    assert!(wait_until(Duration::from_secs(5), || {
        fs::read_to_string(&log).is_ok_and(|content| content.contains("switched off"))
    }));
}

#[test]
fn should_report_background_failure_on_callers_stderr_without_log_file() {
    let fx = Fixture::with_command_exit(1);

    let output = fx
        .command(&["3"], 1)
        .env_remove("OUTLET_OFF_FOREGROUND")
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    // The pipe reaches EOF only once the background process has exited too.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert_eq!(fx.calls().as_deref(), Some("-f 3\n"));
    assert!(stderr.contains("external_command_failed"), "{stderr}");
    assert!(!exists(&fx.lock));
}

// ---------------------------------------------------------------------------
// Argument validation
// ---------------------------------------------------------------------------

#[test]
fn should_reject_non_numeric_outlet() {
    let fx = Fixture::new();

    let status = fx.run(&["abc"]);

    assert_eq!(status.code(), Some(1));
    assert!(!exists(&fx.lock));
    assert!(fx.calls().is_none());
}

#[test]
fn should_reject_missing_argument() {
    let fx = Fixture::new();
    assert_eq!(fx.run(&[]).code(), Some(1));
    assert!(fx.calls().is_none());
}

#[test]
fn should_reject_extra_arguments() {
    let fx = Fixture::new();
    assert_eq!(fx.run(&["1", "2"]).code(), Some(1));
    assert!(!exists(&fx.lock));
    assert!(fx.calls().is_none());
}

#[test]
fn should_classify_bad_outlet_as_invalid_input_even_with_broken_config() {
    let fx = Fixture::new();
    let config = fx.dir.path().join("broken.toml");
    fs::write(&config, "[sequence\ndelay_secs = ").unwrap();

    let output = fx
        .command(&["abc"], 1)
        .env("OUTLET_OFF_CONFIG", &config)
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("invalid_input"), "{stderr}");
    assert!(!stderr.contains("unexpected_error"), "{stderr}");
    assert!(fx.calls().is_none());
}

#[test]
fn should_reject_invalid_configuration() {
    let fx = Fixture::new();

    let status = fx
        .command(&["3"], 1)
        .env("OUTLET_OFF_DELAY_SECS", "0")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(fx.calls().is_none());
}

// ---------------------------------------------------------------------------
// Lock
// ---------------------------------------------------------------------------

#[test]
fn should_refuse_to_start_when_lock_is_held() {
    let fx = Fixture::new();
    fs::write(&fx.lock, "4242\n").unwrap();

    let status = fx.run(&["3"]);

    assert_eq!(status.code(), Some(1));
    assert_eq!(fs::read_to_string(&fx.lock).unwrap(), "4242\n");
    assert!(fx.calls().is_none());
}

#[test]
fn should_fire_once_when_started_twice() {
    let fx = Fixture::new();
    let mut first = fx.command(&["3"], 2).spawn().unwrap();
    assert!(wait_until(Duration::from_secs(5), || exists(&fx.lock)));

    let second = fx.run(&["3"]);
    let first = wait_for_exit(&mut first, Duration::from_secs(10));

    assert_eq!(second.code(), Some(1));
    assert!(first.success());
    assert_eq!(fx.calls().as_deref(), Some("-f 3\n"));
    assert!(!exists(&fx.lock));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn should_exit_non_zero_and_release_lock_when_command_fails() {
    let fx = Fixture::with_command_exit(1);

    let status = fx.run(&["3"]);

    assert_eq!(status.code(), Some(1));
    assert_eq!(fx.calls().as_deref(), Some("-f 3\n"));
    assert!(!exists(&fx.lock));
}

#[test]
fn should_exit_non_zero_when_command_is_missing() {
    let fx = Fixture::new();
    let missing = fx.dir.path().join("no-such-sispmctl");

    let status = fx
        .command(&["3"], 1)
        .env("OUTLET_OFF_SISPMCTL", &missing)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!exists(&fx.lock));
}

#[test]
fn should_not_power_off_when_terminated_during_wait() {
    let fx = Fixture::new();
    let mut child = fx.command(&["3"], 60).spawn().unwrap();
    assert!(wait_until(Duration::from_secs(5), || exists(&fx.lock)));

    send_signal(&child, Signal::SIGTERM);
    let status = wait_for_exit(&mut child, Duration::from_secs(5));

    assert_eq!(status.code(), Some(1));
    assert!(!exists(&fx.lock), "lock must be released on termination");
    assert!(fx.calls().is_none(), "outlet must be left untouched");
}

#[test]
fn should_release_lock_when_hung_up_during_wait() {
    let fx = Fixture::new();
    let mut child = fx.command(&["3"], 60).spawn().unwrap();
    assert!(wait_until(Duration::from_secs(5), || exists(&fx.lock)));

    send_signal(&child, Signal::SIGHUP);
    let status = wait_for_exit(&mut child, Duration::from_secs(5));

    assert_eq!(status.code(), Some(1), "should exit, not die by signal");
    assert!(!exists(&fx.lock), "lock must be released on hangup");
    assert!(fx.calls().is_none());
}

#[test]
fn should_release_lock_when_quit_during_wait() {
    let fx = Fixture::new();
    let mut child = fx.command(&["3"], 60).spawn().unwrap();
    assert!(wait_until(Duration::from_secs(5), || exists(&fx.lock)));

    send_signal(&child, Signal::SIGQUIT);
    let status = wait_for_exit(&mut child, Duration::from_secs(5));

    assert_eq!(status.code(), Some(1));
    assert!(!exists(&fx.lock));
    assert!(fx.calls().is_none());
}
