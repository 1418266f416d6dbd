//! Delay sequencer — lock, wait, power off, unlock.
//!
//! A sequencer runs once. It takes the [`LockGuard`] slot, waits for the
//! configured delay and then asks the [`OutletController`] to switch the
//! outlet off. The lock token lives on the stack of [`DelaySequencer::run`],
//! so every way out of the run (success, error, interruption) gives the slot
//! back.
//!
//! A shutdown future passed to `run` cancels the wait. Once the wait is
//! over the power-off call is not cancelled any more: the command is already
//! in flight and its result is what gets reported.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use outlet_domain::error::OutletError;
use outlet_domain::sequence::SequenceState;
use outlet_domain::target::OutletTarget;
use outlet_domain::time;

use crate::ports::{LockGuard, OutletController};

/// Delay between arming and switching off when nothing else is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10 * 60);

/// One-shot delayed power-off.
pub struct DelaySequencer<L, C> {
    lock: L,
    controller: C,
    delay: Duration,
    state: watch::Sender<SequenceState>,
}

impl<L, C> DelaySequencer<L, C>
where
    L: LockGuard,
    C: OutletController,
{
    /// Create a sequencer that waits `delay` before switching off.
    pub fn new(lock: L, controller: C, delay: Duration) -> Self {
        let (state, _) = watch::channel(SequenceState::Idle);
        Self {
            lock,
            controller,
            delay,
            state,
        }
    }

    /// The configured wait.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state of the sequence.
    #[must_use]
    pub fn state(&self) -> SequenceState {
        *self.state.borrow()
    }

    /// Follow state changes of the sequence.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SequenceState> {
        self.state.subscribe()
    }

    /// Run the sequence for `target` until it ends or `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// - [`OutletError::AlreadyRunning`] if the lock is taken
    /// - [`OutletError::Interrupted`] if `shutdown` resolved before the wait ended
    /// - [`OutletError::ExternalCommandFailed`] if the controller reported failure
    /// - [`OutletError::Unexpected`] for anything else
    pub async fn run<F>(self, target: OutletTarget, shutdown: F) -> Result<(), OutletError>
    where
        F: Future<Output = ()> + Send,
    {
        let result = self.sequence(target, shutdown).await;
        if result.is_err() {
            self.enter(SequenceState::Failed);
        }
        result
    }

    async fn sequence<F>(&self, target: OutletTarget, shutdown: F) -> Result<(), OutletError>
    where
        F: Future<Output = ()> + Send,
    {
        let token = self.lock.acquire(target)?;
        self.enter(SequenceState::Locked);

        self.enter(SequenceState::Waiting);
        info!(
            outlet = %target,
            delay_secs = self.delay.as_secs(),
            due = ?time::after(self.delay),
            "power-off armed"
        );

        tokio::pin!(shutdown);
        tokio::select! {
            biased;
            () = &mut shutdown => {
                debug!(outlet = %target, "interrupted while waiting, outlet left untouched");
                return Err(OutletError::Interrupted);
            }
            () = tokio::time::sleep(self.delay) => {}
        }

        self.enter(SequenceState::Firing);
        debug!(outlet = %target, "waiting time done, switching off");
        let fired = self.controller.power_off(target).await;
        self.lock.release(token);
        fired?;

        self.enter(SequenceState::Done);
        info!(outlet = %target, "switched off");
        Ok(())
    }

    fn enter(&self, next: SequenceState) {
        let previous = self.state.send_replace(next);
        debug_assert!(
            previous.can_transition_to(next),
            "illegal transition {previous} -> {next}"
        );
        debug!(from = %previous, to = %next, "sequence state changed");
    }
}
