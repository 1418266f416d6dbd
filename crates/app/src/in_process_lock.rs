//! In-process lock backed by an atomic flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

use crate::ports::LockGuard;

/// [`LockGuard`] for runs that share one process.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InProcessLock {
    held: Arc<AtomicBool>,
}

impl InProcessLock {
    /// Create an unlocked slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ownership of an [`InProcessLock`] slot; dropping it frees the slot.
#[derive(Debug)]
pub struct InProcessToken {
    held: Arc<AtomicBool>,
}

impl Drop for InProcessToken {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}

impl LockGuard for InProcessLock {
    type Token = InProcessToken;

    fn acquire(&self, _target: OutletTarget) -> Result<Self::Token, OutletError> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InProcessToken {
                held: Arc::clone(&self.held),
            })
            .map_err(|_| OutletError::AlreadyRunning { holder: None })
    }

    fn is_held(&self) -> Result<bool, OutletError> {
        Ok(self.held.load(Ordering::Acquire))
    }
}
