//! Lock port — exclusive ownership of "a delayed power-off is pending".

use std::sync::Arc;

use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

/// Guards the single delayed power-off slot.
///
/// The lock is global: a second acquisition fails even for a different
/// outlet. Acquisition returns a token whose `Drop` gives the slot back, so
/// release happens on every exit path of the holder.
pub trait LockGuard: Send + Sync {
    /// Scoped ownership of the slot. Dropping it releases the lock.
    type Token: Send;

    /// Take the slot, recording the current process as its owner.
    ///
    /// # Errors
    ///
    /// Returns [`OutletError::AlreadyRunning`] if the slot is taken, or
    /// [`OutletError::Unexpected`] if the marker could not be written.
    fn acquire(&self, target: OutletTarget) -> Result<Self::Token, OutletError>;

    /// Whether some run currently holds the slot.
    ///
    /// # Errors
    ///
    /// Returns [`OutletError::Unexpected`] if the marker cannot be inspected.
    fn is_held(&self) -> Result<bool, OutletError>;

    /// Give the slot back. Never fails; releasing twice is a no-op.
    fn release(&self, token: Self::Token) {
        drop(token);
    }
}

impl<T: LockGuard> LockGuard for Arc<T> {
    type Token = T::Token;

    fn acquire(&self, target: OutletTarget) -> Result<Self::Token, OutletError> {
        (**self).acquire(target)
    }

    fn is_held(&self) -> Result<bool, OutletError> {
        (**self).is_held()
    }

    fn release(&self, token: Self::Token) {
        (**self).release(token);
    }
}
