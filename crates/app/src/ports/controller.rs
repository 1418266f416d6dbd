//! Outlet controller port — the external mechanism that de-energizes an outlet.

use std::future::Future;
use std::sync::Arc;

use outlet_domain::error::OutletError;
use outlet_domain::target::OutletTarget;

/// Switches outlets off.
///
/// Implementations invoke their mechanism exactly once per call and never
/// retry; any non-success is reported as
/// [`OutletError::ExternalCommandFailed`].
pub trait OutletController: Send + Sync {
    /// Switch `target` off.
    fn power_off(
        &self,
        target: OutletTarget,
    ) -> impl Future<Output = Result<(), OutletError>> + Send;
}

impl<T: OutletController> OutletController for Arc<T> {
    fn power_off(
        &self,
        target: OutletTarget,
    ) -> impl Future<Output = Result<(), OutletError>> + Send {
        (**self).power_off(target)
    }
}
