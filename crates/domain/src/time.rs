//! Time and timestamp helpers.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// UTC timestamp used when reporting when a power-off is due.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return the UTC time `delay` from now, or `None` if it is not representable.
#[must_use]
pub fn after(delay: Duration) -> Option<Timestamp> {
    let delta = TimeDelta::from_std(delay).ok()?;
    now().checked_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_offset_by_delay() {
        let before = Utc::now();
        let due = after(Duration::from_secs(600)).unwrap();
        assert!(due >= before + TimeDelta::seconds(600));
        assert!(due <= Utc::now() + TimeDelta::seconds(600));
    }

    #[test]
    fn should_return_none_for_unrepresentable_delay() {
        assert!(after(Duration::MAX).is_none());
    }
}
