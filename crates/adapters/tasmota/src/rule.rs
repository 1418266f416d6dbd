//! Auto-off rule formatting.

use std::time::Duration;

/// Build the `Rule1` body that, when `event` fires, powers the plug on and
/// switches relay 1 off again after `delay`.
///
/// The timer resolution of Tasmota rules is one second; sub-second parts of
/// `delay` are dropped.
#[must_use]
pub fn auto_off_rule(event: &str, delay: Duration) -> String {
    let seconds = delay.as_secs();
    format!(
        "ON Event#{event} DO Power ON ENDON \
         ON Event#{event} DO RuleTimer1 {seconds} ENDON \
         ON Rules#Timer=1 DO Power1 off ENDON"
    )
}
