//! Recurrence policy for materialized descriptors.

use crate::event::EventDescriptor;

/// The weekly repeat rule for a descriptor, or `None` for one-shot entries.
///
/// The UNTIL bound is the horizon date at end-of-day UTC: keeping the full
/// final date in range means the last week's occurrence is never truncated
/// out, regardless of the class's time-of-day.
pub fn rrule_for(descriptor: &EventDescriptor) -> Option<String> {
    match (descriptor.recurring, descriptor.recurrence_until) {
        (true, Some(until)) => Some(format!(
            "FREQ=WEEKLY;UNTIL={}T235959Z",
            until.format("%Y%m%d")
        )),
        _ => None,
    }
}
