//! Slot materialization: weekly template → resolved event descriptors.

use chrono::{DateTime, Months};
use chrono_tz::Tz;

use crate::anchor::next_occurrence;
use crate::error::WeekcalError;
use crate::event::EventDescriptor;
use crate::schedule::{ClassKind, WeeklySchedule};
use crate::slot::parse_slot_key;

/// Result of one materialization pass.
///
/// Malformed slots never abort the pass: they are recorded in `skipped` while
/// every valid slot still yields its descriptors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Materialized {
    pub events: Vec<EventDescriptor>,
    pub skipped: Vec<WeekcalError>,
}

/// Walk the schedule and emit one descriptor per (day, slot, entry).
///
/// Start and end are anchored to the next occurrence of the entry's weekday
/// relative to `now`, both resolved against the same reference so every
/// descriptor stays a same-day event. Non-custom entries recur weekly until
/// `now + horizon_months`; custom entries are one-shot.
///
/// Pure transform: the same schedule and the same frozen `now` always produce
/// element-wise identical output.
pub fn materialize(
    schedule: &WeeklySchedule,
    horizon_months: u32,
    now: DateTime<Tz>,
) -> Materialized {
    let reference = now.naive_local();
    let timezone = now.timezone();
    let until = reference.date() + Months::new(horizon_months);

    let mut out = Materialized::default();

    for (day, slots) in &schedule.days {
        for (slot_key, entries) in slots {
            let (start_time, end_time) = match parse_slot_key(slot_key) {
                Ok(times) => times,
                Err(reason) => {
                    out.skipped.push(WeekcalError::MalformedSlot {
                        day: *day,
                        slot: slot_key.clone(),
                        reason,
                    });
                    continue;
                }
            };

            for entry in entries {
                let weekday = day.number_from_sunday();
                let recurring = entry.kind != ClassKind::Custom;

                out.events.push(EventDescriptor {
                    title: entry.title(),
                    location: entry.location.clone(),
                    description: entry.description(),
                    start: next_occurrence(weekday, start_time, reference),
                    end: next_occurrence(weekday, end_time, reference),
                    timezone,
                    recurring,
                    recurrence_until: recurring.then_some(until),
                });
            }
        }
    }

    out
}
