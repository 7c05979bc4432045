//! Resolved calendar event types.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::HOLIDAY_MARKER;

/// A fully resolved single calendar occurrence, derived from one weekly
/// schedule entry.
///
/// Wall-clock datetimes are kept naive and paired with the explicit timezone:
/// that is the exact shape both output formats want (`DTSTART;TZID=...` local
/// form for ICS, `dateTime` + `timeZone` for the remote API). Descriptors are
/// built fresh on every materialization pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDescriptor {
    pub title: String,
    pub location: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub timezone: Tz,
    /// Whether a weekly repeat rule applies.
    pub recurring: bool,
    /// Inclusive last date of the recurrence, present iff `recurring`.
    pub recurrence_until: Option<NaiveDate>,
}

/// A date-only academic-calendar entry (holiday, exam window, fest).
///
/// Sourced read-only from a static per-year dataset; `start.date` must not be
/// after `end.date`, both inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicCalendarEvent {
    pub summary: String,
    pub start: EventDate,
    pub end: EventDate,
}

/// Date wrapper matching the dataset's `{ "date": "YYYY-MM-DD" }` shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventDate {
    pub date: NaiveDate,
}

impl AcademicCalendarEvent {
    /// Whether this entry belongs to the holiday category, per the dataset's
    /// summary-prefix convention.
    pub fn is_holiday(&self) -> bool {
        self.summary.starts_with(HOLIDAY_MARKER)
    }
}
