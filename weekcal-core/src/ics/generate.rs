//! iCalendar document generation for timetables and academic calendars.
//!
//! Output is CRLF-joined per RFC 5545; consuming calendar clients parse this
//! text strictly, so the envelope and property lines are emitted exactly.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::constants::{ICS_PRODID, UID_DOMAIN};
use crate::error::{WeekcalError, WeekcalResult};
use crate::event::{AcademicCalendarEvent, EventDescriptor};
use crate::ics::escape::escape_text;
use crate::recurrence::rrule_for;

const DTSTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const DATE_FORMAT: &str = "%Y%m%d";

/// Render materialized timetable descriptors as a VCALENDAR document.
///
/// `now` drives DTSTAMP and the UID timestamps; injecting it keeps generation
/// deterministic under test.
pub fn generate_timetable_ics(
    descriptors: &[EventDescriptor],
    calendar_name: &str,
    tz: Tz,
    now: DateTime<Utc>,
) -> WeekcalResult<String> {
    let timestamp = now.format(DTSTAMP_FORMAT).to_string();
    let mut lines = calendar_header(calendar_name, tz);

    for (index, descriptor) in descriptors.iter().enumerate() {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{timestamp}-{index}@{UID_DOMAIN}"));
        lines.push(format!("DTSTAMP:{timestamp}"));
        lines.push(format!(
            "DTSTART;TZID={}:{}",
            descriptor.timezone.name(),
            descriptor.start.format(LOCAL_FORMAT)
        ));
        lines.push(format!(
            "DTEND;TZID={}:{}",
            descriptor.timezone.name(),
            descriptor.end.format(LOCAL_FORMAT)
        ));
        lines.push(format!("SUMMARY:{}", escape_text(&descriptor.title)));
        lines.push(format!("DESCRIPTION:{}", escape_text(&descriptor.description)));
        lines.push(format!("LOCATION:{}", escape_text(&descriptor.location)));

        if let Some(rule) = rrule_for(descriptor) {
            lines.push(format!("RRULE:{rule}"));
        }

        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    Ok(lines.join("\r\n"))
}

/// Render academic-calendar entries as all-day VEVENTs.
///
/// RFC 5545 treats all-day end dates as exclusive, so DTEND is always the day
/// after the semantic last day, single-day events included.
pub fn generate_academic_ics(
    events: &[AcademicCalendarEvent],
    calendar_name: &str,
    tz: Tz,
    now: DateTime<Utc>,
) -> WeekcalResult<String> {
    let timestamp = now.format(DTSTAMP_FORMAT).to_string();
    let mut lines = calendar_header(calendar_name, tz);

    for (index, event) in events.iter().enumerate() {
        let exclusive_end = event.end.date.succ_opt().ok_or_else(|| {
            WeekcalError::InvariantViolation(format!(
                "all-day end date {} cannot be advanced",
                event.end.date
            ))
        })?;
        if exclusive_end <= event.start.date {
            return Err(WeekcalError::InvariantViolation(format!(
                "all-day event '{}' ends {} before it starts {}",
                event.summary, event.end.date, event.start.date
            )));
        }

        let category = if event.is_holiday() { "Holiday" } else { "Academic" };

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{timestamp}-{index}@{UID_DOMAIN}"));
        lines.push(format!("DTSTAMP:{timestamp}"));
        lines.push(format!(
            "DTSTART;VALUE=DATE:{}",
            event.start.date.format(DATE_FORMAT)
        ));
        lines.push(format!(
            "DTEND;VALUE=DATE:{}",
            exclusive_end.format(DATE_FORMAT)
        ));
        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
        lines.push("DESCRIPTION:Academic calendar event".to_string());
        lines.push("TRANSP:TRANSPARENT".to_string());
        lines.push(format!("CATEGORIES:{category}"));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    Ok(lines.join("\r\n"))
}

fn calendar_header(calendar_name: &str, tz: Tz) -> Vec<String> {
    vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{ICS_PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(calendar_name)),
        format!("X-WR-TIMEZONE:{}", tz.name()),
    ]
}
