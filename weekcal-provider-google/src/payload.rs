//! Mapping from engine types to the Calendar API's event payload shape.

use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;
use weekcal_core::recurrence::rrule_for;
use weekcal_core::{AcademicCalendarEvent, EventDescriptor};

use crate::error::SubmitError;

// Fixed color tags so entries are distinguishable at a glance.
const CLASS_COLOR_ID: &str = "6";
const CUSTOM_COLOR_ID: &str = "2";
const ACADEMIC_COLOR_ID: &str = "1";
const HOLIDAY_COLOR_ID: &str = "11";

/// One `events.insert` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recurrence: Vec<String>,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub color_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Timed (`dateTime`) or all-day (`date`) boundary of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub time_zone: String,
}

/// Build the payload for one materialized class descriptor.
///
/// Recurring entries carry the weekly RRULE; one-shot (custom) entries get a
/// distinct color instead.
pub fn class_event_payload(descriptor: &EventDescriptor) -> Result<EventPayload, SubmitError> {
    let tz = descriptor.timezone;
    let color = if descriptor.recurring { CLASS_COLOR_ID } else { CUSTOM_COLOR_ID };

    Ok(EventPayload {
        summary: descriptor.title.clone(),
        location: Some(descriptor.location.clone()),
        description: descriptor.description.clone(),
        recurrence: rrule_for(descriptor)
            .map(|rule| vec![format!("RRULE:{rule}")])
            .unwrap_or_default(),
        start: timed_boundary(descriptor, descriptor.start, tz)?,
        end: timed_boundary(descriptor, descriptor.end, tz)?,
        color_id: color.to_string(),
        transparency: None,
        visibility: None,
    })
}

/// Build the all-day payload for one academic-calendar entry.
///
/// The API treats all-day `date` boundaries as inclusive start / exclusive
/// end, but accepts the dataset's inclusive range as-is for single calendars;
/// dates are passed through unchanged, matching the source deployment.
pub fn academic_event_payload(event: &AcademicCalendarEvent, tz: Tz) -> EventPayload {
    let color = if event.is_holiday() { HOLIDAY_COLOR_ID } else { ACADEMIC_COLOR_ID };

    EventPayload {
        summary: event.summary.clone(),
        location: None,
        description: "Academic calendar event".to_string(),
        recurrence: Vec::new(),
        start: all_day_boundary(event.start.date, tz),
        end: all_day_boundary(event.end.date, tz),
        color_id: color.to_string(),
        transparency: Some("transparent".to_string()),
        visibility: Some("public".to_string()),
    }
}

fn timed_boundary(
    descriptor: &EventDescriptor,
    local: NaiveDateTime,
    tz: Tz,
) -> Result<EventDateTime, SubmitError> {
    let resolved = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| SubmitError::Payload {
            summary: descriptor.title.clone(),
            reason: format!("local time {local} does not exist in {}", tz.name()),
        })?;

    Ok(EventDateTime {
        date_time: Some(resolved.to_rfc3339()),
        date: None,
        time_zone: tz.name().to_string(),
    })
}

fn all_day_boundary(date: NaiveDate, tz: Tz) -> EventDateTime {
    EventDateTime {
        date_time: None,
        date: Some(date),
        time_zone: tz.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weekcal_core::EventDate;
    use weekcal_core::constants::DEFAULT_TIMEZONE;

    fn descriptor(recurring: bool) -> EventDescriptor {
        let date = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        EventDescriptor {
            title: "L - Data Structures".to_string(),
            location: "LT-1".to_string(),
            description: "Class: Data Structures\nRoom: LT-1\nType: Lecture".to_string(),
            start: date.and_hms_opt(9, 0, 0).unwrap(),
            end: date.and_hms_opt(10, 0, 0).unwrap(),
            timezone: DEFAULT_TIMEZONE,
            recurring,
            recurrence_until: recurring
                .then(|| NaiveDate::from_ymd_opt(2025, 11, 11).unwrap()),
        }
    }

    #[test]
    fn test_class_payload_shape() {
        let payload = class_event_payload(&descriptor(true)).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["summary"], "L - Data Structures");
        assert_eq!(json["colorId"], "6");
        assert_eq!(json["start"]["timeZone"], "Asia/Kolkata");
        assert_eq!(json["start"]["dateTime"], "2025-06-16T09:00:00+05:30");
        assert_eq!(
            json["recurrence"][0],
            "RRULE:FREQ=WEEKLY;UNTIL=20251111T235959Z"
        );
        assert!(json.get("transparency").is_none());
    }

    #[test]
    fn test_one_shot_payload_has_no_recurrence_and_custom_color() {
        let payload = class_event_payload(&descriptor(false)).unwrap();
        assert_eq!(payload.color_id, "2");

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("recurrence").is_none(), "empty recurrence must be omitted");
    }

    #[test]
    fn test_academic_payload_shape() {
        let event = AcademicCalendarEvent {
            summary: "Holiday - Diwali".to_string(),
            start: EventDate {
                date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
            },
            end: EventDate {
                date: NaiveDate::from_ymd_opt(2025, 10, 22).unwrap(),
            },
        };

        let json =
            serde_json::to_value(academic_event_payload(&event, DEFAULT_TIMEZONE)).unwrap();
        assert_eq!(json["colorId"], "11");
        assert_eq!(json["start"]["date"], "2025-10-20");
        assert_eq!(json["transparency"], "transparent");
        assert_eq!(json["visibility"], "public");
        assert!(json["start"].get("dateTime").is_none());
    }

    #[test]
    fn test_non_holiday_academic_color() {
        let event = AcademicCalendarEvent {
            summary: "Convocation".to_string(),
            start: EventDate {
                date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            },
            end: EventDate {
                date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            },
        };
        assert_eq!(academic_event_payload(&event, DEFAULT_TIMEZONE).color_id, "1");
    }
}
