//! Weekly schedule types and the JSON ingestion boundary.
//!
//! The external timetable generator hands over a plain JSON object keyed by
//! weekday name; `WeeklySchedule::from_json` validates it at the boundary,
//! quarantining malformed keys instead of propagating nulls into the engine.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WeekcalError;

/// Weekday of the teaching week. Sunday is absent by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl ScheduleDay {
    pub const ALL: [ScheduleDay; 6] = [
        ScheduleDay::Monday,
        ScheduleDay::Tuesday,
        ScheduleDay::Wednesday,
        ScheduleDay::Thursday,
        ScheduleDay::Friday,
        ScheduleDay::Saturday,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(ScheduleDay::Monday),
            "Tuesday" => Some(ScheduleDay::Tuesday),
            "Wednesday" => Some(ScheduleDay::Wednesday),
            "Thursday" => Some(ScheduleDay::Thursday),
            "Friday" => Some(ScheduleDay::Friday),
            "Saturday" => Some(ScheduleDay::Saturday),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScheduleDay::Monday => "Monday",
            ScheduleDay::Tuesday => "Tuesday",
            ScheduleDay::Wednesday => "Wednesday",
            ScheduleDay::Thursday => "Thursday",
            ScheduleDay::Friday => "Friday",
            ScheduleDay::Saturday => "Saturday",
        }
    }

    /// Weekday number in the 0 = Sunday convention used by the anchor resolver.
    pub fn number_from_sunday(self) -> u32 {
        match self {
            ScheduleDay::Monday => 1,
            ScheduleDay::Tuesday => 2,
            ScheduleDay::Wednesday => 3,
            ScheduleDay::Thursday => 4,
            ScheduleDay::Friday => 5,
            ScheduleDay::Saturday => 6,
        }
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of class slot. `Custom` marks a one-shot, user-authored entry;
/// all other kinds denote a recurring slot of the weekly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    #[serde(rename = "L")]
    Lecture,
    #[serde(rename = "T")]
    Tutorial,
    #[serde(rename = "P")]
    Practical,
    #[serde(rename = "C")]
    Custom,
}

impl ClassKind {
    /// Single-letter wire tag, as used in slot titles.
    pub fn tag(self) -> &'static str {
        match self {
            ClassKind::Lecture => "L",
            ClassKind::Tutorial => "T",
            ClassKind::Practical => "P",
            ClassKind::Custom => "C",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClassKind::Lecture => "Lecture",
            ClassKind::Tutorial => "Tutorial",
            ClassKind::Practical => "Practical",
            ClassKind::Custom => "Custom Event",
        }
    }
}

/// One entry of a weekly schedule slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEvent {
    pub subject_name: String,
    #[serde(rename = "type")]
    pub kind: ClassKind,
    pub location: String,
    #[serde(rename = "isCustom", default)]
    pub is_custom: bool,
}

impl ClassEvent {
    /// Whether this entry is user-authored (one-shot, decorated in titles).
    pub fn is_custom(&self) -> bool {
        self.is_custom || self.kind == ClassKind::Custom
    }

    /// Deterministic calendar title: `"{tag} - {subject}"`, with a decorative
    /// marker for custom entries so downstream calendars can tell them apart.
    pub fn title(&self) -> String {
        if self.is_custom() {
            format!("✨ {} - {}", self.kind.tag(), self.subject_name)
        } else {
            format!("{} - {}", self.kind.tag(), self.subject_name)
        }
    }

    /// Human-readable description embedding category, subject, and room.
    pub fn description(&self) -> String {
        let category = if self.is_custom() { "Custom Event" } else { "Class" };
        format!(
            "{}: {}\nRoom: {}\nType: {}",
            category,
            self.subject_name,
            self.location,
            self.kind.label()
        )
    }
}

/// The recurring weekly template: day → time-slot key → entries.
///
/// Ordered maps keep materialization deterministic. Slot keys are kept as raw
/// strings; they are parsed (and possibly rejected) at materialization time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    pub days: BTreeMap<ScheduleDay, BTreeMap<String, Vec<ClassEvent>>>,
}

impl WeeklySchedule {
    /// Add one entry under a day and slot key.
    pub fn add(&mut self, day: ScheduleDay, slot: impl Into<String>, event: ClassEvent) {
        self.days
            .entry(day)
            .or_default()
            .entry(slot.into())
            .or_default()
            .push(event);
    }

    /// Ingest a schedule from the external generator's JSON shape.
    ///
    /// A slot value may be a single entry object or a list of them. Unknown
    /// weekday keys, non-object day values, and unparseable entries are
    /// quarantined as warnings; everything valid is kept.
    pub fn from_json(value: &serde_json::Value) -> (Self, Vec<WeekcalError>) {
        let mut schedule = WeeklySchedule::default();
        let mut warnings = Vec::new();

        let Some(days) = value.as_object() else {
            warnings.push(WeekcalError::Ingest(format!(
                "expected a JSON object keyed by weekday, got {}",
                json_kind(value)
            )));
            return (schedule, warnings);
        };

        for (day_key, slots_value) in days {
            let Some(day) = ScheduleDay::from_name(day_key) else {
                warnings.push(WeekcalError::UnknownWeekday(day_key.clone()));
                continue;
            };

            let Some(slots) = slots_value.as_object() else {
                warnings.push(WeekcalError::Ingest(format!(
                    "expected a slot map under {}, got {}",
                    day,
                    json_kind(slots_value)
                )));
                continue;
            };

            for (slot_key, entry_value) in slots {
                let entries = match entry_value {
                    serde_json::Value::Array(items) => items.iter().collect::<Vec<_>>(),
                    other => vec![other],
                };

                for entry in entries {
                    match serde_json::from_value::<ClassEvent>(entry.clone()) {
                        Ok(event) => schedule.add(day, slot_key.clone(), event),
                        Err(e) => warnings.push(WeekcalError::InvalidSlotValue {
                            day,
                            slot: slot_key.clone(),
                            reason: e.to_string(),
                        }),
                    }
                }
            }
        }

        (schedule, warnings)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
