//! Weekly-schedule-to-calendar engine.
//!
//! This crate turns an abstract weekly class schedule (weekday → time-slot →
//! class entries) into fully resolved calendar events:
//! - `schedule` holds the schedule types and the JSON ingestion boundary
//! - `materialize` walks a schedule and emits one `EventDescriptor` per entry
//! - `recurrence` decides the weekly RRULE and its bound
//! - `ics` renders descriptors and academic-calendar events as RFC 5545 text
//!
//! Everything here is synchronous and pure: the reference instant and the
//! timezone are explicit parameters, never read from the host clock.

pub mod anchor;
pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod materialize;
pub mod recurrence;
pub mod schedule;
pub mod slot;

pub use error::{WeekcalError, WeekcalResult};
pub use event::{AcademicCalendarEvent, EventDate, EventDescriptor};
pub use materialize::{Materialized, materialize};
pub use schedule::{ClassEvent, ClassKind, ScheduleDay, WeeklySchedule};
