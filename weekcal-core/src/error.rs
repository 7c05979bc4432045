//! Error types for the weekcal engine.

use thiserror::Error;

use crate::schedule::ScheduleDay;

/// Errors that can occur while ingesting or materializing a schedule.
///
/// `MalformedSlot`, `UnknownWeekday`, `InvalidSlotValue`, and `Ingest` are
/// recovered locally: the offending slot or key is skipped and surfaced as a
/// warning while the rest of the batch proceeds. `InvariantViolation` is a
/// programming-error class and fails the whole serialization call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeekcalError {
    #[error("malformed time slot '{slot}' on {day}: {reason}")]
    MalformedSlot {
        day: ScheduleDay,
        slot: String,
        reason: String,
    },

    #[error("unknown weekday key '{0}' in schedule")]
    UnknownWeekday(String),

    #[error("invalid entry at {day} '{slot}': {reason}")]
    InvalidSlotValue {
        day: ScheduleDay,
        slot: String,
        reason: String,
    },

    #[error("schedule ingestion error: {0}")]
    Ingest(String),

    #[error("calendar serialization invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type alias for weekcal operations.
pub type WeekcalResult<T> = Result<T, WeekcalError>;
