//! Google Calendar submission for weekcal.
//!
//! Converts materialized descriptors and academic-calendar entries into the
//! Calendar API's `events.insert` payload shape and posts them as independent
//! bearer-authorized requests, all concurrently, aggregating an all-settled
//! [`SubmissionOutcome`]. Token acquisition (OAuth consent) happens upstream;
//! this crate only consumes the resulting access token.

pub mod error;
pub mod payload;
pub mod submit;

pub use error::SubmitError;
pub use payload::{EventDateTime, EventPayload, academic_event_payload, class_event_payload};
pub use submit::{CalendarSubmitter, GOOGLE_EVENTS_ENDPOINT, SubmissionOutcome};
