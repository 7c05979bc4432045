//! Error types for calendar submission.

use thiserror::Error;

/// Terminal submission failures.
///
/// Per-event network failures are not errors at this level; they are counted
/// into the [`crate::SubmissionOutcome`] instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The OAuth consent step failed or was declined; no per-event requests
    /// were attempted.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A descriptor could not be expressed as an API payload.
    #[error("could not convert event '{summary}': {reason}")]
    Payload { summary: String, reason: String },
}
