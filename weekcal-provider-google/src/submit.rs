//! Concurrent, partial-failure-tolerant event submission.

use tokio::task::JoinSet;

use crate::error::SubmitError;
use crate::payload::EventPayload;

/// The `events.insert` endpoint of the user's primary calendar.
pub const GOOGLE_EVENTS_ENDPOINT: &str =
    "https://www.googleapis.com/calendar/v3/calendars/primary/events";

/// All-settled result of one submission batch.
///
/// `success` only when zero requests failed; a partially applied remote
/// calendar is accepted (the API has no transactional multi-insert), so
/// succeeded inserts stay in place and are counted.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub succeeded_count: usize,
    pub failed_count: usize,
    /// Representative message of the first failure, for user display.
    pub first_error: Option<String>,
}

/// Submits event payloads to a calendar events endpoint.
pub struct CalendarSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for CalendarSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarSubmitter {
    pub fn new() -> Self {
        Self::with_endpoint(GOOGLE_EVENTS_ENDPOINT)
    }

    /// Point the submitter at a different endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        CalendarSubmitter {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Post every payload as an independent authorized request, concurrently,
    /// and join all-settled: one slow or failing request never cancels the
    /// others. No retries; failures are counted into the outcome.
    ///
    /// A blank access token means the consent step failed upstream; that is
    /// terminal and no per-event requests are attempted.
    pub async fn submit(
        &self,
        payloads: Vec<EventPayload>,
        access_token: &str,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if access_token.trim().is_empty() {
            return Err(SubmitError::Authentication(
                "no access token was granted".to_string(),
            ));
        }

        let mut tasks = JoinSet::new();
        for payload in payloads {
            let client = self.client.clone();
            let endpoint = self.endpoint.clone();
            let token = access_token.to_string();
            tasks.spawn(async move { insert_event(&client, &endpoint, &token, &payload).await });
        }

        let mut results = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            results.push(match joined {
                Ok(result) => result,
                Err(e) => Err(format!("submission task failed: {e}")),
            });
        }

        Ok(aggregate(results))
    }
}

async fn insert_event(
    client: &reqwest::Client,
    endpoint: &str,
    token: &str,
    payload: &EventPayload,
) -> Result<(), String> {
    let response = client
        .post(endpoint)
        .bearer_auth(token)
        .json(payload)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if response.status().is_success() {
        return Ok(());
    }

    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| status.to_string());

    Err(format!("failed to add event: {message}"))
}

/// Fold per-request results into one outcome.
fn aggregate(results: Vec<Result<(), String>>) -> SubmissionOutcome {
    let mut succeeded = 0;
    let mut failed = 0;
    let mut first_error = None;

    for result in results {
        match result {
            Ok(()) => succeeded += 1,
            Err(message) => {
                failed += 1;
                if first_error.is_none() {
                    first_error = Some(message);
                }
            }
        }
    }

    SubmissionOutcome {
        success: failed == 0,
        succeeded_count: succeeded,
        failed_count: failed,
        first_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_counts_partial_failure() {
        let results = vec![
            Ok(()),
            Err("failed to add event: quota exceeded".to_string()),
            Ok(()),
            Err("failed to add event: backend error".to_string()),
            Ok(()),
        ];

        let outcome = aggregate(results);
        assert!(!outcome.success);
        assert_eq!(outcome.succeeded_count, 3);
        assert_eq!(outcome.failed_count, 2);
        assert_eq!(
            outcome.first_error.as_deref(),
            Some("failed to add event: quota exceeded")
        );
    }

    #[test]
    fn test_aggregate_all_ok_is_success() {
        let outcome = aggregate(vec![Ok(()), Ok(())]);
        assert!(outcome.success);
        assert_eq!(outcome.succeeded_count, 2);
        assert_eq!(outcome.failed_count, 0);
        assert_eq!(outcome.first_error, None);
    }

    #[test]
    fn test_aggregate_empty_batch_is_vacuously_successful() {
        let outcome = aggregate(Vec::new());
        assert!(outcome.success);
        assert_eq!(outcome.succeeded_count, 0);
    }

    #[tokio::test]
    async fn test_blank_token_is_terminal_before_any_request() {
        let submitter = CalendarSubmitter::with_endpoint("http://127.0.0.1:1/events");
        let err = submitter.submit(Vec::new(), "   ").await.unwrap_err();
        assert!(matches!(err, SubmitError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_counts_failures_not_errors() {
        // Port 1 refuses connections immediately; each event must settle as a
        // counted failure rather than aborting the batch.
        let submitter = CalendarSubmitter::with_endpoint("http://127.0.0.1:1/events");
        let payloads = vec![sample_payload(), sample_payload()];

        let outcome = submitter.submit(payloads, "token").await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.succeeded_count, 0);
        assert_eq!(outcome.failed_count, 2);
        assert!(outcome.first_error.is_some());
    }

    fn sample_payload() -> EventPayload {
        use crate::payload::EventDateTime;

        EventPayload {
            summary: "L - Data Structures".to_string(),
            location: Some("LT-1".to_string()),
            description: String::new(),
            recurrence: Vec::new(),
            start: EventDateTime {
                date_time: Some("2025-06-16T09:00:00+05:30".to_string()),
                date: None,
                time_zone: "Asia/Kolkata".to_string(),
            },
            end: EventDateTime {
                date_time: Some("2025-06-16T10:00:00+05:30".to_string()),
                date: None,
                time_zone: "Asia/Kolkata".to_string(),
            },
            color_id: "6".to_string(),
            transparency: None,
            visibility: None,
        }
    }
}
