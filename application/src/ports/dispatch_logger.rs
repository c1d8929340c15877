//! Port for structured dispatch event logging.
//!
//! Defines the [`DispatchLogger`] trait for recording what the service was
//! asked and how each upstream answered, in a machine-readable format (JSONL).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a durable
//! per-request record. Credentials never appear in events.

use hwhelper_domain::{Attempt, DispatchReport, Solution, Topic, truncate};
use serde_json::{Value, json};

/// Longest failure detail copied into an event
const MAX_DETAIL_BYTES: usize = 2048;

/// A structured dispatch event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The adapter adds the timestamp.
pub struct DispatchEvent {
    /// Event type identifier (e.g., "request_received", "attempt_finished").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DispatchEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn request_received(topic: &Topic) -> Self {
        Self::new(
            "request_received",
            json!({
                "subject": topic.subject(),
                "question": topic.question(),
            }),
        )
    }

    pub fn attempt_finished(index: usize, attempt: &Attempt) -> Self {
        Self::new(
            "attempt_finished",
            json!({
                "index": index,
                "endpoint": attempt.endpoint.url(),
                "success": attempt.is_success(),
                "kind": attempt.failure_kind().map(|k| k.as_str()),
                "detail": attempt.failure_detail().map(|d| truncate(d, MAX_DETAIL_BYTES)),
                "elapsed_ms": attempt.elapsed.as_millis() as u64,
            }),
        )
    }

    pub fn dispatch_succeeded(solution: &Solution, attempts: usize) -> Self {
        Self::new(
            "dispatch_succeeded",
            json!({
                "endpoint": solution.source_endpoint().map(|e| e.url()),
                "attempts": attempts,
                "solution_bytes": solution.text().len(),
            }),
        )
    }

    pub fn dispatch_exhausted(report: &DispatchReport) -> Self {
        Self::new(
            "dispatch_exhausted",
            json!({
                "attempts": report.attempts().len(),
                "tried_endpoints": report.tried_endpoints(),
                "last_error": truncate(report.last_error_summary(), MAX_DETAIL_BYTES),
            }),
        )
    }
}

/// Port for logging dispatch events to a structured log.
///
/// The `log` method is synchronous and non-fallible so logging can never
/// disrupt a dispatch; logging failures are silently ignored.
pub trait DispatchLogger: Send + Sync {
    /// Record a dispatch event.
    fn log(&self, event: DispatchEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDispatchLogger;

impl DispatchLogger for NoDispatchLogger {
    fn log(&self, _event: DispatchEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwhelper_domain::{AttemptOutcome, Endpoint, ProtocolVariant};
    use std::time::Duration;

    #[test]
    fn test_attempt_event_omits_credential() {
        let endpoint =
            Endpoint::new("https://a.example.com/kickoff", "s3cr3t-token", ProtocolVariant::Kickoff)
                .unwrap();
        let attempt = Attempt::new(
            endpoint,
            AttemptOutcome::bad_status(401, "unauthorized"),
            Duration::from_millis(12),
        );
        let event = DispatchEvent::attempt_finished(0, &attempt);

        assert_eq!(event.event_type, "attempt_finished");
        assert_eq!(event.payload["kind"], "upstream");
        assert_eq!(event.payload["detail"], "Status 401: unauthorized");
        assert_eq!(event.payload["elapsed_ms"], 12);
        assert!(!event.payload.to_string().contains("s3cr3t-token"));
    }

    #[test]
    fn test_request_event_carries_topic() {
        let topic = Topic::validate(Some("Math"), Some("2+2?")).unwrap();
        let event = DispatchEvent::request_received(&topic);
        assert_eq!(event.payload["subject"], "Math");
        assert_eq!(event.payload["question"], "2+2?");
    }
}
