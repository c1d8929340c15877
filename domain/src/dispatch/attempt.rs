//! Attempt records - the outcome of one dispatch try against one endpoint.

use crate::endpoint::entities::Endpoint;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::time::Duration;

/// HTTP statuses the upstream uses to signal an accepted run
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// Returns `true` if `status` counts as a successful attempt.
pub fn is_success_status(status: u16) -> bool {
    SUCCESS_STATUSES.contains(&status)
}

/// Detail recorded for every timed-out attempt
pub const TIMEOUT_DETAIL: &str = "request timeout";

/// Why an attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The per-attempt timeout elapsed
    Timeout,
    /// Non-success status or transport error
    Upstream,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Upstream => "upstream",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum AttemptOutcome {
    Success { raw_body: Value },
    Failure { kind: FailureKind, detail: String },
}

impl AttemptOutcome {
    pub fn timeout() -> Self {
        AttemptOutcome::Failure {
            kind: FailureKind::Timeout,
            detail: TIMEOUT_DETAIL.to_string(),
        }
    }

    pub fn upstream(detail: impl Into<String>) -> Self {
        AttemptOutcome::Failure {
            kind: FailureKind::Upstream,
            detail: detail.into(),
        }
    }

    /// Failure for a non-success HTTP status, in `Status <code>: <body>` form.
    pub fn bad_status(status: u16, body: &str) -> Self {
        Self::upstream(format!("Status {}: {}", status, body))
    }
}

/// Record of one dispatch try (transient, owned by one dispatch call)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    pub endpoint: Endpoint,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl Attempt {
    pub fn new(endpoint: Endpoint, outcome: AttemptOutcome, elapsed: Duration) -> Self {
        Self {
            endpoint,
            outcome,
            elapsed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.outcome {
            AttemptOutcome::Failure { kind, .. } => Some(*kind),
            AttemptOutcome::Success { .. } => None,
        }
    }

    pub fn failure_detail(&self) -> Option<&str> {
        match &self.outcome {
            AttemptOutcome::Failure { detail, .. } => Some(detail),
            AttemptOutcome::Success { .. } => None,
        }
    }
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::entities::ProtocolVariant;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://api.example.com/kickoff", "t", ProtocolVariant::Kickoff).unwrap()
    }

    #[test]
    fn test_success_statuses() {
        assert!(is_success_status(200));
        assert!(is_success_status(201));
        assert!(is_success_status(202));
        assert!(!is_success_status(204));
        assert!(!is_success_status(404));
        assert!(!is_success_status(500));
    }

    #[test]
    fn test_bad_status_detail_format() {
        let outcome = AttemptOutcome::bad_status(404, "Not Found");
        assert_eq!(
            outcome,
            AttemptOutcome::Failure {
                kind: FailureKind::Upstream,
                detail: "Status 404: Not Found".to_string()
            }
        );
    }

    #[test]
    fn test_attempt_accessors() {
        let ok = Attempt::new(
            endpoint(),
            AttemptOutcome::Success {
                raw_body: serde_json::json!({"result": "x"}),
            },
            Duration::from_millis(5),
        );
        assert!(ok.is_success());
        assert_eq!(ok.failure_kind(), None);

        let timed_out = Attempt::new(endpoint(), AttemptOutcome::timeout(), Duration::from_secs(1));
        assert!(!timed_out.is_success());
        assert_eq!(timed_out.failure_kind(), Some(FailureKind::Timeout));
        assert_eq!(timed_out.failure_detail(), Some("request timeout"));
    }

    #[test]
    fn test_attempt_serializes_flat() {
        let attempt = Attempt::new(
            endpoint(),
            AttemptOutcome::upstream("connection refused"),
            Duration::from_millis(1500),
        );
        let json = serde_json::to_value(&attempt).unwrap();
        assert_eq!(json["endpoint"]["url"], "https://api.example.com/kickoff");
        assert_eq!(json["outcome"], "failure");
        assert_eq!(json["kind"], "upstream");
        assert_eq!(json["detail"], "connection refused");
        assert_eq!(json["elapsed_ms"], 1500);
    }
}
