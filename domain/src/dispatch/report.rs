//! Dispatch report - the aggregated diagnostic after every endpoint failed.

use super::attempt::{Attempt, FailureKind};
use serde::Serialize;

/// Summary used when no attempt was recorded at all
pub const NO_ATTEMPTS_SUMMARY: &str = "no endpoints were attempted";

/// Terminal failure of a dispatch (built once, never mutated)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchReport {
    attempts: Vec<Attempt>,
    last_error_summary: String,
}

/// Merge all recorded attempts into one report.
///
/// `last_error_summary` is the detail of the chronologically last failed
/// attempt. Attempts are kept in the order given.
pub fn aggregate(attempts: Vec<Attempt>) -> DispatchReport {
    let last_error_summary = attempts
        .iter()
        .rev()
        .find_map(|a| a.failure_detail())
        .unwrap_or(NO_ATTEMPTS_SUMMARY)
        .to_string();

    DispatchReport {
        attempts,
        last_error_summary,
    }
}

impl DispatchReport {
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn last_error_summary(&self) -> &str {
        &self.last_error_summary
    }

    /// URLs of every endpoint that was tried, in order
    pub fn tried_endpoints(&self) -> Vec<String> {
        self.attempts
            .iter()
            .map(|a| a.endpoint.url().to_string())
            .collect()
    }

    pub fn count_by_kind(&self, kind: FailureKind) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.failure_kind() == Some(kind))
            .count()
    }
}

impl std::fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "all {} endpoint(s) failed. Last error: {}",
            self.attempts.len(),
            self.last_error_summary
        )
    }
}
