//! Probe results for the endpoint connectivity check

use super::attempt::is_success_status;
use crate::endpoint::entities::Endpoint;
use serde::Serialize;
use std::time::Duration;

/// Result of probing one endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub endpoint: Endpoint,
    /// HTTP status, `None` when no response arrived
    pub status: Option<u16>,
    pub working: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl ProbeResult {
    pub fn from_status(endpoint: Endpoint, status: u16, elapsed: Duration) -> Self {
        Self {
            endpoint,
            status: Some(status),
            working: is_success_status(status),
            error: None,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn from_error(endpoint: Endpoint, error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            endpoint,
            status: None,
            working: false,
            error: Some(error.into()),
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }
}
