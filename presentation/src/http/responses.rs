//! JSON bodies and error mapping for the HTTP front door

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hwhelper_application::SolveError;
use hwhelper_domain::{ProbeResult, Solution};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const PROBE_INSTRUCTIONS: &str =
    "Look for status 200, 201, or 202 to find the working endpoint";

/// `POST /solve` request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveRequest {
    pub subject: Option<String>,
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub success: bool,
    pub solution: String,
    pub endpoint_used: Option<String>,
}

impl From<Solution> for SolveResponse {
    fn from(solution: Solution) -> Self {
        let endpoint_used = solution.source_endpoint().map(|e| e.url().to_string());
        Self {
            success: true,
            solution: solution.into_text(),
            endpoint_used,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub endpoints: usize,
}

/// One row of `GET /test-endpoints`
#[derive(Debug, Serialize)]
pub struct ProbeRow {
    pub endpoint: String,
    pub variant: &'static str,
    pub status: Option<u16>,
    pub working: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl From<ProbeResult> for ProbeRow {
    fn from(result: ProbeResult) -> Self {
        Self {
            endpoint: result.endpoint.url().to_string(),
            variant: result.endpoint.variant().as_str(),
            status: result.status,
            working: result.working,
            error: result.error,
            elapsed_ms: result.elapsed_ms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub results: Vec<ProbeRow>,
    pub instructions: &'static str,
}

/// Error response: a status code and a `{"success": false, ...}` body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "success": false, "error": error.into() }),
        }
    }
}

impl From<SolveError> for ApiError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Validation(e) => ApiError::new(StatusCode::BAD_REQUEST, e.to_string()),
            SolveError::Exhausted(report) => Self {
                status: StatusCode::BAD_GATEWAY,
                body: json!({
                    "success": false,
                    "error": format!(
                        "Could not reach any upstream endpoint. Last error: {}",
                        report.last_error_summary()
                    ),
                    "tried_endpoints": report.tried_endpoints(),
                    "attempts": report.attempts(),
                }),
            },
            SolveError::Cancelled { .. } => ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Request cancelled: the service is shutting down",
            ),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
