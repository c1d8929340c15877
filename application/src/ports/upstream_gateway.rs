//! Upstream Gateway port
//!
//! Defines the interface for POSTing an attempt payload to one upstream
//! agent endpoint.

use async_trait::async_trait;
use hwhelper_domain::{AttemptPayload, Endpoint};
use thiserror::Error;

/// Errors that can occur before an HTTP response is received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The transport gave up waiting on its own
    #[error("request timeout")]
    Timeout,

    /// Connection, TLS, DNS or body-read failure
    #[error("{0}")]
    Transport(String),
}

/// Raw HTTP response from an upstream endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Gateway for upstream agent communication
///
/// This port defines how the application layer reaches upstream endpoints.
/// Implementations (adapters) live in the infrastructure layer.
///
/// Implementations must send `Authorization: Bearer <credential>` and the
/// payload as a JSON body. Any HTTP status is a successful `post`; status
/// classification is the caller's job. Callers bound each call with their
/// own timeout and cancel it by dropping the future.
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    async fn post(
        &self,
        endpoint: &Endpoint,
        payload: &AttemptPayload,
    ) -> Result<UpstreamResponse, GatewayError>;
}
