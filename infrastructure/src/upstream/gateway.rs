//! reqwest-backed upstream gateway

use async_trait::async_trait;
use hwhelper_application::ports::upstream_gateway::{
    GatewayError, UpstreamGateway, UpstreamResponse,
};
use hwhelper_domain::{AttemptPayload, Endpoint};
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("hwhelper/", env!("CARGO_PKG_VERSION"));

/// Default TCP connect bound; the overall attempt bound is applied by the
/// dispatcher.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends attempt payloads as JSON `POST`s with bearer authentication.
///
/// Non-2xx answers are returned as responses, not errors; classification
/// belongs to the dispatcher.
#[derive(Clone)]
pub struct ReqwestUpstreamGateway {
    client: reqwest::Client,
}

impl ReqwestUpstreamGateway {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (custom TLS, proxies, request timeout).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UpstreamGateway for ReqwestUpstreamGateway {
    async fn post(
        &self,
        endpoint: &Endpoint,
        payload: &AttemptPayload,
    ) -> Result<UpstreamResponse, GatewayError> {
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(endpoint.url())
            .bearer_auth(endpoint.credential())
            .json(payload)
            .send()
            .await
            .map_err(to_gateway_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(to_gateway_error)?;
        debug!("{} answered {} ({} bytes)", endpoint, status, body.len());

        Ok(UpstreamResponse::new(status, body))
    }
}

fn to_gateway_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        return GatewayError::Timeout;
    }
    GatewayError::Transport(describe(&e))
}

/// `Display` of the error followed by its source chain
fn describe(e: &reqwest::Error) -> String {
    let mut detail = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
