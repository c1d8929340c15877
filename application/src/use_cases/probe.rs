//! Probe Endpoints use case
//!
//! Sends a lightweight `{"inputs": {"topic": "test"}}` payload to every
//! registry entry and reports which ones accept it. Unlike a dispatch, the
//! probe does not stop at the first success. Calls are still sequential and
//! each one is bounded by the probe timeout.

use crate::config::DispatchParams;
use crate::ports::upstream_gateway::{GatewayError, UpstreamGateway};
use hwhelper_domain::{AttemptPayload, EndpointRegistry, ProbeResult, TIMEOUT_DETAIL};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Use case for checking connectivity of every endpoint
pub struct ProbeEndpointsUseCase {
    gateway: Arc<dyn UpstreamGateway>,
    registry: Arc<EndpointRegistry>,
    params: DispatchParams,
}

impl ProbeEndpointsUseCase {
    pub fn new(
        gateway: Arc<dyn UpstreamGateway>,
        registry: Arc<EndpointRegistry>,
        params: DispatchParams,
    ) -> Self {
        Self {
            gateway,
            registry,
            params,
        }
    }

    /// Probe every endpoint in registry order.
    pub async fn execute(&self) -> Vec<ProbeResult> {
        let payload = AttemptPayload::probe();
        let mut results = Vec::with_capacity(self.registry.len());

        info!(
            "Probing {} endpoint(s), timeout {}s",
            self.registry.len(),
            self.params.probe_timeout.as_secs()
        );

        for endpoint in self.registry.iter() {
            let started = Instant::now();
            let result = tokio::time::timeout(
                self.params.probe_timeout,
                self.gateway.post(endpoint, &payload),
            )
            .await;
            let elapsed = started.elapsed();

            let probe = match result {
                Ok(Ok(response)) => {
                    ProbeResult::from_status(endpoint.clone(), response.status, elapsed)
                }
                Ok(Err(GatewayError::Transport(detail))) => {
                    ProbeResult::from_error(endpoint.clone(), detail, elapsed)
                }
                Ok(Err(GatewayError::Timeout)) | Err(_) => {
                    ProbeResult::from_error(endpoint.clone(), TIMEOUT_DETAIL, elapsed)
                }
            };

            if probe.working {
                info!("Probe {}: {:?} (working)", endpoint, probe.status);
            } else {
                warn!(
                    "Probe {}: {}",
                    endpoint,
                    probe
                        .status
                        .map(|s| s.to_string())
                        .or_else(|| probe.error.clone())
                        .unwrap_or_default()
                );
            }
            results.push(probe);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{Script, ScriptedGateway, registry};
    use std::time::Duration;

    #[tokio::test]
    async fn test_probe_tries_every_endpoint() {
        let urls = [
            "https://a.test/kickoff",
            "https://b.test/kickoff",
            "https://c.test/run",
            "https://d.test/run",
        ];
        let gateway = Arc::new(
            ScriptedGateway::new()
                .on(urls[0], Script::Status(404, "nope"))
                .on(urls[1], Script::Status(202, "{}"))
                .on(urls[2], Script::Hang)
                .on(urls[3], Script::TransportError("tls handshake failed")),
        );
        let params = DispatchParams::default().with_probe_timeout(Duration::from_millis(50));
        let use_case = ProbeEndpointsUseCase::new(gateway.clone(), Arc::new(registry(&urls)), params);

        let results = use_case.execute().await;

        assert_eq!(results.len(), 4);
        assert_eq!(gateway.total_calls(), 4);

        assert_eq!(results[0].status, Some(404));
        assert!(!results[0].working);

        assert_eq!(results[1].status, Some(202));
        assert!(results[1].working);

        assert_eq!(results[2].status, None);
        assert_eq!(results[2].error.as_deref(), Some("request timeout"));

        assert_eq!(results[3].error.as_deref(), Some("tls handshake failed"));
        assert_eq!(results[3].endpoint.url(), urls[3]);
    }

    #[tokio::test]
    async fn test_probe_counts_200_as_working() {
        let gateway = Arc::new(ScriptedGateway::new().on("https://a.test/kickoff", Script::EchoTopic));
        let use_case = ProbeEndpointsUseCase::new(
            gateway,
            Arc::new(registry(&["https://a.test/kickoff"])),
            DispatchParams::default(),
        );

        let results = use_case.execute().await;
        assert_eq!(results[0].status, Some(200));
        assert!(results[0].working);
    }
}
