//! Dispatcher
//!
//! Tries endpoints strictly in order, one call in flight at a time, until
//! one accepts the run.
//!
//! Per attempt:
//! 1. POST `{"inputs": {"topic": ...}}` bounded by the per-attempt timeout
//! 2. Classify: 200/201/202 → success, elapsed timeout → `Timeout`,
//!    anything else → `Upstream`
//! 3. Record the [`Attempt`]; on success normalize and stop
//!
//! When every endpoint fails, the attempts are aggregated into a
//! [`DispatchReport`]. Nothing is retried within an entry.

use crate::ports::dispatch_logger::{DispatchEvent, DispatchLogger, NoDispatchLogger};
use crate::ports::progress::{DispatchProgress, NoProgress};
use crate::ports::upstream_gateway::{GatewayError, UpstreamGateway, UpstreamResponse};
use hwhelper_domain::{
    Attempt, AttemptOutcome, AttemptPayload, DispatchReport, Endpoint, Solution, Topic, aggregate,
    is_success_status, normalize, parse_body, truncate,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::error::Elapsed;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why a dispatch produced no solution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// Every endpoint was tried and failed
    #[error("{0}")]
    Exhausted(DispatchReport),

    /// The caller went away; attempts finished before that are kept
    #[error("Dispatch cancelled after {} attempt(s)", .completed.len())]
    Cancelled { completed: Vec<Attempt> },
}

impl DispatchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DispatchError::Cancelled { .. })
    }

    pub fn report(&self) -> Option<&DispatchReport> {
        match self {
            DispatchError::Exhausted(report) => Some(report),
            DispatchError::Cancelled { .. } => None,
        }
    }
}

/// Sequential multi-endpoint dispatcher.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent dispatches.
pub struct Dispatcher {
    gateway: Arc<dyn UpstreamGateway>,
    logger: Arc<dyn DispatchLogger>,
}

impl Clone for Dispatcher {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoDispatchLogger),
        }
    }

    /// Create with a dispatch event logger.
    pub fn with_logger(mut self, logger: Arc<dyn DispatchLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Dispatch with default (no-op) progress and no cancellation.
    pub async fn dispatch(
        &self,
        topic: &Topic,
        endpoints: &[Endpoint],
        attempt_timeout: Duration,
    ) -> Result<Solution, DispatchError> {
        self.dispatch_with_progress(topic, endpoints, attempt_timeout, &NoProgress, None)
            .await
    }

    /// Dispatch with progress callbacks and optional cancellation.
    ///
    /// Cancelling the token drops the in-flight call and returns
    /// [`DispatchError::Cancelled`].
    pub async fn dispatch_with_progress(
        &self,
        topic: &Topic,
        endpoints: &[Endpoint],
        attempt_timeout: Duration,
        progress: &dyn DispatchProgress,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Solution, DispatchError> {
        let payload = AttemptPayload::for_topic(topic);
        let mut attempts: Vec<Attempt> = Vec::with_capacity(endpoints.len());

        info!(
            "Dispatching to {} endpoint(s), timeout {}s",
            endpoints.len(),
            attempt_timeout.as_secs()
        );
        debug!("Payload topic: {}", truncate(payload.topic(), 200));
        progress.on_dispatch_start(topic, endpoints.len());

        for (index, endpoint) in endpoints.iter().enumerate() {
            if cancellation.is_some_and(|t| t.is_cancelled()) {
                return Err(self.cancelled(attempts, progress));
            }

            info!("Trying: {}", endpoint);
            progress.on_attempt_start(index, endpoint);

            let started = Instant::now();
            let call = tokio::time::timeout(attempt_timeout, self.gateway.post(endpoint, &payload));
            let result = match cancellation {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            return Err(self.cancelled(attempts, progress));
                        }
                        result = call => result,
                    }
                }
                None => call.await,
            };
            let elapsed = started.elapsed();

            let attempt = Attempt::new(endpoint.clone(), classify(result), elapsed);
            progress.on_attempt_complete(index, &attempt);
            self.logger
                .log(DispatchEvent::attempt_finished(index, &attempt));

            if let AttemptOutcome::Success { raw_body } = &attempt.outcome {
                let solution = normalize(raw_body).with_source(endpoint.clone());
                info!("Success with endpoint: {}", endpoint);
                self.logger
                    .log(DispatchEvent::dispatch_succeeded(&solution, index + 1));
                progress.on_dispatch_complete(true);
                return Ok(solution);
            }

            if let Some(detail) = attempt.failure_detail() {
                warn!(
                    "Endpoint {} failed ({}ms): {}",
                    endpoint,
                    elapsed.as_millis(),
                    truncate(detail, 300)
                );
            }
            attempts.push(attempt);
        }

        let report = aggregate(attempts);
        warn!(
            "All endpoints failed. Last error: {}",
            truncate(report.last_error_summary(), 300)
        );
        self.logger.log(DispatchEvent::dispatch_exhausted(&report));
        progress.on_dispatch_complete(false);
        Err(DispatchError::Exhausted(report))
    }

    fn cancelled(&self, completed: Vec<Attempt>, progress: &dyn DispatchProgress) -> DispatchError {
        info!("Dispatch cancelled after {} attempt(s)", completed.len());
        progress.on_dispatch_complete(false);
        DispatchError::Cancelled { completed }
    }
}

/// Classify one bounded gateway call.
pub(crate) fn classify(
    result: Result<Result<UpstreamResponse, GatewayError>, Elapsed>,
) -> AttemptOutcome {
    match result {
        Err(_elapsed) => AttemptOutcome::timeout(),
        Ok(Err(GatewayError::Timeout)) => AttemptOutcome::timeout(),
        Ok(Err(GatewayError::Transport(detail))) => AttemptOutcome::upstream(detail),
        Ok(Ok(response)) if is_success_status(response.status) => AttemptOutcome::Success {
            raw_body: parse_body(&response.body),
        },
        Ok(Ok(response)) => AttemptOutcome::bad_status(response.status, &response.body),
    }
}
