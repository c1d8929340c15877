//! Solve use case
//!
//! Validates a raw `(subject, question)` pair and dispatches the resulting
//! topic across the endpoint registry with the full-invocation timeout.

use crate::config::DispatchParams;
use crate::ports::dispatch_logger::{DispatchEvent, DispatchLogger, NoDispatchLogger};
use crate::ports::progress::{DispatchProgress, NoProgress};
use crate::ports::upstream_gateway::UpstreamGateway;
use crate::use_cases::dispatch::{DispatchError, Dispatcher};
use hwhelper_domain::{Attempt, DispatchReport, EndpointRegistry, Solution, Topic, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Errors that can occur while solving a question
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not reach any upstream endpoint: {0}")]
    Exhausted(DispatchReport),

    #[error("Request cancelled")]
    Cancelled { completed: Vec<Attempt> },
}

impl From<DispatchError> for SolveError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Exhausted(report) => SolveError::Exhausted(report),
            DispatchError::Cancelled { completed } => SolveError::Cancelled { completed },
        }
    }
}

/// Input for the Solve use case
#[derive(Debug, Clone, Default)]
pub struct SolveInput {
    pub subject: Option<String>,
    pub question: Option<String>,
    /// Cancelled when the caller goes away
    pub cancellation: Option<CancellationToken>,
}

impl SolveInput {
    pub fn new(subject: Option<String>, question: Option<String>) -> Self {
        Self {
            subject,
            question,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Use case for answering one question
pub struct SolveUseCase {
    dispatcher: Dispatcher,
    registry: Arc<EndpointRegistry>,
    params: DispatchParams,
    logger: Arc<dyn DispatchLogger>,
}

impl Clone for SolveUseCase {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            registry: self.registry.clone(),
            params: self.params,
            logger: self.logger.clone(),
        }
    }
}

impl SolveUseCase {
    pub fn new(
        gateway: Arc<dyn UpstreamGateway>,
        registry: Arc<EndpointRegistry>,
        params: DispatchParams,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway),
            registry,
            params,
            logger: Arc::new(NoDispatchLogger),
        }
    }

    /// Create with a dispatch event logger.
    pub fn with_logger(mut self, logger: Arc<dyn DispatchLogger>) -> Self {
        self.dispatcher = self.dispatcher.with_logger(logger.clone());
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: SolveInput) -> Result<Solution, SolveError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SolveInput,
        progress: &dyn DispatchProgress,
    ) -> Result<Solution, SolveError> {
        let topic = Topic::validate(input.subject.as_deref(), input.question.as_deref())?;

        info!("Request: {} - {}", topic.subject(), topic.question());
        self.logger.log(DispatchEvent::request_received(&topic));

        let solution = self
            .dispatcher
            .dispatch_with_progress(
                &topic,
                self.registry.endpoints(),
                self.params.attempt_timeout,
                progress,
                input.cancellation.as_ref(),
            )
            .await?;

        Ok(solution)
    }
}
