//! Shared state for HTTP handlers

use hwhelper_application::{ProbeEndpointsUseCase, SolveUseCase};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Application state shared across handlers
pub struct AppState {
    pub solve: SolveUseCase,
    pub probe: ProbeEndpointsUseCase,
    /// Cancelled on shutdown; in-flight solves observe a child token
    pub shutdown: CancellationToken,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(solve: SolveUseCase, probe: ProbeEndpointsUseCase) -> Self {
        Self {
            solve,
            probe,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn endpoint_count(&self) -> usize {
        self.solve.registry().len()
    }
}
