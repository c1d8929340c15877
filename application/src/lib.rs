//! Application layer for hwhelper
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_PROBE_TIMEOUT, DispatchParams};
pub use ports::{
    dispatch_logger::{DispatchEvent, DispatchLogger, NoDispatchLogger},
    progress::{DispatchProgress, NoProgress},
    upstream_gateway::{GatewayError, UpstreamGateway, UpstreamResponse},
};
pub use use_cases::dispatch::{DispatchError, Dispatcher};
pub use use_cases::probe::ProbeEndpointsUseCase;
pub use use_cases::solve::{SolveError, SolveInput, SolveUseCase};
