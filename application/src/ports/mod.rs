//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dispatch_logger;
pub mod progress;
pub mod upstream_gateway;
