//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DispatchParams`]: per-attempt and probe timeouts

pub mod dispatch_params;

pub use dispatch_params::{DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_PROBE_TIMEOUT, DispatchParams};
