//! Dispatch parameters: per-attempt timeout policy.
//!
//! [`DispatchParams`] groups the static timeouts used by
//! [`SolveUseCase`](crate::use_cases::solve::SolveUseCase) and
//! [`ProbeEndpointsUseCase`](crate::use_cases::probe::ProbeEndpointsUseCase).
//! The two timeouts belong to distinct operations and are never mixed in
//! one run.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bound on a full agent invocation
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(300);

/// Default bound on a connectivity probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout parameters for upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Bound on each solve attempt; the call is cancelled when it elapses.
    pub attempt_timeout: Duration,
    /// Bound on each probe request.
    pub probe_timeout: Duration,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl DispatchParams {
    /// Build from whole seconds, as found in config files.
    pub fn from_secs(attempt_secs: u64, probe_secs: u64) -> Self {
        Self {
            attempt_timeout: Duration::from_secs(attempt_secs),
            probe_timeout: Duration::from_secs(probe_secs),
        }
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}
