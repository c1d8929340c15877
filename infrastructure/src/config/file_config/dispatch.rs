//! Dispatch configuration from TOML (`[dispatch]` section)

use hwhelper_application::DispatchParams;
use hwhelper_application::config::{DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_PROBE_TIMEOUT};
use hwhelper_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-attempt timeouts.
///
/// # Example
///
/// ```toml
/// [dispatch]
/// attempt_timeout_secs = 120
/// probe_timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDispatchConfig {
    /// Upper bound for one full-invocation attempt
    pub attempt_timeout_secs: u64,
    /// Upper bound for one connectivity probe
    pub probe_timeout_secs: u64,
}

impl Default for FileDispatchConfig {
    fn default() -> Self {
        Self {
            attempt_timeout_secs: DEFAULT_ATTEMPT_TIMEOUT.as_secs(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs(),
        }
    }
}

impl FileDispatchConfig {
    /// Convert to [`DispatchParams`], returning validation issues.
    ///
    /// A zero timeout would fail every attempt before it starts, so it is
    /// reported as an error and replaced by the default.
    pub fn to_dispatch_params(&self) -> (DispatchParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut params = DispatchParams::default();

        match self.attempt_timeout_secs {
            0 => issues.push(zero_timeout("dispatch.attempt_timeout_secs")),
            secs => params = params.with_attempt_timeout(Duration::from_secs(secs)),
        }
        match self.probe_timeout_secs {
            0 => issues.push(zero_timeout("dispatch.probe_timeout_secs")),
            secs => params = params.with_probe_timeout(Duration::from_secs(secs)),
        }

        (params, issues)
    }
}

fn zero_timeout(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::ZeroTimeout {
            field: field.to_string(),
        },
        format!("{}: timeout must be at least 1 second", field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dispatch_params() {
        let (params, issues) = FileDispatchConfig::default().to_dispatch_params();
        assert!(issues.is_empty());
        assert_eq!(params.attempt_timeout, Duration::from_secs(300));
        assert_eq!(params.probe_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_custom_timeouts() {
        let config = FileDispatchConfig {
            attempt_timeout_secs: 30,
            probe_timeout_secs: 2,
        };
        let (params, issues) = config.to_dispatch_params();
        assert!(issues.is_empty());
        assert_eq!(params.attempt_timeout, Duration::from_secs(30));
        assert_eq!(params.probe_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_zero_timeout_is_an_error() {
        let config = FileDispatchConfig {
            attempt_timeout_secs: 0,
            probe_timeout_secs: 10,
        };
        let (params, issues) = config.to_dispatch_params();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroTimeout {
                field: "dispatch.attempt_timeout_secs".to_string()
            }
        );
        assert_eq!(params.attempt_timeout, Duration::from_secs(300));
    }
}
