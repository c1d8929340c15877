//! Configuration errors surfaced at startup

use hwhelper_domain::{ConfigIssue, RegistryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration:\n  {}", .issues.iter().map(|i| i.message.as_str()).collect::<Vec<_>>().join("\n  "))]
    Invalid { issues: Vec<ConfigIssue> },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwhelper_domain::ConfigIssueCode;

    #[test]
    fn test_invalid_lists_every_message() {
        let err = ConfigError::Invalid {
            issues: vec![
                ConfigIssue::error(ConfigIssueCode::NoEndpoints, "no endpoints"),
                ConfigIssue::error(
                    ConfigIssueCode::ZeroTimeout {
                        field: "dispatch.probe_timeout_secs".to_string(),
                    },
                    "zero probe timeout",
                ),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration:\n  no endpoints\n  zero probe timeout"
        );
    }
}
