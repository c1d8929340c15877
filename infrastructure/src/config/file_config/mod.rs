//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod dispatch;
mod logging;
mod output;
mod server;
mod upstream;

pub use dispatch::FileDispatchConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use server::{DEFAULT_HOST, DEFAULT_PORT, FileServerConfig};
pub use upstream::{
    DEFAULT_CREDENTIAL, DEFAULT_CREDENTIAL_ENV, DEFAULT_ENDPOINT_TEMPLATES, DEFAULT_PROJECT_ID,
    FileEndpointConfig, FileUpstreamConfig, PROJECT_ID_PLACEHOLDER,
};

use super::error::ConfigError;
use hwhelper_application::DispatchParams;
use hwhelper_domain::{ConfigIssue, EndpointRegistry, RegistryError};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener
    pub server: FileServerConfig,
    /// Upstream endpoints and credentials
    pub upstream: FileUpstreamConfig,
    /// Timeouts
    pub dispatch: FileDispatchConfig,
    /// Log file sinks
    pub logging: FileLoggingConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The endpoint list (empty list, bad URLs, unknown variants, blank credential)
    /// 2. Timeouts
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.upstream.parse_endpoints().1);
        issues.extend(self.dispatch.to_dispatch_params().1);
        issues
    }

    /// Split issues into a hard failure or the remaining warnings.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigError::Invalid { issues: errors })
        }
    }

    pub fn to_registry(&self) -> Result<EndpointRegistry, RegistryError> {
        self.upstream.to_registry()
    }

    pub fn to_dispatch_params(&self) -> DispatchParams {
        self.dispatch.to_dispatch_params().0
    }
}
