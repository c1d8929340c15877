//! Configuration file loading for hwhelper
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment (`HWHELPER_*`, `PORT`, the credential variable)
//! 2. `--config <path>` specified file
//! 3. Project root: `./hwhelper.toml` or `./.hwhelper.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/hwhelper/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    DEFAULT_CREDENTIAL, DEFAULT_CREDENTIAL_ENV, DEFAULT_ENDPOINT_TEMPLATES, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_PROJECT_ID, FileConfig, FileDispatchConfig, FileEndpointConfig,
    FileLoggingConfig, FileOutputConfig, FileServerConfig, FileUpstreamConfig,
    PROJECT_ID_PLACEHOLDER,
};
pub use loader::ConfigLoader;
