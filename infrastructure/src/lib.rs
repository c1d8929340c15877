//! Infrastructure layer for hwhelper
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod upstream;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileDispatchConfig, FileEndpointConfig, FileLoggingConfig,
    FileOutputConfig, FileServerConfig, FileUpstreamConfig,
};
pub use logging::JsonlDispatchLogger;
pub use upstream::ReqwestUpstreamGateway;
