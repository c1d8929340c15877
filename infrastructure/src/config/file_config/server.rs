//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP listener settings.
///
/// The plain `PORT` environment variable overrides `port`, so the service
/// runs unchanged on hosts that assign the port that way.
///
/// # Example
///
/// ```toml
/// [server]
/// host = "127.0.0.1"
/// port = 8080
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl FileServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
