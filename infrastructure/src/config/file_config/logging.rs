//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File sinks for operational and dispatch logs. Both are off by default.
///
/// # Example
///
/// ```toml
/// [logging]
/// dispatch_log = "/var/log/hwhelper/dispatch.jsonl"
/// log_file = "/var/log/hwhelper/hwhelper.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per dispatch event
    pub dispatch_log: Option<PathBuf>,
    /// Plain-text copy of the tracing output
    pub log_file: Option<PathBuf>,
}
