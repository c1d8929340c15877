//! Configuration issues detected before the service starts.
//!
//! Loaders collect every issue instead of stopping at the first one, so a
//! misconfigured deployment reports all of its problems at once. Any issue
//! with [`Severity::Error`] aborts startup.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// The endpoint list is empty.
    NoEndpoints,
    /// An endpoint URL is not an absolute http(s) URL.
    InvalidEndpointUrl { url: String },
    /// An endpoint names a protocol variant that does not exist.
    UnknownVariant { url: String, value: String },
    /// A timeout is configured as zero seconds.
    ZeroTimeout { field: String },
    /// No credential is configured at all.
    MissingCredential,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
