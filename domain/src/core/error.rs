//! Domain error types

use thiserror::Error;

/// Caller input defects detected while building a [`Topic`](super::topic::Topic)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No question provided")]
    EmptyQuestion,
}

/// Endpoint registry construction errors.
///
/// These are configuration defects and surface at startup, never at
/// dispatch time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No upstream endpoints configured")]
    NoEndpoints,

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown protocol variant '{0}' (expected 'kickoff' or 'run')")]
    UnknownVariant(String),
}

impl RegistryError {
    /// Check if this error means the registry would be empty
    pub fn is_empty_registry(&self) -> bool {
        matches!(self, RegistryError::NoEndpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_display() {
        assert_eq!(
            ValidationError::EmptyQuestion.to_string(),
            "No question provided"
        );
    }

    #[test]
    fn test_is_empty_registry_check() {
        assert!(RegistryError::NoEndpoints.is_empty_registry());
        assert!(!RegistryError::InvalidUrl("ftp://x".to_string()).is_empty_registry());
        assert!(!RegistryError::UnknownVariant("stream".to_string()).is_empty_registry());
    }
}
