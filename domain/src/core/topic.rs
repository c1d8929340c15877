//! Topic value object

use super::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Subject used when the caller does not supply one
pub const DEFAULT_SUBJECT: &str = "General";

/// A validated subject + question pair (Value Object)
///
/// The `combined_topic` string is what gets sent upstream. It is computed
/// once at construction:
///
/// - subject `"General"` → the question alone
/// - any other subject → `"<subject>: <question>"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    subject: String,
    question: String,
    combined_topic: String,
}

impl Topic {
    /// Validate raw input and build a topic.
    ///
    /// A missing subject defaults to [`DEFAULT_SUBJECT`]. An explicitly empty
    /// subject is kept as given. A missing or empty question fails with
    /// [`ValidationError::EmptyQuestion`]; any other string is accepted as is.
    pub fn validate(
        subject: Option<&str>,
        question: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let question = match question {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => return Err(ValidationError::EmptyQuestion),
        };
        let subject = subject.unwrap_or(DEFAULT_SUBJECT).to_string();

        let combined_topic = if subject == DEFAULT_SUBJECT {
            question.clone()
        } else {
            format!("{}: {}", subject, question)
        };

        Ok(Self {
            subject,
            question,
            combined_topic,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// The string sent upstream as `inputs.topic`
    pub fn combined_topic(&self) -> &str {
        &self.combined_topic
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.combined_topic)
    }
}
