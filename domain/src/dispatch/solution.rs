//! Solution value object

use crate::endpoint::entities::Endpoint;
use serde::Serialize;

/// The answer handed back to the caller (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_endpoint: Option<Endpoint>,
}

impl Solution {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_endpoint: None,
        }
    }

    /// Attach the endpoint whose response produced this solution.
    pub fn with_source(mut self, endpoint: Endpoint) -> Self {
        self.source_endpoint = Some(endpoint);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_endpoint(&self) -> Option<&Endpoint> {
        self.source_endpoint.as_ref()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
