//! Upstream request body: `{"inputs": {"topic": "..."}}`

use crate::core::topic::Topic;
use serde::Serialize;

/// Topic sent by connectivity probes
pub const PROBE_TOPIC: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptInputs {
    pub topic: String,
}

/// JSON body POSTed to every endpoint. Identical across protocol variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptPayload {
    pub inputs: AttemptInputs,
}

impl AttemptPayload {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            inputs: AttemptInputs {
                topic: topic.into(),
            },
        }
    }

    pub fn for_topic(topic: &Topic) -> Self {
        Self::new(topic.combined_topic())
    }

    pub fn probe() -> Self {
        Self::new(PROBE_TOPIC)
    }

    pub fn topic(&self) -> &str {
        &self.inputs.topic
    }
}
