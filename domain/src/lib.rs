//! Domain layer for hwhelper
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Topic
//!
//! A validated subject + question pair. Its `combined_topic` string is what
//! every upstream receives as `inputs.topic`.
//!
//! ## Endpoint Registry
//!
//! A static, ordered list of upstream agent endpoints. Order is priority.
//!
//! ## Dispatch
//!
//! Endpoints are tried one at a time until one accepts the run. Each try is
//! recorded as an [`Attempt`]. The first success is normalized into a
//! [`Solution`]; if every endpoint fails, the attempts are aggregated into a
//! [`DispatchReport`].

pub mod config;
pub mod core;
pub mod dispatch;
pub mod endpoint;

// Re-export commonly used types
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    error::{RegistryError, ValidationError},
    string::{mask_secret, truncate},
    topic::{DEFAULT_SUBJECT, Topic},
};
pub use dispatch::{
    attempt::{
        Attempt, AttemptOutcome, FailureKind, SUCCESS_STATUSES, TIMEOUT_DETAIL, is_success_status,
    },
    normalize::{normalize, parse_body},
    payload::{AttemptPayload, PROBE_TOPIC},
    probe::ProbeResult,
    report::{DispatchReport, NO_ATTEMPTS_SUMMARY, aggregate},
    solution::Solution,
};
pub use endpoint::{
    entities::{Endpoint, ProtocolVariant},
    registry::{EndpointRegistry, EndpointSpec},
};
