//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated subject + question pair
//! - [`error::ValidationError`] / [`error::RegistryError`]: domain-level errors

pub mod error;
pub mod string;
pub mod topic;
