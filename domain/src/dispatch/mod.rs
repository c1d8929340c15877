//! Dispatch value objects and the pure transforms around them.
//!
//! - [`attempt::Attempt`]: one try against one endpoint
//! - [`normalize::normalize`]: upstream body → [`solution::Solution`]
//! - [`report::aggregate`]: failed attempts → [`report::DispatchReport`]
//! - [`probe::ProbeResult`]: connectivity check result

pub mod attempt;
pub mod normalize;
pub mod payload;
pub mod probe;
pub mod report;
pub mod solution;
