//! Use cases (application services)
//!
//! - [`dispatch::Dispatcher`]: sequential try-until-success over endpoints
//! - [`solve::SolveUseCase`]: validate a question, then dispatch it
//! - [`probe::ProbeEndpointsUseCase`]: connectivity check of every endpoint

pub mod dispatch;
pub mod probe;
pub mod solve;

#[cfg(test)]
pub(crate) mod testing;
