//! HTTP front door
//!
//! `GET /`, `GET /health`, `GET /test-endpoints` and `POST /solve`, with
//! permissive CORS and request tracing.

mod handlers;
pub mod responses;
mod router;
mod state;

pub use responses::{ApiError, SolveRequest, SolveResponse};
pub use router::{router, serve};
pub use state::{AppState, SharedState};
