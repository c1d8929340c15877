//! Upstream agent platform adapter.
//!
//! Provides [`ReqwestUpstreamGateway`], the HTTP implementation of the
//! [`UpstreamGateway`](hwhelper_application::UpstreamGateway) port.

mod gateway;

pub use gateway::ReqwestUpstreamGateway;
