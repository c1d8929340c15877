//! Route handlers

use super::responses::{
    ApiError, PROBE_INSTRUCTIONS, ProbeResponse, ServiceStatus, SolveRequest, SolveResponse,
};
use super::state::SharedState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use hwhelper_application::{SolveError, SolveInput};
use tracing::{error, info, warn};

pub async fn home(State(state): State<SharedState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "online",
        message: "HWHelper API - relaying questions to the upstream agent crew",
        endpoints: state.endpoint_count(),
    })
}

pub async fn health(State(state): State<SharedState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok",
        message: "API is running",
        endpoints: state.endpoint_count(),
    })
}

/// Probe every endpoint; shutdown abandons the remaining calls with `503`.
pub async fn test_endpoints(
    State(state): State<SharedState>,
) -> Result<Json<ProbeResponse>, ApiError> {
    let shutdown = state.shutdown.child_token();
    let results = tokio::select! {
        biased;
        _ = shutdown.cancelled() => {
            warn!("Endpoint probe abandoned: shutting down");
            return Err(ApiError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Request cancelled: the service is shutting down",
            ));
        }
        results = state.probe.execute() => results,
    };

    Ok(Json(ProbeResponse {
        results: results.into_iter().map(Into::into).collect(),
        instructions: PROBE_INSTRUCTIONS,
    }))
}

pub async fn solve(
    State(state): State<SharedState>,
    body: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected /solve body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let input = SolveInput::new(request.subject, request.question)
        .with_cancellation(state.shutdown.child_token());

    match state.solve.execute(input).await {
        Ok(solution) => {
            info!(
                "Solved via {}",
                solution
                    .source_endpoint()
                    .map(|e| e.url())
                    .unwrap_or("(unknown)")
            );
            Ok(Json(SolveResponse::from(solution)))
        }
        Err(e) => {
            match &e {
                SolveError::Validation(_) => warn!("{}", e),
                SolveError::Exhausted(_) | SolveError::Cancelled { .. } => error!("{}", e),
            }
            Err(e.into())
        }
    }
}
