//! Router assembly and the serve loop

use super::handlers;
use super::state::AppState;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
///
/// CORS allows any origin with `GET`, `POST` and `OPTIONS` and the
/// `Content-Type` header. The CORS layer answers every `OPTIONS` request
/// itself, so no route registers an `OPTIONS` handler.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/test-endpoints", get(handlers::test_endpoints))
        .route("/solve", post(handlers::solve))
        .with_state(Arc::new(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve until `shutdown` is cancelled.
///
/// Cancelling `shutdown` also cancels in-flight solves, so they answer
/// `503` instead of holding the listener open for a full attempt timeout.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let shutdown: CancellationToken = state.shutdown.clone();
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
