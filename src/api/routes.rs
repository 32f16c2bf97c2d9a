//! API Routes
//!
//! Configures the Axum router with all simulator endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    access_handler, health_handler, list_handler, reset_handler, scenario_handler,
    snapshot_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /caches` - Summary of every policy's cache
/// - `GET /caches/:policy` - Current snapshot
/// - `POST /caches/:policy/access` - Access a key
/// - `POST /caches/:policy/reset` - Empty the cache
/// - `POST /caches/:policy/scenario/:name` - Reset and replay a preset
/// - `GET /caches/:policy/stats` - Hit/miss/eviction counters
///
/// # Middleware
/// - CORS: Allows any origin so a browser front end can poll freely
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/caches", get(list_handler))
        .route("/caches/:policy", get(snapshot_handler))
        .route("/caches/:policy/access", post(access_handler))
        .route("/caches/:policy/reset", post(reset_handler))
        .route("/caches/:policy/scenario/:name", post(scenario_handler))
        .route("/caches/:policy/stats", get(stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
