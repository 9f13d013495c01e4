//! Health and ping endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    pub status: &'static str,
    pub message: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Ping response payload.
#[derive(Serialize)]
pub struct PingResponse {
    pub message: String,
}

/// GET /api/health -- service and database health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = restock_db::health_check(state.store.pool()).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        message: "Server is running",
        db_healthy,
    })
}

/// GET /api/ping -- echo endpoint, configurable via `PING_MESSAGE`.
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.config.ping_message.clone(),
    })
}
