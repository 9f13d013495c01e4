use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Mount health and ping routes (under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(meta::health_check))
        .route("/ping", get(meta::ping))
}
