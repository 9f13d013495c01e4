//! Route tree.

pub mod health;
pub mod products;
pub mod tags;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                       service + database health
/// /ping                         echo endpoint
///
/// /tags                         list (GET), create (POST)
/// /tags/{id}                    delete (DELETE, cascades to products)
///
/// /products                     list (GET), create (POST)
/// /products/search?q=           fuzzy search (GET)
/// /products/tag/{tagId}         list by tag; "all" and "null" literals (GET)
/// /products/{id}                get, update status (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/tags", tags::router())
        .nest("/products", products::router())
        .fallback(unknown_api_route)
}

/// JSON 404 for unmatched `/api` paths.
async fn unknown_api_route() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API endpoint not found" })),
    )
}
