//! Route definitions for tags.
//!
//! ```text
//! GET    /        -> list_tags
//! POST   /        -> create_tag
//! DELETE /{id}    -> delete_tag (cascades product reassignment)
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::list_tags).post(tags::create_tag))
        .route("/{id}", delete(tags::delete_tag))
}
