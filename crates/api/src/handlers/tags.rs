//! Handlers for tag CRUD.
//!
//! Deleting a tag cascades: every product referencing it is reassigned to
//! the unfiled bucket before the tag row disappears.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restock_core::error::CoreError;
use restock_core::search::name_taken;
use restock_db::models::tag::CreateTag;

use crate::error::{AppError, AppResult};
use crate::response::{DeleteResponse, TagResponse, TagsResponse};
use crate::state::AppState;

/// GET /api/tags
///
/// List all tags, oldest first.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = state.store.list_tags().await?;

    Ok(Json(TagsResponse { tags }))
}

/// POST /api/tags
///
/// Create a tag. Rejects blank names and case-insensitive duplicates.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Tag name is required".into(),
        )));
    }

    let existing = state.store.list_tags().await?;
    if name_taken(existing.iter().map(|t| t.name.as_str()), name) {
        return Err(AppError::Core(CoreError::Conflict(
            "Tag already exists".into(),
        )));
    }

    let tag = state.store.create_tag(name).await?;

    tracing::info!(tag_id = %tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(TagResponse { tag })))
}

/// DELETE /api/tags/:id
///
/// Delete a tag. Products referencing it move to the unfiled bucket as
/// part of the same logical operation.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let moved = state
        .store
        .delete_tag(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: id.clone(),
        }))?;

    tracing::info!(tag_id = %id, products_moved = moved, "Tag deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Tag deleted successfully. Products moved to All.".into(),
    }))
}
