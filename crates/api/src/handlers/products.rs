//! Handlers for product CRUD and search.
//!
//! The status lifecycle is user-driven: pending, ordered, delivered.
//! A PATCH to "delivered" is stored as-is; confirmed delivery is expected
//! to arrive as a DELETE instead, so the value never rests for long.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restock_core::error::CoreError;
use restock_core::search::rank_by_name;
use restock_core::status::ProductStatus;
use restock_db::models::product::{CreateProduct, UpdateProductStatus};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{DeleteResponse, ProductResponse, ProductsResponse};
use crate::state::AppState;

/// Query parameters for `GET /api/products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query. Blank or missing returns the full listing.
    pub q: Option<String>,
}

/// GET /api/products
///
/// List all products, oldest first.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.store.list_products().await?;

    Ok(Json(ProductsResponse { products }))
}

/// GET /api/products/search?q=...
///
/// Typo-tolerant search over product names. Exact and substring matches
/// come first in listing order, then fuzzy matches by similarity.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let corpus = state.store.list_products().await?;
    let products = rank_by_name(corpus, params.q.as_deref().unwrap_or(""), |p| p.name.as_str());

    Ok(Json(ProductsResponse { products }))
}

/// GET /api/products/tag/:tagId
///
/// List products under one tag. The literal `"all"` returns everything;
/// the literal `"null"` returns the unfiled bucket.
pub async fn products_by_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let products = match tag_id.as_str() {
        "all" => state.store.list_products().await?,
        "null" => state.store.products_by_tag(None).await?,
        id => state.store.products_by_tag(Some(id)).await?,
    };

    Ok(Json(ProductsResponse { products }))
}

/// POST /api/products
///
/// Create a product. Rejects blank names, case-insensitive duplicate
/// names (tag-independent), dangling tag references, and unknown status
/// values. Status defaults to pending.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Product name is required".into(),
        )));
    }

    if state.store.find_product_by_name(name).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Product already exists".into(),
        )));
    }

    let status = match input.status.as_deref() {
        Some(raw) => raw.parse::<ProductStatus>().map_err(AppError::Core)?,
        None => ProductStatus::default(),
    };

    if let Some(tag_id) = input.tag_id.as_deref() {
        if state.store.find_tag(tag_id).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown tag: {tag_id}"
            ))));
        }
    }

    let product = state
        .store
        .create_product(name, input.tag_id.as_deref(), status)
        .await?;

    tracing::info!(product_id = %product.id, name = %product.name, status = %product.status, "Product created");

    Ok((StatusCode::CREATED, Json(ProductResponse { product })))
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = state
        .store
        .find_product(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Json(ProductResponse { product }))
}

/// PATCH /api/products/:id
///
/// Update a product's status. Repeating the current value is permitted
/// and idempotent; an unrecognized value is rejected with the product
/// left unchanged.
pub async fn update_product_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProductStatus>,
) -> AppResult<impl IntoResponse> {
    let status = input
        .status
        .as_deref()
        .unwrap_or("")
        .parse::<ProductStatus>()
        .map_err(AppError::Core)?;

    let product = state
        .store
        .update_product_status(&id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: id.clone(),
        }))?;

    tracing::info!(product_id = %id, status = %product.status, "Product status updated");

    Ok(Json(ProductResponse { product }))
}

/// DELETE /api/products/:id
///
/// Remove a product. Used both for direct removal and for
/// confirmed-delivery removal.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if id.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Product ID is required".into(),
        )));
    }

    if state.store.find_product(&id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    if !state.store.delete_product(&id).await? {
        return Err(AppError::Core(CoreError::Internal(
            "Failed to delete product from store".into(),
        )));
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Product deleted successfully".into(),
    }))
}
