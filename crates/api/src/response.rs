//! Response envelope types shared by the API handlers.
//!
//! Collection and entity payloads are wrapped in named envelopes
//! (`{ "tags": [...] }`, `{ "product": {...} }`) matching the client
//! contract, instead of ad-hoc `serde_json::json!` maps.

use restock_db::models::product::Product;
use restock_db::models::tag::Tag;
use serde::Serialize;

/// `{ "tags": [...] }`
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

/// `{ "tag": {...} }`
#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub tag: Tag,
}

/// `{ "products": [...] }`
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// `{ "product": {...} }`
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// `{ "success": true, "message": "..." }` for delete operations.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
