//! Product model and DTOs.

use restock_core::status::ProductStatus;
use restock_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table: one tracked shortage item.
///
/// `tag_id = None` means "unfiled". Product names are unique
/// case-insensitively across the whole table, independent of tag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "tagId")]
    pub tag_id: Option<EntityId>,
    #[sqlx(try_from = "String")]
    pub status: ProductStatus,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default, rename = "tagId")]
    pub tag_id: Option<EntityId>,
    /// Left as a raw string so an unknown value can be rejected with a
    /// domain error instead of a deserialization failure.
    #[serde(default)]
    pub status: Option<String>,
}

/// DTO for updating a product's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductStatus {
    #[serde(default)]
    pub status: Option<String>,
}
