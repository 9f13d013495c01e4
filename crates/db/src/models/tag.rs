//! Tag model and DTOs.

use restock_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table: a supplier/category grouping for products.
///
/// Tag names are unique case-insensitively. The "unfiled" pseudo-category
/// (a null tag reference on a product) is not a row in this table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// DTO for creating a new tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}
