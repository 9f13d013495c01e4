//! Repository for the `products` table.

use restock_core::status::ProductStatus;
use restock_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "id, name, tag_id, status, created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by name, case-insensitively.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, Product>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the stored row.
    ///
    /// The `uq_products_name_lower` index rejects case-insensitive
    /// duplicates under concurrent creates.
    pub async fn insert(
        pool: &PgPool,
        id: &str,
        name: &str,
        tag_id: Option<&str>,
        status: ProductStatus,
        created_at: Timestamp,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (id, name, tag_id, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(name)
            .bind(tag_id)
            .bind(status.as_str())
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// Update a product's status and last-updated timestamp.
    ///
    /// Returns `None` if no product with the given ID exists.
    pub async fn update_status(
        pool: &PgPool,
        id: &str,
        status: ProductStatus,
        updated_at: Timestamp,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET status = $2, updated_at = $3 \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(updated_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
