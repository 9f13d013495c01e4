//! Repository for the `tags` table.

use restock_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::tag::Tag;

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// List all tags, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY created_at, id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new tag, returning the stored row.
    ///
    /// The `uq_tags_name_lower` index rejects case-insensitive duplicates;
    /// under concurrent creates it is the final arbiter, not the
    /// application-level pre-check.
    pub async fn insert(
        pool: &PgPool,
        id: &str,
        name: &str,
        created_at: Timestamp,
    ) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (id, name, created_at) \
             VALUES ($1, $2, $3) \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(name)
            .bind(created_at)
            .fetch_one(pool)
            .await
    }

    /// Delete a tag by ID, first reassigning every product that references
    /// it to unfiled, as one transaction.
    ///
    /// Returns `None` if no tag with the given ID exists, otherwise the
    /// number of products that were moved. The reassignment commits with
    /// the tag removal, so no product ever observably points at a deleted
    /// tag.
    pub async fn delete_cascade(
        pool: &PgPool,
        id: &str,
        reassigned_at: Timestamp,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let moved = sqlx::query(
            "UPDATE products SET tag_id = NULL, updated_at = $2 WHERE tag_id = $1",
        )
        .bind(id)
        .bind(reassigned_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let deleted = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(moved))
    }
}
