//! Read-through / write-through store.
//!
//! [`Store`] fronts the two Postgres tables with in-process mirrors of the
//! full `tags` and `products` collections, loaded once per process on
//! first access. Reads are served from the mirror; every mutation writes
//! to Postgres first and commits the mirror only after the durable write
//! succeeds, so a failed write surfaces an error and leaves the mirror
//! unchanged. Postgres is the source of truth throughout.

use std::collections::HashMap;

use chrono::Utc;
use restock_core::status::ProductStatus;
use tokio::sync::{OnceCell, RwLock};
use uuid::Uuid;

use crate::models::product::Product;
use crate::models::tag::Tag;
use crate::repositories::{ProductRepo, TagRepo};
use crate::DbPool;

/// Shared application store: a durable Postgres backend plus in-process
/// mirrors of both collections.
pub struct Store {
    pool: DbPool,
    loaded: OnceCell<()>,
    tags: RwLock<HashMap<String, Tag>>,
    products: RwLock<HashMap<String, Product>>,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            loaded: OnceCell::new(),
            tags: RwLock::new(HashMap::new()),
            products: RwLock::new(HashMap::new()),
        }
    }

    /// The underlying connection pool (health checks, migrations).
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Load both collections from Postgres on first access.
    async fn ensure_loaded(&self) -> Result<(), sqlx::Error> {
        self.loaded
            .get_or_try_init(|| async {
                let tags = TagRepo::list(&self.pool).await?;
                let products = ProductRepo::list(&self.pool).await?;

                let mut tag_map = self.tags.write().await;
                for tag in tags {
                    tag_map.insert(tag.id.clone(), tag);
                }

                let mut product_map = self.products.write().await;
                for product in products {
                    product_map.insert(product.id.clone(), product);
                }

                tracing::info!(
                    tags = tag_map.len(),
                    products = product_map.len(),
                    "Store mirror loaded"
                );

                Ok(())
            })
            .await
            .map(|_: &()| ())
    }

    /// Mirror sizes, for the startup log.
    pub async fn counts(&self) -> Result<(usize, usize), sqlx::Error> {
        self.ensure_loaded().await?;
        let tags = self.tags.read().await.len();
        let products = self.products.read().await.len();
        Ok((tags, products))
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    /// List all tags, oldest first.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, sqlx::Error> {
        self.ensure_loaded().await?;
        let map = self.tags.read().await;
        let mut tags: Vec<Tag> = map.values().cloned().collect();
        tags.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(tags)
    }

    /// Find a tag by ID.
    pub async fn find_tag(&self, id: &str) -> Result<Option<Tag>, sqlx::Error> {
        self.ensure_loaded().await?;
        Ok(self.tags.read().await.get(id).cloned())
    }

    /// Create a tag with a fresh ID. The caller is expected to have
    /// validated and trimmed the name.
    pub async fn create_tag(&self, name: &str) -> Result<Tag, sqlx::Error> {
        self.ensure_loaded().await?;

        let id = Uuid::now_v7().to_string();
        let tag = TagRepo::insert(&self.pool, &id, name, Utc::now()).await?;

        self.tags.write().await.insert(tag.id.clone(), tag.clone());
        Ok(tag)
    }

    /// Delete a tag, reassigning its products to unfiled first.
    ///
    /// Returns `None` if the tag does not exist, otherwise the number of
    /// products moved. The durable cascade commits before the mirror is
    /// touched, so the mirror never holds a dangling tag reference either.
    pub async fn delete_tag(&self, id: &str) -> Result<Option<u64>, sqlx::Error> {
        self.ensure_loaded().await?;

        let reassigned_at = Utc::now();
        let Some(moved) = TagRepo::delete_cascade(&self.pool, id, reassigned_at).await? else {
            return Ok(None);
        };

        {
            let mut products = self.products.write().await;
            for product in products.values_mut() {
                if product.tag_id.as_deref() == Some(id) {
                    product.tag_id = None;
                    product.updated_at = reassigned_at;
                }
            }
        }
        self.tags.write().await.remove(id);

        Ok(Some(moved))
    }

    // -----------------------------------------------------------------------
    // Products
    // -----------------------------------------------------------------------

    /// List all products, oldest first.
    pub async fn list_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        self.ensure_loaded().await?;
        let map = self.products.read().await;
        let mut products: Vec<Product> = map.values().cloned().collect();
        products.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(products)
    }

    /// List products under one tag, or the unfiled bucket when `tag_id`
    /// is `None`. Oldest first.
    pub async fn products_by_tag(&self, tag_id: Option<&str>) -> Result<Vec<Product>, sqlx::Error> {
        let mut products = self.list_products().await?;
        products.retain(|p| p.tag_id.as_deref() == tag_id);
        Ok(products)
    }

    /// Find a product by ID.
    pub async fn find_product(&self, id: &str) -> Result<Option<Product>, sqlx::Error> {
        self.ensure_loaded().await?;
        Ok(self.products.read().await.get(id).cloned())
    }

    /// Find a product by name, case-insensitively.
    pub async fn find_product_by_name(&self, name: &str) -> Result<Option<Product>, sqlx::Error> {
        self.ensure_loaded().await?;
        let normalized = name.to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .values()
            .find(|p| p.name.to_lowercase() == normalized)
            .cloned())
    }

    /// Create a product with a fresh ID. The caller is expected to have
    /// validated the name, tag reference, and status.
    pub async fn create_product(
        &self,
        name: &str,
        tag_id: Option<&str>,
        status: ProductStatus,
    ) -> Result<Product, sqlx::Error> {
        self.ensure_loaded().await?;

        let id = Uuid::now_v7().to_string();
        let product =
            ProductRepo::insert(&self.pool, &id, name, tag_id, status, Utc::now()).await?;

        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    /// Update a product's status. Returns `None` if the ID is unknown.
    pub async fn update_product_status(
        &self,
        id: &str,
        status: ProductStatus,
    ) -> Result<Option<Product>, sqlx::Error> {
        self.ensure_loaded().await?;

        let Some(product) =
            ProductRepo::update_status(&self.pool, id, status, Utc::now()).await?
        else {
            return Ok(None);
        };

        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(Some(product))
    }

    /// Delete a product. Returns `true` if it existed.
    pub async fn delete_product(&self, id: &str) -> Result<bool, sqlx::Error> {
        self.ensure_loaded().await?;

        if !ProductRepo::delete(&self.pool, id).await? {
            return Ok(false);
        }

        self.products.write().await.remove(id);
        Ok(true)
    }
}
