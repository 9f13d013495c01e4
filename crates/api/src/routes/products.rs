//! Route definitions for products.
//!
//! ```text
//! GET    /                -> list_products
//! POST   /                -> create_product
//! GET    /search          -> search_products
//! GET    /tag/{tagId}     -> products_by_tag ("all" / "null" literals)
//! GET    /{id}            -> get_product
//! PATCH  /{id}            -> update_product_status
//! DELETE /{id}            -> delete_product
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/search", get(products::search_products))
        .route("/tag/{tag_id}", get(products::products_by_tag))
        .route(
            "/{id}",
            get(products::get_product)
                .patch(products::update_product_status)
                .delete(products::delete_product),
        )
}
