//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod product_repo;
pub mod tag_repo;

pub use product_repo::ProductRepo;
pub use tag_repo::TagRepo;
