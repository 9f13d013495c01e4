//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for the API layer
//!
//! Wire field names follow the client contract (`_id`, `tagId`,
//! `createdAt`, `updatedAt`).

pub mod product;
pub mod tag;
