//! Domain logic for the shortage tracker.
//!
//! Zero internal dependencies so it can be used by the repository layer,
//! the API layer, and any future CLI tooling.

pub mod error;
pub mod search;
pub mod status;
pub mod types;
