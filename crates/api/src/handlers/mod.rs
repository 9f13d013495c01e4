//! HTTP request handlers.

pub mod meta;
pub mod products;
pub mod tags;
