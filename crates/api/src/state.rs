use std::sync::Arc;

use restock_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Read-through/write-through store over the database.
    pub store: Arc<Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
