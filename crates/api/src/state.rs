use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally). Holding the
/// pool here rather than in a module-level singleton is what lets tests run
/// against isolated per-test databases.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskd_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
