use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers borrow connections from `pool` per statement; nothing else is
/// shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: staffing_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
