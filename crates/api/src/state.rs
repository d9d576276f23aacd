use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store and config are behind handles).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    pub store: eutian_db::Store,
    /// Server configuration (admin secrets, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
