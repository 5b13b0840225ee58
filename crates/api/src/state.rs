use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: skyport_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Uploaded media storage rooted at `config.media_root`.
    pub media: MediaStore,
}
