/**
 * Application State Management
 *
 * This module defines the application state shared across all request
 * handlers.
 *
 * # Architecture
 *
 * `AppState` is constructed once at startup from the loaded `Config`
 * and injected into the router. There is no module-level singleton: the
 * database pool, content store, suggestion client, and configuration
 * all travel through this struct.
 *
 * # Thread Safety
 *
 * Every field is cheaply cloneable and safe for concurrent use: the
 * sqlx pool and reqwest client are internally reference-counted, the
 * content store holds only a path, and the config is behind an `Arc`.
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::assist::SuggestionClient;
use crate::documents::ContentStore;
use crate::server::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool (users and documents tables)
    pub db: SqlitePool,
    /// File-per-document content store
    pub content: ContentStore,
    /// Client for the external completion service
    pub assist: SuggestionClient,
    /// Server configuration loaded at startup
    pub config: Arc<Config>,
}
