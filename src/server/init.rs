/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: database pool creation, migrations, content-directory setup,
 * and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool and run migrations
 * 2. Create the content directory if absent
 * 3. Build the suggestion client from configuration
 * 4. Assemble the application state and router
 *
 * Unlike a best-effort cache, every step here is required: a failed
 * database connection, migration, or content-directory creation aborts
 * startup.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use crate::assist::SuggestionClient;
use crate::documents::ContentStore;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Configuration loaded by the caller (typically from the
///   environment via `Config::from_env`)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database cannot be reached, migrations fail, the
/// content directory cannot be created, or the HTTP client cannot be
/// built.
pub async fn create_app(config: Config) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing draftpad backend server");

    tracing::info!("Connecting to database...");
    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db).await?;
    tracing::info!("Database ready");

    let content = ContentStore::new(&config.content_dir);
    content.ensure_root().await?;
    tracing::info!("Content directory ready at {}", content.root().display());

    let assist = SuggestionClient::new(&config)?;

    let state = AppState {
        db,
        content,
        assist,
        config: Arc::new(config),
    };

    Ok(create_router(state))
}
