//! Server setup and configuration
//!
//! - **`config`** - Environment-driven configuration
//! - **`state`** - Shared application state
//! - **`init`** - Pool/migration/router assembly

/// Environment-driven configuration
pub mod config;

/// Shared application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
