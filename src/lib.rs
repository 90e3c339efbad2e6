//! draftpad: an AI-assisted document editor backend
//!
//! Authenticated users create text documents, edit their content, and
//! request AI-generated suggestions to insert into the document.
//! Document metadata lives in SQLite; document bodies are one UTF-8
//! file per document; assist requests are proxied to an OpenAI-style
//! chat-completions API.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`documents`** - Document store, content store, service, handlers
//! - **`assist`** - AI suggestion proxy
//! - **`auth`** - Users, JWT sessions, signup/login handlers
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - Error types and HTTP conversion
//!
//! # Control Flow
//!
//! The API layer authenticates the caller, the document service checks
//! ownership against the record store, then the operation runs against
//! the record store and/or the content store; assist requests are
//! forwarded to the suggestion client and the completion text returned
//! verbatim.

/// AI suggestion proxy
pub mod assist;

/// Authentication and user management
pub mod auth;

/// Document management
pub mod documents;

/// Error types
pub mod error;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState, Config};
