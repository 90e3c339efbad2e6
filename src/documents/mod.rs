//! Document Management
//!
//! This module owns the document lifecycle: metadata rows in SQLite,
//! content blobs as one file per document, and the HTTP handlers that
//! expose them.
//!
//! - **`types`** - `Document` and request/response types
//! - **`store`** - sqlx operations against the `documents` table
//! - **`content`** - file-per-document content store
//! - **`service`** - ownership checks and two-store consistency
//! - **`handlers`** - axum handlers for the `/documents` routes

/// Document and request/response types
pub mod types;

/// Record store (documents table)
pub mod store;

/// Content store (file per document)
pub mod content;

/// Service layer orchestrating both stores
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use content::ContentStore;
pub use types::Document;
