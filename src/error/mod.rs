//! Backend Error Module
//!
//! Error types for the document editor backend and their HTTP
//! conversions.
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! All errors implement `IntoResponse`, so handlers can return
//! `Result<T, ApiError>` directly and the API layer translates each
//! failure into the right status code and JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
