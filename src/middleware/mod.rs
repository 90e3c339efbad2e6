//! Middleware for request processing
//!
//! Currently only the bearer-token authentication middleware.

/// Bearer-token authentication middleware and extractor
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
