//! Authentication and User Management
//!
//! This module owns everything identity-related: the `users` table,
//! JWT session tokens, and the signup/login/me HTTP handlers.
//!
//! The rest of the application only ever sees an authenticated caller
//! identity, attached to requests by the auth middleware.

/// User model and database operations
pub mod users;

/// JWT token creation and verification
pub mod sessions;

/// HTTP handlers (signup, login, me)
pub mod handlers;

pub use handlers::{get_me, login, signup};
