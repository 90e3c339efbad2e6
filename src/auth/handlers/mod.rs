//! Authentication Handlers
//!
//! HTTP handlers for user registration, login, and the current-user
//! endpoint.

/// Request and response types
pub mod types;

/// User registration handler
pub mod signup;

/// User login handler
pub mod login;

/// Current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use signup::signup;
