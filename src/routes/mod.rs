//! Route configuration
//!
//! Router assembly lives in [`router`]; handlers live with their
//! domains (`auth::handlers`, `documents::handlers`).

/// Router assembly
pub mod router;

pub use router::create_router;
