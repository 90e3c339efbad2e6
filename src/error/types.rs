/**
 * API Error Types
 *
 * This module defines the error types used across the backend.
 * These errors are produced by services and handlers and can be
 * converted to HTTP responses.
 *
 * # Error Categories
 *
 * - `Unauthenticated` - Missing or invalid caller identity (401)
 * - `NotFound` - Document absent or not owned by the caller (404)
 * - `Storage` - Underlying database operation failed (500)
 * - `Content` - Underlying content-file operation failed (500)
 * - `AiProvider` - External completion call failed (502)
 * - `Handler` - Request-level errors with an explicit status code
 *
 * # Ownership and NotFound
 *
 * "Does not exist" and "exists but owned by someone else" are reported
 * identically as `NotFound` so that non-owners cannot learn whether
 * another user's document exists.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error type
///
/// Each variant maps to an HTTP status code via [`ApiError::status_code`].
///
/// # Usage
///
/// ```rust
/// use draftpad::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::handler(StatusCode::CONFLICT, "Username already taken");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid caller identity
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Human-readable error message
        message: String,
    },

    /// Document absent, or present but owned by a different user
    #[error("Document not found")]
    NotFound,

    /// Database operation failed
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Content-file operation failed
    #[error("Content store error: {0}")]
    Content(#[from] std::io::Error),

    /// External completion call failed
    ///
    /// Surfaced as a distinguishable 502 rather than sentinel suggestion
    /// text, so clients can show an error instead of inserting it into
    /// the document.
    #[error("AI provider error: {message}")]
    AiProvider {
        /// Provider or transport failure description
        message: String,
    },

    /// Request-level error with an explicit status code
    /// (validation failures, conflicts, ...)
    #[error("{message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create an AI provider error
    pub fn ai_provider(message: impl Into<String>) -> Self {
        Self::AiProvider {
            message: message.into(),
        }
    }

    /// Create a handler error with an explicit status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Storage` / `Content` - 500 Internal Server Error
    /// - `AiProvider` - 502 Bad Gateway
    /// - `Handler` - Uses the status code carried by the error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Content(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AiProvider { .. } => StatusCode::BAD_GATEWAY,
            Self::Handler { status, .. } => *status,
        }
    }

    /// Get the message returned to the client
    ///
    /// Storage and content errors are reported as a generic internal
    /// error; the underlying cause is logged server-side only.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthenticated { message } => message.clone(),
            Self::NotFound => "Document not found".to_string(),
            Self::Storage(_) | Self::Content(_) => "Internal server error".to_string(),
            Self::AiProvider { message } => format!("AI provider error: {message}"),
            Self::Handler { message, .. } => message.clone(),
        }
    }
}
