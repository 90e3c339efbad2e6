/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the caller identity to handlers.
 *
 * This is the only place tokens are resolved to users; everything past
 * this boundary works with an `AuthenticatedUser`.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::verify_token;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from a JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token against the configured secret and algorithm
/// 3. Confirms the token's user still exists in the database
/// 4. Attaches the caller identity to request extensions
///
/// Returns 401 Unauthorized if the token is missing, invalid, expired,
/// or refers to a deleted user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthenticated("Missing Authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthenticated("Invalid Authorization header format")
    })?;

    let claims = verify_token(token, &state.config).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthenticated("Invalid or expired token")
    })?;

    let user_id: i64 = claims.sub.parse().map_err(|_| {
        tracing::warn!("Invalid user ID in token: {}", claims.sub);
        ApiError::unauthenticated("Invalid token")
    })?;

    // The token may outlive the account
    let user = get_user_by_id(&state.db, user_id).await?;
    if user.is_none() {
        tracing::warn!("User from token not found in database: {}", user_id);
        return Err(ApiError::unauthenticated("User no longer exists"));
    }

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to pull the caller identity set by
/// [`auth_middleware`] out of request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated("Not authenticated")
            })?;

        Ok(AuthUser(user))
    }
}
