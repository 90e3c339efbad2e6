/**
 * Login Handler
 *
 * This module implements user authentication for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username (or email)
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Unknown user and wrong password return the same 401 status to
 *   prevent user enumeration
 * - Password verification uses constant-time comparison (via bcrypt)
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::{get_user_by_email, get_user_by_username};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown user or incorrect password
/// * `500 Internal Server Error` - Database query or token generation failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    // Email addresses are accepted in the username field
    let user = if request.username.contains('@') {
        get_user_by_email(&state.db, &request.username).await?
    } else {
        get_user_by_username(&state.db, &request.username).await?
    };

    let user = user.ok_or_else(|| {
        tracing::warn!("User not found: {}", request.username);
        ApiError::unauthenticated("Invalid username or password")
    })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::handler(axum::http::StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::unauthenticated("Invalid username or password"));
    }

    let token = create_token(user.id, user.email.clone(), &state.config).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::handler(axum::http::StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
