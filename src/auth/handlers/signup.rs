/**
 * Signup Handler
 *
 * This module implements user registration for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email, and password format
 * 2. Reject duplicate usernames and emails
 * 3. Hash the password with bcrypt
 * 4. Insert the user and return a JWT token
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Validate username format: 3-30 chars, starts with a letter, and
/// contains only letters, numbers, and underscores.
fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(3..=30).contains(&len) {
        return false;
    }
    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid username, email, or password format
/// * `409 Conflict` - Username or email already registered
/// * `500 Internal Server Error` - Hashing, insert, or token generation failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    if !is_valid_username(&request.username) {
        return Err(ApiError::handler(
            StatusCode::BAD_REQUEST,
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !request.email.contains('@') {
        return Err(ApiError::handler(
            StatusCode::BAD_REQUEST,
            "Invalid email format",
        ));
    }

    if request.password.len() < 8 {
        return Err(ApiError::handler(
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters",
        ));
    }

    if get_user_by_username(&state.db, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::handler(
            StatusCode::CONFLICT,
            "Username already taken",
        ));
    }

    if get_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::handler(
            StatusCode::CONFLICT,
            "Email already registered",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    let user = create_user(
        &state.db,
        request.username.clone(),
        request.email.clone(),
        password_hash,
    )
    .await?;

    let token = create_token(user.id, user.email.clone(), &state.config).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
