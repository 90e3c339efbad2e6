/**
 * Current User Handler
 *
 * This module implements GET /auth/me, returning the profile of the
 * authenticated caller. The auth middleware has already verified the
 * bearer token and confirmed the user exists.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - The token's user no longer exists
/// * `500 Internal Server Error` - Database query failed
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("User no longer exists"))?;

    Ok(Json(user.into()))
}
