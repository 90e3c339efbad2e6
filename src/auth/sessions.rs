/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user
 * sessions. The signing secret, algorithm, and token lifetime all come
 * from the injected `Config` rather than the process environment.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::config::Config;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID
/// * `email` - User email
/// * `config` - Server configuration (secret, algorithm, expiry)
///
/// # Returns
/// JWT token string
pub fn create_token(
    user_id: i64,
    email: String,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let exp = now + config.token_expiry_minutes * 60;

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp,
        iat: now,
    };

    let key = EncodingKey::from_secret(config.secret_key.as_ref());
    encode(&Header::new(config.token_algorithm), &claims, &key)
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - JWT token string
/// * `config` - Server configuration (secret, algorithm)
///
/// # Returns
/// Decoded claims or error (expired and malformed tokens both fail)
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret_key.as_ref());
    let validation = Validation::new(config.token_algorithm);

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
