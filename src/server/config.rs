/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. The resulting `Config` is constructed once at startup and
 * passed into the application state; nothing reads the environment after
 * that point.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables (a `.env` file is
 * loaded by the binary before this runs), with safe defaults for every
 * non-secret value.
 *
 * # Secrets
 *
 * `SECRET_KEY` and `OPENAI_API_KEY` default to placeholder values for
 * local development. When `APP_ENV=production`, leaving either at its
 * placeholder refuses startup instead of silently signing tokens with a
 * known key.
 */

use std::path::PathBuf;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Placeholder development secrets. Accepted outside production with a
/// warning, rejected when `APP_ENV=production`.
const PLACEHOLDER_SECRET_KEY: &str = "your-secret-key";
const PLACEHOLDER_OPENAI_API_KEY: &str = "your-openai-api-key";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A secret was left at its placeholder value in production
    #[error("{key} is set to its placeholder default; refusing to start in production")]
    PlaceholderSecret {
        /// Environment variable name
        key: &'static str,
    },

    /// An environment variable could not be parsed
    #[error("invalid value for {key}: {message}")]
    Invalid {
        /// Environment variable name
        key: &'static str,
        /// Parse failure description
        message: String,
    },
}

/// Server configuration
///
/// Collected from the environment once at startup and injected into the
/// application state. Fields are public so tests can construct a config
/// directly without touching the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// Port the HTTP server binds to (`SERVER_PORT`)
    pub server_port: u16,
    /// Directory holding one content file per document (`CONTENT_DIR`)
    pub content_dir: PathBuf,
    /// JWT signing secret (`SECRET_KEY`)
    pub secret_key: String,
    /// JWT signing algorithm (`TOKEN_ALGORITHM`, default HS256)
    pub token_algorithm: Algorithm,
    /// Token lifetime in minutes (`ACCESS_TOKEN_EXPIRE_MINUTES`)
    pub token_expiry_minutes: u64,
    /// AI provider API key (`OPENAI_API_KEY`)
    pub openai_api_key: String,
    /// AI provider chat-completions endpoint (`OPENAI_API_URL`)
    pub openai_api_url: String,
    /// Completion model name (`OPENAI_MODEL`)
    pub openai_model: String,
    /// Timeout applied to AI provider calls (`AI_TIMEOUT_SECS`)
    pub ai_timeout: Duration,
    /// Whether this is a production-intent deployment (`APP_ENV=production`)
    pub production: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// - `ConfigError::PlaceholderSecret` if `APP_ENV=production` and a
    ///   secret is still set to its placeholder default
    /// - `ConfigError::Invalid` if a numeric or enumerated value fails
    ///   to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = std::env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let secret_key = env_or("SECRET_KEY", PLACEHOLDER_SECRET_KEY);
        let openai_api_key = env_or("OPENAI_API_KEY", PLACEHOLDER_OPENAI_API_KEY);

        if secret_key == PLACEHOLDER_SECRET_KEY {
            if production {
                return Err(ConfigError::PlaceholderSecret { key: "SECRET_KEY" });
            }
            tracing::warn!("SECRET_KEY is set to its placeholder default; tokens are not secure");
        }
        if openai_api_key == PLACEHOLDER_OPENAI_API_KEY {
            if production {
                return Err(ConfigError::PlaceholderSecret {
                    key: "OPENAI_API_KEY",
                });
            }
            tracing::warn!("OPENAI_API_KEY is set to its placeholder default; assist requests will fail");
        }

        let token_algorithm = match env_or("TOKEN_ALGORITHM", "HS256").as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(ConfigError::Invalid {
                    key: "TOKEN_ALGORITHM",
                    message: format!("unsupported algorithm: {other}"),
                })
            }
        };

        let server_port = parse_env("SERVER_PORT", 8000)?;
        let token_expiry_minutes = parse_env("ACCESS_TOKEN_EXPIRE_MINUTES", 30)?;
        let ai_timeout_secs: u64 = parse_env("AI_TIMEOUT_SECS", 30)?;

        Ok(Self {
            database_url: env_or("DATABASE_URL", "sqlite://draftpad.db?mode=rwc"),
            server_port,
            content_dir: PathBuf::from(env_or("CONTENT_DIR", "user_documents")),
            secret_key,
            token_algorithm,
            token_expiry_minutes,
            openai_api_key,
            openai_api_url: env_or(
                "OPENAI_API_URL",
                "https://api.openai.com/v1/chat/completions",
            ),
            openai_model: env_or("OPENAI_MODEL", "gpt-5-mini"),
            ai_timeout: Duration::from_secs(ai_timeout_secs),
            production,
        })
    }
}

/// Read an environment variable with a default
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable with a default
fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "APP_ENV",
            "SECRET_KEY",
            "OPENAI_API_KEY",
            "TOKEN_ALGORITHM",
            "SERVER_PORT",
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            "AI_TIMEOUT_SECS",
            "DATABASE_URL",
            "CONTENT_DIR",
            "OPENAI_API_URL",
            "OPENAI_MODEL",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.token_expiry_minutes, 30);
        assert_eq!(config.token_algorithm, Algorithm::HS256);
        assert_eq!(config.content_dir, PathBuf::from("user_documents"));
        assert_eq!(config.ai_timeout, Duration::from_secs(30));
        assert!(!config.production);
    }

    #[test]
    #[serial]
    fn test_placeholder_secret_rejected_in_production() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("OPENAI_API_KEY", "sk-real-key");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::PlaceholderSecret { key: "SECRET_KEY" })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_placeholder_api_key_rejected_in_production() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("SECRET_KEY", "a-real-secret");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::PlaceholderSecret {
                key: "OPENAI_API_KEY"
            })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_placeholders_accepted_in_development() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.secret_key, PLACEHOLDER_SECRET_KEY);
    }

    #[test]
    #[serial]
    fn test_invalid_algorithm_rejected() {
        clear_env();
        std::env::set_var("TOKEN_ALGORITHM", "RS256");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "TOKEN_ALGORITHM",
                ..
            })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        clear_env();
        std::env::set_var("SERVER_PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
