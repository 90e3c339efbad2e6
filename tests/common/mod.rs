//! Shared test fixtures
//!
//! Provides an in-process application backed by an in-memory SQLite
//! database and a temporary content directory, plus helpers for
//! creating authenticated users.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use jsonwebtoken::Algorithm;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

use draftpad::assist::SuggestionClient;
use draftpad::documents::ContentStore;
use draftpad::routes::create_router;
use draftpad::{AppState, Config};

/// A fully wired application under test
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    /// Keeps the temporary content directory alive for the test
    pub content_dir: TempDir,
}

/// Test configuration pointing at the given AI provider endpoint
pub fn test_config(openai_api_url: &str, content_dir: PathBuf) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_port: 0,
        content_dir,
        secret_key: "test-secret".to_string(),
        token_algorithm: Algorithm::HS256,
        token_expiry_minutes: 30,
        openai_api_key: "test-openai-key".to_string(),
        openai_api_url: openai_api_url.to_string(),
        openai_model: "gpt-5-mini".to_string(),
        ai_timeout: Duration::from_secs(5),
        production: false,
    }
}

/// Spawn an app whose AI provider is never expected to be reached
pub async fn spawn_app() -> TestApp {
    // Unroutable; any accidental assist call fails fast
    spawn_app_with_provider("http://127.0.0.1:9/v1/chat/completions").await
}

/// Spawn an app pointing assist calls at the given endpoint
pub async fn spawn_app_with_provider(openai_api_url: &str) -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let content_dir = TempDir::new().expect("Failed to create content dir");
    let config = test_config(openai_api_url, content_dir.path().to_path_buf());

    let content = ContentStore::new(content_dir.path());
    content.ensure_root().await.expect("Failed to create content root");

    let assist = SuggestionClient::new(&config).expect("Failed to build AI client");

    let state = AppState {
        db: pool.clone(),
        content,
        assist,
        config: Arc::new(config),
    };

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        pool,
        content_dir,
    }
}

/// Sign up a user and return their bearer token
pub async fn signup_user(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123",
        }))
        .await;

    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::CREATED,
        "signup failed: {}",
        response.text()
    );

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("signup response missing token")
        .to_string()
}
