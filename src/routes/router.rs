/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public auth routes (signup, login)
 * 2. Authenticated routes (documents CRUD, assist, current user),
 *    wrapped in the bearer-token middleware
 * 3. Static frontend assets and a root redirect to the login page
 */

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::{get_me, login, signup};
use crate::documents::handlers::{
    assist_document, create_document, delete_document, get_document_content, list_documents,
    update_document_content,
};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (pool, content store, AI client, config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Public
///
/// - `POST /auth/signup` - User registration
/// - `POST /auth/login` - User login
/// - `GET /` - Redirect to the login page
/// - `GET /static/*` - Static frontend assets
///
/// ## Authenticated (bearer token)
///
/// - `GET /auth/me` - Current user info
/// - `POST /documents` / `GET /documents` - Create / list documents
/// - `GET|PUT|DELETE /documents/{id}` - Content read / overwrite / delete
/// - `POST /documents/{id}/assist` - AI suggestion
pub fn create_router(state: AppState) -> Router {
    let authenticated = Router::new()
        .route("/auth/me", get(get_me))
        .route("/documents", post(create_document).get(list_documents))
        .route(
            "/documents/{id}",
            get(get_document_content)
                .put(update_document_content)
                .delete(delete_document),
        )
        .route("/documents/{id}/assist", post(assist_document))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .merge(authenticated)
        .route("/", get(|| async { Redirect::to("/static/login.html") }))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(|| async { "404 Not Found" })
        .with_state(state)
}
