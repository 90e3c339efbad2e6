/**
 * Document Handlers
 *
 * HTTP handlers for the document endpoints. Every route here sits
 * behind the auth middleware; handlers receive the caller identity via
 * the `AuthUser` extractor and delegate to the document service.
 *
 * # Routes
 *
 * - `POST /documents` - Create a document (201)
 * - `GET /documents` - List the caller's documents
 * - `GET /documents/{id}` - Document content as plain text
 * - `PUT /documents/{id}` - Replace content (204)
 * - `DELETE /documents/{id}` - Delete record and content (204)
 * - `POST /documents/{id}/assist` - AI suggestion as plain text
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::documents::service;
use crate::documents::types::{AssistRequest, CreateDocumentRequest, Document, UpdateContentRequest};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Create a document owned by the caller, seeded with empty content
pub async fn create_document(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let document =
        service::create_document(&state.db, &state.content, &request.title, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// List all documents owned by the caller
pub async fn list_documents(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = service::list_documents(&state.db, user.user_id).await?;
    Ok(Json(documents))
}

/// Get a document's content as plain text
pub async fn get_document_content(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    service::get_content(&state.db, &state.content, id, user.user_id).await
}

/// Replace a document's content (full overwrite, 204 on success)
pub async fn update_document_content(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateContentRequest>,
) -> Result<StatusCode, ApiError> {
    service::set_content(&state.db, &state.content, id, user.user_id, &request.content).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a document's record and content (204 on success)
pub async fn delete_document(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service::delete_document(&state.db, &state.content, id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Request an AI suggestion for a document, returned as plain text
pub async fn assist_document(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<AssistRequest>,
) -> Result<String, ApiError> {
    service::assist(
        &state.db,
        &state.assist,
        id,
        user.user_id,
        &request.current_text,
        &request.user_prompt,
    )
    .await
}
