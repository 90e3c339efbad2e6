/**
 * Document Types
 *
 * Request and response types for the document endpoints, plus the
 * `Document` row itself.
 */

use serde::{Deserialize, Serialize};

/// Document metadata row
///
/// The content body lives in the content store, keyed by `id`; this
/// struct is the wire shape returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    /// Unique document ID, assigned on creation, immutable
    pub id: i64,
    /// User-supplied title
    pub title: String,
    /// Owning user; only the owner may read, write, or delete
    pub owner_id: i64,
}

/// Create document request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    /// Title for the new document
    pub title: String,
}

/// Replace-content request (full overwrite, no partial/append semantics)
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateContentRequest {
    /// New document body
    pub content: String,
}

/// AI assist request
///
/// `current_text` is the editor buffer as the client sees it; the
/// stored content is deliberately not read for assist calls.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssistRequest {
    /// Current editor text, passed through as prompt context
    pub current_text: String,
    /// The user's instruction to the assistant
    pub user_prompt: String,
}
