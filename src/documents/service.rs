/**
 * Document Service
 *
 * This module orchestrates the record store and the content store. It
 * owns the ownership checks and the consistency rule between the two
 * stores: every committed document row has exactly one content file.
 *
 * # Two-Store Consistency
 *
 * Record inserts and deletes run inside a sqlx transaction that commits
 * only after the file-side operation succeeds. If seeding or removing
 * the content file fails, the transaction is dropped and the row change
 * rolls back, so an orphaned record cannot be committed. A content file
 * orphaned by a failed commit is harmless: no row references it, and
 * IDs are never reused (AUTOINCREMENT).
 *
 * # Ownership
 *
 * Every per-document operation checks `row exists AND owner_id ==
 * caller`. Both failure cases surface as `NotFound`, so non-owners
 * cannot learn whether a document exists.
 */

use sqlx::SqlitePool;

use crate::assist::SuggestionClient;
use crate::documents::content::ContentStore;
use crate::documents::store;
use crate::documents::types::Document;
use crate::error::ApiError;

/// Create a document owned by `owner_id`, seeding an empty content file
///
/// The row insert and the file seed commit or roll back together.
pub async fn create_document(
    pool: &SqlitePool,
    content: &ContentStore,
    title: &str,
    owner_id: i64,
) -> Result<Document, ApiError> {
    let mut tx = pool.begin().await?;
    let document = store::insert_document(&mut *tx, title, owner_id).await?;

    // Seed before commit; a failed write drops the transaction and the
    // row never becomes visible
    content.write(document.id, "").await?;
    tx.commit().await?;

    tracing::info!(
        "Created document {} (\"{}\") for user {}",
        document.id,
        document.title,
        owner_id
    );
    Ok(document)
}

/// List all documents owned by the caller
pub async fn list_documents(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Document>, ApiError> {
    Ok(store::list_documents_by_owner(pool, owner_id).await?)
}

/// Read a document's content
///
/// # Errors
/// `NotFound` if the document is missing, owned by someone else, or its
/// content file is gone. A missing file for an owned row is corruption
/// and is logged before being folded into `NotFound`.
pub async fn get_content(
    pool: &SqlitePool,
    content: &ContentStore,
    id: i64,
    owner_id: i64,
) -> Result<String, ApiError> {
    store::get_document_by_id_and_owner(pool, id, owner_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    match content.read(id).await? {
        Some(text) => Ok(text),
        None => {
            tracing::error!(
                "Document {} has a record but no content file (corruption)",
                id
            );
            Err(ApiError::NotFound)
        }
    }
}

/// Replace a document's content (full overwrite)
pub async fn set_content(
    pool: &SqlitePool,
    content: &ContentStore,
    id: i64,
    owner_id: i64,
    text: &str,
) -> Result<(), ApiError> {
    store::get_document_by_id_and_owner(pool, id, owner_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    content.write(id, text).await?;
    Ok(())
}

/// Delete a document: content file and record together
///
/// The row delete commits only after the file removal succeeds; an
/// already-missing file is tolerated.
pub async fn delete_document(
    pool: &SqlitePool,
    content: &ContentStore,
    id: i64,
    owner_id: i64,
) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    store::get_document_by_id_and_owner(&mut *tx, id, owner_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    store::delete_document(&mut *tx, id).await?;
    content.remove(id).await?;
    tx.commit().await?;

    tracing::info!("Deleted document {} for user {}", id, owner_id);
    Ok(())
}

/// Request an AI suggestion for a document
///
/// Ownership is checked, but the stored content is never read: the
/// caller-supplied `current_text` is trusted as prompt context.
pub async fn assist(
    pool: &SqlitePool,
    client: &SuggestionClient,
    id: i64,
    owner_id: i64,
    current_text: &str,
    user_prompt: &str,
) -> Result<String, ApiError> {
    store::get_document_by_id_and_owner(pool, id, owner_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    client.suggest(current_text, user_prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use tempfile::TempDir;

    async fn setup() -> (SqlitePool, TempDir, ContentStore) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO users (username, email, password_hash, created_at, updated_at)
             VALUES ('alice', 'alice@example.com', 'hash', datetime('now'), datetime('now'))",
        )
        .execute(&pool)
        .await
        .unwrap();

        let dir = TempDir::new().unwrap();
        let content = ContentStore::new(dir.path());
        content.ensure_root().await.unwrap();
        (pool, dir, content)
    }

    #[tokio::test]
    async fn test_create_seeds_empty_content() {
        let (pool, _dir, content) = setup().await;

        let document = create_document(&pool, &content, "Notes", 1).await.unwrap();
        assert_eq!(document.title, "Notes");
        assert_eq!(document.owner_id, 1);
        assert_eq!(content.read(document.id).await.unwrap(), Some(String::new()));
    }

    #[tokio::test]
    async fn test_create_rolls_back_record_when_seeding_fails() {
        let (pool, dir, _content) = setup().await;

        // A content root that does not exist makes the file seed fail
        let broken = ContentStore::new(dir.path().join("missing"));
        let result = create_document(&pool, &broken, "Notes", 1).await;
        assert!(matches!(result, Err(ApiError::Content(_))));

        // The row never became visible
        let documents = list_documents(&pool, 1).await.unwrap();
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_file_is_not_found() {
        let (pool, _dir, content) = setup().await;

        let document = create_document(&pool, &content, "Notes", 1).await.unwrap();
        content.remove(document.id).await.unwrap();

        let result = get_content(&pool, &content, document.id, 1).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_ownership_mismatch_is_not_found() {
        let (pool, _dir, content) = setup().await;
        let document = create_document(&pool, &content, "Notes", 1).await.unwrap();

        let result = get_content(&pool, &content, document.id, 2).await;
        assert!(matches!(result, Err(ApiError::NotFound)));

        let result = set_content(&pool, &content, document.id, 2, "taken over").await;
        assert!(matches!(result, Err(ApiError::NotFound)));

        let result = delete_document(&pool, &content, document.id, 2).await;
        assert!(matches!(result, Err(ApiError::NotFound)));

        // Content untouched by the failed set
        assert_eq!(content.read(document.id).await.unwrap(), Some(String::new()));
    }

    #[tokio::test]
    async fn test_delete_removes_both_stores() {
        let (pool, _dir, content) = setup().await;
        let document = create_document(&pool, &content, "Notes", 1).await.unwrap();

        delete_document(&pool, &content, document.id, 1).await.unwrap();
        assert!(!content.exists(document.id).await);
        assert!(list_documents(&pool, 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_content_file() {
        let (pool, _dir, content) = setup().await;
        let document = create_document(&pool, &content, "Notes", 1).await.unwrap();
        content.remove(document.id).await.unwrap();

        delete_document(&pool, &content, document.id, 1).await.unwrap();
        assert!(list_documents(&pool, 1).await.unwrap().is_empty());
    }
}
