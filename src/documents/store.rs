/**
 * Database Operations for Documents
 *
 * This module provides the record-store side of document persistence:
 * plain sqlx operations against the `documents` table. Functions take a
 * generic executor so the service layer can run them inside a
 * transaction alongside content-file operations.
 */

use sqlx::SqliteExecutor;

use crate::documents::types::Document;

/// Insert a new document record
///
/// # Arguments
/// * `db` - Pool, connection, or open transaction
/// * `title` - User-supplied title
/// * `owner_id` - Owning user's ID
///
/// # Returns
/// The created document with its freshly assigned ID
pub async fn insert_document<'e, E: SqliteExecutor<'e>>(
    db: E,
    title: &str,
    owner_id: i64,
) -> Result<Document, sqlx::Error> {
    sqlx::query_as::<_, Document>(
        r#"
        INSERT INTO documents (title, owner_id)
        VALUES (?, ?)
        RETURNING id, title, owner_id
        "#,
    )
    .bind(title)
    .bind(owner_id)
    .fetch_one(db)
    .await
}

/// List all documents owned by a user, in store-native order
pub async fn list_documents_by_owner<'e, E: SqliteExecutor<'e>>(
    db: E,
    owner_id: i64,
) -> Result<Vec<Document>, sqlx::Error> {
    sqlx::query_as::<_, Document>(
        r#"
        SELECT id, title, owner_id
        FROM documents
        WHERE owner_id = ?
        "#,
    )
    .bind(owner_id)
    .fetch_all(db)
    .await
}

/// Get a document by ID, but only if it is owned by the given user
///
/// This is the ownership check used by every per-document operation:
/// a missing row and a row owned by someone else are indistinguishable
/// to the caller.
pub async fn get_document_by_id_and_owner<'e, E: SqliteExecutor<'e>>(
    db: E,
    id: i64,
    owner_id: i64,
) -> Result<Option<Document>, sqlx::Error> {
    sqlx::query_as::<_, Document>(
        r#"
        SELECT id, title, owner_id
        FROM documents
        WHERE id = ? AND owner_id = ?
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(db)
    .await
}

/// Delete a document record by ID
pub async fn delete_document<'e, E: SqliteExecutor<'e>>(
    db: E,
    id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM documents WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(())
}
