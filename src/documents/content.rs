/**
 * Document Content Store
 *
 * This module maps document IDs to UTF-8 text blobs, one flat file per
 * document under a content directory created at startup.
 *
 * # Atomicity
 *
 * Each write goes to its own uniquely named temporary file in the same
 * directory and is promoted with a rename, so a reader never observes
 * a torn file and concurrent writers never touch each other's bytes.
 * Writers for the same ID race last-writer-wins; the final content is
 * whichever rename lands last, complete.
 */

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs;

/// File-per-document content store
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Create a content store rooted at the given directory
    ///
    /// The directory itself is created by [`ContentStore::ensure_root`]
    /// during server startup.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the content directory if it does not exist
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Path of the content file for a document ID
    pub fn path(&self, id: i64) -> PathBuf {
        self.root.join(format!("{id}.txt"))
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a document's content
    ///
    /// # Returns
    /// `Ok(None)` when no content file exists for this ID.
    pub async fn read(&self, id: i64) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(id)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write a document's content (full overwrite)
    ///
    /// Writes to a uniquely named temporary file in the content
    /// directory and renames it over the final path. A fixed temp name
    /// would let two concurrent writers for the same ID promote each
    /// other's partial bytes.
    pub async fn write(&self, id: i64, text: &str) -> io::Result<()> {
        let path = self.path(id);
        let root = self.root.clone();
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut tmp = NamedTempFile::new_in(&root)?;
            tmp.write_all(text.as_bytes())?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| io::Error::other(e))?
    }

    /// Remove a document's content file
    ///
    /// # Returns
    /// `Ok(false)` when there was no file to remove.
    pub async fn remove(&self, id: i64) -> io::Result<bool> {
        match fs::remove_file(self.path(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether a content file exists for this ID
    pub async fn exists(&self, id: i64) -> bool {
        fs::try_exists(self.path(id)).await.unwrap_or(false)
    }
}
