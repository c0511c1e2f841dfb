//! Filesystem-backed note store.
//!
//! # Responsibilities
//! - Map a note name to `<cache_dir>/<name>.txt`
//! - Existence check, read, write, delete and list against that path
//! - Log and count every I/O failure before collapsing it
//!
//! # Design Decisions
//! - Read failures look the same as a missing note to callers
//! - Write and delete failures are swallowed after logging
//! - Listing follows the directory order, which is filesystem-dependent

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

use crate::observability::metrics;
use crate::store::note::Note;

/// Extension appended to every note name on disk.
pub const NOTE_EXTENSION: &str = ".txt";

/// Errors raised by the underlying filesystem primitives.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Checking whether the note file exists failed.
    #[error("failed to stat {path}: {source}")]
    Stat { path: PathBuf, source: io::Error },

    /// Reading the note file failed (including "not found").
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Writing the note file failed.
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Removing the note file failed.
    #[error("failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },

    /// Enumerating the cache directory failed.
    #[error("failed to list {path}: {source}")]
    List { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Short operation label used for logs and metrics.
    pub fn operation(&self) -> &'static str {
        match self {
            StoreError::Stat { .. } => "stat",
            StoreError::Read { .. } => "read",
            StoreError::Write { .. } => "write",
            StoreError::Remove { .. } => "remove",
            StoreError::List { .. } => "list",
        }
    }

    fn is_not_found(&self) -> bool {
        match self {
            StoreError::Stat { source, .. }
            | StoreError::Read { source, .. }
            | StoreError::Write { source, .. }
            | StoreError::Remove { source, .. }
            | StoreError::List { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

/// Stores each note as one text file inside a cache directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    cache_dir: PathBuf,
}

impl NoteStore {
    /// Create a store rooted at `cache_dir`. The directory is not touched.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Path of the file backing `name`. The name is used verbatim.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{name}{NOTE_EXTENSION}"))
    }

    /// Whether a file exists for `name`. Stat errors count as absent.
    pub async fn exists(&self, name: &str) -> bool {
        let path = self.path_for(name);
        match fs::try_exists(&path).await {
            Ok(found) => found,
            Err(source) => {
                report(&StoreError::Stat { path, source });
                false
            }
        }
    }

    /// Content of `name`, or `None` if it is missing or unreadable.
    pub async fn fetch(&self, name: &str) -> Option<String> {
        match self.try_fetch(name).await {
            Ok(text) => Some(text),
            Err(e) => {
                if !e.is_not_found() {
                    report(&e);
                }
                None
            }
        }
    }

    /// Create or overwrite `name` with `content`. Failures are only logged.
    pub async fn save(&self, name: &str, content: &str) {
        if let Err(e) = self.try_save(name, content).await {
            report(&e);
        }
    }

    /// Delete `name` if present. Failures are only logged.
    pub async fn remove(&self, name: &str) {
        match self.try_remove(name).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => report(&e),
        }
    }

    /// Every stored note with its content, in directory order.
    pub async fn list(&self) -> Vec<Note> {
        match self.try_list().await {
            Ok(notes) => notes,
            Err(e) => {
                report(&e);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, name: &str) -> Result<String, StoreError> {
        let path = self.path_for(name);
        fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Read { path, source })
    }

    async fn try_save(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = self.path_for(name);
        fs::write(&path, content)
            .await
            .map_err(|source| StoreError::Write { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Note written");
        Ok(())
    }

    async fn try_remove(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_for(name);
        fs::remove_file(&path)
            .await
            .map_err(|source| StoreError::Remove { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), "Note removed");
        Ok(())
    }

    async fn try_list(&self) -> Result<Vec<Note>, StoreError> {
        let list_err = |source: io::Error| StoreError::List {
            path: self.cache_dir.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.cache_dir).await.map_err(list_err)?;
        let mut notes = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                tracing::warn!(entry = ?entry.path(), "Skipping non UTF-8 file name");
                continue;
            };
            let Some(name) = file_name.strip_suffix(NOTE_EXTENSION) else {
                continue;
            };

            match self.try_fetch(name).await {
                Ok(text) => notes.push(Note::new(name, text)),
                Err(e) => {
                    tracing::warn!(note = %name, error = %e, "Skipping unreadable note");
                    metrics::record_store_error(e.operation());
                }
            }
        }

        Ok(notes)
    }
}

fn report(e: &StoreError) {
    tracing::error!(operation = e.operation(), error = %e, "Note store I/O failure");
    metrics::record_store_error(e.operation());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, NoteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn path_for_appends_extension() {
        let store = NoteStore::new("/var/cache/notes");
        assert_eq!(store.path_for("todo"), PathBuf::from("/var/cache/notes/todo.txt"));
    }

    #[test]
    fn path_for_passes_names_through_verbatim() {
        let store = NoteStore::new("/var/cache/notes");
        assert_eq!(
            store.path_for("../escape"),
            PathBuf::from("/var/cache/notes/../escape.txt")
        );
        assert_eq!(
            store.path_for("a/b"),
            PathBuf::from("/var/cache/notes/a/b.txt")
        );
    }

    #[tokio::test]
    async fn fetch_missing_is_none() {
        let (_dir, store) = store();
        assert!(store.fetch("nope").await.is_none());
        assert!(!store.exists("nope").await);
    }

    #[tokio::test]
    async fn save_then_fetch() {
        let (dir, store) = store();
        store.save("todo", "buy milk").await;

        assert!(store.exists("todo").await);
        assert_eq!(store.fetch("todo").await.as_deref(), Some("buy milk"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("todo.txt")).unwrap(),
            "buy milk"
        );
    }

    #[tokio::test]
    async fn save_truncates_existing_content() {
        let (_dir, store) = store();
        store.save("todo", "a much longer first version").await;
        store.save("todo", "short").await;
        assert_eq!(store.fetch("todo").await.as_deref(), Some("short"));
    }

    #[tokio::test]
    async fn remove_deletes_and_tolerates_missing() {
        let (_dir, store) = store();
        store.save("todo", "x").await;
        store.remove("todo").await;
        assert!(!store.exists("todo").await);

        // Second removal is a no-op.
        store.remove("todo").await;
    }

    #[tokio::test]
    async fn save_into_missing_directory_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("gone"));
        store.save("todo", "x").await;
        assert!(store.fetch("todo").await.is_none());
    }

    #[tokio::test]
    async fn list_only_returns_note_files() {
        let (dir, store) = store();
        store.save("one", "first").await;
        store.save("two", "second").await;
        std::fs::write(dir.path().join("readme.md"), "ignored").unwrap();

        let mut notes = store.list().await;
        notes.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            notes,
            vec![Note::new("one", "first"), Note::new("two", "second")]
        );
    }

    #[tokio::test]
    async fn list_of_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("gone"));
        assert!(store.list().await.is_empty());
    }
}
