//! Storage traits and error types
//!
//! This module defines the trait interfaces for the corpus and the progress
//! records, and their shared error type.

use crate::catalog::Genre;
use crate::state::{CrawlProgress, OverallProgress};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable store of accepted lyrics, keyed by (genre, artist, title)
///
/// At most one entry exists per key once the title is sanitized; writing
/// the same key again replaces the previous text.
pub trait CorpusStore {
    /// Location the entry for this key is (or would be) stored at
    fn entry_path(&self, genre: Genre, artist: &str, title: &str) -> PathBuf;

    /// Returns true if an entry already exists for this key
    fn contains(&self, genre: Genre, artist: &str, title: &str) -> bool;

    /// Writes lyrics for a song, replacing any previous entry
    ///
    /// # Returns
    ///
    /// The path the text was written to
    fn write(&self, genre: Genre, artist: &str, title: &str, text: &str) -> StorageResult<PathBuf>;

    /// Reads back a stored entry
    fn read(&self, genre: Genre, artist: &str, title: &str) -> StorageResult<Option<String>>;
}

/// Durable store of progress records
pub trait ProgressStore {
    /// Persists a genre record, replacing the previous one
    fn save_progress(&self, progress: &CrawlProgress) -> StorageResult<()>;

    /// Loads the last persisted record for a genre
    fn load_progress(&self, genre: Genre) -> StorageResult<Option<CrawlProgress>>;

    /// Persists the aggregate record of a full run
    fn save_overall(&self, overall: &OverallProgress) -> StorageResult<()>;

    /// Loads the aggregate record of the last full run
    fn load_overall(&self) -> StorageResult<Option<OverallProgress>>;
}
