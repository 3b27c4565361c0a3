//! JSON progress records beside the corpus
//!
//! Per-genre records live at `<root>/<genre>/progress.json`; the aggregate
//! of a full run at `<root>/overall_progress.json`. Every write goes to a
//! temporary sibling first and is renamed into place.

use crate::catalog::Genre;
use crate::state::{CrawlProgress, OverallProgress};
use crate::storage::traits::{ProgressStore, StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of a genre's progress record
pub const PROGRESS_FILE: &str = "progress.json";

/// File name of the full-run aggregate
pub const OVERALL_PROGRESS_FILE: &str = "overall_progress.json";

/// Progress records stored as pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct JsonProgressStore {
    root: PathBuf,
}

impl JsonProgressStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn progress_path(&self, genre: Genre) -> PathBuf {
        self.root.join(genre.as_str()).join(PROGRESS_FILE)
    }

    pub fn overall_path(&self) -> PathBuf {
        self.root.join(OVERALL_PROGRESS_FILE)
    }
}

/// Serializes `value` and atomically replaces `path` with it
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| StorageError::InvalidKey(format!("no parent for {}", path.display())))?;
    fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;

    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StorageError::io(path, e))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::io(path, e)),
    }
}

impl ProgressStore for JsonProgressStore {
    fn save_progress(&self, progress: &CrawlProgress) -> StorageResult<()> {
        let path = self.progress_path(progress.genre);
        write_json_atomic(&path, progress)?;
        tracing::debug!(
            "Saved progress for {}: {}/{} artists, {} songs",
            progress.genre,
            progress.artists_completed,
            progress.artists_queued,
            progress.songs_scraped
        );
        Ok(())
    }

    fn load_progress(&self, genre: Genre) -> StorageResult<Option<CrawlProgress>> {
        read_json(&self.progress_path(genre))
    }

    fn save_overall(&self, overall: &OverallProgress) -> StorageResult<()> {
        write_json_atomic(&self.overall_path(), overall)
    }

    fn load_overall(&self) -> StorageResult<Option<OverallProgress>> {
        read_json(&self.overall_path())
    }
}
