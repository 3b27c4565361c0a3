//! Filesystem corpus writer
//!
//! Layout: `<root>/<genre>/<artist_dir>/<sanitized_title>.txt`, one UTF-8
//! plain-text file per song. No transaction spans several writes; a file
//! that exists is evidence its song was scraped.

use crate::catalog::Genre;
use crate::naming::{artist_dir_name, entry_file_name};
use crate::storage::traits::{CorpusStore, StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Corpus stored as a directory tree of text files
#[derive(Debug, Clone)]
pub struct CorpusWriter {
    root: PathBuf,
}

impl CorpusWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one genre's artists
    pub fn genre_dir(&self, genre: Genre) -> PathBuf {
        self.root.join(genre.as_str())
    }

    /// Directory holding one artist's songs
    pub fn artist_dir(&self, genre: Genre, artist: &str) -> PathBuf {
        self.genre_dir(genre).join(artist_dir_name(artist))
    }

    /// Lists the sanitized titles stored for an artist, sorted
    pub fn list_titles(&self, genre: Genre, artist: &str) -> StorageResult<Vec<String>> {
        let dir = self.artist_dir(genre, artist);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(dir, e)),
        };

        let mut titles = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(&dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(crate::naming::ENTRY_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    titles.push(stem.to_string());
                }
            }
        }
        titles.sort();
        Ok(titles)
    }
}

impl CorpusStore for CorpusWriter {
    fn entry_path(&self, genre: Genre, artist: &str, title: &str) -> PathBuf {
        self.artist_dir(genre, artist).join(entry_file_name(title))
    }

    fn contains(&self, genre: Genre, artist: &str, title: &str) -> bool {
        self.entry_path(genre, artist, title).is_file()
    }

    fn write(&self, genre: Genre, artist: &str, title: &str, text: &str) -> StorageResult<PathBuf> {
        let dir = self.artist_dir(genre, artist);
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;

        let path = dir.join(entry_file_name(title));
        fs::write(&path, text).map_err(|e| StorageError::io(&path, e))?;

        tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }

    fn read(&self, genre: Genre, artist: &str, title: &str) -> StorageResult<Option<String>> {
        let path = self.entry_path(genre, artist, title);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}
