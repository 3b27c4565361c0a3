//! Storage module for persisting crawl results
//!
//! This module handles everything the crawl leaves on disk:
//! - The genre/artist partitioned lyrics corpus
//! - Per-genre progress records, rewritten after every artist
//! - The aggregate record of a full run

mod corpus;
mod progress_store;
mod traits;

pub use corpus::CorpusWriter;
pub use progress_store::{JsonProgressStore, OVERALL_PROGRESS_FILE, PROGRESS_FILE};
pub use traits::{CorpusStore, ProgressStore, StorageError, StorageResult};

use std::path::Path;

/// Opens the corpus and progress stores rooted at the same directory
///
/// # Arguments
///
/// * `root` - Corpus root directory; created lazily on first write
pub fn open_storage(root: &Path) -> (CorpusWriter, JsonProgressStore) {
    (CorpusWriter::new(root), JsonProgressStore::new(root))
}
