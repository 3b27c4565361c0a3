//! Genre catalog: which artists are crawled, grouped by genre
//!
//! The catalog is built once from configuration (or the built-in default
//! lists) and handed to the coordinator. It is never modified during a run.

mod builtin;
mod genre;

pub use genre::Genre;

use crate::config::Config;
use crate::{ConfigError, HarvestError};

/// An artist queued for crawling within a genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistTarget {
    /// Display name as listed in the catalog
    pub name: String,

    /// Genre the artist is filed under
    pub genre: Genre,
}

impl ArtistTarget {
    pub fn new(name: impl Into<String>, genre: Genre) -> Self {
        Self {
            name: name.into(),
            genre,
        }
    }
}

/// Immutable mapping from genre to an ordered list of artist names
#[derive(Debug, Clone)]
pub struct GenreCatalog {
    entries: Vec<(Genre, Vec<String>)>,
}

impl GenreCatalog {
    /// The default catalog: every genre with its built-in artist list
    pub fn builtin() -> Self {
        let entries = Genre::ALL
            .iter()
            .map(|&genre| {
                let artists = builtin::builtin_artists(genre)
                    .iter()
                    .map(|a| a.to_string())
                    .collect();
                (genre, artists)
            })
            .collect();
        Self { entries }
    }

    /// Builds the catalog from the `[catalog]` config table, falling back to
    /// the built-in lists when the table is absent
    ///
    /// Two keys naming the same genre (`pop` and `Pop`) are rejected.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let Some(table) = &config.catalog else {
            return Ok(Self::builtin());
        };

        let mut entries: Vec<(Genre, Vec<String>)> = Vec::with_capacity(table.len());
        for (key, artists) in table {
            let genre: Genre = key.parse()?;
            if entries.iter().any(|(g, _)| *g == genre) {
                return Err(duplicate_genre(genre));
            }
            entries.push((genre, artists.clone()));
        }
        entries.sort_by_key(|(genre, _)| *genre);
        Ok(Self { entries })
    }

    /// Builds a catalog from explicit entries, kept in genre order
    pub fn from_entries(entries: impl IntoIterator<Item = (Genre, Vec<String>)>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|(genre, _)| *genre);
        entries.dedup_by_key(|(genre, _)| *genre);
        Self { entries }
    }

    /// Genres present in this catalog, in crawl order
    pub fn genres(&self) -> impl Iterator<Item = Genre> + '_ {
        self.entries.iter().map(|(genre, _)| *genre)
    }

    /// Ordered artist names for a genre
    ///
    /// # Returns
    ///
    /// * `Err(HarvestError::UnknownGenre)` - The genre has no entry in this catalog
    pub fn artists(&self, genre: Genre) -> Result<&[String], HarvestError> {
        self.entries
            .iter()
            .find(|(g, _)| *g == genre)
            .map(|(_, artists)| artists.as_slice())
            .ok_or_else(|| HarvestError::UnknownGenre(genre.to_string()))
    }

    /// The first `max_artists` artists of a genre as crawl targets
    pub fn targets(&self, genre: Genre, max_artists: usize) -> Result<Vec<ArtistTarget>, HarvestError> {
        Ok(self
            .artists(genre)?
            .iter()
            .take(max_artists)
            .map(|name| ArtistTarget::new(name.clone(), genre))
            .collect())
    }

    /// Total number of artists across all genres
    pub fn artist_count(&self) -> usize {
        self.entries.iter().map(|(_, artists)| artists.len()).sum()
    }
}

pub(crate) fn duplicate_genre(genre: Genre) -> ConfigError {
    ConfigError::Validation(format!("Catalog lists genre '{}' more than once", genre))
}

impl Default for GenreCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
