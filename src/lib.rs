//! Lyric-Harvest: a polite lyrics corpus builder
//!
//! This crate crawls a lyrics site for a catalog of artists grouped by genre,
//! writing one plain-text file per song into a genre/artist partitioned corpus
//! and keeping a durable per-genre progress record as it goes.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod naming;
pub mod output;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for Lyric-Harvest operations
///
/// Per-song and per-artist failures are not represented here; those are
/// recorded in [`state::CrawlProgress`] and the crawl moves on.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::ArtistState,
        to: state::ArtistState,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Unknown genre '{0}' (expected one of: hiphop, rnb, pop, country, jazz, african, latin)")]
    UnknownGenre(String),
}

/// Result type alias for Lyric-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{ArtistTarget, Genre, GenreCatalog};
pub use config::Config;
pub use crawler::{Coordinator, LyricsResult, PolitenessScheduler, SongCandidate};
pub use state::{CrawlProgress, OverallProgress};
