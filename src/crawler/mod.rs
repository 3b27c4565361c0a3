//! Crawler module for lyrics collection
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - Artist resolution and song index parsing
//! - Lyrics extraction
//! - Politeness delays
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod index;
mod politeness;
mod resolver;

pub use coordinator::Coordinator;
pub use extractor::{extract_lyrics, normalize_lyrics, LyricsResult};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use index::{parse_index, SongCandidate, LYRICS_PATH_MARKER};
pub use politeness::{GateScope, PolitenessScheduler};
pub use resolver::{candidate_urls, resolve_artist, source_base_url, ArtistResolution};

use crate::catalog::GenreCatalog;
use crate::config::Config;
use crate::state::OverallProgress;
use crate::HarvestError;

/// Runs a complete harvest of every configured genre
///
/// This is the main entry point for a full run. It will:
/// 1. Build the catalog from configuration
/// 2. Build the HTTP client
/// 3. Crawl each genre in order, persisting progress as it goes
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(OverallProgress)` - Harvest completed
/// * `Err(HarvestError)` - Configuration or storage failure
pub async fn harvest(config: Config) -> Result<OverallProgress, HarvestError> {
    let catalog = GenreCatalog::from_config(&config)?;
    let max_artists = config.crawler.max_artists_per_genre;
    let max_songs = config.crawler.max_songs_per_artist;

    let coordinator = Coordinator::new(config, catalog)?;
    coordinator.scrape_all_genres(max_artists, max_songs).await
}
