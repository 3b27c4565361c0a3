//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives the genre → artist → song loop:
//! - Selecting artists from the catalog
//! - Resolving each artist to its song index
//! - Fetching, extracting and saving each selected song
//! - Recording every skip in the genre's progress record
//! - Persisting progress after every artist
//!
//! Nothing that happens to a single song or artist aborts the run. The only
//! fatal errors are configuration problems (detected before any request) and
//! failures to persist the progress record.

use crate::catalog::{ArtistTarget, Genre, GenreCatalog};
use crate::config::Config;
use crate::crawler::extractor::LyricsResult;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::index::SongCandidate;
use crate::crawler::politeness::{GateScope, PolitenessScheduler};
use crate::crawler::resolver::{fetch_index, resolve_artist, source_base_url, ArtistResolution, IndexFetch};
use crate::state::{ArtistState, CrawlProgress, FailureKind, OverallProgress, SongState};
use crate::storage::{open_storage, CorpusStore, CorpusWriter, JsonProgressStore, ProgressStore};
use crate::HarvestError;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    catalog: GenreCatalog,
    client: Client,
    base_url: Url,
    politeness: PolitenessScheduler,
    corpus: CorpusWriter,
    progress_store: JsonProgressStore,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - Validated crawler configuration
    /// * `catalog` - Artists to crawl, grouped by genre
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to crawl; nothing has been requested yet
    /// * `Err(HarvestError)` - The HTTP client or base URL could not be built
    pub fn new(config: Config, catalog: GenreCatalog) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.source)?;
        let base_url = source_base_url(&config.source)?;
        let politeness = PolitenessScheduler::new(config.politeness.clone());
        let (corpus, progress_store) = open_storage(Path::new(&config.output.corpus_root));

        Ok(Self {
            config: Arc::new(config),
            catalog,
            client,
            base_url,
            politeness,
            corpus,
            progress_store,
        })
    }

    /// Replaces the politeness scheduler
    pub fn with_politeness(mut self, politeness: PolitenessScheduler) -> Self {
        self.politeness = politeness;
        self
    }

    pub fn catalog(&self) -> &GenreCatalog {
        &self.catalog
    }

    pub fn corpus(&self) -> &CorpusWriter {
        &self.corpus
    }

    pub fn progress_store(&self) -> &JsonProgressStore {
        &self.progress_store
    }

    /// Scrapes up to `max_songs` songs of a single artist
    ///
    /// The returned record covers this artist only and is not persisted, so
    /// it never clobbers the genre's `progress.json`.
    pub async fn scrape_artist(
        &self,
        name: &str,
        genre: Genre,
        max_songs: usize,
    ) -> Result<CrawlProgress, HarvestError> {
        let target = ArtistTarget::new(name, genre);
        let mut progress = CrawlProgress::new(genre, 1);
        self.crawl_artist(&target, max_songs, &mut progress).await?;
        log_summary(&progress);
        Ok(progress)
    }

    /// Scrapes an artist from an explicit index page URL, skipping slug resolution
    pub async fn scrape_artist_url(
        &self,
        index_url: &str,
        name: &str,
        genre: Genre,
        max_songs: usize,
    ) -> Result<CrawlProgress, HarvestError> {
        let index_url = Url::parse(index_url)?;
        let target = ArtistTarget::new(name, genre);
        let mut progress = CrawlProgress::new(genre, 1);

        tracing::info!("Finding songs for {} from URL: {}", target.name, index_url);
        let resolution = match fetch_index(&self.client, &index_url).await {
            IndexFetch::Songs(songs) => ArtistResolution::Found { index_url, songs },
            IndexFetch::Empty => ArtistResolution::EmptyIndex { index_url },
            IndexFetch::Failed(reason) => {
                tracing::debug!("Index {} failed: {}", index_url, reason);
                ArtistResolution::NotFound {
                    tried: vec![index_url],
                }
            }
        };

        let mut state = ArtistState::Pending;
        advance(&mut state, ArtistState::Resolving)?;
        self.process_resolution(&target, state, resolution, max_songs, &mut progress)
            .await?;
        log_summary(&progress);
        Ok(progress)
    }

    /// Scrapes the first `max_artists` artists of a genre
    ///
    /// The genre's progress record is written before the first artist and
    /// after every artist.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlProgress)` - Final record for the run
    /// * `Err(HarvestError::UnknownGenre)` - The catalog has no such genre;
    ///   raised before any request
    pub async fn scrape_genre(
        &self,
        genre: Genre,
        max_artists: usize,
        max_songs_per_artist: usize,
    ) -> Result<CrawlProgress, HarvestError> {
        let targets = self.catalog.targets(genre, max_artists)?;
        let mut progress = CrawlProgress::new(genre, targets.len());
        self.progress_store.save_progress(&progress)?;

        tracing::info!(
            "Starting to scrape {} artists for genre: {}",
            targets.len(),
            genre
        );

        for (i, target) in targets.iter().enumerate() {
            if i > 0 {
                self.politeness.gate(GateScope::BetweenArtists).await;
            }

            tracing::info!("[{}/{}] Scraping artist: {}", i + 1, targets.len(), target.name);
            let state = self
                .crawl_artist(target, max_songs_per_artist, &mut progress)
                .await?;
            self.progress_store.save_progress(&progress)?;
            tracing::debug!("Artist {} finished as {}", target.name, state);
        }

        tracing::info!("Finished scraping for genre: {}", genre);
        log_summary(&progress);
        Ok(progress)
    }

    /// Scrapes every genre of the catalog in order
    ///
    /// `overall_progress.json` is rewritten after each genre and marked
    /// finished at the end.
    pub async fn scrape_all_genres(
        &self,
        max_artists_per_genre: usize,
        max_songs_per_artist: usize,
    ) -> Result<OverallProgress, HarvestError> {
        let genres: Vec<Genre> = self.catalog.genres().collect();
        let mut overall = OverallProgress::new();

        for (i, genre) in genres.iter().enumerate() {
            if i > 0 {
                self.politeness.gate(GateScope::BetweenGenres).await;
            }

            tracing::info!("Starting genre: {}", genre.as_str().to_uppercase());
            let progress = self
                .scrape_genre(*genre, max_artists_per_genre, max_songs_per_artist)
                .await?;
            overall.insert(progress);
            self.progress_store.save_overall(&overall)?;
        }

        overall.finish();
        self.progress_store.save_overall(&overall)?;

        tracing::info!(
            "All genres scraped: {} artists, {} songs, {} errors",
            overall.total_artists_completed(),
            overall.total_songs_scraped(),
            overall.total_errors()
        );
        Ok(overall)
    }

    /// Runs one artist through the state machine, updating `progress`
    async fn crawl_artist(
        &self,
        target: &ArtistTarget,
        max_songs: usize,
        progress: &mut CrawlProgress,
    ) -> Result<ArtistState, HarvestError> {
        let mut state = ArtistState::Pending;
        advance(&mut state, ArtistState::Resolving)?;

        let resolution =
            resolve_artist(&self.client, &self.config.source, &self.base_url, &target.name).await;

        self.process_resolution(target, state, resolution, max_songs, progress)
            .await
    }

    /// Continues an artist from `Resolving` given the resolver's answer
    async fn process_resolution(
        &self,
        target: &ArtistTarget,
        mut state: ArtistState,
        resolution: ArtistResolution,
        max_songs: usize,
        progress: &mut CrawlProgress,
    ) -> Result<ArtistState, HarvestError> {
        match resolution {
            ArtistResolution::NotFound { tried } => {
                advance(&mut state, ArtistState::NotFound)?;
                let tried: Vec<&str> = tried.iter().map(Url::as_str).collect();
                tracing::warn!(
                    "No songs found for artist '{}' or artist page not found",
                    target.name
                );
                progress.record_error(
                    &target.name,
                    None,
                    FailureKind::ResolutionFailure,
                    format!("No artist page found (tried: {})", tried.join(", ")),
                );
            }

            ArtistResolution::EmptyIndex { index_url } => {
                advance(&mut state, ArtistState::Listing)?;
                advance(&mut state, ArtistState::Empty)?;
                tracing::warn!("Artist page for '{}' lists no songs", target.name);
                progress.record_error(
                    &target.name,
                    None,
                    FailureKind::EmptyIndex,
                    format!("No songs listed at {}", index_url),
                );
            }

            ArtistResolution::Found { index_url, songs } => {
                advance(&mut state, ArtistState::Listing)?;
                let selected = songs.len().min(max_songs);
                tracing::info!(
                    "Found {} songs by {} at {}. Will scrape up to {}.",
                    songs.len(),
                    target.name,
                    index_url,
                    max_songs
                );

                advance(&mut state, ArtistState::Scraping)?;
                for (i, song) in songs.iter().take(max_songs).enumerate() {
                    tracing::info!("[{}/{}] Scraping lyrics for '{}'", i + 1, selected, song.title);
                    self.scrape_song(target, song, progress).await?;
                }
                advance(&mut state, ArtistState::Done)?;
            }
        }

        progress.complete_artist();
        Ok(state)
    }

    /// Fetches, extracts and saves one song
    ///
    /// Fetch, extraction and corpus write failures are recorded and reported
    /// as `Skipped`.
    async fn scrape_song(
        &self,
        target: &ArtistTarget,
        song: &SongCandidate,
        progress: &mut CrawlProgress,
    ) -> Result<SongState, HarvestError> {
        let mut state = SongState::Pending;

        if self.config.crawler.skip_existing
            && self.corpus.contains(target.genre, &target.name, &song.title)
        {
            step(&mut state, SongState::AlreadyPresent);
            tracing::debug!("Already saved, skipping '{}'", song.title);
            progress.record_song_already_present();
            return Ok(state);
        }

        self.politeness.gate(GateScope::BeforeSong).await;
        step(&mut state, SongState::Fetching);
        let fetch = fetch_url(&self.client, song.url.as_str()).await;
        if fetch.is_success() {
            step(&mut state, SongState::Extracting);
        }

        let saved = LyricsResult::from_fetch(fetch, &self.config.extraction)
            .into_text()
            .and_then(|text| {
                self.corpus
                    .write(target.genre, &target.name, &song.title, &text)
                    .map_err(|e| (FailureKind::WriteFailure, format!("Failed to save lyrics: {}", e)))
            });

        match saved {
            Ok(path) => {
                step(&mut state, SongState::Saved);
                tracing::info!("Saved to: {}", path.display());
                progress.record_song_saved();

                self.politeness.gate(GateScope::AfterSong).await;
            }
            Err((kind, reason)) => {
                step(&mut state, SongState::Skipped);
                tracing::warn!("Skipping '{}' by {}: {}", song.title, target.name, reason);
                progress.record_error(&target.name, Some(&song.title), kind, reason);
            }
        }

        Ok(state)
    }
}

/// Moves an artist to `next`, rejecting transitions the state machine forbids
fn advance(state: &mut ArtistState, next: ArtistState) -> Result<(), HarvestError> {
    if !state.can_transition_to(next) {
        return Err(HarvestError::InvalidTransition {
            from: *state,
            to: next,
        });
    }
    *state = next;
    Ok(())
}

fn step(state: &mut SongState, next: SongState) {
    debug_assert!(
        state.can_transition_to(next),
        "invalid song transition {} -> {}",
        state,
        next
    );
    *state = next;
}

fn log_summary(progress: &CrawlProgress) {
    tracing::info!(
        "Total artists processed: {}, songs scraped: {}, errors: {}",
        progress.artists_completed,
        progress.songs_scraped,
        progress.errors.len()
    );
}
