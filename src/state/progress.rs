//! Crawl progress records
//!
//! A [`CrawlProgress`] is created when a genre run starts, updated after
//! every song and artist, and persisted after every artist so a killed run
//! leaves a usable partial record.

use crate::catalog::Genre;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why an artist or song was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No artist index page was found
    ResolutionFailure,
    /// Index page found but it listed no songs
    EmptyIndex,
    /// Lyrics page answered non-200 or the request failed
    FetchFailure,
    /// Lyrics page fetched but no heuristic isolated the lyrics
    ExtractionFailure,
    /// Lyrics extracted but the corpus file could not be written
    WriteFailure,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolutionFailure => "resolution_failure",
            Self::EmptyIndex => "empty_index",
            Self::FetchFailure => "fetch_failure",
            Self::ExtractionFailure => "extraction_failure",
            Self::WriteFailure => "write_failure",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded failure, with enough context to retry it by hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlErrorEntry {
    pub artist: String,

    /// Song title, when the failure concerns a single song
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song: Option<String>,

    pub kind: FailureKind,

    pub reason: String,
}

/// Per-genre record of crawl outcomes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlProgress {
    pub genre: Genre,

    /// Artists selected for this run
    pub artists_queued: usize,

    /// Artists that reached a terminal state; never exceeds `artists_queued`
    pub artists_completed: usize,

    /// Songs written to the corpus; only ever increases within a run
    pub songs_scraped: usize,

    /// Songs skipped because their corpus file already existed
    #[serde(default)]
    pub songs_already_present: usize,

    /// Failures in the order they happened
    pub errors: Vec<CrawlErrorEntry>,

    pub started_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl CrawlProgress {
    /// Starts a fresh record for a run over `artists_queued` artists
    pub fn new(genre: Genre, artists_queued: usize) -> Self {
        let now = Utc::now();
        Self {
            genre,
            artists_queued,
            artists_completed: 0,
            songs_scraped: 0,
            songs_already_present: 0,
            errors: Vec::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Records a failure for an artist, optionally scoped to one song
    pub fn record_error(
        &mut self,
        artist: &str,
        song: Option<&str>,
        kind: FailureKind,
        reason: impl Into<String>,
    ) {
        self.errors.push(CrawlErrorEntry {
            artist: artist.to_string(),
            song: song.map(str::to_string),
            kind,
            reason: reason.into(),
        });
        self.touch();
    }

    pub fn record_song_saved(&mut self) {
        self.songs_scraped += 1;
        self.touch();
    }

    pub fn record_song_already_present(&mut self) {
        self.songs_already_present += 1;
        self.touch();
    }

    /// Marks one more artist as finished, clamped to the queued total
    pub fn complete_artist(&mut self) {
        if self.artists_completed < self.artists_queued {
            self.artists_completed += 1;
        } else {
            tracing::warn!(
                "Artist completion past queued total ({}) for genre {}",
                self.artists_queued,
                self.genre
            );
        }
        self.touch();
    }

    /// Returns true once every queued artist has completed
    pub fn is_complete(&self) -> bool {
        self.artists_completed == self.artists_queued
    }

    /// Error counts grouped by failure kind
    pub fn error_counts(&self) -> BTreeMap<FailureKind, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.errors {
            *counts.entry(entry.kind).or_insert(0) += 1;
        }
        counts
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Aggregate of every genre processed by a full run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallProgress {
    pub genres: BTreeMap<Genre, CrawlProgress>,

    pub started_at: DateTime<Utc>,

    /// Set once every genre of the run has finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl OverallProgress {
    pub fn new() -> Self {
        Self {
            genres: BTreeMap::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Stores (or replaces) the record for one genre
    pub fn insert(&mut self, progress: CrawlProgress) {
        self.genres.insert(progress.genre, progress);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total_songs_scraped(&self) -> usize {
        self.genres.values().map(|p| p.songs_scraped).sum()
    }

    pub fn total_artists_completed(&self) -> usize {
        self.genres.values().map(|p| p.artists_completed).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.genres.values().map(|p| p.errors.len()).sum()
    }
}

impl Default for OverallProgress {
    fn default() -> Self {
        Self::new()
    }
}
