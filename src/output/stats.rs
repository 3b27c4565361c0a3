//! Statistics from persisted progress records
//!
//! This module provides functionality for loading and displaying harvest
//! statistics from the progress store.

use crate::catalog::Genre;
use crate::state::{CrawlProgress, FailureKind, OverallProgress};
use crate::storage::ProgressStore;
use crate::HarvestError;
use std::collections::BTreeMap;

/// Harvest statistics summary
#[derive(Debug, Clone, Default)]
pub struct HarvestStatistics {
    /// Last persisted record of each genre that has one
    pub genres: BTreeMap<Genre, CrawlProgress>,

    /// Aggregate record of the last full run, if any
    pub overall: Option<OverallProgress>,

    /// Genres asked about that have never been crawled
    pub never_crawled: Vec<Genre>,
}

impl HarvestStatistics {
    pub fn total_songs_scraped(&self) -> usize {
        self.genres.values().map(|p| p.songs_scraped).sum()
    }

    pub fn total_songs_already_present(&self) -> usize {
        self.genres.values().map(|p| p.songs_already_present).sum()
    }

    pub fn total_artists_completed(&self) -> usize {
        self.genres.values().map(|p| p.artists_completed).sum()
    }

    /// Error counts across all genres, by kind
    pub fn error_counts(&self) -> BTreeMap<FailureKind, usize> {
        let mut counts = BTreeMap::new();
        for progress in self.genres.values() {
            for (kind, count) in progress.error_counts() {
                *counts.entry(kind).or_insert(0) += count;
            }
        }
        counts
    }

    pub fn total_errors(&self) -> usize {
        self.genres.values().map(|p| p.errors.len()).sum()
    }
}

/// Loads statistics for the given genres from the progress store
///
/// # Arguments
///
/// * `store` - The progress store to read
/// * `genres` - Genres to report on, in display order
///
/// # Returns
///
/// * `Ok(HarvestStatistics)` - Successfully loaded statistics
/// * `Err(HarvestError)` - A progress file exists but could not be read
pub fn load_statistics(
    store: &dyn ProgressStore,
    genres: impl IntoIterator<Item = Genre>,
) -> Result<HarvestStatistics, HarvestError> {
    let mut stats = HarvestStatistics {
        overall: store.load_overall()?,
        ..HarvestStatistics::default()
    };

    for genre in genres {
        match store.load_progress(genre)? {
            Some(progress) => {
                stats.genres.insert(genre, progress);
            }
            None => stats.never_crawled.push(genre),
        }
    }

    Ok(stats)
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &HarvestStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Overview:");
    println!("  Genres crawled: {}", stats.genres.len());
    println!("  Artists completed: {}", stats.total_artists_completed());
    println!("  Songs scraped: {}", stats.total_songs_scraped());
    if stats.total_songs_already_present() > 0 {
        println!(
            "  Songs already present: {}",
            stats.total_songs_already_present()
        );
    }
    println!("  Errors: {}", stats.total_errors());
    println!();

    if !stats.genres.is_empty() {
        println!("By Genre:");
        for (genre, progress) in &stats.genres {
            let status = if progress.is_complete() {
                "complete"
            } else {
                "partial"
            };
            println!(
                "  {}: {}/{} artists, {} songs, {} errors ({}, updated {})",
                genre,
                progress.artists_completed,
                progress.artists_queued,
                progress.songs_scraped,
                progress.errors.len(),
                status,
                progress.updated_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
        println!();
    }

    let error_counts = stats.error_counts();
    if !error_counts.is_empty() {
        println!("Error Summary:");
        let mut counts: Vec<_> = error_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1));

        for (kind, count) in counts {
            println!("  {}: {}", kind, count);
        }
        println!();
    }

    if !stats.never_crawled.is_empty() {
        let names: Vec<&str> = stats.never_crawled.iter().map(Genre::as_str).collect();
        println!("Never crawled: {}", names.join(", "));
        println!();
    }

    match &stats.overall {
        Some(overall) => match overall.finished_at {
            Some(finished) => println!(
                "Last full run: {} -> {}",
                overall.started_at.format("%Y-%m-%d %H:%M:%S"),
                finished.format("%Y-%m-%d %H:%M:%S")
            ),
            None => println!(
                "Last full run: started {} (did not finish)",
                overall.started_at.format("%Y-%m-%d %H:%M:%S")
            ),
        },
        None => println!("No full run recorded"),
    }
}
