//! Output module for harvest reports
//!
//! This module handles:
//! - Loading statistics from persisted progress records
//! - Printing run summaries and statistics

pub mod stats;

pub use stats::{load_statistics, print_statistics, HarvestStatistics};

use crate::state::{CrawlProgress, OverallProgress};

/// Prints the outcome of one genre or artist run to stdout
pub fn print_run_summary(progress: &CrawlProgress) {
    println!("=== {} ===", progress.genre.as_str().to_uppercase());
    println!(
        "  Artists: {}/{}",
        progress.artists_completed, progress.artists_queued
    );
    println!("  Songs scraped: {}", progress.songs_scraped);
    if progress.songs_already_present > 0 {
        println!("  Already present: {}", progress.songs_already_present);
    }

    if progress.errors.is_empty() {
        println!("  Errors: none");
        return;
    }

    println!("  Errors: {}", progress.errors.len());
    for entry in &progress.errors {
        match &entry.song {
            Some(song) => println!(
                "    - {} / {} [{}]: {}",
                entry.artist, song, entry.kind, entry.reason
            ),
            None => println!("    - {} [{}]: {}", entry.artist, entry.kind, entry.reason),
        }
    }
}

/// Prints the outcome of a full run to stdout
pub fn print_overall_summary(overall: &OverallProgress) {
    for progress in overall.genres.values() {
        print_run_summary(progress);
        println!();
    }

    println!(
        "Total: {} artists, {} songs, {} errors",
        overall.total_artists_completed(),
        overall.total_songs_scraped(),
        overall.total_errors()
    );
}
