//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `ArtistState` / `SongState`: per-item state machines driven by the coordinator
//! - `CrawlProgress`: durable per-genre summary of outcomes
//! - `OverallProgress`: aggregate over every genre of a full run

mod artist_state;
mod progress;

// Re-export main types
pub use artist_state::{ArtistState, SongState};
pub use progress::{CrawlErrorEntry, CrawlProgress, FailureKind, OverallProgress};
