//! Politeness scheduler
//!
//! Every outbound request is preceded or followed by a fixed pause keyed by
//! scope. Delays are constants from configuration; they do not adapt to
//! server response times or error rates.

use crate::config::PolitenessConfig;
use std::time::Duration;

/// Point in the crawl at which a pause is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateScope {
    /// Before each lyrics page fetch
    BeforeSong,
    /// After each successfully saved song
    AfterSong,
    /// Between two artists of a genre run
    BetweenArtists,
    /// Between two genres of a full run
    BetweenGenres,
}

impl GateScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeSong => "before_song",
            Self::AfterSong => "after_song",
            Self::BetweenArtists => "between_artists",
            Self::BetweenGenres => "between_genres",
        }
    }
}

/// Blocks the crawl for the configured delay of each scope
///
/// Injected into the coordinator so tests can use [`PolitenessScheduler::immediate`].
#[derive(Debug, Clone)]
pub struct PolitenessScheduler {
    config: PolitenessConfig,
}

impl PolitenessScheduler {
    pub fn new(config: PolitenessConfig) -> Self {
        Self { config }
    }

    /// A scheduler that never waits
    pub fn immediate() -> Self {
        Self::new(PolitenessConfig::zero())
    }

    /// The fixed delay for a scope
    pub fn delay(&self, scope: GateScope) -> Duration {
        let ms = match scope {
            GateScope::BeforeSong => self.config.before_song_ms,
            GateScope::AfterSong => self.config.after_song_ms,
            GateScope::BetweenArtists => self.config.between_artists_ms,
            GateScope::BetweenGenres => self.config.between_genres_ms,
        };
        Duration::from_millis(ms)
    }

    /// Waits out the delay for `scope`
    pub async fn gate(&self, scope: GateScope) {
        let delay = self.delay(scope);
        if delay.is_zero() {
            return;
        }
        tracing::trace!("Politeness wait {:?} ({})", delay, scope.as_str());
        tokio::time::sleep(delay).await;
    }
}

impl Default for PolitenessScheduler {
    fn default() -> Self {
        Self::new(PolitenessConfig::default())
    }
}
