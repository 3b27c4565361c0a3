use serde::Deserialize;
use std::collections::BTreeMap;

/// Browser identity sent with every request; the source site rejects
/// obvious bot user agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Lyric-Harvest
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub politeness: PolitenessConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub output: OutputConfig,

    /// Genre identifier to ordered artist names; replaces the built-in catalog
    #[serde(default)]
    pub catalog: Option<BTreeMap<String, Vec<String>>>,
}

/// Crawl scope limits
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of artists taken from the head of each genre list
    #[serde(rename = "max-artists-per-genre", default = "default_max_artists")]
    pub max_artists_per_genre: usize,

    /// Maximum number of songs taken from the head of each artist index
    #[serde(rename = "max-songs-per-artist", default = "default_max_songs")]
    pub max_songs_per_artist: usize,

    /// Skip songs whose corpus file already exists instead of re-fetching them
    #[serde(rename = "skip-existing", default)]
    pub skip_existing: bool,
}

/// Fixed politeness delays (milliseconds)
#[derive(Debug, Clone, Deserialize)]
pub struct PolitenessConfig {
    #[serde(rename = "before-song-ms", default = "default_before_song_ms")]
    pub before_song_ms: u64,

    #[serde(rename = "after-song-ms", default = "default_after_song_ms")]
    pub after_song_ms: u64,

    #[serde(rename = "between-artists-ms", default = "default_between_artists_ms")]
    pub between_artists_ms: u64,

    #[serde(rename = "between-genres-ms", default = "default_between_genres_ms")]
    pub between_genres_ms: u64,
}

/// Source site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Root URL of the lyrics site; artist and lyrics paths are joined onto it
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header value
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra artist name to slug mappings, layered over the built-in ones
    #[serde(rename = "slug-overrides", default)]
    pub slug_overrides: BTreeMap<String, String>,
}

/// Lyrics extraction tuning
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// An unattributed block must have more than this many lines to count as lyrics
    #[serde(rename = "line-threshold", default = "default_line_threshold")]
    pub line_threshold: usize,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root directory of the genre/artist corpus tree
    #[serde(rename = "corpus-root", default = "default_corpus_root")]
    pub corpus_root: String,
}

fn default_max_artists() -> usize {
    20
}

fn default_max_songs() -> usize {
    10
}

fn default_before_song_ms() -> u64 {
    2_000
}

fn default_after_song_ms() -> u64 {
    3_000
}

fn default_between_artists_ms() -> u64 {
    5_000
}

fn default_between_genres_ms() -> u64 {
    10_000
}

fn default_base_url() -> String {
    "https://www.azlyrics.com/".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_line_threshold() -> usize {
    5
}

fn default_corpus_root() -> String {
    "lyrics_data".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_artists_per_genre: default_max_artists(),
            max_songs_per_artist: default_max_songs(),
            skip_existing: false,
        }
    }
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            before_song_ms: default_before_song_ms(),
            after_song_ms: default_after_song_ms(),
            between_artists_ms: default_between_artists_ms(),
            between_genres_ms: default_between_genres_ms(),
        }
    }
}

impl PolitenessConfig {
    /// All delays set to zero, for tests and local fixtures
    pub fn zero() -> Self {
        Self {
            before_song_ms: 0,
            after_song_ms: 0,
            between_artists_ms: 0,
            between_genres_ms: 0,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            slug_overrides: BTreeMap::new(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            line_threshold: default_line_threshold(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            corpus_root: default_corpus_root(),
        }
    }
}
