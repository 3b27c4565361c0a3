//! Artist resolver
//!
//! Maps a display name to the artist's index page on the source site. The
//! slug is derived by [`artist_slug`]; candidate URLs are tried in order and
//! the first page that answers 200 and lists at least one song wins.

use crate::config::SourceConfig;
use crate::crawler::fetcher::{fetch_url, FetchResult};
use crate::crawler::index::{parse_index, SongCandidate};
use crate::naming::artist_slug;
use reqwest::Client;
use url::Url;

/// Path segment the site files all digit-initial artists under
pub const NUMERIC_PREFIX_SEGMENT: &str = "19";

/// Outcome of resolving one artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistResolution {
    /// An index page listed songs
    Found {
        index_url: Url,
        songs: Vec<SongCandidate>,
    },

    /// At least one candidate answered 200, none listed any song
    EmptyIndex { index_url: Url },

    /// No candidate answered 200
    NotFound { tried: Vec<Url> },
}

/// Builds the ordered list of index page URLs to try for a slug
///
/// 1. `<base>/<first char>/<slug>.html`
/// 2. `<base>/19/<slug>.html`, only when the slug starts with a digit
///
/// # Example
///
/// ```
/// use lyric_harvest::crawler::candidate_urls;
/// use url::Url;
///
/// let base = Url::parse("https://www.azlyrics.com/").unwrap();
/// let urls = candidate_urls(&base, "21savage");
/// assert_eq!(urls[0].as_str(), "https://www.azlyrics.com/2/21savage.html");
/// assert_eq!(urls[1].as_str(), "https://www.azlyrics.com/19/21savage.html");
/// ```
pub fn candidate_urls(base_url: &Url, slug: &str) -> Vec<Url> {
    let Some(first) = slug.chars().next() else {
        return Vec::new();
    };

    let mut paths = vec![format!("{}/{}.html", first, slug)];
    if first.is_ascii_digit() {
        paths.push(format!("{}/{}.html", NUMERIC_PREFIX_SEGMENT, slug));
    }

    paths
        .iter()
        .filter_map(|path| base_url.join(path).ok())
        .collect()
}

/// Normalizes the configured base so relative joins keep its path
pub fn source_base_url(config: &SourceConfig) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(&config.base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

/// Resolves an artist name to its song index
///
/// Never fails: an artist with no known page is reported as `NotFound`
/// and the caller skips it.
pub async fn resolve_artist(
    client: &Client,
    config: &SourceConfig,
    base_url: &Url,
    name: &str,
) -> ArtistResolution {
    let slug = artist_slug(name, &config.slug_overrides);
    let candidates = candidate_urls(base_url, &slug);
    tracing::debug!(
        "Resolving '{}' as slug '{}' ({} candidates)",
        name,
        slug,
        candidates.len()
    );

    let mut empty_index = None;
    for url in &candidates {
        match fetch_index(client, url).await {
            IndexFetch::Songs(songs) => {
                return ArtistResolution::Found {
                    index_url: url.clone(),
                    songs,
                };
            }
            IndexFetch::Empty => {
                empty_index.get_or_insert_with(|| url.clone());
            }
            IndexFetch::Failed(reason) => {
                tracing::debug!("Candidate {} failed: {}", url, reason);
            }
        }
    }

    match empty_index {
        Some(index_url) => ArtistResolution::EmptyIndex { index_url },
        None => ArtistResolution::NotFound { tried: candidates },
    }
}

/// Result of fetching and parsing one index page
#[derive(Debug)]
pub(crate) enum IndexFetch {
    Songs(Vec<SongCandidate>),
    Empty,
    Failed(String),
}

/// Fetches a single index page and parses its song list
pub(crate) async fn fetch_index(client: &Client, url: &Url) -> IndexFetch {
    match fetch_url(client, url.as_str()).await {
        FetchResult::Success { final_url, body } => {
            let base = Url::parse(&final_url).unwrap_or_else(|_| url.clone());
            let songs = parse_index(&body, &base);
            if songs.is_empty() {
                IndexFetch::Empty
            } else {
                IndexFetch::Songs(songs)
            }
        }
        other => IndexFetch::Failed(other.failure_reason().unwrap_or_default()),
    }
}
