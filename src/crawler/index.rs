//! Song index parser
//!
//! Extracts the ordered list of songs from an artist's index page. The page
//! groups songs under album headers:
//!
//! ```html
//! <div class="album">album: <b>"DAMN."</b> (2017)</div>
//! <div class="listalbum-item"><a href="/lyrics/kendricklamar/dna.html">DNA.</a></div>
//! <div class="listalbum-item"><a href="/lyrics/kendricklamar/humble.html">HUMBLE.</a></div>
//! <div class="album">...</div>
//! ```
//!
//! Order is document order (albums in page order, songs within an album in
//! page order); callers truncate this list, so the order matters.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Path segment every lyrics page link contains
pub const LYRICS_PATH_MARKER: &str = "/lyrics/";

/// A song listed on an artist index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongCandidate {
    /// Title as displayed on the index page; untrusted text
    pub title: String,

    /// Absolute URL of the lyrics page
    pub url: Url,
}

/// Parses an artist index page into song candidates
///
/// For each album header, every following sibling song-list block up to the
/// next album header is scanned for anchors whose target contains
/// [`LYRICS_PATH_MARKER`]. A page with no matching anchors yields an empty
/// list; that is a valid result, not an error. A song linked twice is kept
/// at its first position only.
///
/// # Arguments
///
/// * `html` - The index page markup
/// * `base_url` - URL the page was fetched from, for resolving relative links
///
/// # Example
///
/// ```
/// use lyric_harvest::crawler::parse_index;
/// use url::Url;
///
/// let html = r#"<div class="album">album: "One"</div>
///     <div class="listalbum-item"><a href="/lyrics/x/a.html">A</a></div>"#;
/// let base = Url::parse("https://lyrics.example.com/x/x.html").unwrap();
/// let songs = parse_index(html, &base);
/// assert_eq!(songs[0].url.as_str(), "https://lyrics.example.com/lyrics/x/a.html");
/// ```
pub fn parse_index(html: &str, base_url: &Url) -> Vec<SongCandidate> {
    let document = Html::parse_document(html);

    let (Ok(album_selector), Ok(anchor_selector)) =
        (Selector::parse("div.album"), Selector::parse("a[href]"))
    else {
        return Vec::new();
    };

    let mut songs = Vec::new();
    let mut seen = HashSet::new();

    for album in document.select(&album_selector) {
        for block in album.next_siblings().filter_map(ElementRef::wrap) {
            if has_class(&block, "album") {
                break;
            }
            if block.value().name() != "div" || !has_class(&block, "listalbum-item") {
                continue;
            }

            for anchor in block.select(&anchor_selector) {
                let Some(candidate) = song_from_anchor(&anchor, base_url) else {
                    continue;
                };
                if seen.insert(candidate.url.clone()) {
                    songs.push(candidate);
                }
            }
        }
    }

    tracing::debug!("Parsed {} songs from index {}", songs.len(), base_url);
    songs
}

fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Builds a candidate from a song anchor, or None if it is not a lyrics link
fn song_from_anchor(anchor: &ElementRef<'_>, base_url: &Url) -> Option<SongCandidate> {
    let href = anchor.value().attr("href")?.trim();
    if !href.contains(LYRICS_PATH_MARKER) {
        return None;
    }

    let url = base_url.join(href).ok()?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    let title = anchor
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        tracing::debug!("Skipping untitled song link {}", url);
        return None;
    }

    Some(SongCandidate { title, url })
}
