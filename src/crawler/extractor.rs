//! Lyrics extractor
//!
//! The lyrics container on a song page carries no stable class or id, and
//! its surroundings changed across the site's template eras. Extraction is
//! therefore an ordered chain of strategies, first non-empty result wins:
//!
//! 1. `marker_sibling` - the first `div` sibling after the promotional
//!    marker element (`div.ringtone`)
//! 2. `unattributed_block` - the unattributed `div` with the most lines,
//!    provided it has more than `line-threshold` lines
//! 3. `main_content` - inside the main content column, the first
//!    unattributed `div` with any text
//!
//! The broadest signal is tried first and the scope narrows on failure.

use crate::config::ExtractionConfig;
use crate::crawler::fetcher::FetchResult;
use crate::state::FailureKind;
use scraper::{ElementRef, Html, Node, Selector};

/// Selector of the promotional element that precedes the lyrics block
pub const MARKER_SELECTOR: &str = "div.ringtone";

/// Selector of the page's main region
pub const MAIN_REGION_SELECTOR: &str = "div.main-page";

/// Selector of the content column inside the main region
pub const CONTENT_COLUMN_SELECTOR: &str = "div.col-xs-12.col-lg-8.text-center";

/// Outcome of fetching and extracting one song's lyrics
///
/// Never partially successful: `Success` always carries non-empty,
/// normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsResult {
    Success(String),

    /// Lyrics page answered 404
    NotFound,

    /// Lyrics page answered another non-200 status, or the request failed
    FetchFailed(String),

    /// Page fetched but no strategy isolated the lyrics
    ExtractionFailed,
}

impl LyricsResult {
    /// Classifies a fetched lyrics page, running extraction on success
    pub fn from_fetch(fetch: FetchResult, config: &ExtractionConfig) -> Self {
        match fetch {
            FetchResult::Success { body, .. } => extract_lyrics(&body, config),
            FetchResult::HttpError { status_code: 404 } => Self::NotFound,
            other => Self::FetchFailed(other.failure_reason().unwrap_or_default()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The lyrics text, or the failure kind and reason to record
    pub fn into_text(self) -> Result<String, (FailureKind, String)> {
        match self {
            Self::Success(text) => Ok(text),
            Self::NotFound => Err((
                FailureKind::FetchFailure,
                "Lyrics page not found (HTTP 404)".to_string(),
            )),
            Self::FetchFailed(reason) => Err((
                FailureKind::FetchFailure,
                format!("Failed to fetch lyrics: {}", reason),
            )),
            Self::ExtractionFailed => Err((
                FailureKind::ExtractionFailure,
                "Lyrics not found on page".to_string(),
            )),
        }
    }
}

type Strategy = fn(&Html, &ExtractionConfig) -> Option<String>;

/// Extraction strategies in the order they are tried
const STRATEGIES: [(&str, Strategy); 3] = [
    ("marker_sibling", marker_sibling),
    ("unattributed_block", unattributed_block),
    ("main_content", main_content),
];

/// Isolates and normalizes the lyrics on a song page
///
/// # Example
///
/// ```
/// use lyric_harvest::config::ExtractionConfig;
/// use lyric_harvest::crawler::{extract_lyrics, LyricsResult};
///
/// let html = r#"<div class="ringtone">Get the ringtone</div>
///     <b>"Song"</b><div>First line<br>Second line</div>"#;
/// let result = extract_lyrics(html, &ExtractionConfig::default());
/// assert_eq!(result, LyricsResult::Success("First line\nSecond line".to_string()));
/// ```
pub fn extract_lyrics(html: &str, config: &ExtractionConfig) -> LyricsResult {
    let document = Html::parse_document(html);

    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            let text = normalize_lyrics(&strategy(&document, config)?);
            if text.is_empty() {
                return None;
            }
            tracing::debug!("Lyrics isolated by strategy {}", name);
            Some(text)
        })
        .map(LyricsResult::Success)
        .unwrap_or(LyricsResult::ExtractionFailed)
}

/// Removes blank lines and comment-like residue, trimming each line
pub fn normalize_lyrics(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("//") && !line.starts_with("<!--"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn marker_sibling(document: &Html, _config: &ExtractionConfig) -> Option<String> {
    let selector = Selector::parse(MARKER_SELECTOR).ok()?;
    let marker = document.select(&selector).next()?;

    marker
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "div")
        .map(block_text)
}

fn unattributed_block(document: &Html, config: &ExtractionConfig) -> Option<String> {
    let selector = Selector::parse("div").ok()?;

    let mut best: Option<(usize, String)> = None;
    for div in document.select(&selector).filter(is_unattributed) {
        let text = block_text(div);
        let lines = count_lines(&text);
        if lines <= config.line_threshold {
            continue;
        }
        // strictly greater keeps the earliest block on ties
        if best.as_ref().map_or(true, |(most, _)| lines > *most) {
            best = Some((lines, text));
        }
    }
    best.map(|(_, text)| text)
}

fn main_content(document: &Html, _config: &ExtractionConfig) -> Option<String> {
    let region_selector = Selector::parse(MAIN_REGION_SELECTOR).ok()?;
    let column_selector = Selector::parse(CONTENT_COLUMN_SELECTOR).ok()?;
    let div_selector = Selector::parse("div").ok()?;

    let region = document.select(&region_selector).next()?;
    let column = region.select(&column_selector).next()?;

    column
        .select(&div_selector)
        .filter(is_unattributed)
        .map(block_text)
        .find(|text| !text.trim().is_empty())
}

/// True when the element has neither a class nor an id
fn is_unattributed(element: &ElementRef<'_>) -> bool {
    let blank = |name: &str| {
        element
            .value()
            .attr(name)
            .map_or(true, |v| v.trim().is_empty())
    };
    blank("class") && blank("id")
}

fn count_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Renders an element's visible text, turning `<br>` and block ends into newlines
fn block_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    render_text(element, &mut out);
    out
}

fn render_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => match el.name() {
                "br" => out.push('\n'),
                "script" | "style" | "noscript" => {}
                name => {
                    if let Some(child_ref) = ElementRef::wrap(child) {
                        render_text(child_ref, out);
                    }
                    if matches!(name, "div" | "p") {
                        out.push('\n');
                    }
                }
            },
            _ => {}
        }
    }
}
