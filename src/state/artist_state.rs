/// Artist and song state definitions for tracking crawl progress
///
/// An artist moves `Pending → Resolving → (NotFound | Listing) →
/// (Empty | Scraping) → Done`; each of its songs moves independently through
/// `Pending → Fetching → Extracting → (Saved | Skipped)`.
use std::fmt;

/// Represents the current state of an artist in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtistState {
    // ===== Active States =====
    /// Queued, nothing requested yet
    Pending,

    /// Looking for the artist's index page
    Resolving,

    /// Index page found, song list being read
    Listing,

    /// Songs being fetched and saved
    Scraping,

    // ===== Terminal States =====
    /// No candidate index page answered
    NotFound,

    /// Index page found but it listed no songs
    Empty,

    /// Every selected song was attempted
    Done,
}

impl ArtistState {
    /// Returns true if no further processing happens for the artist
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotFound | Self::Empty | Self::Done)
    }

    /// Checks whether `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: ArtistState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Resolving)
                | (Self::Resolving, Self::NotFound)
                | (Self::Resolving, Self::Listing)
                | (Self::Listing, Self::Empty)
                | (Self::Listing, Self::Scraping)
                | (Self::Scraping, Self::Done)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolving => "resolving",
            Self::Listing => "listing",
            Self::Scraping => "scraping",
            Self::NotFound => "not_found",
            Self::Empty => "empty",
            Self::Done => "done",
        }
    }

    /// Returns all possible artist states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Resolving,
            Self::Listing,
            Self::Scraping,
            Self::NotFound,
            Self::Empty,
            Self::Done,
        ]
    }
}

impl fmt::Display for ArtistState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the current state of a single song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongState {
    Pending,
    Fetching,
    Extracting,

    /// Lyrics written to the corpus
    Saved,

    /// Fetch or extraction failed; recorded as an error
    Skipped,

    /// Corpus file already existed and re-scraping was disabled
    AlreadyPresent,
}

impl SongState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Saved | Self::Skipped | Self::AlreadyPresent)
    }

    pub fn can_transition_to(&self, next: SongState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetching)
                | (Self::Pending, Self::AlreadyPresent)
                | (Self::Fetching, Self::Extracting)
                | (Self::Fetching, Self::Skipped)
                | (Self::Extracting, Self::Saved)
                | (Self::Extracting, Self::Skipped)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Saved => "saved",
            Self::Skipped => "skipped",
            Self::AlreadyPresent => "already_present",
        }
    }
}

impl fmt::Display for SongState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
