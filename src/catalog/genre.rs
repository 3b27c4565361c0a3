/// Genre identifiers for the fixed set of musical styles the crawler knows about
use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A musical genre scoping a sub-catalog of artists
///
/// Serialized as its lowercase identifier, which is also the name of the
/// genre's directory in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    HipHop,
    Rnb,
    Pop,
    Country,
    Jazz,
    African,
    Latin,
}

impl Genre {
    /// Every genre, in catalog order
    pub const ALL: [Genre; 7] = [
        Genre::HipHop,
        Genre::Rnb,
        Genre::Pop,
        Genre::Country,
        Genre::Jazz,
        Genre::African,
        Genre::Latin,
    ];

    /// The identifier used in config files, CLI arguments and directory names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HipHop => "hiphop",
            Self::Rnb => "rnb",
            Self::Pop => "pop",
            Self::Country => "country",
            Self::Jazz => "jazz",
            Self::African => "african",
            Self::Latin => "latin",
        }
    }
}

impl FromStr for Genre {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
