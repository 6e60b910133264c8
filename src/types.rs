//! Shared primitive aliases, limits, and catalog enums.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Zero-based position of a record in the store's insertion order.
pub type Position = usize;

/// Earliest accepted publication year.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;
/// Maximum length of title and author, in characters.
pub const MAX_TEXT_LEN: usize = 100;

/// Closed set of genres a book can be filed under.
///
/// The serialized spelling of each variant is part of the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Fiction.
    Fiction,
    /// Non-fiction.
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    /// Science.
    Science,
    /// Technology.
    Technology,
    /// Fantasy.
    Fantasy,
    /// History.
    History,
    /// Art.
    Art,
    /// Religion.
    Religion,
}

impl Genre {
    /// Every genre, in form order.
    pub const ALL: [Genre; 8] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::Technology,
        Genre::Fantasy,
        Genre::History,
        Genre::Art,
        Genre::Religion,
    ];

    /// Wire spelling of the genre.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Science => "Science",
            Genre::Technology => "Technology",
            Genre::Fantasy => "Fantasy",
            Genre::History => "History",
            Genre::Art => "Art",
            Genre::Religion => "Religion",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// Record field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Match against the title.
    Title,
    /// Match against the author.
    Author,
    /// Match against the genre's wire spelling.
    Genre,
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            other => Err(format!("unknown search field: {other}")),
        }
    }
}
