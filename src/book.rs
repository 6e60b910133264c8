//! Book record, insert draft, and draft validation.

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Genre, MAX_TEXT_LEN, MIN_PUBLICATION_YEAR};

/// `chrono` layout of [`Book::added_date`].
pub const ADDED_DATE_FORMAT: &str = "%y-%m-%d-%H:%M;%S";

/// Reasons a [`BookDraft`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty or only whitespace.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Author is empty or only whitespace.
    #[error("author must not be empty")]
    EmptyAuthor,
    /// Title is longer than allowed.
    #[error("title is longer than {max} characters")]
    TitleTooLong {
        /// Allowed maximum.
        max: usize,
    },
    /// Author is longer than allowed.
    #[error("author is longer than {max} characters")]
    AuthorTooLong {
        /// Allowed maximum.
        max: usize,
    },
    /// Publication year outside the accepted range.
    #[error("publication year {year} is outside {min}..={max}")]
    YearOutOfRange {
        /// Rejected year.
        year: i32,
        /// Earliest accepted year.
        min: i32,
        /// Latest accepted year.
        max: i32,
    },
    /// Genre text is not one of the closed set.
    #[error("unknown genre {0:?}")]
    UnknownGenre(String),
}

/// Fully materialized catalog record.
///
/// Field names are the persisted document's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title as entered.
    pub title: String,
    /// Author as entered.
    pub author: String,
    /// Year of publication.
    pub publication_year: i32,
    /// Genre bucket.
    pub genre: Genre,
    /// True once the book has been read.
    pub read_status: bool,
    /// Creation stamp, see [`ADDED_DATE_FORMAT`]. Opaque once stored.
    pub added_date: String,
}

/// Insert payload used to create a new [`Book`].
///
/// Genre is carried as text, the way a form submits it, and checked against
/// the closed set during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Title text.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Year of publication.
    pub publication_year: i32,
    /// Genre text.
    pub genre: String,
    /// Initial read status.
    pub read_status: bool,
}

impl BookDraft {
    /// Builds a draft from borrowed form values.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: impl Into<String>,
        read_status: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre: genre.into(),
            read_status,
        }
    }

    /// Checks every constraint and resolves the genre.
    pub fn validate(&self, current_year: i32) -> Result<Genre, ValidationError> {
        check_text(&self.title, ValidationError::EmptyTitle, |max| {
            ValidationError::TitleTooLong { max }
        })?;
        check_text(&self.author, ValidationError::EmptyAuthor, |max| {
            ValidationError::AuthorTooLong { max }
        })?;

        if !(MIN_PUBLICATION_YEAR..=current_year).contains(&self.publication_year) {
            return Err(ValidationError::YearOutOfRange {
                year: self.publication_year,
                min: MIN_PUBLICATION_YEAR,
                max: current_year,
            });
        }

        self.genre
            .parse::<Genre>()
            .map_err(|e| ValidationError::UnknownGenre(e.0))
    }

    /// Validates against `now` and stamps the resulting record.
    pub fn into_book(self, now: DateTime<Local>) -> Result<Book, ValidationError> {
        let genre = self.validate(now.year())?;
        Ok(Book {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            genre,
            read_status: self.read_status,
            added_date: format_added_date(now),
        })
    }
}

/// Renders `at` in the persisted `added_date` layout.
pub fn format_added_date(at: DateTime<Local>) -> String {
    at.format(ADDED_DATE_FORMAT).to_string()
}

fn check_text(
    value: &str,
    empty: ValidationError,
    too_long: impl FnOnce(usize) -> ValidationError,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(empty);
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(too_long(MAX_TEXT_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn added_date_uses_semicolon_before_seconds() {
        assert_eq!(format_added_date(at(2024, 3, 7, 9, 5, 2)), "24-03-07-09:05;02");
    }

    #[test]
    fn into_book_keeps_text_as_entered() {
        let book = BookDraft::new("  Dune ", "Herbert", 1965, "Fiction", true)
            .into_book(at(2024, 1, 1, 0, 0, 0))
            .expect("valid");
        assert_eq!(book.title, "  Dune ");
        assert_eq!(book.genre, Genre::Fiction);
        assert!(book.read_status);
    }

    #[test]
    fn validate_rejects_blank_and_long_text() {
        let blank = BookDraft::new("   ", "Herbert", 1965, "Fiction", false);
        assert_eq!(blank.validate(2024), Err(ValidationError::EmptyTitle));

        let no_author = BookDraft::new("Dune", "", 1965, "Fiction", false);
        assert_eq!(no_author.validate(2024), Err(ValidationError::EmptyAuthor));

        let long = BookDraft::new("x".repeat(MAX_TEXT_LEN + 1), "A", 1965, "Art", false);
        assert_eq!(
            long.validate(2024),
            Err(ValidationError::TitleTooLong { max: MAX_TEXT_LEN })
        );

        let exact = BookDraft::new("é".repeat(MAX_TEXT_LEN), "A", 1965, "Art", false);
        assert!(exact.validate(2024).is_ok());
    }

    #[test]
    fn validate_checks_year_bounds_inclusive() {
        let mk = |year| BookDraft::new("T", "A", year, "History", false);
        assert!(mk(1000).validate(2024).is_ok());
        assert!(mk(2024).validate(2024).is_ok());
        assert_eq!(
            mk(999).validate(2024),
            Err(ValidationError::YearOutOfRange { year: 999, min: 1000, max: 2024 })
        );
        assert!(mk(2025).validate(2024).is_err());
    }

    #[test]
    fn validate_rejects_unknown_genre() {
        let d = BookDraft::new("T", "A", 2000, "Poetry", false);
        assert_eq!(
            d.validate(2024),
            Err(ValidationError::UnknownGenre("Poetry".to_string()))
        );
    }

    #[test]
    fn book_json_uses_wire_field_names() {
        let book = Book {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            publication_year: 1965,
            genre: Genre::NonFiction,
            read_status: false,
            added_date: "24-03-07-09:05;02".to_string(),
        };
        let value = serde_json::to_value(&book).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Dune",
                "author": "Herbert",
                "publication_year": 1965,
                "genre": "Non-Fiction",
                "read_status": false,
                "added_date": "24-03-07-09:05;02",
            })
        );
    }
}
