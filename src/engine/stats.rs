use std::collections::BTreeMap;

use serde::Serialize;

use crate::{book::Book, types::Genre};

use super::tally::FirstSeenTally;

/// Aggregate view of the library at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total: usize,
    pub read_count: usize,
    pub unread_count: usize,
    /// Share of read books in percent; `0.0` for an empty library.
    pub percent_read: f64,
    /// Count per genre, most frequent first.
    pub by_genre: Vec<(Genre, usize)>,
    /// Count per author, most frequent first.
    pub by_author: Vec<(String, usize)>,
    /// Count per decade start year, ascending.
    pub by_decade: BTreeMap<i32, usize>,
}

/// Start year of the decade containing `year`.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

pub fn compute(books: &[Book]) -> StatsSnapshot {
    let total = books.len();
    let read_count = books.iter().filter(|b| b.read_status).count();

    let mut by_genre = FirstSeenTally::new();
    let mut by_author = FirstSeenTally::new();
    let mut by_decade = BTreeMap::new();
    for book in books {
        by_genre.bump(&book.genre);
        by_author.bump(&book.author);
        *by_decade.entry(decade_of(book.publication_year)).or_insert(0) += 1;
    }

    let percent_read = if total > 0 {
        read_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    StatsSnapshot {
        total,
        read_count,
        unread_count: total - read_count,
        percent_read,
        by_genre: by_genre.into_ranked(),
        by_author: by_author.into_ranked(),
        by_decade,
    }
}
