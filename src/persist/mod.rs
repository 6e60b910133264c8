pub mod json;
pub mod sqlite;

use std::path::PathBuf;

use thiserror::Error;

use crate::book::Book;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid library document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0}")]
    Message(String),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PersistResult<T> = Result<T, PersistenceError>;

/// Whole-collection persistence boundary.
///
/// Sinks hold no copy of the records; every save receives the full ordered
/// sequence.
pub trait LibrarySink {
    /// Reads the persisted sequence. A missing backing file is an empty library.
    fn load(&mut self) -> PersistResult<Vec<Book>>;
    /// Replaces the persisted sequence with `books`.
    fn save(&mut self, books: &[Book]) -> PersistResult<()>;
    /// Human-readable location used in log lines.
    fn describe(&self) -> String {
        String::from("<unnamed sink>")
    }
}
