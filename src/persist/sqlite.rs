//! SQLite-backed library sink.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::debug;

use crate::{book::Book, types::Genre};

use super::{LibrarySink, PersistResult, PersistenceError};

/// SQLite implementation of [`crate::persist::LibrarySink`].
///
/// Rows are keyed by position so a load returns insertion order.
pub struct SqliteSink {
    conn: Connection,
    label: String,
}

impl SqliteSink {
    /// Opens or creates a database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let label = path.as_ref().display().to_string();
        let conn = Connection::open(path)?;
        Self::init_connection(conn, label)
    }

    /// Opens an in-memory database.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn, String::from(":memory:"))
    }

    fn init_connection(conn: Connection, label: String) -> PersistResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn, label })
    }

    /// Number of stored rows.
    pub fn row_count(&self) -> PersistResult<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

impl LibrarySink for SqliteSink {
    fn load(&mut self) -> PersistResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(
            "SELECT title, author, publication_year, genre, read_status, added_date
             FROM books ORDER BY position ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (title, author, publication_year, genre, read_status, added_date) = row?;
            let genre = genre
                .parse::<Genre>()
                .map_err(|e| PersistenceError::Message(format!("unknown genre in row: {:?}", e.0)))?;
            out.push(Book {
                title,
                author,
                publication_year,
                genre,
                read_status,
                added_date,
            });
        }
        Ok(out)
    }

    fn save(&mut self, books: &[Book]) -> PersistResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM books", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO books(position, title, author, publication_year, genre, read_status, added_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for (pos, book) in books.iter().enumerate() {
                stmt.execute(params![
                    pos as i64,
                    book.title,
                    book.author,
                    book.publication_year,
                    book.genre.as_str(),
                    book.read_status,
                    book.added_date,
                ])?;
            }
        }
        tx.commit()?;

        debug!(db = %self.label, count = books.len(), "library rows replaced");
        Ok(())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
