//! JSON document sink.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::book::Book;

use super::{LibrarySink, PersistResult, PersistenceError};

/// Stores the library as one JSON array of flat book objects.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileSink {
    /// Sink writing compact JSON to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Toggles indented output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self, books: &[Book]) -> PersistResult<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(books)?
        } else {
            serde_json::to_vec(books)?
        };
        Ok(bytes)
    }
}

impl LibrarySink for JsonFileSink {
    fn load(&mut self) -> PersistResult<Vec<Book>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no library document yet");
            return Ok(Vec::new());
        }

        let raw = fs::read(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        let books: Vec<Book> = serde_json::from_slice(&raw)?;
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> PersistResult<()> {
        let payload = self.encode(books)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| PersistenceError::io(&dir, e))?;

        // Readers see either the old document or the new one, never a prefix.
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| PersistenceError::io(&dir, e))?;
        tmp.write_all(&payload)
            .map_err(|e| PersistenceError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| PersistenceError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| PersistenceError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = books.len(), "library document written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
