use chrono::{DateTime, Local};

use crate::{
    book::{Book, BookDraft, ValidationError},
    types::Position,
};

/// Ordered, in-memory collection of every record in the session.
///
/// Position in the sequence is the only identity a record has; removals shift
/// later records down by one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn export_snapshot(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Swaps the whole collection, used after a load.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Validates `draft`, stamps it with the local clock and appends it.
    pub fn add(&mut self, draft: BookDraft) -> Result<Book, ValidationError> {
        self.add_at(draft, Local::now())
    }

    /// Same as [`BookStore::add`] with an explicit clock reading.
    pub fn add_at(&mut self, draft: BookDraft, now: DateTime<Local>) -> Result<Book, ValidationError> {
        let book = draft.into_book(now)?;
        self.books.push(book.clone());
        Ok(book)
    }

    /// Out-of-range positions are a no-op returning false.
    pub fn remove(&mut self, position: Position) -> bool {
        if position >= self.books.len() {
            return false;
        }
        self.books.remove(position);
        true
    }

    pub fn toggle_read(&mut self, position: Position) -> bool {
        let Some(book) = self.books.get_mut(position) else {
            return false;
        };
        book.read_status = !book.read_status;
        true
    }

    pub fn get(&self, position: Position) -> Option<&Book> {
        self.books.get(position)
    }

    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
