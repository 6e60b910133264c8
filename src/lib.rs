//! Personal library catalog: an ordered in-memory book store with JSON or
//! SQLite persistence, field search, and collection statistics.
//!
//! # Examples
//!
//! In-memory usage with [`session::library::Library`]:
//! ```
//! use shelfmark::{
//!     book::BookDraft,
//!     session::library::Library,
//!     types::SearchField,
//! };
//!
//! let mut library = Library::in_memory();
//! library
//!     .add_book(BookDraft::new("Dune", "Frank Herbert", 1965, "Fiction", true))
//!     .expect("add");
//! library
//!     .add_book(BookDraft::new("Foundation", "Isaac Asimov", 1951, "Science", false))
//!     .expect("add");
//!
//! let found = library.search_books("asi", SearchField::Author);
//! assert_eq!(found[0].title, "Foundation");
//!
//! let stats = library.get_library_stats();
//! assert_eq!(stats.percent_read, 50.0);
//! ```
//!
//! File-backed usage:
//! ```no_run
//! use shelfmark::{session::library::Library, settings::LibraryConfig};
//!
//! let mut library = Library::open(&LibraryConfig::default()).expect("open");
//! library.toggle_read(0);
//! for event in library.drain_events() {
//!     println!("{event:?}");
//! }
//! ```
#![warn(missing_docs)]

/// Book record, insert draft, and validation.
pub mod book;
/// Core in-memory store.
pub mod core;
/// Search and statistics views.
pub mod engine;
/// Persistence abstraction with JSON and SQLite implementations.
pub mod persist;
/// Session facade and event queue.
pub mod session;
/// Library configuration.
pub mod settings;
/// Shared primitive types and enums.
pub mod types;
