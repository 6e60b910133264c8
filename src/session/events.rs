//! Event payloads queued by [`crate::session::library::Library`].

use crate::types::Position;

/// Notices the presentation layer drains after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    /// Persisted records were read.
    Loaded {
        /// Records now in the store.
        count: usize,
    },
    /// Loading failed and the store was left empty.
    LoadFailed {
        /// Failure text.
        reason: String,
    },
    /// A book was appended.
    BookAdded {
        /// Position of the new record.
        position: Position,
    },
    /// A book was removed; later positions shifted down.
    BookRemoved {
        /// Position the record occupied.
        position: Position,
    },
    /// A book's read status flipped.
    ReadToggled {
        /// Position of the record.
        position: Position,
        /// Status after the flip.
        read_status: bool,
    },
    /// The full collection was written.
    Saved {
        /// Records written.
        count: usize,
    },
    /// Writing failed; the in-memory state is kept.
    SaveFailed {
        /// Failure text.
        reason: String,
    },
}
