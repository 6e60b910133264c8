//! Session facade and the events it queues for the presentation layer.

/// Notices queued by the library.
pub mod events;
/// Library facade.
pub mod library;
