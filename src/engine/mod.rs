//! Read-side views over the current store.

/// Field substring search.
pub mod search;
/// Aggregate statistics snapshot.
pub mod stats;
/// First-seen ordered counters.
pub mod tally;
