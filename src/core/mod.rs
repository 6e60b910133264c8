//! In-memory authoritative store.

/// Ordered book store.
pub mod store;
