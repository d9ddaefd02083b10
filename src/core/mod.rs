//! Backing store capabilities and the secondary key index.

/// Key index rebuilt on demand from the backing store.
pub mod indices;
/// Backing store and record capabilities plus the Vec-backed default store.
pub mod store;
