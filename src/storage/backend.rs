//! Storage backend abstraction.
//!
//! This module defines the [`Store`] trait that abstracts over persistence
//! backends for the two durable values the plugin keeps: the last search text
//! and the favorite-id list.
//!
//! # Design Philosophy
//!
//! The trait is deliberately asymmetric. Loads are infallible by contract —
//! a missing or corrupt value degrades to its default rather than erroring,
//! so the UI can always start. Saves are best-effort and report failures to
//! the caller, which logs them and moves on; no failure ever reaches the UI.

use crate::domain::error::Result;

/// Abstraction over persistent key-value storage for plugin state.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): one JSON file per key (default)
pub trait Store: Send {
    /// Loads the last search text.
    ///
    /// Returns the empty string when no value is stored or the stored value
    /// cannot be deserialized.
    fn load_search(&self) -> String;

    /// Persists the search text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    fn save_search(&mut self, query: &str) -> Result<()>;

    /// Loads the favorite-id list.
    ///
    /// Returns an empty list when no value is stored or the stored value
    /// cannot be deserialized.
    fn load_favorites(&self) -> Vec<u32>;

    /// Persists the favorite-id list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    fn save_favorites(&mut self, ids: &[u32]) -> Result<()>;
}
