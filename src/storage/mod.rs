//! Storage layer for persisted plugin state.
//!
//! This module provides the persistence abstraction for the two durable values
//! the plugin keeps across sessions: the last search text and the favorite-id
//! list. Loads degrade to defaults on any failure; saves are best-effort.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation (one file per key)

pub mod backend;
pub mod json;

pub use backend::Store;
pub use json::JsonStore;
