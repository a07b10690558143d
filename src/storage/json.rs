//! JSON file-based storage backend.
//!
//! Each persisted key lives in its own JSON file inside the plugin data
//! directory: `search.json` holds the last search text as a JSON string,
//! `favorites.json` holds the favorite-id list as a JSON array of integers.
//! There is no schema version and no migration. Writes go through a temp file
//! and rename so a crash mid-write never leaves a half-written value behind.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::domain::error::{Result, ZshelfError};
use crate::storage::backend::Store;

/// File stem of the persisted search text.
const SEARCH_KEY: &str = "search";

/// File stem of the persisted favorite-id list.
const FAVORITES_KEY: &str = "favorites";

/// JSON file storage backend.
///
/// Stores each value under `<data_dir>/<key>.json`. Values are read fresh on
/// every load and written whole on every save; with two scalar values there is
/// nothing worth caching.
///
/// # Fallback Contract
///
/// A missing file yields the default. A file that exists but fails to read or
/// deserialize yields the default after emitting a diagnostic; it is never an
/// error to the caller. Only saves can fail.
pub struct JsonStore {
    /// Directory holding the per-key JSON files.
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a JSON store rooted at the given directory.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(dir = ?dir, "initializing JSON store");
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads a value by key, falling back to `default` on absence or corruption.
    fn load_value<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.key_path(key);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(key = key, "no stored value, using default");
                return default;
            }
            Err(e) => {
                tracing::warn!(key = key, error = %e, "failed to read stored value, using default");
                return default;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = key, error = %e, "discarding corrupt stored value, using default");
                default
            }
        }
    }

    /// Serializes and writes a value atomically (temp file + rename).
    fn save_value<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| ZshelfError::Storage(format!("failed to serialize {key}: {e}")))?;

        let path = self.key_path(key);
        let tmp_path = path.with_extension("tmp");

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;

        tracing::debug!(key = key, "value saved");
        Ok(())
    }
}

impl Store for JsonStore {
    fn load_search(&self) -> String {
        self.load_value(SEARCH_KEY, String::new())
    }

    fn save_search(&mut self, query: &str) -> Result<()> {
        self.save_value(SEARCH_KEY, &query)
    }

    fn load_favorites(&self) -> Vec<u32> {
        self.load_value(FAVORITES_KEY, Vec::new())
    }

    fn save_favorites(&mut self, ids: &[u32]) -> Result<()> {
        self.save_value(FAVORITES_KEY, &ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(store.load_search(), "");
        assert_eq!(store.load_favorites(), Vec::<u32>::new());
    }

    #[test]
    fn favorites_round_trip_across_sessions() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();
            store.save_favorites(&[2, 3]).unwrap();
        }

        // Fresh store over the same directory simulates a new session.
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.load_favorites(), vec![2, 3]);
    }

    #[test]
    fn search_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        store.save_search("dostoyevski").unwrap();
        assert_eq!(store.load_search(), "dostoyevski");

        store.save_search("").unwrap();
        assert_eq!(store.load_search(), "");
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("search.json"), "not json at all").unwrap();
        fs::write(dir.path().join("favorites.json"), "{\"wrong\": \"shape\"}").unwrap();

        assert_eq!(store.load_search(), "");
        assert_eq!(store.load_favorites(), Vec::<u32>::new());
    }

    #[test]
    fn type_mismatched_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        // Valid JSON, wrong types for both keys.
        fs::write(dir.path().join("search.json"), "[1, 2, 3]").unwrap();
        fs::write(dir.path().join("favorites.json"), "\"a string\"").unwrap();

        assert_eq!(store.load_search(), "");
        assert_eq!(store.load_favorites(), Vec::<u32>::new());
    }

    #[test]
    fn saves_overwrite_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path().to_path_buf()).unwrap();

        store.save_favorites(&[1]).unwrap();
        store.save_favorites(&[1, 4, 2]).unwrap();
        assert_eq!(store.load_favorites(), vec![1, 4, 2]);
    }
}
