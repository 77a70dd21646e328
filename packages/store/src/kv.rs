//! # Key-value storage port
//!
//! [`KeyValueStore`] is the seam between client state and whatever the platform
//! offers for persistence. Implementations:
//!
//! | Store | Platform | Backing |
//! |-------|----------|---------|
//! | [`crate::MemoryStore`] | tests, fallback | `HashMap` behind a mutex |
//! | [`crate::FileStore`] | desktop | one JSON file per key |
//! | `LocalStore` | web (`web` feature) | `window.localStorage` |
//!
//! Storage is best-effort. Reads return `None` when the backend is unavailable
//! and writes log and carry on, so a full or disabled storage degrades to an
//! in-memory session instead of an error on screen.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A string-keyed, string-valued persistence backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);

    /// Read and decode a JSON value.
    ///
    /// `Ok(None)` when the key is absent, `Err` when the stored text does not
    /// decode as `T`. Callers decide whether a corrupt entry should be dropped.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        match self.get(key) {
            Some(raw) => serde_json::from_str(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(e) => tracing::warn!("Failed to encode value for {key}: {e}"),
        }
    }
}
