//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the web platform. Entries
//! live in `window.localStorage`, which survives reloads and is shared across
//! tabs of the same origin.
//!
//! The handle is zero-size and looks the storage object up on every call:
//! `web_sys::Storage` is not `Send`, and the lookup is a cheap property read.
//!
//! Errors (storage disabled, quota exceeded, private browsing) are logged and
//! otherwise ignored. A missing storage reads as empty.

use web_sys::Storage;

use crate::kv::KeyValueStore;

/// `localStorage`-backed store for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to persist {key}: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {key}: {e:?}");
            }
        }
    }
}
