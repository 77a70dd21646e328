//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop, where there is no
//! `localStorage`. Each key is one file so that a write never has to rewrite
//! unrelated entries.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json      # raw value as written by the caller
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to pick a base directory:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/accesslens/` |
//! | Linux | `~/.local/share/accesslens/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\accesslens\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed store for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to write {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.entry_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(path) {
                tracing::warn!("Failed to remove {key}: {e}");
            }
        }
    }
}
