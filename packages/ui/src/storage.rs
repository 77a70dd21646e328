//! Platform storage constructor.
//!
//! Returns the [`store::KeyValueStore`] the session is persisted in:
//! - **Web** (WASM + `web` feature): `localStorage` via `store::LocalStore`
//! - **Desktop** (native): files under `<data_dir>/accesslens/` via [`store::FileStore`]
//! - **WASM without `web`**: in-memory only

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate session store.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("accesslens");
        store::FileStore::new(base)
    }
}
