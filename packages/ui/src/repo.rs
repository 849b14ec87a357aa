//! Shared repository constructor for all platforms.
//!
//! Returns a [`store::Repository`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: one file per key via `store::FileStore`, under `<data_dir>/vibecollab/`
//! - **WASM without `web`**: an in-memory store that lives as long as the page
//!
//! The config is `vibecollab.toml` in the native data directory, or the
//! `vibecollab.toml` key of the store in the browser. Missing or malformed
//! config means defaults.

use store::Repository;
#[cfg(not(target_arch = "wasm32"))]
use store::VibeConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The repository type every component talks to.
pub type VibeRepo = Repository<PlatformStore>;

/// Create the platform-appropriate repository with its configured key layout.
pub fn make_repo() -> VibeRepo {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Repository::open(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("vibecollab");
        let config_path = base.join(VibeConfig::filename());
        let text = match std::fs::read_to_string(&config_path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "cannot read config");
                None
            }
        };
        let config = VibeConfig::from_toml_or_default(text.as_deref());
        tracing::debug!(path = %config_path.display(), "loaded config");
        Repository::with_config(store::FileStore::new(base), config)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Repository::open(store::MemoryStore::new())
    }
}
