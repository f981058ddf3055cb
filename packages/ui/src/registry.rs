//! Shared registry constructor for all platforms.
//!
//! Returns a [`store::Registry`] backed by the appropriate [`store::StateSlot`]:
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop** (native): filesystem via [`store::FileStore`], honouring an
//!   optional `registry.toml` next to the data directory

use store::{Registry, StateSlot};

/// Create a platform-appropriate registry over the configured slot.
///
/// The returned registry has not been hydrated yet; callers run
/// [`store::Registry::hydrate`] before first use.
pub fn make_registry() -> Registry<impl StateSlot> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Registry::new(store::IdbStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let config = load_config();
        let base = if config.storage.data_dir.is_empty() {
            default_data_dir()
        } else {
            std::path::PathBuf::from(&config.storage.data_dir)
        };
        Registry::new(store::FileStore::new(base, &config.storage.slot))
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn default_data_dir() -> std::path::PathBuf {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("registry")
    }
    #[cfg(target_arch = "wasm32")]
    {
        std::path::PathBuf::from(".")
    }
}

/// Read `registry.toml` from the data directory, falling back to defaults
/// when the file is absent or unreadable.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn load_config() -> store::RegistryConfig {
    let path = default_data_dir().join(store::RegistryConfig::filename());
    match std::fs::read_to_string(&path) {
        Ok(text) => store::RegistryConfig::from_toml(&text).unwrap_or_else(|err| {
            tracing::warn!("ignoring invalid {}: {err}", store::RegistryConfig::filename());
            store::RegistryConfig::default()
        }),
        Err(_) => store::RegistryConfig::default(),
    }
}
