//! # Filesystem-backed slot
//!
//! [`FileStore`] persists the collection slot as a single JSON file. It is
//! the backend used by the desktop launcher to retain records across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <slot>.json            # the serialized collection
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] in the caller to obtain a platform-appropriate
//! base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/registry/` |
//! | Linux | `~/.local/share/registry/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\registry\` |

use std::path::PathBuf;

use crate::error::SlotError;
use crate::registry::StateSlot;

/// Filesystem-backed slot for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    slot: String,
}

impl FileStore {
    pub fn new(base: PathBuf, slot: &str) -> Self {
        Self {
            base,
            slot: slot.to_string(),
        }
    }

    fn slot_path(&self) -> PathBuf {
        self.base.join(format!("{}.json", self.slot))
    }
}

impl StateSlot for FileStore {
    async fn load(&self) -> Result<Option<String>, SlotError> {
        match std::fs::read_to_string(self.slot_path()) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotError(err.to_string())),
        }
    }

    async fn save(&self, payload: &str) -> Result<(), SlotError> {
        std::fs::create_dir_all(&self.base).map_err(|err| SlotError(err.to_string()))?;
        std::fs::write(self.slot_path(), payload).map_err(|err| SlotError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormDraft;
    use crate::registry::Registry;
    use crate::{RegistryError, SequentialIds};

    fn draft(name: &str) -> FormDraft {
        FormDraft {
            name: name.to_string(),
            national_id: "123.456.789-01".to_string(),
            email: "a@x.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
            gender: "male".to_string(),
            postal_code: "01310-100".to_string(),
            birth_date: "1985-01-02".to_string(),
        }
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("registry_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone(), "users");
        let mut registry = Registry::with_ids(store, SequentialIds::new());
        registry.create(&draft("Ana")).await.unwrap();
        registry.create(&draft("Bruno")).await.unwrap();

        // Re-open from the same directory
        let store2 = FileStore::new(dir.clone(), "users");
        let mut reloaded = Registry::new(store2);
        reloaded.hydrate().await.unwrap();
        assert_eq!(reloaded.list(), registry.list());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_file_hydrates_empty() {
        let dir = std::env::temp_dir().join(format!("registry_absent_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut registry = Registry::new(FileStore::new(dir, "users"));
        registry.hydrate().await.unwrap();
        assert!(registry.list().is_empty());
    }

    #[tokio::test]
    async fn test_garbage_file_is_corrupt_state() {
        let dir = std::env::temp_dir().join(format!("registry_corrupt_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("users.json"), "{{{").unwrap();

        let mut registry = Registry::new(FileStore::new(dir.clone(), "users"));
        let err = registry.hydrate().await.unwrap_err();
        assert!(matches!(err, RegistryError::CorruptState { .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
