use std::sync::{Arc, Mutex};

use crate::error::SlotError;
use crate::registry::StateSlot;

/// In-memory slot for tests and as a last-resort fallback. Clones share the
/// same payload, so a second [`crate::Registry`] over a clone sees what the
/// first one persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    payload: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateSlot for MemoryStore {
    async fn load(&self) -> Result<Option<String>, SlotError> {
        Ok(self.payload.lock().unwrap().clone())
    }

    async fn save(&self, payload: &str) -> Result<(), SlotError> {
        *self.payload.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormDraft;
    use crate::models::Gender;
    use crate::registry::Registry;
    use crate::{RegistryError, SequentialIds};

    fn draft(name: &str) -> FormDraft {
        FormDraft {
            name: name.to_string(),
            national_id: "123.456.789-01".to_string(),
            email: "a@x.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
            gender: "female".to_string(),
            postal_code: "01310-100".to_string(),
            birth_date: "1990-05-20".to_string(),
        }
    }

    fn registry() -> Registry<MemoryStore, SequentialIds> {
        Registry::with_ids(MemoryStore::new(), SequentialIds::new())
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let mut registry = registry();

        let record = registry.create(&draft("Ana Silva")).await.unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(record.name, "Ana Silva");
        assert_eq!(record.national_id, "123.456.789-01");
        assert_eq!(record.phone, "(11) 98765-4321");
        assert_eq!(record.postal_code, "01310-100");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.birth_date, "1990-05-20");

        let listed = registry.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], record);
    }

    #[tokio::test]
    async fn test_create_requires_all_fields() {
        let mut registry = registry();
        let mut partial = draft("Ana");
        partial.email = String::new();
        partial.gender = String::new();

        let err = registry.create(&partial).await.unwrap_err();
        assert!(matches!(err, RegistryError::Validation { .. }));
        assert!(registry.list().is_empty());
    }

    #[tokio::test]
    async fn test_update_preserves_order_and_neighbors() {
        let mut registry = registry();
        let a = registry.create(&draft("Ana")).await.unwrap();
        let b = registry.create(&draft("Bruno")).await.unwrap();
        let c = registry.create(&draft("Carla")).await.unwrap();

        let mut edited = draft("Bruno Souza");
        edited.phone = "(21) 91234-5678".to_string();
        let updated = registry.update(&b.id, &edited).await.unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.phone, "(21) 91234-5678");

        let ids: Vec<&str> = registry.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
        assert_eq!(registry.list()[0], a);
        assert_eq!(registry.list()[1].name, "Bruno Souza");
        assert_eq!(registry.list()[2], c);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let mut registry = registry();
        let err = registry.update("nope", &draft("Ana")).await.unwrap_err();
        match err {
            RegistryError::NotFound { id } => assert_eq!(id, "nope"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_immediately() {
        let store = MemoryStore::new();
        let mut registry = Registry::with_ids(store.clone(), SequentialIds::new());
        let a = registry.create(&draft("Ana")).await.unwrap();
        let b = registry.create(&draft("Bruno")).await.unwrap();

        registry.delete(&a.id).await.unwrap();
        assert!(registry.list().iter().all(|r| r.id != a.id));
        assert_eq!(registry.list().len(), 1);

        // The removal is already durable: a fresh registry over the same
        // slot hydrates without the deleted record.
        let mut reloaded = Registry::new(store);
        reloaded.hydrate().await.unwrap();
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.list()[0].id, b.id);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_unchanged() {
        let mut registry = registry();
        registry.create(&draft("Ana")).await.unwrap();

        let err = registry.delete("nope").await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
        assert_eq!(registry.list().len(), 1);
    }

    #[tokio::test]
    async fn test_roundtrip_through_shared_slot() {
        let store = MemoryStore::new();
        let mut registry = Registry::with_ids(store.clone(), SequentialIds::new());
        registry.create(&draft("Ana")).await.unwrap();
        registry.create(&draft("Bruno")).await.unwrap();

        let mut reloaded = Registry::new(store);
        reloaded.hydrate().await.unwrap();
        assert_eq!(reloaded.list(), registry.list());
    }

    #[tokio::test]
    async fn test_hydrate_missing_slot_is_empty() {
        let mut registry = registry();
        registry.hydrate().await.unwrap();
        assert!(registry.list().is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_corrupt_payload() {
        let store = MemoryStore::new();
        store.save("not json at all").await.unwrap();

        let mut registry = Registry::new(store);
        let err = registry.hydrate().await.unwrap_err();
        assert!(matches!(err, RegistryError::CorruptState { .. }));
        assert!(registry.list().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_creates_get_distinct_ids() {
        // Default clock ids: two creates inside the same millisecond must
        // still come out distinct.
        let mut registry = Registry::new(MemoryStore::new());
        let a = registry.create(&draft("Ana")).await.unwrap();
        let b = registry.create(&draft("Bruno")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_fresh_id_skips_ids_already_in_the_collection() {
        let store = MemoryStore::new();
        let mut registry = Registry::with_ids(store.clone(), SequentialIds::new());
        registry.create(&draft("Ana")).await.unwrap(); // takes id "1"

        // A new registry over the same slot restarts its counter at "1",
        // which is taken after hydration.
        let mut second = Registry::with_ids(store, SequentialIds::new());
        second.hydrate().await.unwrap();
        let b = second.create(&draft("Bruno")).await.unwrap();
        assert_eq!(b.id, "2");
    }
}
