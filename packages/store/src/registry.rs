//! # Registry — the record store over an abstract persistence slot
//!
//! This module is the core of the registry. [`Registry`] owns the ordered
//! in-memory collection of [`UserRecord`]s and keeps a single named storage
//! slot in sync with it: every mutation serializes the full collection and
//! writes it through before the operation reports success, and
//! [`Registry::hydrate`] (called once at startup) reads the slot back in
//! full. All persistence goes through the [`StateSlot`] trait, so the same
//! logic works against an in-memory slot (tests, desktop fallback), a file
//! on disk (desktop), or IndexedDB (web).
//!
//! ## [`StateSlot`] trait
//!
//! An async interface with two methods — `load` returns the slot payload if
//! one was ever written, `save` replaces it. Implementations live in sibling
//! modules ([`crate::memory`], [`crate::file_store`], [`crate::idb`]).
//!
//! ## Slot payload
//!
//! A JSON array of records using the camelCase field names declared on
//! [`UserRecord`]:
//!
//! ```json
//! [{"id":"...","name":"...","nationalId":"...","email":"...",
//!   "phone":"...","gender":"female","postalCode":"...","birthDate":"..."}]
//! ```
//!
//! ## Consistency
//!
//! When a slot write fails the in-memory collection is rolled back to its
//! pre-mutation shape, so memory never runs ahead of what the caller was told
//! was persisted. A payload that fails to decode at hydration surfaces as
//! [`RegistryError::CorruptState`]; the collection stays empty and the next
//! successful mutation overwrites the slot.

use crate::error::{RegistryError, SlotError};
use crate::form::FormDraft;
use crate::id::{ClockIds, IdGenerator};
use crate::models::UserRecord;

/// Async interface to the single named slot holding the serialized collection.
pub trait StateSlot {
    /// Read the current payload, `None` if the slot was never written.
    fn load(&self) -> impl std::future::Future<Output = Result<Option<String>, SlotError>>;
    /// Replace the payload.
    fn save(
        &self,
        payload: &str,
    ) -> impl std::future::Future<Output = Result<(), SlotError>>;
}

/// The authoritative ordered collection of user records, persisted through a
/// [`StateSlot`] on every mutation.
pub struct Registry<S: StateSlot, G: IdGenerator = ClockIds> {
    slot: S,
    ids: G,
    records: Vec<UserRecord>,
}

impl<S: StateSlot> Registry<S> {
    /// A registry with the default clock-derived id generator.
    pub fn new(slot: S) -> Self {
        Self::with_ids(slot, ClockIds::new())
    }
}

impl<S: StateSlot, G: IdGenerator> Registry<S, G> {
    pub fn with_ids(slot: S, ids: G) -> Self {
        Self {
            slot,
            ids,
            records: Vec::new(),
        }
    }

    /// Load the persisted collection. A missing slot yields an empty
    /// collection; an undecodable payload yields
    /// [`RegistryError::CorruptState`] and leaves the collection empty.
    pub async fn hydrate(&mut self) -> Result<(), RegistryError> {
        self.records.clear();
        let Some(payload) = self.slot.load().await? else {
            return Ok(());
        };
        self.records = serde_json::from_str(&payload)
            .map_err(|err| RegistryError::CorruptState {
                reason: err.to_string(),
            })?;
        tracing::debug!(count = self.records.len(), "hydrated user records");
        Ok(())
    }

    /// The full collection in insertion order. Edits keep their position;
    /// creates append.
    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    /// Validate the draft, mint a unique id, append and persist.
    pub async fn create(&mut self, draft: &FormDraft) -> Result<UserRecord, RegistryError> {
        let id = self.fresh_id();
        let record = draft.build(id)?;
        self.records.push(record.clone());
        if let Err(err) = self.persist().await {
            self.records.pop();
            return Err(err);
        }
        tracing::debug!(id = %record.id, "created user record");
        Ok(record)
    }

    /// Replace every field except `id` of an existing record, in place.
    pub async fn update(&mut self, id: &str, draft: &FormDraft) -> Result<UserRecord, RegistryError> {
        let index = self.position(id)?;
        let record = draft.build(id.to_string())?;
        let previous = std::mem::replace(&mut self.records[index], record.clone());
        if let Err(err) = self.persist().await {
            self.records[index] = previous;
            return Err(err);
        }
        tracing::debug!(id = %record.id, "updated user record");
        Ok(record)
    }

    /// Remove a record immediately. No tombstone is kept.
    pub async fn delete(&mut self, id: &str) -> Result<(), RegistryError> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        if let Err(err) = self.persist().await {
            self.records.insert(index, removed);
            return Err(err);
        }
        tracing::debug!(id, "deleted user record");
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize, RegistryError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    /// Draw ids until one is free in the current collection. The hydrated
    /// collection may carry ids from a previous session's clock.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.records.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }

    async fn persist(&self) -> Result<(), RegistryError> {
        let payload = serde_json::to_string(&self.records)
            .map_err(|err| SlotError(err.to_string()))?;
        self.slot.save(&payload).await?;
        Ok(())
    }
}
