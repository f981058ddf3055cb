//! # IndexedDB slot — browser-side persistence
//!
//! [`IdbStore`] is the [`StateSlot`] implementation used on the **web
//! platform**. It keeps the serialized collection in the browser's IndexedDB
//! via the [`rexie`] crate, so records survive page reloads the same way the
//! desktop build survives restarts.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"registry"` (version 1) with one object
//! store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"slots"` | slot name (e.g. `"users"`) | the JSON payload string |
//!
//! ## Connection management
//!
//! `IdbStore` opens a fresh [`Rexie`] connection on every operation. `Rexie`
//! does not implement `Clone`, and reopening is cheap because the browser
//! caches IndexedDB connections internally.

use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

use crate::error::SlotError;
use crate::registry::StateSlot;

const DB_NAME: &str = "registry";
const DB_VERSION: u32 = 1;
const SLOTS_STORE: &str = "slots";

/// IndexedDB-backed slot for the web platform.
#[derive(Clone, Debug)]
pub struct IdbStore {
    slot: String,
}

impl IdbStore {
    /// A store over the default `"users"` slot.
    pub fn new() -> Self {
        Self::with_slot("users")
    }

    /// A store over a named slot within the shared `"registry"` database.
    pub fn with_slot(slot: &str) -> Self {
        Self {
            slot: slot.to_string(),
        }
    }

    async fn open_db(&self) -> Result<Rexie, SlotError> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(SLOTS_STORE))
            .build()
            .await
            .map_err(|err| SlotError(err.to_string()))
    }
}

impl Default for IdbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateSlot for IdbStore {
    async fn load(&self) -> Result<Option<String>, SlotError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[SLOTS_STORE], TransactionMode::ReadOnly)
            .map_err(|err| SlotError(err.to_string()))?;
        let store = tx.store(SLOTS_STORE).map_err(|err| SlotError(err.to_string()))?;

        let key = JsValue::from_str(&self.slot);
        let value = store
            .get(key)
            .await
            .map_err(|err| SlotError(err.to_string()))?;

        Ok(value.and_then(|v| v.as_string()))
    }

    async fn save(&self, payload: &str) -> Result<(), SlotError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[SLOTS_STORE], TransactionMode::ReadWrite)
            .map_err(|err| SlotError(err.to_string()))?;
        let store = tx.store(SLOTS_STORE).map_err(|err| SlotError(err.to_string()))?;

        let key = JsValue::from_str(&self.slot);
        let value = JsValue::from_str(payload);
        store
            .put(&value, Some(&key))
            .await
            .map_err(|err| SlotError(err.to_string()))?;
        tx.done().await.map_err(|err| SlotError(err.to_string()))?;
        Ok(())
    }
}
