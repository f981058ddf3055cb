pub mod config;
pub mod form;
pub mod mask;
pub mod models;
pub mod registry;

mod error;
pub use error::{RegistryError, SlotError};

mod id;
pub use id::{ClockIds, IdGenerator, SequentialIds};

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use config::RegistryConfig;
pub use form::{FormDraft, FormSession, FormState};
pub use models::{Field, Gender, UserRecord};
pub use registry::{Registry, StateSlot};
