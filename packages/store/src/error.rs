//! Error taxonomy for the registry core.
//!
//! Everything here is surfaced to the presentation layer; the core performs
//! no retries since all operations are local and synchronous from the
//! caller's point of view.

use crate::models::Field;

/// Failure raised by a persistence backend while reading or writing the
/// collection slot.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{0}")]
pub struct SlotError(pub String);

/// Failures surfaced by [`crate::Registry`] and [`crate::FormSession`].
#[derive(Clone, Debug, thiserror::Error)]
pub enum RegistryError {
    /// Required fields were empty (or unparsable) at commit time.
    #[error("missing required fields: {}", format_fields(.missing))]
    Validation { missing: Vec<Field> },

    /// An update or delete referenced an id not present in the collection.
    #[error("no record with id {id}")]
    NotFound { id: String },

    /// The persisted collection could not be decoded at hydration.
    #[error("persisted state is unreadable: {reason}")]
    CorruptState { reason: String },

    /// Commit was invoked while no form session was open. Never reachable
    /// from the UI, which only renders the form while a session is open.
    #[error("no form session is open")]
    SessionClosed,

    /// The persistence backend failed.
    #[error(transparent)]
    Slot(#[from] SlotError),
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}
