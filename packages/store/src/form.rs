//! # Form session — the single active create/edit interaction
//!
//! [`FormSession`] mediates the registration form: which record (if any) is
//! being edited, the draft field values, and the commit/cancel transitions.
//! The draft holds every field as the raw string the UI produced, with the
//! three maskable fields re-formatted through [`crate::mask`] on every
//! [`change_field`](FormSession::change_field) call, so the draft is exactly
//! what the user sees in the inputs.
//!
//! Validation is explicit: [`commit`](FormSession::commit) refuses to touch
//! the registry while any required field is empty, returning the missing
//! fields so the UI can mark them and keep the form open.

use crate::error::RegistryError;
use crate::id::IdGenerator;
use crate::mask;
use crate::models::{Field, Gender, UserRecord};
use crate::registry::{Registry, StateSlot};

/// Transient field values of the open form. Not persisted; discarded on
/// cancel or successful commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormDraft {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    /// Raw select value; parsed into a [`Gender`] at commit.
    pub gender: String,
    pub postal_code: String,
    pub birth_date: String,
}

impl FormDraft {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            national_id: record.national_id.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            gender: record.gender.as_str().to_string(),
            postal_code: record.postal_code.clone(),
            birth_date: record.birth_date.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::NationalId => &self.national_id,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Gender => &self.gender,
            Field::PostalCode => &self.postal_code,
            Field::BirthDate => &self.birth_date,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::NationalId => self.national_id = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Gender => self.gender = value,
            Field::PostalCode => self.postal_code = value,
            Field::BirthDate => self.birth_date = value,
        }
    }

    /// Fields that would fail validation right now. Gender counts as missing
    /// when it is not one of the four wire values.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Gender => Gender::parse(self.gender.trim()).is_none(),
                _ => self.get(*field).trim().is_empty(),
            })
            .collect()
    }

    /// Validate and assemble a record under the given id.
    pub(crate) fn build(&self, id: String) -> Result<UserRecord, RegistryError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RegistryError::Validation { missing });
        }
        let gender = Gender::parse(self.gender.trim()).ok_or_else(|| {
            RegistryError::Validation {
                missing: vec![Field::Gender],
            }
        })?;
        Ok(UserRecord {
            id,
            name: self.name.clone(),
            national_id: self.national_id.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            gender,
            postal_code: self.postal_code.clone(),
            birth_date: self.birth_date.clone(),
        })
    }
}

/// What the form is currently doing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    /// New record, no backing id yet.
    Creating,
    /// Editing the record with this id.
    Editing(String),
}

/// The re-entrant create/edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSession {
    state: FormState,
    draft: FormDraft,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FormState::Editing(_))
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Open a blank form for a new record.
    pub fn open_for_create(&mut self) {
        self.state = FormState::Creating;
        self.draft = FormDraft::default();
    }

    /// Open the form pre-filled from an existing record.
    pub fn open_for_edit(&mut self, record: &UserRecord) {
        self.state = FormState::Editing(record.id.clone());
        self.draft = FormDraft::from_record(record);
    }

    /// Set a draft field from raw input, masking the three maskable fields.
    /// Ignored while the form is closed.
    pub fn change_field(&mut self, field: Field, raw: &str) {
        if !self.is_open() {
            return;
        }
        let value = match field {
            Field::NationalId => mask::national_id(raw),
            Field::PostalCode => mask::postal_code(raw),
            Field::Phone => mask::phone(raw),
            _ => raw.to_string(),
        };
        self.draft.set(field, value);
    }

    /// Discard the draft and close the form. Nothing is persisted.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Validate the draft and delegate to the registry: `create` when the
    /// form was opened blank, `update` when it was opened on a record. On
    /// success the session closes; on failure it stays open with the draft
    /// intact.
    pub async fn commit<S: StateSlot, G: IdGenerator>(
        &mut self,
        registry: &mut Registry<S, G>,
    ) -> Result<UserRecord, RegistryError> {
        let record = match &self.state {
            FormState::Closed => return Err(RegistryError::SessionClosed),
            FormState::Creating => registry.create(&self.draft).await?,
            FormState::Editing(id) => registry.update(id, &self.draft).await?,
        };
        self.cancel();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::SequentialIds;

    fn filled_session() -> FormSession {
        let mut session = FormSession::new();
        session.open_for_create();
        session.change_field(Field::Name, "Ana Silva");
        session.change_field(Field::NationalId, "12345678901");
        session.change_field(Field::Email, "a@x.com");
        session.change_field(Field::Phone, "11987654321");
        session.change_field(Field::Gender, "female");
        session.change_field(Field::PostalCode, "01310100");
        session.change_field(Field::BirthDate, "1990-05-20");
        session
    }

    fn registry() -> Registry<MemoryStore, SequentialIds> {
        Registry::with_ids(MemoryStore::new(), SequentialIds::new())
    }

    #[test]
    fn change_field_masks_as_the_user_types() {
        let mut session = FormSession::new();
        session.open_for_create();

        session.change_field(Field::NationalId, "1234567");
        assert_eq!(session.draft().national_id, "123.456.7");
        session.change_field(Field::Phone, "119876");
        assert_eq!(session.draft().phone, "(11) 9876");
        session.change_field(Field::PostalCode, "013101");
        assert_eq!(session.draft().postal_code, "01310-1");

        // Non-maskable fields pass through untouched.
        session.change_field(Field::Name, "Ana");
        assert_eq!(session.draft().name, "Ana");
    }

    #[test]
    fn change_field_is_ignored_while_closed() {
        let mut session = FormSession::new();
        session.change_field(Field::Name, "Ana");
        assert_eq!(session.draft().name, "");
        assert!(!session.is_open());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut session = filled_session();
        session.cancel();
        assert_eq!(session.state(), &FormState::Closed);
        assert_eq!(session.draft(), &FormDraft::default());
    }

    #[tokio::test]
    async fn commit_creates_and_closes() {
        let mut registry = registry();
        let mut session = filled_session();

        let record = session.commit(&mut registry).await.unwrap();
        assert_eq!(record.national_id, "123.456.789-01");
        assert_eq!(session.state(), &FormState::Closed);
        assert_eq!(registry.list().len(), 1);
    }

    #[tokio::test]
    async fn commit_with_missing_fields_keeps_the_session_open() {
        let mut registry = registry();
        let mut session = FormSession::new();
        session.open_for_create();
        session.change_field(Field::Name, "Ana");

        let err = session.commit(&mut registry).await.unwrap_err();
        match err {
            RegistryError::Validation { missing } => {
                assert!(missing.contains(&Field::Email));
                assert!(missing.contains(&Field::Gender));
                assert!(!missing.contains(&Field::Name));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(session.is_open());
        assert_eq!(session.draft().name, "Ana");
        assert!(registry.list().is_empty());
    }

    #[tokio::test]
    async fn commit_on_closed_session_is_an_error() {
        let mut registry = registry();
        let mut session = FormSession::new();
        let err = session.commit(&mut registry).await.unwrap_err();
        assert!(matches!(err, RegistryError::SessionClosed));
    }

    #[tokio::test]
    async fn edit_commit_replaces_fields_in_place() {
        let mut registry = registry();
        let mut session = filled_session();
        let created = session.commit(&mut registry).await.unwrap();

        session.open_for_edit(&created);
        assert_eq!(session.state(), &FormState::Editing(created.id.clone()));
        assert_eq!(session.draft().name, "Ana Silva");

        session.change_field(Field::Name, "Ana S. Oliveira");
        let updated = session.commit(&mut registry).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ana S. Oliveira");
        assert_eq!(registry.list().len(), 1);
    }
}
