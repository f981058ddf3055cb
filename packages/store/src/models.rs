//! # Domain models for registered users
//!
//! Defines the data structures held by [`crate::Registry`] and exchanged with
//! the UI layer. [`UserRecord`] serializes with camelCase field names
//! (`nationalId`, `postalCode`, `birthDate`) because that is the exact layout
//! of the persisted collection slot: the store rewrites the whole list on
//! every mutation and reads it back at startup, so the serialized names are
//! part of the storage contract.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | One registered person. `id` is unique and immutable after creation; every other field is replaced wholesale on edit. The three masked fields always hold their canonical punctuated form. |
//! | [`Gender`] | Closed set persisted as `male`/`female`/`other`/`undisclosed`. |
//! | [`Field`] | Names the seven editable fields, used for form routing and validation reporting. |
//!
//! ## Helper functions
//!
//! - [`display_birth_date`] — renders a stored ISO `YYYY-MM-DD` date as
//!   `DD/MM/YYYY` for the table, falling back to the raw string.

use serde::{Deserialize, Serialize};

/// One registered person, as held in memory and persisted in the slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique within the collection, never reassigned.
    pub id: String,
    pub name: String,
    /// Canonical masked form `XXX.XXX.XXX-XX`.
    pub national_id: String,
    pub email: String,
    /// Canonical masked form `(XX) XXXXX-XXXX`.
    pub phone: String,
    pub gender: Gender,
    /// Canonical masked form `XXXXX-XXX`.
    pub postal_code: String,
    /// ISO calendar date `YYYY-MM-DD`.
    pub birth_date: String,
}

/// Gender of a registered person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    Undisclosed,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::Undisclosed,
    ];

    /// The persisted wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Undisclosed => "undisclosed",
        }
    }

    /// Parse a wire value back into a [`Gender`].
    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "undisclosed" => Some(Gender::Undisclosed),
            _ => None,
        }
    }

    /// Human-readable label for table chips and the form select.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Undisclosed => "Not disclosed",
        }
    }
}

/// The editable fields of a [`UserRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    NationalId,
    Email,
    Phone,
    Gender,
    PostalCode,
    BirthDate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::NationalId,
        Field::Email,
        Field::Phone,
        Field::Gender,
        Field::PostalCode,
        Field::BirthDate,
    ];

    /// Label shown when the field is flagged as missing.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::NationalId => "national id",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::PostalCode => "postal code",
            Field::BirthDate => "birth date",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Render a stored ISO date (`YYYY-MM-DD`) as `DD/MM/YYYY` for display.
/// Anything that does not split into three parts is returned unchanged.
pub fn display_birth_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.splitn(3, '-').collect();
    match parts.as_slice() {
        [year, month, day]
            if [year, month, day]
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) =>
        {
            format!("{day}/{month}/{year}")
        }
        _ => iso.to_string(),
    }
}
