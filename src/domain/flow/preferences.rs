//! Preference store accumulated across a conversation.

use serde::{Deserialize, Serialize};

/// A preference field the engine can write after a recognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceField {
    Role,
    Budget,
    PropertyType,
    Bedrooms,
    Location,
    Language,
}

/// User-supplied answers accumulated one field at a time.
///
/// Fields are only ever overwritten, never removed; the whole set is
/// reset when the session restarts under a new flow context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub role: Option<String>,
    pub budget: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
    pub location: Option<String>,
    pub language: Option<String>,
}

impl PreferenceSet {
    /// Writes a single field, overwriting any previous value.
    pub fn set(&mut self, field: PreferenceField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PreferenceField::Role => self.role = Some(value),
            PreferenceField::Budget => self.budget = Some(value),
            PreferenceField::PropertyType => self.property_type = Some(value),
            PreferenceField::Bedrooms => self.bedrooms = Some(value),
            PreferenceField::Location => self.location = Some(value),
            PreferenceField::Language => self.language = Some(value),
        }
    }

    /// Reads a single field.
    pub fn get(&self, field: PreferenceField) -> Option<&str> {
        match field {
            PreferenceField::Role => self.role.as_deref(),
            PreferenceField::Budget => self.budget.as_deref(),
            PreferenceField::PropertyType => self.property_type.as_deref(),
            PreferenceField::Bedrooms => self.bedrooms.as_deref(),
            PreferenceField::Location => self.location.as_deref(),
            PreferenceField::Language => self.language.as_deref(),
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
