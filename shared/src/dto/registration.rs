//! # Registration Data Transfer Objects
//!
//! The field bundle submitted by the registration form and the messages produced
//! by a validation pass.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One input of the registration form.
///
/// Variants are declared in display order; [`ValidationErrors`] relies on the
/// derived `Ord` to list messages email first, confirmation last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Password,
    RepeatPassword,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::RepeatPassword];

    /// HTML `name` attribute of the input bound to this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::RepeatPassword => "repeatPassword",
        }
    }

    /// HTML `type` attribute of the input bound to this field.
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::RepeatPassword => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The field bundle: everything the user typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl RegistrationData {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        repeat_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            repeat_password: repeat_password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::RepeatPassword => &self.repeat_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::RepeatPassword => &mut self.repeat_password,
        };
        *slot = value.into();
    }

    /// True if at least one field is an empty string.
    pub fn has_blank(&self) -> bool {
        Field::ALL.iter().any(|field| self.get(*field).is_empty())
    }
}

/// Messages from one validation pass, keyed by field.
///
/// At most one message per field. Iteration order follows [`Field`] declaration
/// order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Messages in field order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Messages joined with newlines, ready for a `white-space: pre-line` block.
    pub fn joined(&self) -> String {
        self.messages().collect::<Vec<_>>().join("\n")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_field_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::RepeatPassword, "third");
        errors.insert(Field::Email, "first");
        errors.insert(Field::Password, "second");

        assert_eq!(errors.messages().collect::<Vec<_>>(), vec!["first", "second", "third"]);
        assert_eq!(errors.joined(), "first\nsecond\nthird");
    }

    #[test]
    fn test_insert_replaces_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Password, "too short");
        errors.insert(Field::Password, "too long");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Password), Some("too long"));
    }

    #[test]
    fn test_empty_errors_join_to_empty_string() {
        assert_eq!(ValidationErrors::new().joined(), "");
    }

    #[test]
    fn test_set_and_get_fields() {
        let mut data = RegistrationData::default();
        assert!(data.has_blank());

        data.set(Field::Email, "user@host.com");
        data.set(Field::Password, "Abc12345!");
        data.set(Field::RepeatPassword, "Abc12345!");

        assert_eq!(data, RegistrationData::new("user@host.com", "Abc12345!", "Abc12345!"));
        assert!(!data.has_blank());
    }

    #[test]
    fn test_bundle_uses_input_names_on_the_wire() {
        let data = RegistrationData::new("user@host.com", "Abc12345!", "Abc12345!");
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["repeatPassword"], "Abc12345!");
        for field in Field::ALL {
            assert_eq!(json[field.name()], data.get(field));
        }
    }
}
