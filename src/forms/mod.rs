//! JSON input contracts for the catalog resources.
//!
//! Each form is deserialized from the request body, checked with
//! [`validator`] and then converted into a typed payload. Failures are
//! collected into a [`FieldErrors`] map keyed by field name.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

pub mod body;
pub mod categories;
pub mod products;
pub mod reviews;

pub use body::{FieldReader, FormBody, FormError};

/// Key used for errors that are not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BLANK_MESSAGE: &str = "This field may not be blank.";
pub const MIN_ZERO_MESSAGE: &str = "Ensure this value is greater than or equal to 0.";
pub const STARS_RANGE_MESSAGE: &str = "Ensure this value is between 1 and 5.";

/// Message reported when a foreign key does not reference an existing row.
pub fn does_not_exist_message(id: impl Display) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// Per-field validation messages, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("invalid input: {0:?}")]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Map holding exactly one message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Add the messages of `other` for fields that have none yet.
    pub fn merge_absent(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_insert(messages);
        }
    }

    /// Record the error of `result`, if any, and return its value otherwise.
    pub fn capture<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<FieldErrors>,
    {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.merge(err.into());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(value: ValidationErrors) -> Self {
        let mut errors = Self::default();
        for (field, field_errors) in value.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| error.code.to_string());
                errors.add(field.to_string(), message);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_field_map() {
        let mut errors = FieldErrors::single("name", REQUIRED_MESSAGE);
        errors.add("name", BLANK_MESSAGE);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": [REQUIRED_MESSAGE, BLANK_MESSAGE] })
        );
    }

    #[test]
    fn merge_keeps_messages_from_both_maps() {
        let mut errors = FieldErrors::single("title", BLANK_MESSAGE);
        errors.merge(FieldErrors::single("price", MIN_ZERO_MESSAGE));

        assert!(errors.contains("title"));
        assert_eq!(errors.get("price"), Some(&[MIN_ZERO_MESSAGE.to_string()][..]));
    }

    #[test]
    fn merge_absent_keeps_existing_messages() {
        let mut errors = FieldErrors::single("stars", "A valid integer is required.");
        let mut other = FieldErrors::single("stars", REQUIRED_MESSAGE);
        other.add("text", REQUIRED_MESSAGE);

        errors.merge_absent(other);

        assert_eq!(
            errors.get("stars"),
            Some(&["A valid integer is required.".to_string()][..])
        );
        assert_eq!(errors.get("text"), Some(&[REQUIRED_MESSAGE.to_string()][..]));
    }
}
