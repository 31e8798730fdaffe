//! Form validation results.
//!
//! Every storefront form reports failures the same way: a message per
//! offending field, in the order the fields appear on the form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name (e.g., "email").
    pub field: String,
    /// Human-readable message shown next to the field.
    pub message: String,
}

/// Ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Create an empty set of errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. A field keeps its first message.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Record `message` for `field` when `value` is blank after trimming.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Clear the message for one field (the user edited it).
    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|e| e.field != field);
    }

    /// Check whether a field failed.
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing failed, otherwise the errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_blank() {
        let mut errors = FieldErrors::new();
        errors.require("name", "   ", "Name is required");
        errors.require("city", "Lisbon", "City is required");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(!errors.has("city"));
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.add("comment", "Comment is required");
        errors.add("comment", "Comment must be at least 10 characters");
        assert_eq!(errors.get("comment"), Some("Comment is required"));
    }

    #[test]
    fn test_order_is_preserved() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.add("zip", "ZIP code is required");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "zip"]);
        assert_eq!(
            errors.to_string(),
            "email: Email is required; zip: ZIP code is required"
        );
    }

    #[test]
    fn test_clear_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        errors.clear_field("email");
        assert!(errors.into_result().is_ok());
    }
}
