//! Form validation models

use serde::{Deserialize, Serialize};

/// A single rejected form field
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Outcome of validating a whole form.
///
/// Errors keep the order in which fields appear on the form, so the first
/// entry is always the field that should receive focus.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub errors: Vec<FieldError>,
}

impl FormValidation {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Message for a field, if that field failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Name of the first invalid field in form order
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.errors.first().map(|e| e.field.as_str())
    }

    /// Drop the error of one field, used when the user edits it
    pub fn clear_field(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }

    /// `field=CODE` pairs for the diagnostic log
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}={}", e.field, e.code))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }

    /// Field was blank after trimming
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, "REQUIRED_FIELD")
    }

    /// Field did not match its pattern
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, "INVALID_FORMAT")
    }

    /// Field was too short
    pub fn too_short(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, "TOO_SHORT")
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
