//! Presence-only validation for create requests.
//!
//! # Responsibility
//! - Decide whether required request fields are present.
//! - Produce the user-facing "missing required fields" message.
//!
//! # Invariants
//! - A text field counts as missing when absent, `null` or empty.
//! - A numeric field counts as missing when absent, `null` or zero.
//! - No other checks are applied: negative prices or malformed emails pass.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for create requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or falsy.
    MissingFields {
        /// Every field the request kind requires, in message order.
        required: &'static [&'static str],
        /// The subset that was actually missing.
        missing: Vec<&'static str>,
    },
    /// `type` was present but named no known property category.
    UnknownPropertyType(String),
}

impl ValidationError {
    /// Fields reported missing by this error.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields { missing, .. } => missing,
            Self::UnknownPropertyType(_) => &[],
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { required, .. } => write!(
                f,
                "Missing required fields: {} are required",
                human_list(required)
            ),
            Self::UnknownPropertyType(value) => write!(f, "Unknown property type `{value}`"),
        }
    }
}

impl Error for ValidationError {}

/// Accumulates missing required fields while a request is unpacked.
pub(crate) struct PresenceCheck {
    required: &'static [&'static str],
    missing: Vec<&'static str>,
}

impl PresenceCheck {
    pub(crate) fn new(required: &'static [&'static str]) -> Self {
        Self {
            required,
            missing: Vec::new(),
        }
    }

    /// Takes a required text field, recording it as missing when falsy.
    pub(crate) fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.is_empty() => value,
            _ => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    /// Takes a required number, recording it as missing when absent or zero.
    pub(crate) fn number(&mut self, field: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(value) if value != 0.0 && !value.is_nan() => value,
            _ => {
                self.missing.push(field);
                0.0
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(ValidationError::MissingFields {
            required: self.required,
            missing: self.missing,
        })
    }
}

/// Joins field names as `a, b, and c`.
fn human_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
