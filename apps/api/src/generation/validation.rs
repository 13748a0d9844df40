//! Required-field gate. Nothing is rendered, called, or exported for a rejected form.

use std::fmt;

use thiserror::Error;

use crate::models::profile::ProfileInput;

/// A form field that must be non-empty before documents can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FullName,
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequiredField::FullName => "Full Name",
            RequiredField::Email => "Email",
        })
    }
}

/// Rejection carrying the user-facing names of every missing field, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in the required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<RequiredField>,
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accepts the input when full name and email are non-empty after trimming.
/// Optional fields may be empty.
pub fn validate(input: &ProfileInput) -> Result<(), ValidationError> {
    let mut missing = Vec::new();

    if input.full_name.trim().is_empty() {
        missing.push(RequiredField::FullName);
    }
    if input.email.trim().is_empty() {
        missing.push(RequiredField::Email);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
