//! Validation utilities.

use crate::{CampusError, FieldError};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `CampusError` on failure.
    fn validate_request(&self) -> Result<(), CampusError> {
        self.validate().map_err(|e| validation_errors_to_campus_error(&e))
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `CampusError`.
#[must_use]
pub fn validation_errors_to_campus_error(errors: &ValidationErrors) -> CampusError {
    CampusError::InvalidFields(field_errors(errors))
}

/// Flattens validator errors, including nested structs, into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected = Vec::new();

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                collected.extend(errs.iter().map(|error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collected.extend(field_errors(nested).into_iter().map(|e| FieldError {
                    field: format!("{}.{}", field, e.field),
                    ..e
                }));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collected.extend(field_errors(nested).into_iter().map(|e| FieldError {
                        field: format!("{}[{}].{}", field, index, e.field),
                        ..e
                    }));
                }
            }
        }
    }

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}
