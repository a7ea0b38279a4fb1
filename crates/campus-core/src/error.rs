//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the campus records API.
///
/// Every layer reports failures through this enum; the REST layer maps
/// each variant to a status code with [`CampusError::status_code`].
#[derive(Error, Debug)]
pub enum CampusError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field-level validation failures collected from a request body
    #[error("Validation failed: {}", summarize(.0))]
    InvalidFields(Vec<FieldError>),

    /// Conflict error (duplicate enrollment, coordinator already assigned)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The student is not enrolled in the course
    #[error("Aluno {student} não está matriculado no curso {course}")]
    NotEnrolled { student: i64, course: i64 },

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl CampusError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::InvalidFields(_) | Self::NotEnrolled { .. } => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) | Self::InvalidFields(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::NotEnrolled { .. } => "NOT_ENROLLED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for the not-found variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CampusError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    return Self::Conflict(db_err.message().to_string());
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name as it appears on the wire
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `CampusError`.
    ///
    /// Field-level failures are carried over into `details`.
    #[must_use]
    pub fn from_error(error: &CampusError) -> Self {
        let details = match error {
            CampusError::InvalidFields(fields) => Some(fields.clone()),
            _ => None,
        };
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&CampusError> for ErrorResponse {
    fn from(error: &CampusError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(CampusError::not_found("Aluno", 1).status_code(), 404);
        assert_eq!(CampusError::validation("invalid email").status_code(), 400);
        assert_eq!(CampusError::conflict("duplicate").status_code(), 409);
        assert_eq!(CampusError::NotEnrolled { student: 1, course: 2 }.status_code(), 400);
        assert_eq!(CampusError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(CampusError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CampusError::not_found("Curso", 1).error_code(), "NOT_FOUND");
        assert_eq!(CampusError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(
            CampusError::NotEnrolled { student: 1, course: 2 }.error_code(),
            "NOT_ENROLLED"
        );
        assert_eq!(CampusError::InvalidFields(Vec::new()).error_code(), "VALIDATION_ERROR");
        assert_eq!(CampusError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_message_names_resource() {
        let err = CampusError::not_found("Aluno", 42);
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Aluno"));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_error_response_carries_field_details() {
        let err = CampusError::InvalidFields(vec![FieldError {
            field: "email".to_string(),
            message: "O email deve ser válido".to_string(),
            code: "email".to_string(),
        }]);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "VALIDATION_ERROR");
        assert_eq!(response.details.as_ref().map(Vec::len), Some(1));
        assert!(response.message.contains("email"));
    }

    #[test]
    fn test_error_response_without_details() {
        let response: ErrorResponse = ErrorResponse::from(&CampusError::not_found("Curso", 7));
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_anyhow_is_wrapped_transparently() {
        let err: CampusError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.status_code(), 500);
    }
}
