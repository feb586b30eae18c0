//! Review-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::ports::StorageError;

/// Errors raised by the direct review interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// A required field was missing or malformed.
    ValidationFailed { field: String, message: String },
    /// The repository could not complete the operation.
    Storage(StorageError),
}

impl ReviewError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReviewError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReviewError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReviewError::Storage(StorageError::Timeout(_)) => ErrorCode::StorageTimeout,
            ReviewError::Storage(StorageError::Unavailable(_)) => ErrorCode::StorageUnavailable,
            ReviewError::Storage(StorageError::Database(_)) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReviewError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ReviewError::Storage(err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for ReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReviewError {}

impl From<ValidationError> for ReviewError {
    fn from(err: ValidationError) -> Self {
        ReviewError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for ReviewError {
    fn from(err: StorageError) -> Self {
        ReviewError::Storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn validation_error_converts_with_field_name() {
        let err: ReviewError = ValidationError::empty_field("user_name").into();
        match err {
            ReviewError::ValidationFailed { field, .. } => assert_eq!(field, "user_name"),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn storage_errors_map_to_distinct_codes() {
        assert_eq!(
            ReviewError::Storage(StorageError::Timeout(Duration::from_secs(5))).code(),
            ErrorCode::StorageTimeout
        );
        assert_eq!(
            ReviewError::Storage(StorageError::Database("locked".into())).code(),
            ErrorCode::DatabaseError
        );
        assert_eq!(
            ReviewError::Storage(StorageError::Unavailable("closed".into())).code(),
            ErrorCode::StorageUnavailable
        );
    }

    #[test]
    fn message_names_the_field() {
        let err = ReviewError::validation("product_name", "Field 'product_name' cannot be empty");
        assert!(err.to_string().contains("'product_name'"));
    }
}
