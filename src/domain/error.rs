use thiserror::Error;

use super::user::FieldErrors;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation failed: {errors}")]
    Validation { errors: FieldErrors },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'test-id' not found");
        assert_eq!(error.to_string(), "Not found: User 'test-id' not found");
    }

    #[test]
    fn test_validation_error() {
        let mut errors = FieldErrors::new();
        errors.push("username", "Username is required");

        let error = DomainError::validation(errors);
        assert_eq!(
            error.to_string(),
            "Validation failed: username: Username is required"
        );
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("something broke");
        assert_eq!(error.to_string(), "Internal error: something broke");
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("backend unavailable");
        assert_eq!(error.to_string(), "Storage error: backend unavailable");
    }
}
