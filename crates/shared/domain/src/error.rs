//! Domain-level errors.
//!
//! These errors represent business rule violations on the `User` record.
//! They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = DomainError::validation("Password hash must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: Password hash must not be empty"
        );
    }

    #[test]
    fn test_constructor_accepts_owned_and_borrowed() {
        assert_eq!(
            DomainError::validation(String::from("bad")),
            DomainError::validation("bad")
        );
    }
}
