//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A route operation received an empty station list
    #[error("Route has no stations")]
    EmptyRoute,

    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Unrecognised train or filter status
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Train", "42");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Train");
                assert_eq!(id, "42");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Train", "42");
        assert_eq!(err.to_string(), "Train not found: 42");
    }

    #[test]
    fn empty_route_message() {
        assert_eq!(DomainError::EmptyRoute.to_string(), "Route has no stations");
    }

    #[test]
    fn invalid_status_message() {
        let err = DomainError::InvalidStatus("parked".to_string());
        assert_eq!(err.to_string(), "Invalid status: parked");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("distance must not decrease".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: distance must not decrease"
        );
    }
}
