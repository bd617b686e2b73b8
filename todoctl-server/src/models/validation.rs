//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent from the payload
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Path or field value doesn't have the required shape
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Missing { field: "title" }.to_string(),
            "title is required"
        );
        assert_eq!(
            ValidationError::Empty { field: "title" }.to_string(),
            "title cannot be empty"
        );
        assert_eq!(
            ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer"
            }
            .to_string(),
            "id: must be an integer"
        );
    }
}
