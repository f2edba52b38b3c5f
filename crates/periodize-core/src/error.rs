//! Error types for the periodization library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planning operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Invalid structural input, reported once at the boundary
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Exercise id not present in the catalog
    #[error("Exercise '{id}' not found in catalog")]
    ExerciseNotFound { id: String },
    /// Skeleton exercise position out of range for a scheduled workout
    #[error("Workout has no exercise at position {position} (has {len})")]
    ExercisePositionOutOfRange { position: usize, len: usize },
    /// Illegal scheduled-workout status change
    #[error("Cannot move workout from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },
    /// More than one block flagged active in the same athlete scope
    #[error("Expected at most one active block, found {count}")]
    MultipleActiveBlocks { count: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        PlanError::Configuration {
            message: message.into(),
        }
    }

    /// Name of the offending field for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            PlanError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlanError::invalid_input("phases[0].sessionsPerWeek")
            .with_reason("must be between 2 and 7, got 9");

        assert_eq!(err.field(), Some("phases[0].sessionsPerWeek"));
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'phases[0].sessionsPerWeek': must be between 2 and 7, got 9"
        );
    }

    #[test]
    fn test_field_is_none_for_other_errors() {
        let err = PlanError::ExerciseNotFound {
            id: "zercher-squat".to_string(),
        };
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("zercher-squat"));
    }
}
