//! Error types for timetable generation.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a generation request.
///
/// Running out of cells, faculty or rooms is not an error: it shows up
/// as under-scheduled pairs in the result.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request was rejected before any scheduling work.
    #[error("invalid generation request: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Entities could not be read from the source.
    #[error("failed to load entity snapshot: {0}")]
    Snapshot(String),

    /// The result could not be stored. Safe to retry the whole request.
    #[error("failed to persist timetable: {0}")]
    Persistence(String),
}

impl GenerationError {
    /// Whether the request itself was at fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Validation findings, if this is a validation error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors.as_slice(),
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display() {
        let err = GenerationError::Validation(vec![
            ValidationError::new(ValidationErrorKind::EmptyBatchList, "batches are required"),
            ValidationError::new(
                ValidationErrorKind::SemesterOutOfRange,
                "semester 9 outside 1..=8",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid generation request: batches are required; semester 9 outside 1..=8"
        );
        assert!(err.is_validation());
        assert_eq!(err.validation_errors().len(), 2);

        let err = GenerationError::Persistence("disk full".into());
        assert_eq!(err.to_string(), "failed to persist timetable: disk full");
        assert!(err.validation_errors().is_empty());
    }
}
