// Validation error shared by every constructor and mutator in the crate.

use thiserror::Error;

use crate::stats::StatField;

/// Domain-invalid input. Raised at construction or mutation time and always
/// returned to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between 1 and 20, got {value}")]
    RatingOutOfRange { field: StatField, value: i64 },

    #[error("missing rating `{field}`")]
    MissingRating { field: StatField },

    #[error("unknown rating `{key}`")]
    UnknownRating { key: String },

    #[error("Player age must be between 16 and 45, got {0}")]
    AgeOutOfRange(i64),

    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Injured players must have an injury description")]
    MissingInjuryDescription,

    #[error("Healthy players cannot have an injury description")]
    UnexpectedInjuryDescription,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_message_names_field_and_value() {
        let err = ValidationError::RatingOutOfRange {
            field: StatField::FirstTouch,
            value: 21,
        };
        assert_eq!(err.to_string(), "first_touch must be between 1 and 20, got 21");
    }

    #[test]
    fn age_message_includes_age() {
        assert_eq!(
            ValidationError::AgeOutOfRange(15).to_string(),
            "Player age must be between 16 and 45, got 15"
        );
    }

    #[test]
    fn key_errors_quote_the_key() {
        let missing = ValidationError::MissingRating {
            field: StatField::Vision,
        };
        assert_eq!(missing.to_string(), "missing rating `vision`");

        let unknown = ValidationError::UnknownRating {
            key: "finishing".into(),
        };
        assert_eq!(unknown.to_string(), "unknown rating `finishing`");
    }
}
