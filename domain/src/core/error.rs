//! Domain error types

use thiserror::Error;

/// Validation failures detected before any write reaches the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("criterion {criterion} value {value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        criterion: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("required criterion {0} is missing")]
    MissingCriterion(String),
}

impl ValidationError {
    /// Check whether this error is an out-of-range rejection.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ValidationError::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = ValidationError::OutOfRange {
            criterion: "impact".to_string(),
            value: 9,
            min: 0,
            max: 5,
        };
        assert_eq!(
            error.to_string(),
            "criterion impact value 9 is outside the allowed range 0..=5"
        );
        assert!(error.is_out_of_range());
    }

    #[test]
    fn test_missing_criterion_is_not_out_of_range() {
        assert!(!ValidationError::MissingCriterion("impact".into()).is_out_of_range());
    }
}
