//! Analytics error types

use thiserror::Error;

/// Result alias used across the vahan stack.
pub type Result<T> = std::result::Result<T, VahanError>;

/// Errors that can occur during registration analytics operations.
///
/// Empty or statistically insufficient input is never an error at this
/// layer; calculators return empty collections or `None` fields instead.
#[derive(Error, Debug)]
pub enum VahanError {
    /// A date string could not be parsed as a calendar date
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// Unsupported period granularity argument
    #[error("Invalid granularity '{0}': expected 'month', 'quarter', or 'year'")]
    InvalidGranularity(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A collaborator (source or sink) failed
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_date_message() {
        let error = VahanError::InvalidDate {
            value: "2021-13-01".to_string(),
            reason: "month out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2021-13-01': month out of range"
        );
    }

    #[test]
    fn test_invalid_granularity_message() {
        let error = VahanError::InvalidGranularity("weekly".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid granularity 'weekly': expected 'month', 'quarter', or 'year'"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = VahanError::InvalidParameter {
            name: "window".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid parameter 'window': must be positive");
    }

    #[test]
    fn test_invalid_parameter_fields() {
        let error = VahanError::InvalidParameter {
            name: "top_n".to_string(),
            reason: "must be at least 1".to_string(),
        };
        if let VahanError::InvalidParameter { name, reason } = error {
            assert_eq!(name, "top_n");
            assert_eq!(reason, "must be at least 1");
        } else {
            panic!("Expected InvalidParameter variant");
        }
    }

    #[test]
    fn test_collaborator_message() {
        let error = VahanError::Collaborator("sink unavailable".to_string());
        assert_eq!(error.to_string(), "Collaborator error: sink unavailable");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(VahanError::InvalidGranularity("day".into()));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<VahanError>();
        assert_sync::<VahanError>();
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error> = Box::new(VahanError::InvalidGranularity("day".into()));
        let downcasted = error.downcast_ref::<VahanError>();
        assert!(downcasted.is_some());
        assert!(matches!(
            downcasted.unwrap(),
            VahanError::InvalidGranularity(_)
        ));
    }
}
