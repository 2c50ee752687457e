//! Error types for the event-periods library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur before any spectral work begins.
///
/// Degenerate inputs that are still valid (too few points in a window,
/// a zero-length span, a spectrum without local maxima) are never errors;
/// they produce empty result sequences instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No timestamps were supplied.
    #[error("no timestamps provided")]
    EmptyData,

    /// The period configuration violates one of its constraints.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An epoch-millisecond value outside the representable calendar range.
    #[error("timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = AnalysisError::EmptyData;
        assert_eq!(err.to_string(), "no timestamps provided");

        let err = AnalysisError::InvalidConfig("min_period must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: min_period must be positive"
        );

        let err = AnalysisError::TimestampOutOfRange(i64::MAX);
        assert_eq!(
            err.to_string(),
            format!("timestamp out of range: {} ms", i64::MAX)
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = AnalysisError::EmptyData;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_ne!(err1, AnalysisError::InvalidConfig(String::new()));
    }
}
