//! Error types for histogram construction and validation.

use thiserror::Error;

/// Errors raised when a histogram is booked or loaded with bad parameters.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HistogramError {
    /// A histogram needs at least one bin.
    #[error("Histogram must have at least one bin")]
    ZeroBins,

    /// The range is empty, inverted or not finite.
    #[error("Invalid histogram range [{lower}, {upper}): bounds must be finite with lower < upper")]
    InvalidRange {
        /// Lower edge.
        lower: f64,
        /// Upper edge.
        upper: f64,
    },

    /// Stored bin counts disagree with the declared bin count.
    #[error("Histogram '{name}' declares {expected} bins but stores {found} counts")]
    CountMismatch {
        /// Histogram name.
        name: String,
        /// Declared bin count.
        expected: usize,
        /// Number of stored counts.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_error_display() {
        let err = HistogramError::InvalidRange {
            lower: 1.0,
            upper: 0.0,
        };
        assert!(err.to_string().contains("[1, 0)"));

        let err = HistogramError::CountMismatch {
            name: "h_Exp".to_string(),
            expected: 100,
            found: 99,
        };
        assert!(err.to_string().contains("h_Exp"));
        assert!(err.to_string().contains("99"));
    }
}
