//! Error types for relief construction.

use litho_types::FieldError;
use thiserror::Error;

/// Result type for relief operations.
pub type ReliefResult<T> = Result<T, ReliefError>;

/// Errors that can occur while turning pixels into a heightfield.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReliefError {
    /// Resampling or framing would produce a non-positive grid dimension.
    #[error("invalid dimension: {rows}x{cols} ({reason})")]
    InvalidDimension {
        /// Row count that was computed or supplied.
        rows: usize,
        /// Column count that was computed or supplied.
        cols: usize,
        /// What produced the bad shape.
        reason: String,
    },

    /// The intensity field has a zero (or non-finite) maximum.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A numeric parameter is out of range or not finite.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint it violates.
        reason: &'static str,
    },

    /// Pixel field channel count is not 1, 3 or 4.
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    /// An intermediate field was internally inconsistent.
    #[error(transparent)]
    MalformedField(#[from] FieldError),
}

impl ReliefError {
    /// Create an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(rows: usize, cols: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            rows,
            cols,
            reason: reason.into(),
        }
    }

    /// Create a degenerate input error.
    #[must_use]
    pub fn degenerate(details: impl Into<String>) -> Self {
        Self::DegenerateInput(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReliefError::invalid_dimension(0, 4, "scale 0.01");
        assert!(err.to_string().contains("0x4"));

        let err = ReliefError::degenerate("maximum is zero");
        assert!(err.to_string().contains("maximum is zero"));

        let err = ReliefError::InvalidParameter {
            name: "offset_mm",
            value: -1.0,
            reason: "must be positive",
        };
        assert!(err.to_string().contains("offset_mm"));

        let err: ReliefError = FieldError::ZeroChannels.into();
        assert!(err.to_string().contains("malformed field"));
    }
}
