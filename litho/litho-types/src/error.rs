//! Error types for field construction.

use thiserror::Error;

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised when a field or grid is internally inconsistent.
///
/// Every variant is a "malformed field" condition: the sample buffer or the
/// shapes of co-dimensioned fields do not agree. Under a correct pipeline
/// these never occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Sample buffer length does not match the declared shape.
    #[error("malformed field: {rows}x{cols}x{channels} needs {expected} samples, got {actual}")]
    SampleCount {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
        /// Declared channel count.
        channels: usize,
        /// Samples implied by the shape.
        expected: usize,
        /// Samples actually provided.
        actual: usize,
    },

    /// Two fields that must share a shape do not.
    #[error("malformed field: {axis} field is {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Which coordinate field diverged (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// Shape of the reference field as `(rows, cols)`.
        expected: (usize, usize),
        /// Shape of the diverging field as `(rows, cols)`.
        actual: (usize, usize),
    },

    /// A pixel field was declared with zero channels.
    #[error("malformed field: pixel field needs at least one channel")]
    ZeroChannels,
}
