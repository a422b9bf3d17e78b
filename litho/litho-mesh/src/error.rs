//! Error types for projection and triangulation.

use litho_types::FieldError;
use thiserror::Error;

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while projecting or triangulating a point grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Grid is too small for the requested operation.
    #[error("invalid dimension: {rows}x{cols} grid, need {requirement}")]
    InvalidDimension {
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
        /// What the operation needs.
        requirement: String,
    },

    /// Coordinate fields diverged in shape.
    #[error(transparent)]
    MalformedField(#[from] FieldError),
}

impl MeshError {
    /// Create an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(rows: usize, cols: usize, requirement: impl Into<String>) -> Self {
        Self::InvalidDimension {
            rows,
            cols,
            requirement: requirement.into(),
        }
    }
}
