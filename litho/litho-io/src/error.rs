//! Error types for image and mesh I/O.

use std::path::PathBuf;

use litho_types::FieldError;
use thiserror::Error;

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading images or writing meshes.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Image could not be decoded.
    #[error("image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Decoded image did not form a valid pixel field.
    #[error(transparent)]
    MalformedField(#[from] FieldError),

    /// Invalid header in binary STL.
    #[error("invalid STL header: expected {expected} bytes, got {got}")]
    InvalidHeader {
        /// Expected header size.
        expected: usize,
        /// Actual header size.
        got: usize,
    },

    /// Binary STL ended before all declared triangles were read.
    #[error("invalid face count: expected {expected}, got {got}")]
    InvalidFaceCount {
        /// Declared number of triangles.
        expected: u32,
        /// Number of triangles actually read.
        got: u32,
    },

    /// Mesh has more triangles than binary STL can count.
    #[error("too many triangles for binary STL: {0}")]
    TooManyTriangles(usize),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
