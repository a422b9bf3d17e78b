//! Error type for the end-to-end pipeline.

use litho_io::IoError;
use litho_mesh::MeshError;
use litho_relief::ReliefError;
use thiserror::Error;

/// Result type for lithophane generation.
pub type LithoResult<T> = Result<T, LithoError>;

/// Any failure along the image-to-mesh pipeline.
///
/// All errors are fatal to the request; no partial mesh is produced.
#[derive(Debug, Error)]
pub enum LithoError {
    /// Heightfield construction failed.
    #[error(transparent)]
    Relief(#[from] ReliefError),

    /// Projection or triangulation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Image decoding or mesh export failed.
    #[error(transparent)]
    Io(#[from] IoError),
}
