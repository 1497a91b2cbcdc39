//! # Scene Errors

use lens_mesh::MeshError;
use lens_optics::OpticsError;
use thiserror::Error;

/// Errors from the lens pipeline and the frame layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error(transparent)]
    Optics(#[from] OpticsError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Bridge width must be finite and non-negative
    #[error("Bridge width must be a finite, non-negative length, got {0} mm")]
    InvalidBridge(f64),
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
