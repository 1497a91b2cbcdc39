//! # Mesh Errors
//!
//! Error types for lens mesh generation.

use thiserror::Error;

/// Errors that can occur during lens mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Outline cannot form a closed ring
    #[error("Outline needs at least {min} points to form a ring, got {count}")]
    MalformedOutline { count: usize, min: usize },

    /// Ring count must be at least 1
    #[error("Ring count must be at least 1, got {0}")]
    InvalidRingCount(u32),

    /// A numeric parameter is out of range or not finite
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

impl MeshError {
    /// Creates a malformed outline error using the workspace minimum.
    pub fn malformed_outline(count: usize) -> Self {
        Self::MalformedOutline {
            count,
            min: config::constants::MIN_OUTLINE_POINTS,
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Creates a validation failed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
