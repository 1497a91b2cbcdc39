//! # Trace Errors

use lens_outline::OutlineError;
use thiserror::Error;

/// Errors that can occur while tracing a silhouette.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// Width or height is zero
    #[error("Image has no pixels")]
    EmptyImage,

    /// Nothing darker than the threshold
    #[error("No foreground pixels below luminance {threshold}")]
    NoForeground { threshold: f64 },

    /// Byte buffer does not match the declared dimensions
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// The contour collapsed below a closed ring
    #[error("Contour has {count} points, need at least 3")]
    TooFewContourPoints { count: usize },

    #[error(transparent)]
    Outline(#[from] OutlineError),
}

/// Result type alias for tracing operations.
pub type TraceResult<T> = Result<T, TraceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_message() {
        let err = TraceError::BufferSize {
            expected: 16,
            actual: 12,
        };
        assert_eq!(err.to_string(), "Pixel buffer has 12 bytes, expected 16");
    }
}
