//! # Outline Errors
//!
//! Error types for outline construction and shape lookup.

use thiserror::Error;

/// Errors that can occur while building or resolving an outline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// Fewer points than needed to close a ring
    #[error("Outline needs at least {min} points, got {count}")]
    TooFewPoints { count: usize, min: usize },

    /// Two consecutive points (including last -> first) coincide
    #[error("Outline points {index} and {next} coincide")]
    CoincidentPoints { index: usize, next: usize },

    /// A coordinate is NaN or infinite
    #[error("Outline point {index} is not finite")]
    NonFinite { index: usize },

    /// Strict shape lookup failed
    #[error("Unknown shape id: {0}")]
    UnknownShape(String),
}

/// Result type alias for outline operations.
pub type OutlineResult<T> = Result<T, OutlineError>;

impl OutlineError {
    /// Creates a too-few-points error using the workspace minimum.
    pub fn too_few(count: usize) -> Self {
        Self::TooFewPoints {
            count,
            min: config::constants::MIN_OUTLINE_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutlineError::too_few(2);
        assert!(err.to_string().contains("at least 3"));

        let err = OutlineError::UnknownShape("hexagram".to_string());
        assert!(err.to_string().contains("hexagram"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlineError>();
    }
}
