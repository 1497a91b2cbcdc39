//! # Optics Errors
//!
//! Boundary validation errors for lens parameters. The estimator itself is
//! pure arithmetic and never returns these.

use thiserror::Error;

/// Errors raised when validating lens parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpticsError {
    /// Refractive index must be strictly greater than 1.0
    #[error("Refractive index must be greater than 1.0, got {0}")]
    InvalidIndex(f64),

    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Frame diameter must be positive
    #[error("Diameter must be positive, got {0} mm")]
    InvalidDiameter(f64),
}

/// Result type alias for optics operations.
pub type OpticsResult<T> = Result<T, OpticsError>;

impl OpticsError {
    /// Creates a non-finite error for the named field.
    pub fn non_finite(field: &'static str) -> Self {
        Self::NonFinite { field }
    }
}

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> OpticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OpticsError::non_finite(field))
    }
}
