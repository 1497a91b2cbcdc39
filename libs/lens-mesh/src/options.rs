//! # Render Options
//!
//! Mesh resolution and display attenuation, resolved once at the boundary.

use crate::error::{MeshError, MeshResult};
use config::constants::{DEFAULT_OUTLINE_POINTS, DEFAULT_POWER_SCALE, DEFAULT_RING_COUNT, MIN_OUTLINE_POINTS};
use serde::{Deserialize, Serialize};

/// Options controlling how a lens is tessellated and curved.
///
/// # Example
///
/// ```rust
/// use lens_mesh::RenderOptions;
///
/// let options = RenderOptions {
///     ring_count: 8,
///     ..RenderOptions::default()
/// };
/// assert!(options.validate().is_ok());
/// assert_eq!(options.outline_points, 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Radial ring intervals between the center and the rim
    pub ring_count: u32,
    /// Samples requested from parametric outlines
    pub outline_points: usize,
    /// Attenuation applied to the prescription before the surface split
    pub power_scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ring_count: DEFAULT_RING_COUNT,
            outline_points: DEFAULT_OUTLINE_POINTS,
            power_scale: DEFAULT_POWER_SCALE,
        }
    }
}

impl RenderOptions {
    /// Physically literal curvature (no attenuation).
    pub fn literal() -> Self {
        Self {
            power_scale: 1.0,
            ..Self::default()
        }
    }

    /// Checks ranges.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidRingCount`] if `ring_count == 0`
    /// - [`MeshError::MalformedOutline`] if `outline_points` is below the ring minimum
    /// - [`MeshError::InvalidParameter`] for a non-finite or negative `power_scale`
    pub fn validate(&self) -> MeshResult<()> {
        if self.ring_count == 0 {
            return Err(MeshError::InvalidRingCount(self.ring_count));
        }
        if self.outline_points < MIN_OUTLINE_POINTS {
            return Err(MeshError::malformed_outline(self.outline_points));
        }
        if !self.power_scale.is_finite() || self.power_scale < 0.0 {
            return Err(MeshError::invalid_parameter("power_scale", self.power_scale));
        }
        Ok(())
    }
}
