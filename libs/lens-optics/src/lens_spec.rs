//! # Lens Spec
//!
//! Fully specified description of one physical lens, with the boundary
//! validation callers run before handing values to the estimator.

use crate::error::{ensure_finite, OpticsError, OpticsResult};
use crate::material::{IndexBand, Material};
use crate::prescription::Prescription;
use config::constants::DEFAULT_DIAMETER_MM;
use lens_outline::ShapeId;
use serde::{Deserialize, Serialize};

/// One physical lens: power, material, size and frame style.
///
/// # Example
///
/// ```rust
/// use lens_optics::{LensSpec, Prescription};
/// use lens_outline::ShapeId;
///
/// let spec = LensSpec::new(Prescription::sphere(-2.0), 1.60, 65.0, ShapeId::Aviator).unwrap();
/// assert_eq!(spec.band().min_thickness_mm(), 1.0);
///
/// assert!(LensSpec::new(Prescription::sphere(-2.0), 1.0, 65.0, ShapeId::Aviator).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensSpec {
    pub prescription: Prescription,
    /// Must be greater than 1.0
    pub refractive_index: f64,
    /// Outer frame diameter in millimeters
    pub diameter_mm: f64,
    pub shape: ShapeId,
}

impl Default for LensSpec {
    fn default() -> Self {
        Self {
            prescription: Prescription::default(),
            refractive_index: Material::default().index(),
            diameter_mm: DEFAULT_DIAMETER_MM,
            shape: ShapeId::DEFAULT,
        }
    }
}

impl LensSpec {
    /// Builds a validated lens spec.
    ///
    /// # Errors
    ///
    /// See [`LensSpec::validate`].
    pub fn new(
        prescription: Prescription,
        refractive_index: f64,
        diameter_mm: f64,
        shape: ShapeId,
    ) -> OpticsResult<Self> {
        let spec = Self {
            prescription,
            refractive_index,
            diameter_mm,
            shape,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Builds a spec from a catalog material.
    pub fn with_material(
        prescription: Prescription,
        material: Material,
        diameter_mm: f64,
        shape: ShapeId,
    ) -> OpticsResult<Self> {
        Self::new(prescription, material.index(), diameter_mm, shape)
    }

    /// Checks the numeric preconditions of the thickness and surface models.
    ///
    /// # Errors
    ///
    /// - [`OpticsError::NonFinite`] for NaN or infinite inputs
    /// - [`OpticsError::InvalidIndex`] if `refractive_index <= 1.0`
    /// - [`OpticsError::InvalidDiameter`] if `diameter_mm <= 0`
    pub fn validate(&self) -> OpticsResult<()> {
        ensure_finite("sphere", self.prescription.sphere)?;
        ensure_finite("cylinder", self.prescription.cylinder)?;
        ensure_finite("axis", self.prescription.axis)?;
        ensure_finite("refractive_index", self.refractive_index)?;
        ensure_finite("diameter_mm", self.diameter_mm)?;

        if self.refractive_index <= 1.0 {
            return Err(OpticsError::InvalidIndex(self.refractive_index));
        }
        if self.diameter_mm <= 0.0 {
            return Err(OpticsError::InvalidDiameter(self.diameter_mm));
        }
        Ok(())
    }

    pub fn band(&self) -> IndexBand {
        IndexBand::for_index(self.refractive_index)
    }

    #[inline]
    pub fn spherical_power(&self) -> f64 {
        self.prescription.spherical_power()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let spec = LensSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.refractive_index, 1.60);
        assert_eq!(spec.diameter_mm, 65.0);
        assert_eq!(spec.shape, ShapeId::Rectangle);
    }

    #[test]
    fn test_rejects_index_at_or_below_one() {
        for index in [1.0, 0.5, -1.6] {
            let spec = LensSpec {
                refractive_index: index,
                ..LensSpec::default()
            };
            assert_eq!(spec.validate(), Err(OpticsError::InvalidIndex(index)));
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let spec = LensSpec {
            prescription: Prescription::sphere(f64::NAN),
            ..LensSpec::default()
        };
        assert_eq!(spec.validate(), Err(OpticsError::non_finite("sphere")));
    }

    #[test]
    fn test_rejects_non_positive_diameter() {
        let spec = LensSpec {
            diameter_mm: 0.0,
            ..LensSpec::default()
        };
        assert_eq!(spec.validate(), Err(OpticsError::InvalidDiameter(0.0)));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let spec: LensSpec =
            serde_json::from_str(r#"{"prescription": {"sphere": -4.0}, "shape": "oval"}"#).unwrap();
        assert_eq!(spec.shape, ShapeId::Oval);
        assert_eq!(spec.refractive_index, 1.60);
        assert_eq!(spec.spherical_power(), -4.0);
    }
}
