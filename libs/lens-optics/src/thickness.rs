//! # Thickness Estimator
//!
//! Empirical center/edge thickness from prescription, index and diameter.
//!
//! ## Divisor Model
//!
//! ```text
//! addition = diameter² · |P| / (divisor · (n - 1))
//!
//! minus: center = floor,            edge = floor + addition
//! plus:  center = floor + addition, edge = floor
//! plano: center = edge = floor
//! ```
//!
//! The divisor and floor come from the material's [`IndexBand`]. The model is
//! a piecewise fit to a manufacturer chart, not first-principles optics.
//! Inputs are not validated here: run [`LensSpec::validate`] at the boundary.

use crate::lens_spec::LensSpec;
use crate::material::{IndexBand, Material};
use crate::prescription::LensKind;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Center and edge thickness in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThicknessResult {
    pub center: f64,
    pub edge: f64,
}

impl ThicknessResult {
    pub fn new(center: f64, edge: f64) -> Self {
        Self { center, edge }
    }

    /// Larger of the two thicknesses.
    pub fn max(&self) -> f64 {
        self.center.max(self.edge)
    }

    /// Magnitude of the center/edge difference.
    pub fn differential(&self) -> f64 {
        (self.edge - self.center).abs()
    }
}

/// A model that maps lens parameters to a thickness estimate.
pub trait ThicknessModel {
    /// Estimates thickness for a signed spherical power (D), a refractive
    /// index and a frame diameter (mm).
    fn estimate(&self, prescription: f64, refractive_index: f64, diameter_mm: f64)
        -> ThicknessResult;

    /// Estimates thickness for a lens spec.
    fn estimate_spec(&self, spec: &LensSpec) -> ThicknessResult {
        self.estimate(
            spec.spherical_power(),
            spec.refractive_index,
            spec.diameter_mm,
        )
    }
}

/// Piecewise divisor model fitted per index band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivisorModel;

impl DivisorModel {
    /// Thickness added on top of the floor.
    pub fn addition(prescription: f64, refractive_index: f64, diameter_mm: f64) -> f64 {
        let power = prescription.abs();
        let divisor = IndexBand::for_index(refractive_index).divisor_for(power);
        diameter_mm * diameter_mm * power / (divisor * (refractive_index - 1.0))
    }
}

impl ThicknessModel for DivisorModel {
    fn estimate(
        &self,
        prescription: f64,
        refractive_index: f64,
        diameter_mm: f64,
    ) -> ThicknessResult {
        let band = IndexBand::for_index(refractive_index);
        let floor = band.min_thickness_mm();
        let addition = Self::addition(prescription, refractive_index, diameter_mm);

        let result = match LensKind::of(prescription) {
            LensKind::Minus => ThicknessResult::new(floor, floor + addition),
            LensKind::Plus => ThicknessResult::new(floor + addition, floor),
            LensKind::Plano => ThicknessResult::new(floor, floor),
        };

        trace!(
            prescription,
            refractive_index,
            diameter_mm,
            band = ?band,
            center = result.center,
            edge = result.edge,
            "estimated thickness"
        );
        result
    }
}

/// Estimates thickness with the divisor model.
///
/// # Example
///
/// ```rust
/// use lens_optics::estimate_thickness;
///
/// let t = estimate_thickness(-2.0, 1.50, 65.0);
/// assert_eq!(t.center, 2.0);
/// assert!((t.edge - 4.9).abs() < 0.2);
/// ```
pub fn estimate_thickness(prescription: f64, refractive_index: f64, diameter_mm: f64) -> ThicknessResult {
    DivisorModel.estimate(prescription, refractive_index, diameter_mm)
}

/// Thickness of one catalog material for a given prescription.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialThickness {
    pub material: Material,
    pub thickness: ThicknessResult,
}

/// Estimates thickness for every catalog material, lowest index first.
pub fn compare_materials(prescription: f64, diameter_mm: f64) -> Vec<MaterialThickness> {
    Material::ALL
        .into_iter()
        .map(|material| MaterialThickness {
            material,
            thickness: estimate_thickness(prescription, material.index(), diameter_mm),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_minus_lens_thick_edge() {
        let t = estimate_thickness(-2.0, 1.50, 65.0);
        assert_eq!(t.center, 2.0);
        // 65² · 2 / (5700 · 0.5)
        assert_abs_diff_eq!(t.edge, 2.0 + 8450.0 / 2850.0, epsilon = 1e-12);
    }

    #[test]
    fn test_plus_lens_thick_center() {
        let t = estimate_thickness(3.0, 1.60, 60.0);
        assert_eq!(t.edge, 1.0);
        assert!(t.center > t.edge);
    }

    #[test]
    fn test_plano_uniform() {
        for index in [1.50, 1.60, 1.67, 1.74] {
            let t = estimate_thickness(0.0, index, 65.0);
            assert_eq!(t.center, t.edge);
            assert_eq!(t.differential(), 0.0);
        }
    }

    #[test]
    fn test_addition_scales_with_diameter_squared() {
        let small = DivisorModel::addition(-4.0, 1.67, 50.0);
        let large = DivisorModel::addition(-4.0, 1.67, 100.0);
        assert_abs_diff_eq!(large / small, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_spec_uses_sphere() {
        let spec = LensSpec {
            prescription: crate::Prescription {
                sphere: -6.0,
                cylinder: -2.0,
                axis: 45.0,
            },
            refractive_index: 1.67,
            ..LensSpec::default()
        };
        assert_eq!(
            DivisorModel.estimate_spec(&spec),
            estimate_thickness(-6.0, 1.67, spec.diameter_mm)
        );
    }

    #[test]
    fn test_compare_materials_thinner_with_index() {
        let rows = compare_materials(-4.0, 65.0);
        assert_eq!(rows.len(), 4);
        let edges: Vec<f64> = rows.iter().map(|r| r.thickness.edge).collect();
        assert!(edges.windows(2).all(|w| w[0] > w[1]), "{edges:?}");
    }
}
