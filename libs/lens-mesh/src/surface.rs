//! # Surface Model
//!
//! Splits a spherical power between a front and a back surface and turns
//! each surface power into a radius of curvature.
//!
//! ## Base Curve Rule
//!
//! | Lens | Low index (n <= 1.53) | Higher index |
//! |---|---|---|
//! | Minus | `SE / 2 + 6.00` | `4.00` |
//! | Plus | `SE + 3.00` | `SE + 0.50` |
//! | Plano | `6.00` | `6.00` |
//!
//! `SE` is the spherical power after display attenuation. The rule is a
//! manufacturing convention, not derived optics.

use config::constants::{
    is_low_index, FLAT_SURFACE_RADIUS_MM, PLANO_BASE_CURVE, SURFACE_POWER_EPSILON,
};
use serde::{Deserialize, Serialize};

/// Selects the front-surface power (D).
///
/// The branch is picked from the sign of `prescription`; the value uses
/// `spherical`, the attenuated power.
///
/// # Example
///
/// ```rust
/// use lens_mesh::surface::base_curve;
///
/// assert_eq!(base_curve(-4.0, -4.0, 1.50), 4.0);
/// assert_eq!(base_curve(-4.0, -4.0, 1.67), 4.0);
/// assert_eq!(base_curve(2.0, 2.0, 1.50), 5.0);
/// assert_eq!(base_curve(0.0, 0.0, 1.74), 6.0);
/// ```
pub fn base_curve(spherical: f64, prescription: f64, refractive_index: f64) -> f64 {
    let low_index = is_low_index(refractive_index);
    if prescription < 0.0 {
        if low_index {
            spherical / 2.0 + 6.0
        } else {
            4.0
        }
    } else if prescription > 0.0 {
        if low_index {
            spherical + 3.0
        } else {
            spherical + 0.5
        }
    } else {
        PLANO_BASE_CURVE
    }
}

/// Converts a surface power (D) into a radius of curvature (mm).
///
/// Powers within [`SURFACE_POWER_EPSILON`] of zero map to
/// [`FLAT_SURFACE_RADIUS_MM`].
///
/// # Example
///
/// ```rust
/// use lens_mesh::surface::radius_from_power;
///
/// assert!((radius_from_power(5.0, 1.5) - 100.0).abs() < 1e-12);
/// assert!((radius_from_power(-5.0, 1.5) - 100.0).abs() < 1e-12);
/// assert_eq!(radius_from_power(0.0, 1.5), 10_000.0);
/// ```
pub fn radius_from_power(power: f64, refractive_index: f64) -> f64 {
    if power.abs() < SURFACE_POWER_EPSILON {
        FLAT_SURFACE_RADIUS_MM
    } else {
        (1000.0 * (refractive_index - 1.0) / power).abs()
    }
}

/// Depth of a spherical cap of radius `radius` at distance `r` from the axis.
///
/// Falls back to the paraxial `r² / 2R` once `r` reaches `R`.
///
/// # Example
///
/// ```rust
/// use lens_mesh::surface::sagitta;
///
/// assert_eq!(sagitta(0.0, 100.0), 0.0);
/// assert!((sagitta(60.0, 100.0) - 20.0).abs() < 1e-12);
/// assert_eq!(sagitta(100.0, 50.0), 100.0);
/// ```
pub fn sagitta(r: f64, radius: f64) -> f64 {
    if r < radius {
        radius - (radius * radius - r * r).sqrt()
    } else {
        r * r / (2.0 * radius)
    }
}

/// Front and back surface curvature of one lens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePair {
    /// Front surface power (D), equal to the base curve
    pub front_power: f64,
    /// Back surface power (D)
    pub back_power: f64,
    pub front_radius_mm: f64,
    pub back_radius_mm: f64,
}

impl SurfacePair {
    /// Builds the surface pair for a prescription.
    ///
    /// `power_scale` attenuates the prescription before the split; `1.0`
    /// gives physically literal curvatures.
    pub fn new(prescription: f64, refractive_index: f64, power_scale: f64) -> Self {
        let spherical = prescription * power_scale;
        let front_power = base_curve(spherical, prescription, refractive_index);
        let back_power = spherical - front_power;
        Self {
            front_power,
            back_power,
            front_radius_mm: radius_from_power(front_power, refractive_index),
            back_radius_mm: radius_from_power(back_power, refractive_index),
        }
    }

    /// Front and back sagitta at planar radius `r`.
    pub fn sagittas(&self, r: f64) -> (f64, f64) {
        (
            sagitta(r, self.front_radius_mm),
            sagitta(r, self.back_radius_mm),
        )
    }

    /// Vertical gap between the surfaces at planar radius `r`.
    pub fn thickness_at(&self, r: f64, center_thickness_mm: f64) -> f64 {
        let (s1, s2) = self.sagittas(r);
        center_thickness_mm + s2 - s1
    }
}
