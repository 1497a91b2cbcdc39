//! # Dual-Lens Layout
//!
//! Places a right and a left lens so the gap between their facing edges
//! equals the bridge width.
//!
//! ```text
//!        right lens         bridge        left lens
//!   |<---- rW ---->|<------- b ------->|<---- lW ---->|
//!          rX              0                  lX
//! ```
//!
//! Each lens width is `diameter × width_ratio`. The pair is centered on the
//! origin: `rX = -((rW + lW) / 2 + b) / 2` and `lX = -rX`.

use crate::error::{SceneError, SceneResult};
use config::constants::DEFAULT_BRIDGE_WIDTH_MM;
use lens_optics::ThicknessResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gap between the inner edges of the two lenses (DBL).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSpec {
    pub bridge_width_mm: f64,
}

impl Default for BridgeSpec {
    fn default() -> Self {
        Self {
            bridge_width_mm: DEFAULT_BRIDGE_WIDTH_MM,
        }
    }
}

impl BridgeSpec {
    pub fn new(bridge_width_mm: f64) -> Self {
        Self { bridge_width_mm }
    }

    /// # Errors
    ///
    /// [`SceneError::InvalidBridge`] for a negative or non-finite width.
    pub fn validate(&self) -> SceneResult<()> {
        if self.bridge_width_mm.is_finite() && self.bridge_width_mm >= 0.0 {
            Ok(())
        } else {
            Err(SceneError::InvalidBridge(self.bridge_width_mm))
        }
    }
}

/// Horizontal extent of one lens at the bridge level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LensFootprint {
    pub diameter_mm: f64,
    /// Lens width divided by diameter for the frame style
    pub width_ratio: f64,
}

impl LensFootprint {
    pub fn new(diameter_mm: f64, width_ratio: f64) -> Self {
        Self {
            diameter_mm,
            width_ratio,
        }
    }

    #[inline]
    pub fn width_mm(&self) -> f64 {
        self.diameter_mm * self.width_ratio
    }
}

/// Everything the layout needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualLensInput {
    pub right: LensFootprint,
    pub left: LensFootprint,
    #[serde(default)]
    pub bridge: BridgeSpec,
}

impl DualLensInput {
    /// Solves the placement.
    pub fn layout(&self) -> DualLensLayout {
        layout_dual_lenses(
            self.left.width_ratio,
            self.right.width_ratio,
            self.left.diameter_mm,
            self.right.diameter_mm,
            self.bridge.bridge_width_mm,
        )
    }

    /// Distance between the facing edges for a given layout.
    pub fn inner_gap(&self, layout: &DualLensLayout) -> f64 {
        (layout.left_x - self.left.width_mm() / 2.0)
            - (layout.right_x + self.right.width_mm() / 2.0)
    }
}

/// Horizontal lens centers in millimeters. The right lens sits at negative x.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DualLensLayout {
    pub right_x: f64,
    pub left_x: f64,
}

impl DualLensLayout {
    /// Center-to-center distance.
    pub fn separation(&self) -> f64 {
        self.left_x - self.right_x
    }
}

/// Places two lenses symmetrically around the origin.
///
/// # Example
///
/// ```rust
/// use lens_scene::layout_dual_lenses;
///
/// let layout = layout_dual_lenses(1.0, 1.0, 50.0, 50.0, 20.0);
/// assert_eq!(layout.right_x, -35.0);
/// assert_eq!(layout.left_x, 35.0);
/// ```
pub fn layout_dual_lenses(
    left_width_ratio: f64,
    right_width_ratio: f64,
    left_diameter_mm: f64,
    right_diameter_mm: f64,
    bridge_width_mm: f64,
) -> DualLensLayout {
    let right_width = right_diameter_mm * right_width_ratio;
    let left_width = left_diameter_mm * left_width_ratio;
    let right_x = -((right_width + left_width) / 2.0 + bridge_width_mm) / 2.0;

    debug!(right_width, left_width, bridge_width_mm, right_x, "dual lens layout");

    DualLensLayout {
        right_x,
        left_x: -right_x,
    }
}

/// Where one lens of a pair ends up in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LensPlacement {
    pub x: f64,
    /// Lift that keeps the thickest part of the lens above the table
    pub y_offset: f64,
    /// Left lenses are mirrored across x
    pub mirrored: bool,
}

impl LensPlacement {
    /// Placements for a laid-out pair.
    pub fn for_pair(
        layout: &DualLensLayout,
        right: &ThicknessResult,
        left: &ThicknessResult,
    ) -> (Self, Self) {
        (
            Self {
                x: layout.right_x,
                y_offset: right.max() / 2.0,
                mirrored: false,
            },
            Self {
                x: layout.left_x,
                y_offset: left.max() / 2.0,
                mirrored: true,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_symmetric_pair() {
        let layout = layout_dual_lenses(1.2, 1.2, 65.0, 65.0, 17.0);
        assert_abs_diff_eq!(layout.left_x, -layout.right_x);
        assert_abs_diff_eq!(layout.separation(), 78.0 + 17.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mismatched_lenses_keep_bridge() {
        let input = DualLensInput {
            right: LensFootprint::new(70.0, 1.3),
            left: LensFootprint::new(55.0, 1.0),
            bridge: BridgeSpec::new(19.0),
        };
        let layout = input.layout();
        assert_abs_diff_eq!(input.inner_gap(&layout), 19.0, epsilon = 1e-12);
        assert_eq!(layout.left_x, -layout.right_x);
    }

    #[test]
    fn test_zero_bridge_touches() {
        let input = DualLensInput {
            right: LensFootprint::new(60.0, 1.0),
            left: LensFootprint::new(60.0, 1.0),
            bridge: BridgeSpec::new(0.0),
        };
        assert_eq!(input.layout().right_x, -30.0);
    }

    #[test]
    fn test_bridge_validation() {
        assert!(BridgeSpec::default().validate().is_ok());
        assert_eq!(BridgeSpec::default().bridge_width_mm, 17.0);
        assert_eq!(
            BridgeSpec::new(-1.0).validate(),
            Err(SceneError::InvalidBridge(-1.0))
        );
        assert!(BridgeSpec::new(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_placements_lift_by_half_max_thickness() {
        let layout = layout_dual_lenses(1.0, 1.0, 60.0, 60.0, 20.0);
        let (right, left) = LensPlacement::for_pair(
            &layout,
            &ThicknessResult::new(1.0, 6.0),
            &ThicknessResult::new(4.0, 1.0),
        );
        assert_eq!(right.x, -40.0);
        assert_eq!(right.y_offset, 3.0);
        assert!(!right.mirrored);
        assert_eq!(left.x, 40.0);
        assert_eq!(left.y_offset, 2.0);
        assert!(left.mirrored);
    }

    #[test]
    fn test_input_from_json_defaults_bridge() {
        let input: DualLensInput = serde_json::from_str(
            r#"{"right": {"diameter_mm": 65, "width_ratio": 1.2},
                "left": {"diameter_mm": 65, "width_ratio": 1.2}}"#,
        )
        .unwrap();
        assert_eq!(input.bridge, BridgeSpec::default());
    }
}
