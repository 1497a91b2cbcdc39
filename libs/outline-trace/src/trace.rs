//! # Trace Pipeline
//!
//! ```text
//! foreground → centroid → angular sweep → simplify → normalize
//!   → rotate → resample → smooth
//! ```

use crate::contour::{angular_sweep, centroid, douglas_peucker};
use crate::error::{TraceError, TraceResult};
use crate::geometry::{normalize, resample_arc_length, rotate, smooth};
use crate::image::LuminanceImage;
use config::constants::{DEFAULT_OUTLINE_POINTS, MIN_OUTLINE_POINTS};
use glam::DVec2;
use lens_outline::ShapeOutline;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tracing parameters. Defaults reproduce the digitized catalog tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceParams {
    /// Pixels darker than this luminance are lens
    pub threshold: f64,
    /// Angular sectors in the rim sweep
    pub angular_steps: usize,
    /// Douglas-Peucker tolerance in pixels
    pub simplify_tolerance: f64,
    /// Rotation applied after normalization, in degrees
    pub rotation_deg: f64,
    pub target_points: usize,
    pub smoothing_passes: usize,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            threshold: 240.0,
            angular_steps: 720,
            simplify_tolerance: 0.8,
            rotation_deg: 0.0,
            target_points: DEFAULT_OUTLINE_POINTS,
            smoothing_passes: 5,
        }
    }
}

/// A traced outline in `(x, z)`, z pointing down the lens face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracedOutline {
    /// Width/height of the silhouette before normalization
    pub width_ratio: f64,
    pub points: Vec<DVec2>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TracedJson {
    width_ratio: f64,
    point_count: usize,
    points: Vec<JsonPoint>,
}

#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    z: f64,
}

impl TracedOutline {
    /// Pretty JSON: `{ "widthRatio", "pointCount", "points": [{ "x", "z" }] }`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&TracedJson {
            width_ratio: self.width_ratio,
            point_count: self.points.len(),
            points: self
                .points
                .iter()
                .map(|p| JsonPoint { x: p.x, z: p.y })
                .collect(),
        })
    }

    /// A `pub static` table in the layout of the digitized catalog.
    pub fn to_rust_literal(&self, name: &str) -> String {
        let mut lines = vec![
            format!("/// Width ratio {:.4}", self.width_ratio),
            "#[rustfmt::skip]".to_string(),
            format!("pub static {name}: [[f64; 2]; {}] = [", self.points.len()),
        ];
        lines.extend(self.points.chunks(4).map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|p| format!("[{:.5}, {:.5}]", p.x, p.y))
                .collect();
            format!("    {},", cells.join(", "))
        }));
        lines.push("];".to_string());
        lines.join("\n") + "\n"
    }

    /// Checks the outline invariants and re-normalizes.
    ///
    /// # Errors
    ///
    /// [`TraceError::Outline`] if the points do not form a valid ring.
    pub fn into_outline(self) -> TraceResult<ShapeOutline> {
        Ok(ShapeOutline::normalized(self.points)?)
    }
}

/// Traces the lens silhouette in `image`.
///
/// # Errors
///
/// - [`TraceError::NoForeground`] if no pixel is below the threshold
/// - [`TraceError::TooFewContourPoints`] if the rim collapses below three
///   points or has no height
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn trace(image: &LuminanceImage, params: &TraceParams) -> TraceResult<TracedOutline> {
    let pixels = image.foreground(params.threshold);
    let Some(center) = centroid(&pixels) else {
        return Err(TraceError::NoForeground {
            threshold: params.threshold,
        });
    };

    let rim = angular_sweep(&pixels, center, params.angular_steps);
    let mut contour = douglas_peucker(&rim, params.simplify_tolerance);
    debug!(
        foreground = pixels.len(),
        rim = rim.len(),
        simplified = contour.len(),
        "extracted contour"
    );
    if contour.len() < MIN_OUTLINE_POINTS {
        return Err(TraceError::TooFewContourPoints {
            count: contour.len(),
        });
    }

    let width_ratio = normalize(&mut contour).ok_or(TraceError::TooFewContourPoints {
        count: contour.len(),
    })?;
    if params.rotation_deg != 0.0 {
        rotate(&mut contour, params.rotation_deg.to_radians());
    }

    let resampled = resample_arc_length(&contour, params.target_points);
    let points = smooth(&resampled, params.smoothing_passes);

    Ok(TracedOutline {
        width_ratio,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> TracedOutline {
        TracedOutline {
            width_ratio: 1.25,
            points: vec![
                DVec2::new(-0.5, -0.4),
                DVec2::new(0.5, -0.4),
                DVec2::new(0.5, 0.4),
                DVec2::new(-0.5, 0.4),
                DVec2::new(-0.5, 0.0),
            ],
        }
    }

    #[test]
    fn test_default_params() {
        let params = TraceParams::default();
        assert_eq!(params.threshold, 240.0);
        assert_eq!(params.angular_steps, 720);
        assert_eq!(params.target_points, 120);
        assert_eq!(params.smoothing_passes, 5);
    }

    #[test]
    fn test_json_uses_x_z_keys() {
        let json = outline().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["widthRatio"], 1.25);
        assert_eq!(value["pointCount"], 5);
        assert_eq!(value["points"][1]["x"], 0.5);
        assert_eq!(value["points"][1]["z"], -0.4);
    }

    #[test]
    fn test_rust_literal_layout() {
        let literal = outline().to_rust_literal("TRACED");
        assert!(literal.contains("pub static TRACED: [[f64; 2]; 5] = ["));
        assert!(literal.contains(
            "    [-0.50000, -0.40000], [0.50000, -0.40000], [0.50000, 0.40000], [-0.50000, 0.40000],\n"
        ));
        assert!(literal.ends_with("    [-0.50000, 0.00000],\n];\n"));
        assert!(literal.starts_with("/// Width ratio "));
        assert_eq!(literal.lines().count(), 6);
        assert_eq!(literal.lines().nth(1), Some("#[rustfmt::skip]"));
    }

    #[test]
    fn test_into_outline_rejects_duplicates() {
        let mut traced = outline();
        traced.points[1] = traced.points[0];
        assert!(matches!(
            traced.into_outline(),
            Err(TraceError::Outline(_))
        ));
    }

    #[test]
    fn test_blank_image_has_no_foreground() {
        let image = LuminanceImage::from_fn(8, 8, |_, _| 255.0).unwrap();
        assert_eq!(
            trace(&image, &TraceParams::default()),
            Err(TraceError::NoForeground { threshold: 240.0 })
        );
    }

    #[test]
    fn test_single_pixel_is_too_small() {
        let image =
            LuminanceImage::from_fn(8, 8, |x, y| if (x, y) == (3, 3) { 0.0 } else { 255.0 })
                .unwrap();
        assert!(matches!(
            trace(&image, &TraceParams::default()),
            Err(TraceError::TooFewContourPoints { .. })
        ));
    }
}
