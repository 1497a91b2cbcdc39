//! # Parametric Generators
//!
//! Raw point generators for every non-digitized frame style. Each function
//! returns un-normalized points; the catalog normalizes and orients them.
//!
//! Curve-based styles sample `t = i / n * 2PI` for `i in 0..n`. With z
//! pointing down the lens face, `sin(t) < 0` is the upper half of the frame.

use crate::rounded::rounded_polygon;
use glam::DVec2;
use std::f64::consts::{PI, TAU};

// =============================================================================
// CURVE HELPERS
// =============================================================================

/// Samples `n` evenly spaced angles and maps each `(cos t, sin t)` to a point.
fn sample_curve(n: usize, f: impl Fn(f64, f64) -> DVec2) -> Vec<DVec2> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * TAU;
            f(t.cos(), t.sin())
        })
        .collect()
}

/// Axis-aligned ellipse with semi-axes `rx` and `rz`.
pub fn ellipse(rx: f64, rz: f64, n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| DVec2::new(rx * c, rz * s))
}

/// Superellipse (squircle). `exponent = 2` is an ordinary ellipse; larger
/// values square off the sides.
///
/// # Example
///
/// ```rust
/// use lens_outline::parametric::superellipse;
///
/// let points = superellipse(0.5, 0.5, 4.0, 8);
/// assert!((points[0].x - 0.5).abs() < 1e-12);
/// ```
pub fn superellipse(rx: f64, rz: f64, exponent: f64, n: usize) -> Vec<DVec2> {
    let e = 2.0 / exponent;
    sample_curve(n, |c, s| {
        DVec2::new(
            signum_or_zero(c) * rx * c.abs().powf(e),
            signum_or_zero(s) * rz * s.abs().powf(e),
        )
    })
}

fn signum_or_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v.signum()
    }
}

/// Weight of the brow lift at `sin(t) = s`.
///
/// Zero on the lower half and at the widest point, rising to 1.0 at the top
/// so the upswept styles close without a step at `t = 0` and `t = PI`.
fn brow_weight(s: f64) -> f64 {
    if s < 0.0 {
        -s * (2.0 + s)
    } else {
        0.0
    }
}

/// Regular polygon corners of radius 0.5 starting at `phase`.
fn regular_corners(sides: usize, phase: f64) -> Vec<DVec2> {
    (0..sides)
        .map(|i| DVec2::from_angle(i as f64 / sides as f64 * TAU + phase) * 0.5)
        .collect()
}

/// Corners of an axis-aligned rectangle, clockwise from the upper right.
fn box_corners(w: f64, h: f64) -> Vec<DVec2> {
    vec![
        DVec2::new(w / 2.0, -h / 2.0),
        DVec2::new(w / 2.0, h / 2.0),
        DVec2::new(-w / 2.0, h / 2.0),
        DVec2::new(-w / 2.0, -h / 2.0),
    ]
}

// =============================================================================
// ROUNDED POLYGON STYLES
// =============================================================================

/// Classic rectangle, 1.4 x 0.9 with small corner radii.
pub fn rectangle(n: usize) -> Vec<DVec2> {
    rounded_polygon(&box_corners(1.4, 0.9), &[0.08; 4], n)
}

/// Unit square with soft corners.
pub fn square(n: usize) -> Vec<DVec2> {
    rounded_polygon(&box_corners(1.0, 1.0), &[0.1; 4], n)
}

/// Trapezoid, wider along the brow than at the bottom.
pub fn wayfarer(n: usize) -> Vec<DVec2> {
    let (top_w, bottom_w, h) = (1.5, 1.2, 0.9);
    let corners = [
        DVec2::new(top_w / 2.0, -h / 2.0),
        DVec2::new(bottom_w / 2.0, h / 2.0),
        DVec2::new(-bottom_w / 2.0, h / 2.0),
        DVec2::new(-top_w / 2.0, -h / 2.0),
    ];
    rounded_polygon(&corners, &[0.12, 0.2, 0.2, 0.12], n)
}

/// Five-corner teardrop with a pointed bottom.
pub fn pilot(n: usize) -> Vec<DVec2> {
    let (top_w, bottom_w, h) = (1.3, 1.5, 1.0);
    let corners = [
        DVec2::new(top_w / 2.0, -h / 2.0),
        DVec2::new(bottom_w / 2.0, h / 3.0),
        DVec2::new(0.0, h / 2.0),
        DVec2::new(-bottom_w / 2.0, h / 3.0),
        DVec2::new(-top_w / 2.0, -h / 2.0),
    ];
    rounded_polygon(&corners, &[0.15, 0.2, 0.25, 0.2, 0.15], n)
}

/// Wide rectangle with generous corners.
pub fn navigator(n: usize) -> Vec<DVec2> {
    rounded_polygon(&box_corners(1.5, 0.85), &[0.15; 4], n)
}

/// Hexagon rotated for a flat top.
pub fn geometric(n: usize) -> Vec<DVec2> {
    rounded_polygon(&regular_corners(6, -PI / 6.0), &[0.06; 6], n)
}

/// Regular hexagon with pointed sides.
pub fn hexagonal(n: usize) -> Vec<DVec2> {
    rounded_polygon(&regular_corners(6, 0.0), &[0.04; 6], n)
}

/// Regular octagon offset by half a side.
pub fn octagonal(n: usize) -> Vec<DVec2> {
    rounded_polygon(&regular_corners(8, -PI / 8.0), &[0.03; 8], n)
}

// =============================================================================
// CURVE STYLES
// =============================================================================

/// Teardrop, slightly wider toward the bottom.
pub fn aviator(n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| {
        let rx = 0.7 + 0.08 * s;
        DVec2::new(rx * c, 0.45 * s + 0.02)
    })
}

/// Browline: flat upper half, rounder and slightly narrower lower half.
pub fn clubmaster(n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| {
        let (rx, rz) = if s < 0.0 {
            (0.7, 0.32)
        } else {
            (0.7 - 0.05 * s.abs(), 0.45)
        };
        DVec2::new(rx * c, rz * s)
    })
}

/// Ellipse with upswept outer corners along the brow.
pub fn cat_eye(n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| {
        let lift = c.abs().powf(1.5) * 0.12 * brow_weight(s);
        DVec2::new(0.7 * c, 0.42 * s - lift)
    })
}

/// Narrower cat-eye with a stronger sweep.
pub fn cat_eye_narrow(n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| {
        let lift = c.abs().powf(1.3) * 0.15 * brow_weight(s);
        DVec2::new(0.65 * c, 0.35 * s - lift)
    })
}

/// Circle.
pub fn round(n: usize) -> Vec<DVec2> {
    ellipse(0.5, 0.5, n)
}

/// Horizontal ellipse.
pub fn oval(n: usize) -> Vec<DVec2> {
    ellipse(0.7, 0.45, n)
}

/// Flatter top, rounder bottom.
pub fn pantos(n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| {
        let rz = if s < 0.0 { 0.3 } else { 0.5 };
        DVec2::new(0.6 * c, rz * s + 0.05)
    })
}

/// Wide outer wings tapering toward the center line.
pub fn butterfly(n: usize) -> Vec<DVec2> {
    sample_curve(n, |c, s| {
        let rx = 0.7 + 0.1 * c.abs();
        let rz = 0.38 + 0.08 * c * c;
        let lift = c * c * 0.08 * brow_weight(s);
        DVec2::new(rx * c, rz * s - lift)
    })
}
