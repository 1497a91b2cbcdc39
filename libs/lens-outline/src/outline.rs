//! # Shape Outline
//!
//! Closed 2D rim outline shared by every generator.
//!
//! Points live in the lens face plane. `DVec2::x` is horizontal and
//! `DVec2::y` carries the outline's `z` coordinate, which grows toward the
//! bottom of the lens. Every outline handed out by the library is
//! normalized (bounding box centered on the origin, longer side exactly 1.0)
//! and traversed clockwise as seen from the front.

use crate::error::{OutlineError, OutlineResult};
use config::constants::{MIN_OUTLINE_POINTS, POINT_MERGE_EPSILON};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Traversal direction of a closed outline, as seen from the front with z
/// pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    /// Positive shoelace area in raw (x, z) coordinates
    Clockwise,
    /// Negative shoelace area in raw (x, z) coordinates
    CounterClockwise,
}

/// An ordered, implicitly closed sequence of outline points.
///
/// # Example
///
/// ```rust
/// use lens_outline::ShapeOutline;
/// use glam::DVec2;
///
/// let square = ShapeOutline::new(vec![
///     DVec2::new(0.5, -0.5),
///     DVec2::new(0.5, 0.5),
///     DVec2::new(-0.5, 0.5),
///     DVec2::new(-0.5, -0.5),
/// ])
/// .unwrap();
/// assert_eq!(square.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOutline {
    points: Vec<DVec2>,
}

impl ShapeOutline {
    /// Wraps caller-supplied points after checking the structural invariants.
    ///
    /// The points are kept as given: no normalization, no reordering.
    ///
    /// # Errors
    ///
    /// - [`OutlineError::TooFewPoints`] for fewer than three points
    /// - [`OutlineError::NonFinite`] for NaN or infinite coordinates
    /// - [`OutlineError::CoincidentPoints`] when two consecutive points
    ///   (including the wraparound pair) coincide
    pub fn new(points: Vec<DVec2>) -> OutlineResult<Self> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Validates the points, then normalizes and orients them clockwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lens_outline::ShapeOutline;
    /// use glam::DVec2;
    ///
    /// let outline = ShapeOutline::normalized(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(4.0, 0.0),
    ///     DVec2::new(4.0, 2.0),
    ///     DVec2::new(0.0, 2.0),
    /// ])
    /// .unwrap();
    /// let size = outline.size();
    /// assert!((size.x - 1.0).abs() < 1e-12);
    /// assert!((size.y - 0.5).abs() < 1e-12);
    /// ```
    pub fn normalized(points: Vec<DVec2>) -> OutlineResult<Self> {
        validate_points(&points)?;
        Ok(Self::from_generated(points))
    }

    /// Normalizes and orients points produced by a library generator.
    ///
    /// Generators guarantee the structural invariants by construction.
    pub(crate) fn from_generated(mut points: Vec<DVec2>) -> Self {
        normalize_points(&mut points);
        if signed_area(&points) < 0.0 {
            points.reverse();
        }
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the outline holds no points.
    ///
    /// Never true for outlines built through [`ShapeOutline::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in traversal order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the point at `index`, wrapping around the closed outline.
    #[inline]
    pub fn point_wrapped(&self, index: usize) -> DVec2 {
        self.points[index % self.points.len()]
    }

    /// Consumes the outline and returns its points.
    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }

    /// Computes the axis-aligned bounding box as (min, max).
    pub fn bounds(&self) -> (DVec2, DVec2) {
        bounds_of(&self.points)
    }

    /// Returns the bounding box extent (width, height).
    pub fn size(&self) -> DVec2 {
        let (min, max) = self.bounds();
        max - min
    }

    /// Measured width-to-height ratio of the bounding box.
    pub fn width_ratio(&self) -> f64 {
        let size = self.size();
        if size.y > 0.0 {
            size.x / size.y
        } else {
            1.0
        }
    }

    /// Average of the outline points.
    pub fn centroid(&self) -> DVec2 {
        if self.points.is_empty() {
            return DVec2::ZERO;
        }
        self.points.iter().copied().sum::<DVec2>() / self.points.len() as f64
    }

    /// Distances between consecutive points, ending with the wraparound gap.
    pub fn gaps(&self) -> Vec<f64> {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].distance(self.points[(i + 1) % n]))
            .collect()
    }

    /// Total length of the closed polyline.
    pub fn perimeter(&self) -> f64 {
        self.gaps().iter().sum()
    }

    /// Shoelace area in raw (x, z) coordinates. Positive for clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Traversal direction of the outline.
    pub fn winding(&self) -> Winding {
        if self.signed_area() >= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Returns a copy rotated by `angle` radians about the origin.
    pub fn rotated(&self, angle: f64) -> Self {
        let rotation = DVec2::from_angle(angle);
        Self {
            points: self.points.iter().map(|p| rotation.rotate(*p)).collect(),
        }
    }

    /// Returns a copy scaled uniformly by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| *p * factor).collect(),
        }
    }

    /// Returns the mirror image across the vertical axis.
    ///
    /// Point order is reversed so the mirrored outline keeps its winding.
    pub fn mirrored_x(&self) -> Self {
        Self {
            points: self
                .points
                .iter()
                .rev()
                .map(|p| DVec2::new(-p.x, p.y))
                .collect(),
        }
    }
}

/// Translates points by their bounding-box center and scales them so the
/// longer side of the box spans exactly 1.0.
///
/// A degenerate (zero-size) box leaves the scale untouched.
pub fn normalize_points(points: &mut [DVec2]) {
    if points.is_empty() {
        return;
    }
    let (min, max) = bounds_of(points);
    let extent = (max - min).max_element();
    let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };
    let center = (min + max) * 0.5;
    for p in points.iter_mut() {
        *p = (*p - center) * scale;
    }
}

fn bounds_of(points: &[DVec2]) -> (DVec2, DVec2) {
    let Some(first) = points.first() else {
        return (DVec2::ZERO, DVec2::ZERO);
    };
    points[1..]
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
}

fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

fn validate_points(points: &[DVec2]) -> OutlineResult<()> {
    if points.len() < MIN_OUTLINE_POINTS {
        return Err(OutlineError::too_few(points.len()));
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(OutlineError::NonFinite { index });
    }
    let n = points.len();
    for index in 0..n {
        let next = (index + 1) % n;
        if points[index].distance(points[next]) < POINT_MERGE_EPSILON {
            return Err(OutlineError::CoincidentPoints { index, next });
        }
    }
    Ok(())
}
