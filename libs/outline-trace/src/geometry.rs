//! # Contour Geometry
//!
//! Closed-loop helpers applied after extraction: normalization, rotation,
//! arc-length resampling and smoothing.

use glam::DVec2;
use lens_outline::normalize_points;

/// Centers the loop on its bounding box and scales the longer side to 1.
///
/// Returns the width/height ratio measured before scaling, or `None` when
/// the loop has no height.
pub fn normalize(points: &mut [DVec2]) -> Option<f64> {
    let first = *points.first()?;
    let (min, max) = points
        .iter()
        .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
    let size = max - min;
    if size.y <= 0.0 {
        return None;
    }
    normalize_points(points);
    Some(size.x / size.y)
}

/// Rotates every point about the origin by `angle` radians.
pub fn rotate(points: &mut [DVec2], angle: f64) {
    let rotation = DVec2::from_angle(angle);
    for p in points.iter_mut() {
        *p = rotation.rotate(*p);
    }
}

/// Resamples a closed loop to `count` points evenly spaced by arc length.
///
/// The first output point is the first input point. Zero-length segments
/// are stepped over.
pub fn resample_arc_length(points: &[DVec2], count: usize) -> Vec<DVec2> {
    let n = points.len();
    if count == 0 {
        return Vec::new();
    }
    if n < 2 {
        return points.to_vec();
    }

    let lengths: Vec<f64> = (0..n)
        .map(|i| points[i].distance(points[(i + 1) % n]))
        .collect();
    let total: f64 = lengths.iter().sum();
    if total <= 0.0 {
        return vec![points[0]; count];
    }

    let step = total / count as f64;
    let mut result = Vec::with_capacity(count);
    let mut segment = 0;
    let mut walked = 0.0;

    for i in 0..count {
        let target = i as f64 * step;
        while segment < n - 1 && walked + lengths[segment] < target {
            walked += lengths[segment];
            segment += 1;
        }
        let length = lengths[segment];
        let t = if length > 0.0 {
            ((target - walked) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        result.push(points[segment].lerp(points[(segment + 1) % n], t));
    }
    result
}

/// Smooths a closed loop with `passes` rounds of the `[1/4, 1/2, 1/4]` kernel.
pub fn smooth(points: &[DVec2], passes: usize) -> Vec<DVec2> {
    let n = points.len();
    let mut current = points.to_vec();
    if n < 3 {
        return current;
    }
    for _ in 0..passes {
        current = (0..n)
            .map(|i| {
                let prev = current[(i + n - 1) % n];
                let next = current[(i + 1) % n];
                prev * 0.25 + current[i] * 0.5 + next * 0.25
            })
            .collect();
    }
    current
}
