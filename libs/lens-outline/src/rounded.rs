//! # Rounded Polygon
//!
//! Builds a closed path from corner points with a fillet arc at each corner,
//! then samples it at equal arc-length intervals.
//!
//! ## Algorithm
//!
//! 1. For each corner, find the unit directions toward both neighbours.
//! 2. Clamp the fillet radius to [`MAX_CORNER_RADIUS`] and half of each
//!    adjacent edge, then place the two tangent points.
//! 3. Join consecutive arcs with straight runs (dropped when shorter than
//!    [`MIN_EDGE_LENGTH`]).
//! 4. Walk the path and emit points at `i / n` of its total length.

use config::constants::{MAX_CORNER_RADIUS, MIN_CORNER_HALF_ANGLE, MIN_EDGE_LENGTH};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// One piece of the rounded path.
#[derive(Debug, Clone, Copy)]
enum Segment {
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        sweep: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
    },
}

impl Segment {
    fn length(&self) -> f64 {
        match *self {
            Segment::Arc { radius, sweep, .. } => radius * sweep.abs(),
            Segment::Line { from, to } => from.distance(to),
        }
    }

    /// Point at fraction `t` (0..=1) along the segment.
    fn point_at(&self, t: f64) -> DVec2 {
        match *self {
            Segment::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => center + DVec2::from_angle(start_angle + t * sweep) * radius,
            Segment::Line { from, to } => from.lerp(to, t),
        }
    }
}

/// Fillet geometry for one corner.
#[derive(Debug, Clone, Copy)]
struct Fillet {
    entry: DVec2,
    exit: DVec2,
    arc: Segment,
}

/// Samples a rounded polygon at `num_points` equal arc-length positions.
///
/// `radii[i]` is the requested fillet radius at `corners[i]`; missing radii
/// are treated as zero. Corners adjacent to a zero-length edge are skipped.
///
/// # Example
///
/// ```rust
/// use lens_outline::rounded::rounded_polygon;
/// use glam::DVec2;
///
/// let corners = [
///     DVec2::new(0.5, -0.5),
///     DVec2::new(0.5, 0.5),
///     DVec2::new(-0.5, 0.5),
///     DVec2::new(-0.5, -0.5),
/// ];
/// let points = rounded_polygon(&corners, &[0.1; 4], 40);
/// assert_eq!(points.len(), 40);
/// ```
pub fn rounded_polygon(corners: &[DVec2], radii: &[f64], num_points: usize) -> Vec<DVec2> {
    let fillets = corner_fillets(corners, radii);
    let segments = join_fillets(&fillets);
    sample_evenly(&segments, num_points)
}

fn corner_fillets(corners: &[DVec2], radii: &[f64]) -> Vec<Fillet> {
    let n = corners.len();
    let mut fillets = Vec::with_capacity(n);

    for i in 0..n {
        let prev = corners[(i + n - 1) % n];
        let curr = corners[i];
        let next = corners[(i + 1) % n];

        let to_prev = prev - curr;
        let to_next = next - curr;
        let len1 = to_prev.length();
        let len2 = to_next.length();
        if len1 <= 0.0 || len2 <= 0.0 {
            continue;
        }
        let u1 = to_prev / len1;
        let u2 = to_next / len2;

        let half_angle = (u1.dot(u2).clamp(-1.0, 1.0).acos() / 2.0).max(MIN_CORNER_HALF_ANGLE);
        let max_reach = len1.min(len2) / 2.0;

        let requested = radii.get(i).copied().unwrap_or(0.0).max(0.0);
        let mut radius = requested.min(MAX_CORNER_RADIUS).min(max_reach);
        let mut reach = radius / half_angle.tan();
        if reach > max_reach {
            reach = max_reach;
            radius = reach * half_angle.tan();
        }

        let entry = curr + u1 * reach;
        let exit = curr + u2 * reach;

        // Straight-through corner: no bend to fillet
        let bisector = u1 + u2;
        if radius <= 0.0 || bisector.length_squared() < 1e-24 {
            fillets.push(Fillet {
                entry: curr,
                exit: curr,
                arc: Segment::Line {
                    from: curr,
                    to: curr,
                },
            });
            continue;
        }

        let center = curr + bisector.normalize() * (radius / half_angle.sin());
        let start_angle = (entry - center).to_angle();
        let end_angle = (exit - center).to_angle();
        let sweep = wrap_angle(end_angle - start_angle);

        fillets.push(Fillet {
            entry,
            exit,
            arc: Segment::Arc {
                center,
                radius,
                start_angle,
                sweep,
            },
        });
    }

    fillets
}

fn join_fillets(fillets: &[Fillet]) -> Vec<Segment> {
    let count = fillets.len();
    let mut segments = Vec::with_capacity(count * 2);
    for (i, fillet) in fillets.iter().enumerate() {
        if fillet.arc.length() > 0.0 {
            segments.push(fillet.arc);
        }
        let next = &fillets[(i + 1) % count];
        if fillet.exit.distance(next.entry) > MIN_EDGE_LENGTH {
            segments.push(Segment::Line {
                from: fillet.exit,
                to: next.entry,
            });
        }
    }
    segments
}

fn sample_evenly(segments: &[Segment], num_points: usize) -> Vec<DVec2> {
    let lengths: Vec<f64> = segments.iter().map(Segment::length).collect();
    let total: f64 = lengths.iter().sum();
    if segments.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(num_points);
    let mut index = 0;
    let mut accumulated = 0.0;

    for i in 0..num_points {
        let target = i as f64 / num_points as f64 * total;
        while index + 1 < segments.len() && accumulated + lengths[index] < target {
            accumulated += lengths[index];
            index += 1;
        }
        let t = if lengths[index] > 0.0 {
            ((target - accumulated) / lengths[index]).clamp(0.0, 1.0)
        } else {
            0.0
        };
        points.push(segments[index].point_at(t));
    }

    points
}

/// Wraps an angle difference into (-PI, PI].
fn wrap_angle(mut delta: f64) -> f64 {
    while delta <= -PI {
        delta += TAU;
    }
    while delta > PI {
        delta -= TAU;
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(side: f64) -> Vec<DVec2> {
        let h = side / 2.0;
        vec![
            DVec2::new(h, -h),
            DVec2::new(h, h),
            DVec2::new(-h, h),
            DVec2::new(-h, -h),
        ]
    }

    #[test]
    fn test_point_count_matches_request() {
        for n in [3, 17, 120, 500] {
            assert_eq!(rounded_polygon(&square(1.0), &[0.1; 4], n).len(), n);
        }
    }

    #[test]
    fn test_points_stay_inside_corners() {
        let points = rounded_polygon(&square(1.0), &[0.2; 4], 200);
        for p in &points {
            assert!(p.x.abs() <= 0.5 + 1e-9);
            assert!(p.y.abs() <= 0.5 + 1e-9);
        }
        // Corner is cut off by the fillet
        let corner = DVec2::new(0.5, 0.5);
        let nearest = points
            .iter()
            .map(|p| p.distance(corner))
            .fold(f64::INFINITY, f64::min);
        assert!(nearest > 0.05);
    }

    #[test]
    fn test_samples_are_evenly_spaced() {
        let points = rounded_polygon(&square(1.0), &[0.1; 4], 120);
        let n = points.len();
        let gaps: Vec<f64> = (0..n)
            .map(|i| points[i].distance(points[(i + 1) % n]))
            .collect();
        let max = gaps.iter().cloned().fold(0.0, f64::max);
        let min = gaps.iter().cloned().fold(f64::INFINITY, f64::min);
        // Chords across arcs are slightly shorter than the arc length
        assert!(max - min < 0.005, "gap spread {}", max - min);
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let corners = vec![
            DVec2::new(0.1, -0.1),
            DVec2::new(0.1, 0.1),
            DVec2::new(-0.1, 0.1),
            DVec2::new(-0.1, -0.1),
        ];
        let points = rounded_polygon(&corners, &[5.0; 4], 64);
        assert_eq!(points.len(), 64);
        // Fully rounded: every point sits on the inscribed circle
        for p in &points {
            assert_abs_diff_eq!(p.length(), 0.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_radius_keeps_sharp_corners() {
        let points = rounded_polygon(&square(1.0), &[0.0; 4], 4);
        assert_eq!(points.len(), 4);
        assert_abs_diff_eq!(points[0].x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(points[0].y, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_angle() {
        assert_abs_diff_eq!(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
    }
}
