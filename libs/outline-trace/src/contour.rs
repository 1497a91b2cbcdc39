//! # Contour Extraction
//!
//! Turns a cloud of foreground pixels into an ordered rim polyline.

use glam::DVec2;
use std::f64::consts::TAU;

/// Mean position of the pixels, or `None` for an empty set.
pub fn centroid(pixels: &[DVec2]) -> Option<DVec2> {
    if pixels.is_empty() {
        return None;
    }
    let sum: DVec2 = pixels.iter().copied().sum();
    Some(sum / pixels.len() as f64)
}

/// Farthest pixel from `center` in each of `steps` equal angular sectors.
///
/// Sectors are swept by increasing `atan2(dy, dx)` in `[0, 2π)`. Empty
/// sectors are skipped, so the result has at most `steps` points.
pub fn angular_sweep(pixels: &[DVec2], center: DVec2, steps: usize) -> Vec<DVec2> {
    if steps == 0 {
        return Vec::new();
    }
    let sector = TAU / steps as f64;
    let mut best: Vec<Option<(f64, DVec2)>> = vec![None; steps];

    for &pixel in pixels {
        let d = pixel - center;
        let mut angle = d.y.atan2(d.x);
        if angle < 0.0 {
            angle += TAU;
        }
        let bin = ((angle / sector) as usize).min(steps - 1);
        let dist = d.length_squared();
        match best[bin] {
            Some((max, _)) if max >= dist => {}
            _ => best[bin] = Some((dist, pixel)),
        }
    }

    best.into_iter().flatten().map(|(_, p)| p).collect()
}

/// Distance from `p` to the infinite line through `a` and `b`.
///
/// Falls back to the distance to `a` when `a == b`.
pub fn perpendicular_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let line = b - a;
    let length = line.length();
    if length == 0.0 {
        return p.distance(a);
    }
    line.perp_dot(p - a).abs() / length
}

/// Simplifies an open polyline, keeping both endpoints.
///
/// Points closer than `tolerance` to the chord of their span are dropped.
pub fn douglas_peucker(points: &[DVec2], tolerance: f64) -> Vec<DVec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut stack = vec![(0, points.len() - 1)];
    while let Some((start, end)) = stack.pop() {
        let mut max_dist = 0.0;
        let mut index = start;
        for i in start + 1..end {
            let d = perpendicular_distance(points[i], points[start], points[end]);
            if d > max_dist {
                max_dist = d;
                index = i;
            }
        }
        if max_dist > tolerance {
            keep[index] = true;
            stack.push((start, index));
            stack.push((index, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_centroid() {
        let pixels = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 4.0)];
        assert_eq!(centroid(&pixels), Some(DVec2::new(1.0, 2.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_sweep_picks_outermost() {
        let pixels = [
            DVec2::new(1.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(-1.0, 0.0),
        ];
        let rim = angular_sweep(&pixels, DVec2::ZERO, 4);
        assert_eq!(
            rim,
            vec![DVec2::new(3.0, 0.0), DVec2::new(0.0, 2.0), DVec2::new(-1.0, 0.0)]
        );
    }

    #[test]
    fn test_sweep_zero_steps() {
        assert!(angular_sweep(&[DVec2::X], DVec2::ZERO, 0).is_empty());
    }

    #[test]
    fn test_perpendicular_distance() {
        let d = perpendicular_distance(DVec2::new(1.0, 3.0), DVec2::ZERO, DVec2::new(4.0, 0.0));
        assert_abs_diff_eq!(d, 3.0);
        let d = perpendicular_distance(DVec2::new(3.0, 4.0), DVec2::ZERO, DVec2::ZERO);
        assert_abs_diff_eq!(d, 5.0);
    }

    #[test]
    fn test_douglas_peucker_drops_collinear() {
        let line: Vec<DVec2> = (0..10).map(|i| DVec2::new(i as f64, 0.0)).collect();
        assert_eq!(
            douglas_peucker(&line, 0.8),
            vec![DVec2::ZERO, DVec2::new(9.0, 0.0)]
        );
    }

    #[test]
    fn test_douglas_peucker_keeps_corner() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.1),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 5.0),
            DVec2::new(2.1, 10.0),
        ];
        let simplified = douglas_peucker(&points, 0.8);
        assert!(simplified.contains(&DVec2::new(2.0, 0.0)));
        assert!(!simplified.contains(&DVec2::new(1.0, 0.1)));
        assert_eq!(simplified.first(), Some(&DVec2::ZERO));
        assert_eq!(simplified.last(), Some(&DVec2::new(2.1, 10.0)));
    }
}
