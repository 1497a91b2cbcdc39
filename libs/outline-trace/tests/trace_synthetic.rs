//! End-to-end tracing of synthetic silhouettes.

use approx::assert_abs_diff_eq;
use glam::DVec2;
use lens_outline::Winding;
use outline_trace::{resample_arc_length, smooth, trace, LuminanceImage, TraceParams};
use proptest::prelude::*;

fn ellipse_image(rx: f64, ry: f64) -> LuminanceImage {
    let (w, h) = ((rx * 2.0 + 40.0) as u32, (ry * 2.0 + 40.0) as u32);
    let (cx, cy) = (f64::from(w) / 2.0, f64::from(h) / 2.0);
    LuminanceImage::from_fn(w, h, |x, y| {
        let dx = (f64::from(x) - cx) / rx;
        let dy = (f64::from(y) - cy) / ry;
        if dx * dx + dy * dy <= 1.0 {
            0.0
        } else {
            255.0
        }
    })
    .unwrap()
}

fn rgba_rectangle(width: u32, height: u32, margin: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let inside = x >= margin && x < width - margin && y >= margin && y < height - margin;
            let v = if inside { 30 } else { 250 };
            bytes.extend_from_slice(&[v, v, v, 255]);
        }
    }
    bytes
}

#[test]
fn ellipse_traces_to_normalized_oval() {
    let traced = trace(&ellipse_image(90.0, 60.0), &TraceParams::default()).unwrap();
    assert_abs_diff_eq!(traced.width_ratio, 1.5, epsilon = 0.05);

    let outline = traced.into_outline().unwrap();
    assert_eq!(outline.len(), 120);
    assert_eq!(outline.winding(), Winding::Clockwise);
    assert_abs_diff_eq!(outline.size().x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(outline.size().y, 1.0 / 1.5, epsilon = 0.05);
}

#[test]
fn rotation_swaps_axes() {
    let params = TraceParams {
        rotation_deg: 90.0,
        ..TraceParams::default()
    };
    let traced = trace(&ellipse_image(90.0, 60.0), &params).unwrap();
    let outline = traced.into_outline().unwrap();
    assert_abs_diff_eq!(outline.size().y, 1.0, epsilon = 1e-9);
    assert!(outline.size().x < 0.75);
}

#[test]
fn rgba_rectangle_keeps_aspect() {
    let bytes = rgba_rectangle(240, 140, 20);
    let image = LuminanceImage::from_rgba(240, 140, &bytes).unwrap();
    let params = TraceParams {
        smoothing_passes: 0,
        ..TraceParams::default()
    };
    let traced = trace(&image, &params).unwrap();
    // 200 × 100 px of lens
    assert_abs_diff_eq!(traced.width_ratio, 199.0 / 99.0, epsilon = 1e-9);
    for p in &traced.points {
        assert!(p.x.abs() <= 0.5 + 1e-9 && p.y.abs() <= 0.25 + 1e-9, "{p}");
    }
}

#[test]
fn custom_point_count() {
    let params = TraceParams {
        target_points: 60,
        ..TraceParams::default()
    };
    let traced = trace(&ellipse_image(50.0, 40.0), &params).unwrap();
    assert_eq!(traced.points.len(), 60);
}

fn arb_loop() -> impl Strategy<Value = Vec<DVec2>> {
    prop::collection::vec(0.2f64..1.0, 5..40).prop_map(|radii| {
        let n = radii.len();
        radii
            .into_iter()
            .enumerate()
            .map(|(i, r)| DVec2::from_angle(i as f64 / n as f64 * std::f64::consts::TAU) * r)
            .collect()
    })
}

proptest! {
    #[test]
    fn resample_spacing_never_exceeds_step(points in arb_loop(), count in 3usize..200) {
        let n = points.len();
        let perimeter: f64 = (0..n).map(|i| points[i].distance(points[(i + 1) % n])).sum();
        let resampled = resample_arc_length(&points, count);
        prop_assert_eq!(resampled.len(), count);

        let step = perimeter / count as f64;
        for i in 0..count {
            let gap = resampled[i].distance(resampled[(i + 1) % count]);
            prop_assert!(gap <= step + 1e-9);
        }
    }

    #[test]
    fn smoothing_keeps_points_inside_hull_box(points in arb_loop(), passes in 0usize..8) {
        let (min, max) = points.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        for p in smooth(&points, passes) {
            prop_assert!(p.cmpge(min - 1e-12).all() && p.cmple(max + 1e-12).all());
        }
    }
}
