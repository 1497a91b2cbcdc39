//! Property tests over the whole shape catalog.
//!
//! Every style must come out normalized, clockwise, free of coincident
//! neighbours and without large jumps along the rim.

use approx::assert_abs_diff_eq;
use lens_outline::{get_outline, ShapeId, ShapeOutline, Winding};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_shape() -> impl Strategy<Value = ShapeId> {
    prop::sample::select(ShapeId::ALL.to_vec())
}

fn arb_point_count() -> impl Strategy<Value = usize> {
    60usize..400
}

// =============================================================================
// Helpers
// =============================================================================

fn assert_normalized(outline: &ShapeOutline) {
    let (min, max) = outline.bounds();
    let size = max - min;
    assert_abs_diff_eq!(size.max_element(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!((min + max).x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!((min + max).y, 0.0, epsilon = 1e-9);
}

// =============================================================================
// Catalog-wide checks at the default density
// =============================================================================

#[test]
fn every_shape_is_normalized() {
    for id in ShapeId::ALL {
        assert_normalized(&id.outline(120));
    }
}

#[test]
fn every_shape_is_clockwise() {
    for id in ShapeId::ALL {
        let outline = id.outline(120);
        assert_eq!(outline.winding(), Winding::Clockwise, "{id}");
        assert!(outline.signed_area() > 0.0, "{id}");
    }
}

#[test]
fn every_shape_passes_validation() {
    for id in ShapeId::ALL {
        let points = id.outline(120).into_points();
        assert!(ShapeOutline::new(points).is_ok(), "{id}");
    }
}

#[test]
fn round_is_a_circle() {
    let outline = ShapeId::Round.outline(120);
    let size = outline.size();
    assert_abs_diff_eq!(size.x, size.y, epsilon = 1e-9);
    for p in outline.points() {
        assert_abs_diff_eq!(p.length(), 0.5, epsilon = 1e-9);
    }
}

#[test]
fn wide_styles_are_wider_than_tall() {
    for id in [ShapeId::Rectangle, ShapeId::Navigator, ShapeId::Oval] {
        let outline = id.outline(120);
        assert!(outline.width_ratio() > 1.2, "{id}");
    }
}

#[test]
fn digitized_shapes_keep_table_size() {
    for id in ShapeId::ALL.into_iter().filter(|id| id.is_digitized()) {
        assert_eq!(id.outline(32).len(), 120);
    }
}

#[test]
fn unknown_key_falls_back_to_rectangle() {
    assert_eq!(get_outline("trapezoid", 90), ShapeId::Rectangle.outline(90));
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #[test]
    fn outline_is_normalized_at_any_density(id in arb_shape(), n in arb_point_count()) {
        assert_normalized(&id.outline(n));
    }

    #[test]
    fn outline_has_no_large_gaps(id in arb_shape(), n in arb_point_count()) {
        let outline = id.outline(n);
        let gaps = outline.gaps();
        let average = outline.perimeter() / gaps.len() as f64;
        let max = gaps.iter().cloned().fold(0.0, f64::max);
        prop_assert!(max <= 3.0 * average, "{}: max gap {} vs average {}", id, max, average);
    }

    #[test]
    fn parametric_outline_honors_point_count(id in arb_shape(), n in arb_point_count()) {
        prop_assume!(!id.is_digitized());
        prop_assert_eq!(id.outline(n).len(), n);
    }

    #[test]
    fn lookup_is_deterministic(id in arb_shape(), n in arb_point_count()) {
        prop_assert_eq!(get_outline(id.key(), n), id.outline(n));
    }
}
