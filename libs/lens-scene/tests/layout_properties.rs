//! Layout invariants over mismatched lenses.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use lens_mesh::RenderOptions;
use lens_optics::{Eye, EyePair, LensSpec, Prescription};
use lens_outline::ShapeId;
use lens_scene::{layout_dual_lenses, render_pair, BridgeSpec, DualLensInput, LensFootprint};
use proptest::prelude::*;

fn arb_footprint() -> impl Strategy<Value = LensFootprint> {
    (40.0f64..80.0, 0.8f64..1.6).prop_map(|(diameter, ratio)| LensFootprint::new(diameter, ratio))
}

#[test]
fn default_frame_matches_hand_calculation() {
    // Two 65 mm rectangles (ratio 1.4) around a 17 mm bridge
    let layout = layout_dual_lenses(1.4, 1.4, 65.0, 65.0, 17.0);
    assert_relative_eq!(layout.right_x, -(91.0 + 17.0) / 2.0);
    assert_relative_eq!(layout.left_x, (91.0 + 17.0) / 2.0);
}

#[test]
fn placed_catalog_pairs_keep_the_bridge_gap() {
    let options = RenderOptions {
        ring_count: 4,
        outline_points: 40,
        ..RenderOptions::default()
    };
    for shape in ShapeId::ALL {
        let specs = EyePair::new(
            LensSpec {
                prescription: Prescription::sphere(-3.0),
                diameter_mm: 58.0,
                shape,
                ..LensSpec::default()
            },
            LensSpec {
                prescription: Prescription::sphere(1.5),
                diameter_mm: 66.0,
                shape: ShapeId::Round,
                ..LensSpec::default()
            },
        );
        let pair = render_pair(&specs, &BridgeSpec::new(19.5), &options).unwrap();
        let right = pair.placed_mesh(Eye::Right).bounding_box();
        let left = pair.placed_mesh(Eye::Left).bounding_box();
        assert_abs_diff_eq!(left.0.x - right.1.x, 19.5, epsilon = 1e-9);
    }
}

proptest! {
    #[test]
    fn inner_gap_equals_bridge(
        right in arb_footprint(),
        left in arb_footprint(),
        bridge in 0.0f64..30.0,
    ) {
        let input = DualLensInput { right, left, bridge: BridgeSpec::new(bridge) };
        let layout = input.layout();
        prop_assert!((input.inner_gap(&layout) - bridge).abs() < 1e-9);
    }

    #[test]
    fn pair_is_centered_on_origin(
        right in arb_footprint(),
        left in arb_footprint(),
        bridge in 0.0f64..30.0,
    ) {
        let layout = layout_dual_lenses(
            left.width_ratio,
            right.width_ratio,
            left.diameter_mm,
            right.diameter_mm,
            bridge,
        );
        prop_assert_eq!(layout.left_x, -layout.right_x);
        prop_assert!(layout.right_x < 0.0);
    }

    #[test]
    fn wider_bridge_pushes_lenses_apart(
        right in arb_footprint(),
        left in arb_footprint(),
        bridge in 0.0f64..30.0,
        extra in 0.1f64..10.0,
    ) {
        let narrow = DualLensInput { right, left, bridge: BridgeSpec::new(bridge) }.layout();
        let wide = DualLensInput { right, left, bridge: BridgeSpec::new(bridge + extra) }.layout();
        prop_assert!(wide.separation() > narrow.separation());
    }
}
