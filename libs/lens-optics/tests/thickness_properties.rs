//! Behavioral tests for the thickness estimator.
//!
//! Covers the reference scenarios, per-band monotonicity, the expected jump
//! at each band's correction threshold, sign symmetry, and the fit against
//! the manufacturer chart.

use approx::assert_abs_diff_eq;
use lens_optics::chart::{REFERENCE_CHART, MINUS_REFERENCE_DIAMETER_MM};
use lens_optics::{estimate_thickness, DivisorModel, IndexBand, LensKind, Material};
use proptest::prelude::*;

const INDICES: [f64; 4] = [1.50, 1.60, 1.67, 1.74];

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn low_index_minus_two() {
    let t = estimate_thickness(-2.0, 1.50, 65.0);
    assert_abs_diff_eq!(t.center, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(t.edge, 4.9, epsilon = 0.2);
}

#[test]
fn high_index_minus_six() {
    let t = estimate_thickness(-6.0, 1.67, 65.0);
    assert_abs_diff_eq!(t.center, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(t.edge, 5.7, epsilon = 0.2);
}

#[test]
fn low_index_minus_eight_uses_correction() {
    let t = estimate_thickness(-8.0, 1.50, 65.0);
    assert_abs_diff_eq!(t.center, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(t.edge, 12.2, epsilon = 0.3);
}

#[test]
fn plano_is_floor() {
    for index in INDICES {
        let t = estimate_thickness(0.0, index, 65.0);
        let floor = IndexBand::for_index(index).min_thickness_mm();
        assert_eq!(t.center, floor);
        assert_eq!(t.edge, floor);
    }
}

// =============================================================================
// Band thresholds
// =============================================================================

#[test]
fn low_band_drops_at_eight_diopters() {
    let below = DivisorModel::addition(-7.99, 1.50, 65.0);
    let at = DivisorModel::addition(-8.0, 1.50, 65.0);
    assert!(at < below, "low band flattens at 8 D: {below} -> {at}");
}

#[test]
fn higher_bands_jump_at_six_diopters() {
    for index in [1.60, 1.67, 1.74] {
        let below = DivisorModel::addition(-5.99, index, 65.0);
        let at = DivisorModel::addition(-6.0, index, 65.0);
        assert!(at > below, "index {index} steepens at 6 D: {below} -> {at}");
    }
}

// =============================================================================
// Chart fit
// =============================================================================

#[test]
fn divisor_model_tracks_minus_chart() {
    for (index, rows) in REFERENCE_CHART {
        for row in rows.iter().filter(|r| r.power < 0.0) {
            let t = estimate_thickness(row.power, index, MINUS_REFERENCE_DIAMETER_MM);
            assert_abs_diff_eq!(t.center, row.center, epsilon = 1e-9);
            assert!(
                (t.edge - row.edge).abs() <= 0.25,
                "index {index} power {}: model {} vs chart {}",
                row.power,
                t.edge,
                row.edge
            );
        }
    }
}

#[test]
fn every_material_respects_its_floor() {
    for material in Material::ALL {
        let floor = material.band().min_thickness_mm();
        for power in [-10.0, -3.0, 0.0, 2.5, 8.0] {
            let t = estimate_thickness(power, material.index(), 65.0);
            assert!(t.center >= floor && t.edge >= floor);
        }
    }
}

// =============================================================================
// Property tests
// =============================================================================

fn arb_index() -> impl Strategy<Value = f64> {
    prop::sample::select(INDICES.to_vec())
}

proptest! {
    #[test]
    fn minus_and_plus_roles(power in 0.25f64..20.0, index in arb_index(), diameter in 40.0f64..80.0) {
        let minus = estimate_thickness(-power, index, diameter);
        prop_assert_eq!(LensKind::of(-power), LensKind::Minus);
        prop_assert!(minus.edge > minus.center);

        let plus = estimate_thickness(power, index, diameter);
        prop_assert!(plus.center > plus.edge);
    }

    #[test]
    fn differential_is_sign_symmetric(power in 0.0f64..20.0, index in arb_index(), diameter in 40.0f64..80.0) {
        let minus = estimate_thickness(-power, index, diameter);
        let plus = estimate_thickness(power, index, diameter);
        prop_assert!((minus.differential() - plus.differential()).abs() < 1e-9);
    }

    #[test]
    fn addition_increases_within_band(
        a in 0.0f64..20.0,
        b in 0.0f64..20.0,
        index in arb_index(),
        diameter in 40.0f64..80.0,
    ) {
        let band = IndexBand::for_index(index);
        let threshold = band.correction_power();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(hi - lo > 1e-6);
        // Only compare powers on the same side of the correction threshold
        prop_assume!((lo < threshold) == (hi < threshold));

        let small = DivisorModel::addition(-lo, index, diameter);
        let large = DivisorModel::addition(-hi, index, diameter);
        prop_assert!(large > small);
    }
}
