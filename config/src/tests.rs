//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_point_merge_epsilon_is_small_and_positive() {
    assert!(POINT_MERGE_EPSILON > 0.0);
    assert!(POINT_MERGE_EPSILON < 1e-6);
}

// =============================================================================
// OUTLINE TESTS
// =============================================================================

#[test]
fn test_min_outline_points_forms_polygon() {
    // A closed ring needs at least a triangle
    assert_eq!(MIN_OUTLINE_POINTS, 3);
}

#[test]
fn test_default_outline_points_dense_enough() {
    assert!(DEFAULT_OUTLINE_POINTS >= 100);
    assert!(DEFAULT_OUTLINE_POINTS <= 1000);
}

#[test]
fn test_corner_radius_below_half_unit() {
    // A radius of 0.5 would consume a whole edge of the unit square
    assert!(MAX_CORNER_RADIUS < 0.5);
    assert!(MAX_CORNER_RADIUS > 0.0);
}

// =============================================================================
// MESH TESTS
// =============================================================================

#[test]
fn test_center_ring_is_tiny_but_nonzero() {
    assert!(CENTER_RING_RATIO > 0.0);
    assert!(CENTER_RING_RATIO < 0.01);
}

#[test]
fn test_default_mesh_fits_vertex_limit() {
    let vertices = 2 * (DEFAULT_RING_COUNT as usize + 1) * DEFAULT_OUTLINE_POINTS;
    assert!(vertices < MAX_VERTICES);
}

// =============================================================================
// MATERIAL TESTS
// =============================================================================

#[test]
fn test_index_bands_are_ordered() {
    assert!(1.0 < LOW_INDEX_LIMIT);
    assert!(LOW_INDEX_LIMIT < MID_INDEX_LIMIT);
    assert!(MID_INDEX_LIMIT < HIGH_INDEX_LIMIT);
}

#[test]
fn test_curated_indices_fall_in_distinct_bands() {
    assert!(1.50 <= LOW_INDEX_LIMIT);
    assert!(1.60 > LOW_INDEX_LIMIT && 1.60 <= MID_INDEX_LIMIT);
    assert!(1.67 > MID_INDEX_LIMIT && 1.67 <= HIGH_INDEX_LIMIT);
    assert!(1.74 > HIGH_INDEX_LIMIT);
}

#[test]
fn test_correction_powers_are_positive() {
    assert!(HIGH_INDEX_CORRECTION_POWER > 0.0);
    assert!(LOW_INDEX_CORRECTION_POWER > HIGH_INDEX_CORRECTION_POWER);
}

#[test]
fn test_is_low_index_boundary_inclusive() {
    assert!(is_low_index(LOW_INDEX_LIMIT));
    assert!(!is_low_index(LOW_INDEX_LIMIT + 1e-6));
}

// =============================================================================
// SURFACE TESTS
// =============================================================================

#[test]
fn test_flat_radius_is_large() {
    // Sagitta over a 40mm half-width must be well under a millimeter
    let r = 40.0_f64;
    let sag = FLAT_SURFACE_RADIUS_MM - (FLAT_SURFACE_RADIUS_MM.powi(2) - r * r).sqrt();
    assert!(sag < 0.1);
}

#[test]
fn test_power_scale_in_unit_range() {
    assert!(DEFAULT_POWER_SCALE > 0.0);
    assert!(DEFAULT_POWER_SCALE <= 1.0);
}

// =============================================================================
// FRAME TESTS
// =============================================================================

#[test]
fn test_frame_defaults_positive() {
    assert!(DEFAULT_DIAMETER_MM > 0.0);
    assert!(DEFAULT_BRIDGE_WIDTH_MM > 0.0);
}
