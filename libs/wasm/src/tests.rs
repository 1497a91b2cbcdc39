//! Tests for the WASM-facing helpers.

use super::*;
use approx::assert_abs_diff_eq;

/// Confirms the thickness twin validates like the boundary guard.
#[test]
fn thickness_rejects_index_at_one() {
    let err = estimate_thickness_internal(-2.0, 1.0, 65.0).unwrap_err();
    assert!(err.to_string().contains("greater than 1.0"));
    assert!(estimate_thickness_internal(f64::NAN, 1.6, 65.0).is_err());
    assert!(estimate_thickness_internal(-2.0, 1.6, 0.0).is_err());
}

#[test]
fn thickness_matches_estimator() {
    let t = estimate_thickness_internal(-6.0, 1.67, 65.0).unwrap();
    assert_eq!(t, lens_optics::estimate_thickness(-6.0, 1.67, 65.0));
    assert_eq!(ThicknessEstimate::from(t).edge, t.edge);
}

#[test]
fn outline_is_flat_pairs_with_fallback() {
    let flat = get_outline("catEye", 120);
    assert_eq!(flat.len(), 240);
    assert_eq!(get_outline("no-such-shape", 120), get_outline("rectangle", 120));
}

/// Tests that the mesh twin produces the documented grid.
#[test]
fn mesh_from_flat_outline() {
    let outline = [-0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, 0.5];
    let mesh = build_lens_mesh_internal(&outline, 65.0, 2.0, -3.0, 1.6, 1, None).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.vertex_buffer().len(), 48);
    assert_eq!(mesh.index_buffer().len(), mesh.triangle_count() as usize * 3);
    assert_eq!(mesh.normal_buffer().map(<[f32]>::len), Some(48));
    assert_eq!(mesh.rings(), 2);
}

/// Tests that mesh buffers contain valid data.
#[test]
fn mesh_buffers_valid() {
    let outline = get_outline("aviator", 120);
    let mesh = build_lens_mesh_internal(&outline, 62.0, 1.0, -4.0, 1.6, 20, Some(1.0)).unwrap();

    for &v in mesh.vertex_buffer() {
        assert!(v.is_finite(), "Vertex value should be finite");
    }
    let vertex_count = mesh.vertex_count();
    for &idx in mesh.index_buffer() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

#[test]
fn mesh_rejects_bad_outlines() {
    let err = build_lens_mesh_internal(&[0.0, 0.0, 1.0], 65.0, 2.0, 0.0, 1.6, 10, None).unwrap_err();
    assert!(matches!(err, MeshError::ValidationFailed { .. }));

    let err = build_lens_mesh_internal(&[0.0, 0.0, 1.0, 0.0], 65.0, 2.0, 0.0, 1.6, 10, None)
        .unwrap_err();
    assert!(matches!(err, MeshError::MalformedOutline { count: 2, .. }));

    let square = [-0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, 0.5];
    let err = build_lens_mesh_internal(&square, 65.0, 2.0, 0.0, 1.6, 0, None).unwrap_err();
    assert_eq!(err, MeshError::InvalidRingCount(0));
}

#[test]
fn layout_keeps_bridge() {
    let layout = layout_dual_lenses(1.3, 1.4, 60.0, 66.0, 18.0);
    let gap = (layout.left_x - 60.0 * 1.3 / 2.0) - (layout.right_x + 66.0 * 1.4 / 2.0);
    assert_abs_diff_eq!(gap, 18.0, epsilon = 1e-9);
}

#[test]
fn catalog_json_lists_every_shape() {
    let json = shape_catalog_json_internal().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), ShapeId::ALL.len());
    assert!(entries.iter().any(|e| e["key"] == "realShape1"));
    assert!(entries.iter().any(|e| e["key"] == "realShape16"));
}
