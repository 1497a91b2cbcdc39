//! Shell properties over the shape catalog and random prescriptions.

use approx::assert_abs_diff_eq;
use lens_mesh::{build_lens_mesh, LensMesh, LensShellParams, MeshError, RenderOptions};
use lens_outline::ShapeId;
use proptest::prelude::*;

const INDICES: [f64; 4] = [1.50, 1.60, 1.67, 1.74];

fn build(id: ShapeId, params: &LensShellParams) -> LensMesh {
    let outline = id.outline(RenderOptions::default().outline_points);
    build_lens_mesh(outline.points(), params).unwrap()
}

// =============================================================================
// Catalog-wide checks
// =============================================================================

#[test]
fn every_shape_builds_a_valid_shell() {
    let params = LensShellParams::new(65.0, 2.0, -4.0, 1.60);
    for id in ShapeId::ALL {
        let lens = build(id, &params);
        let mesh = lens.mesh();
        let n = lens.points_per_ring();

        assert_eq!(mesh.vertex_count(), 51 * n * 2, "{id}");
        assert_eq!(mesh.triangle_count(), 50 * n * 4 + n * 2, "{id}");
        assert!(mesh.validate(), "{id} has invalid triangles");
        assert!(mesh.signed_volume() > 0.0, "{id} winds inward");
    }
}

#[test]
fn surface_normals_face_away_from_the_lens() {
    for prescription in [-8.0, 0.0, 6.0] {
        let params = LensShellParams::new(65.0, 3.0, prescription, 1.50);
        let lens = build(ShapeId::Oval, &params);
        let normals = lens.mesh().normals().unwrap();
        let ring = lens.rings() / 2;
        for i in 0..lens.points_per_ring() {
            let top = normals[lens.vertex_index(ring, i, false).unwrap() as usize];
            let bottom = normals[lens.vertex_index(ring, i, true).unwrap() as usize];
            assert!(top.y > 0.0, "top normal {top} at {prescription}");
            assert!(bottom.y < 0.0, "bottom normal {bottom} at {prescription}");
        }
    }
}

#[test]
fn rim_spans_full_diameter() {
    let params = LensShellParams::new(70.0, 2.0, -2.0, 1.67);
    let lens = build(ShapeId::Round, &params);
    let (min, max) = lens.mesh().bounding_box();
    let span = (max.x - min.x).max(max.z - min.z);
    assert_abs_diff_eq!(span, 70.0, epsilon = 1e-6);
}

#[test]
fn minus_lens_edges_are_thicker_than_center() {
    let params = LensShellParams::new(65.0, 1.0, -6.0, 1.67).with_power_scale(1.0);
    let lens = build(ShapeId::Rectangle, &params);
    let (_, thinnest) = lens.edge_thickness_range();
    assert!(thinnest > lens.center_thickness_mm());
}

#[test]
fn plus_lens_edges_are_thinner_than_center() {
    let params = LensShellParams::new(60.0, 4.0, 4.0, 1.50).with_power_scale(1.0);
    let lens = build(ShapeId::Round, &params);
    let (thickest, _) = lens.edge_thickness_range();
    assert!(thickest < lens.center_thickness_mm());
}

#[test]
fn higher_power_scale_curves_more() {
    let base = LensShellParams::new(65.0, 1.0, -6.0, 1.50);
    let soft = build(ShapeId::Round, &base.with_power_scale(0.5));
    let literal = build(ShapeId::Round, &base.with_power_scale(1.0));
    assert!(literal.edge_thickness_at(0).unwrap() > soft.edge_thickness_at(0).unwrap());
}

#[test]
fn malformed_outline_is_rejected() {
    let outline = ShapeId::Square.outline(120);
    let err = build_lens_mesh(&outline.points()[..2], &LensShellParams::default()).unwrap_err();
    assert!(matches!(err, MeshError::MalformedOutline { count: 2, min: 3 }));
    assert!(build_lens_mesh(&[], &LensShellParams::default()).is_err());
}

#[test]
fn mirrored_shell_stays_outward() {
    let params = LensShellParams::new(65.0, 2.0, -3.0, 1.60);
    let mut mesh = build(ShapeId::CatEye, &params).into_mesh();
    mesh.mirror_x();
    assert!(mesh.signed_volume() > 0.0);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn thickness_matches_surface_gap(
        prescription in -10.0f64..10.0,
        index_pick in 0usize..4,
        center in 0.5f64..5.0,
        diameter in 40.0f64..80.0,
        ring_count in 1u32..12,
        shape in prop::sample::select(ShapeId::ALL.to_vec()),
    ) {
        let params = LensShellParams::new(diameter, center, prescription, INDICES[index_pick])
            .with_ring_count(ring_count);
        let lens = build(shape, &params);
        let surfaces = *lens.surfaces();

        for ring in 0..lens.rings() {
            for i in (0..lens.points_per_ring()).step_by(7) {
                let top = lens.top_vertex(ring, i).unwrap();
                let bottom = lens.bottom_vertex(ring, i).unwrap();
                prop_assert_eq!(top.x, bottom.x);
                prop_assert_eq!(top.z, bottom.z);

                let r = top.x.hypot(top.z);
                let expected = surfaces.thickness_at(r, center);
                prop_assert!((top.y - bottom.y - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn indices_stay_in_range(
        ring_count in 1u32..20,
        points in 3usize..200,
        shape in prop::sample::select(ShapeId::ALL.to_vec()),
    ) {
        let outline = shape.outline(points);
        let params = LensShellParams::default().with_ring_count(ring_count);
        let lens = build_lens_mesh(outline.points(), &params).unwrap();
        let vertex_count = lens.mesh().vertex_count() as u32;
        prop_assert!(lens.mesh().indices_u32().iter().all(|&i| i < vertex_count));
        prop_assert_eq!(lens.rings(), ring_count as usize + 1);
    }
}
