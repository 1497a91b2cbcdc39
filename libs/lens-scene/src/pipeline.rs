//! # Lens Pipeline
//!
//! Estimate → resolve outline → build mesh, in one synchronous pass.
//!
//! Nothing is cached; every call derives a fresh render from its inputs.
//! Hosts that redraw on every keystroke should debounce or memoize on their
//! side.

use crate::error::SceneResult;
use crate::layout::{layout_dual_lenses, BridgeSpec, DualLensLayout, LensPlacement};
use glam::DVec3;
use lens_mesh::{LensMesh, LensMeshBuilder, LensShellParams, Mesh, RenderOptions};
use lens_optics::{estimate_thickness, Eye, EyePair, LensSpec, ThicknessResult};
use lens_outline::ShapeOutline;
use tracing::{debug, instrument};

/// Everything derived for one lens.
#[derive(Debug, Clone, PartialEq)]
pub struct LensRender {
    pub spec: LensSpec,
    pub thickness: ThicknessResult,
    pub outline: ShapeOutline,
    pub mesh: LensMesh,
}

impl LensRender {
    /// Rendered width as a fraction of the diameter.
    ///
    /// The outer ring is the outline scaled by the diameter, so this is the
    /// outline's bounding-box width.
    pub fn width_ratio(&self) -> f64 {
        self.outline.size().x
    }

    /// Rendered width in millimeters.
    pub fn width_mm(&self) -> f64 {
        self.spec.diameter_mm * self.width_ratio()
    }
}

/// Both lenses of a frame plus their placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRender {
    pub lenses: EyePair<LensRender>,
    pub layout: DualLensLayout,
    pub placements: EyePair<LensPlacement>,
}

impl PairRender {
    /// Copy of one eye's mesh moved to its scene position.
    ///
    /// The mesh is translated by the placement and lifted by its y offset;
    /// the left lens is mirrored across x first.
    pub fn placed_mesh(&self, eye: Eye) -> Mesh {
        let placement = self.placements.get(eye);
        let mut mesh = self.lenses.get(eye).mesh.mesh().clone();
        if placement.mirrored {
            mesh.mirror_x();
        }
        mesh.translate(DVec3::new(placement.x, placement.y_offset, 0.0));
        mesh
    }
}

/// Renders lenses with a shared mesh builder and fixed options.
#[derive(Debug, Default)]
pub struct LensPipeline {
    options: RenderOptions,
    builder: LensMeshBuilder,
}

impl LensPipeline {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            builder: LensMeshBuilder::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders one lens.
    ///
    /// # Errors
    ///
    /// Returns an error if `spec` or the render options fail validation.
    #[instrument(skip(self), fields(shape = %spec.shape))]
    pub fn render_lens(&self, spec: &LensSpec) -> SceneResult<LensRender> {
        spec.validate()?;
        self.options.validate()?;

        let power = spec.spherical_power();
        let thickness = estimate_thickness(power, spec.refractive_index, spec.diameter_mm);
        let outline = spec.shape.outline(self.options.outline_points);

        let params = LensShellParams::new(
            spec.diameter_mm,
            thickness.center,
            power,
            spec.refractive_index,
        )
        .with_options(&self.options);
        let mesh = self.builder.build(outline.points(), &params)?;

        debug!(
            center = thickness.center,
            edge = thickness.edge,
            vertices = mesh.mesh().vertex_count(),
            "rendered lens"
        );

        Ok(LensRender {
            spec: *spec,
            thickness,
            outline,
            mesh,
        })
    }

    /// Renders both lenses and lays them out around the bridge.
    ///
    /// The layout uses the width of each rendered outline, so the placed
    /// meshes' inner edges sit exactly `bridge` apart. The right lens is
    /// rendered first; an error on either eye aborts the pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the bridge or either lens fails validation.
    #[instrument(skip(self, specs))]
    pub fn render_pair(
        &self,
        specs: &EyePair<LensSpec>,
        bridge: &BridgeSpec,
    ) -> SceneResult<PairRender> {
        bridge.validate()?;
        let lenses = specs.as_refs().try_map(|spec| self.render_lens(spec))?;

        let layout = layout_dual_lenses(
            lenses.left.width_ratio(),
            lenses.right.width_ratio(),
            lenses.left.spec.diameter_mm,
            lenses.right.spec.diameter_mm,
            bridge.bridge_width_mm,
        );
        let (right, left) =
            LensPlacement::for_pair(&layout, &lenses.right.thickness, &lenses.left.thickness);

        Ok(PairRender {
            lenses,
            layout,
            placements: EyePair::new(right, left),
        })
    }
}

/// Renders one lens with a fresh pipeline.
///
/// # Example
///
/// ```rust
/// use lens_mesh::RenderOptions;
/// use lens_optics::{LensSpec, Prescription};
/// use lens_scene::render_lens;
///
/// let spec = LensSpec {
///     prescription: Prescription::sphere(-4.0),
///     ..LensSpec::default()
/// };
/// let render = render_lens(&spec, &RenderOptions::default()).unwrap();
/// assert_eq!(render.thickness.center, 1.0);
/// assert_eq!(render.outline.len(), 120);
/// ```
pub fn render_lens(spec: &LensSpec, options: &RenderOptions) -> SceneResult<LensRender> {
    LensPipeline::new(*options).render_lens(spec)
}

/// Renders a pair with a fresh pipeline. See [`LensPipeline::render_pair`].
pub fn render_pair(
    specs: &EyePair<LensSpec>,
    bridge: &BridgeSpec,
    options: &RenderOptions,
) -> SceneResult<PairRender> {
    LensPipeline::new(*options).render_pair(specs, bridge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;
    use approx::assert_abs_diff_eq;
    use lens_mesh::MeshError;
    use lens_optics::{OpticsError, Prescription};
    use lens_outline::ShapeId;

    fn coarse() -> RenderOptions {
        RenderOptions {
            ring_count: 6,
            outline_points: 48,
            ..RenderOptions::default()
        }
    }

    fn spec(sphere: f64, index: f64, shape: ShapeId) -> LensSpec {
        LensSpec {
            prescription: Prescription::sphere(sphere),
            refractive_index: index,
            diameter_mm: 62.0,
            shape,
        }
    }

    #[test]
    fn test_render_lens_uses_estimated_center() {
        let render = render_lens(&spec(3.0, 1.50, ShapeId::Oval), &coarse()).unwrap();
        assert!(render.thickness.center > render.thickness.edge);
        assert_eq!(
            render.mesh.center_thickness_mm(),
            render.thickness.center
        );
        assert_eq!(render.mesh.points_per_ring(), 48);
        assert_eq!(render.mesh.rings(), 7);
    }

    #[test]
    fn test_render_lens_rejects_bad_index() {
        let err = render_lens(&spec(-2.0, 0.9, ShapeId::Round), &coarse()).unwrap_err();
        assert_eq!(err, SceneError::Optics(OpticsError::InvalidIndex(0.9)));
    }

    #[test]
    fn test_render_lens_rejects_bad_options() {
        let options = RenderOptions {
            ring_count: 0,
            ..coarse()
        };
        let err = render_lens(&spec(-2.0, 1.6, ShapeId::Round), &options).unwrap_err();
        assert_eq!(err, SceneError::Mesh(MeshError::InvalidRingCount(0)));
    }

    #[test]
    fn test_pair_layout_follows_rendered_width() {
        let specs = EyePair::new(
            spec(-2.0, 1.60, ShapeId::Rectangle),
            spec(-2.5, 1.60, ShapeId::Round),
        );
        let pair = render_pair(&specs, &BridgeSpec::new(18.0), &coarse()).unwrap();

        // Unit outlines have their longer side at 1.0
        assert_abs_diff_eq!(pair.lenses.right.width_mm(), 62.0, epsilon = 1e-9);
        let right_w = pair.lenses.right.width_mm();
        let left_w = pair.lenses.left.width_mm();
        let gap = (pair.layout.left_x - left_w / 2.0) - (pair.layout.right_x + right_w / 2.0);
        assert_abs_diff_eq!(gap, 18.0, epsilon = 1e-9);

        assert!(pair.placements.left.mirrored);
        assert_eq!(
            pair.placements.right.y_offset,
            pair.lenses.right.thickness.max() / 2.0
        );
    }

    #[test]
    fn test_placed_meshes_sit_on_either_side() {
        let specs = EyePair::both(spec(-3.0, 1.67, ShapeId::CatEye));
        let pair = render_pair(&specs, &BridgeSpec::default(), &coarse()).unwrap();

        let right = pair.placed_mesh(Eye::Right);
        let left = pair.placed_mesh(Eye::Left);
        assert!(right.bounding_box().1.x < 0.0);
        assert!(left.bounding_box().0.x > 0.0);
        assert!(left.signed_volume() > 0.0);
    }

    #[test]
    fn test_placed_inner_edges_match_bridge() {
        for shape in [ShapeId::Rectangle, ShapeId::Navigator, ShapeId::Oval, ShapeId::Round] {
            let specs = EyePair::both(LensSpec {
                diameter_mm: 65.0,
                ..spec(-2.0, 1.60, shape)
            });
            let pair = render_pair(&specs, &BridgeSpec::new(17.0), &coarse()).unwrap();

            let right = pair.placed_mesh(Eye::Right).bounding_box();
            let left = pair.placed_mesh(Eye::Left).bounding_box();
            assert_abs_diff_eq!(left.0.x - right.1.x, 17.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pair_rejects_negative_bridge() {
        let specs = EyePair::both(LensSpec::default());
        assert_eq!(
            render_pair(&specs, &BridgeSpec::new(-5.0), &coarse()),
            Err(SceneError::InvalidBridge(-5.0))
        );
    }

    #[test]
    fn test_pipeline_logs_breakdown_once() {
        let pipeline = LensPipeline::new(coarse());
        let specs = EyePair::both(LensSpec::default());
        pipeline.render_pair(&specs, &BridgeSpec::default()).unwrap();
        assert!(pipeline.builder.has_logged());
    }
}
