//! # Lens Shell
//!
//! Sweeps a closed outline through concentric rings and lifts every sample
//! onto the front and back surfaces.
//!
//! ## Vertex Layout
//!
//! Ring `r`, outline point `i`, surface `s` (0 = top, 1 = bottom):
//!
//! ```text
//! index = r · (n · 2) + i · 2 + s
//! ```
//!
//! Ring 0 sits at [`CENTER_RING_RATIO`] of the outline rather than at a
//! single apex point, which leaves a tiny open hole at the optical center.
//!
//! ## Winding
//!
//! For a clockwise outline (positive shoelace area in `(x, z)`), faces are
//! emitted so the top surface faces `+y`, the bottom `-y` and the rim
//! outward. Counter-clockwise input is detected and flipped.

use std::cell::Cell;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::options::RenderOptions;
use crate::surface::SurfacePair;
use config::constants::{
    CENTER_RING_RATIO, DEFAULT_DIAMETER_MM, DEFAULT_POWER_SCALE, DEFAULT_RING_COUNT, MAX_VERTICES,
    MIN_OUTLINE_POINTS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

// =============================================================================
// PARAMETERS
// =============================================================================

/// Physical inputs for one lens shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensShellParams {
    /// Scale applied to the unit outline (mm)
    pub diameter_mm: f64,
    /// Vertical offset between the surfaces at the optical center (mm)
    pub center_thickness_mm: f64,
    /// Signed spherical power (D)
    pub prescription: f64,
    pub refractive_index: f64,
    /// Ring intervals; `ring_count + 1` rings are emitted
    pub ring_count: u32,
    /// Attenuation applied to the prescription before the surface split
    pub power_scale: f64,
}

impl Default for LensShellParams {
    fn default() -> Self {
        Self {
            diameter_mm: DEFAULT_DIAMETER_MM,
            center_thickness_mm: 2.0,
            prescription: 0.0,
            refractive_index: 1.60,
            ring_count: DEFAULT_RING_COUNT,
            power_scale: DEFAULT_POWER_SCALE,
        }
    }
}

impl LensShellParams {
    /// Creates parameters with the default resolution and attenuation.
    pub fn new(
        diameter_mm: f64,
        center_thickness_mm: f64,
        prescription: f64,
        refractive_index: f64,
    ) -> Self {
        Self {
            diameter_mm,
            center_thickness_mm,
            prescription,
            refractive_index,
            ..Self::default()
        }
    }

    /// Takes ring count and power scale from render options.
    #[must_use]
    pub fn with_options(self, options: &RenderOptions) -> Self {
        Self {
            ring_count: options.ring_count,
            power_scale: options.power_scale,
            ..self
        }
    }

    #[must_use]
    pub fn with_ring_count(self, ring_count: u32) -> Self {
        Self { ring_count, ..self }
    }

    #[must_use]
    pub fn with_power_scale(self, power_scale: f64) -> Self {
        Self {
            power_scale,
            ..self
        }
    }

    /// Checks the numeric inputs.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidRingCount`] if `ring_count == 0`
    /// - [`MeshError::InvalidParameter`] for non-finite values, a
    ///   non-positive diameter, a negative center thickness, an index at or
    ///   below 1.0 or a negative power scale
    pub fn validate(&self) -> MeshResult<()> {
        if self.ring_count == 0 {
            return Err(MeshError::InvalidRingCount(self.ring_count));
        }
        let checks = [
            ("diameter_mm", self.diameter_mm, self.diameter_mm > 0.0),
            (
                "center_thickness_mm",
                self.center_thickness_mm,
                self.center_thickness_mm >= 0.0,
            ),
            ("prescription", self.prescription, true),
            (
                "refractive_index",
                self.refractive_index,
                self.refractive_index > 1.0,
            ),
            ("power_scale", self.power_scale, self.power_scale >= 0.0),
        ];
        for (name, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(MeshError::invalid_parameter(name, value));
            }
        }
        Ok(())
    }

    /// Surface pair these parameters produce.
    pub fn surfaces(&self) -> SurfacePair {
        SurfacePair::new(self.prescription, self.refractive_index, self.power_scale)
    }
}

// =============================================================================
// LENS MESH
// =============================================================================

/// A generated lens shell with the curvature and grid it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct LensMesh {
    mesh: Mesh,
    surfaces: SurfacePair,
    center_thickness_mm: f64,
    rings: usize,
    points_per_ring: usize,
}

impl LensMesh {
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    #[inline]
    pub fn surfaces(&self) -> &SurfacePair {
        &self.surfaces
    }

    pub fn center_thickness_mm(&self) -> f64 {
        self.center_thickness_mm
    }

    /// Number of rings emitted (`ring_count + 1`).
    #[inline]
    pub fn rings(&self) -> usize {
        self.rings
    }

    #[inline]
    pub fn points_per_ring(&self) -> usize {
        self.points_per_ring
    }

    /// Index of a sample in the vertex buffer, or `None` outside the grid.
    pub fn vertex_index(&self, ring: usize, point: usize, bottom: bool) -> Option<u32> {
        if ring >= self.rings || point >= self.points_per_ring {
            return None;
        }
        Some(grid_index(self.points_per_ring, ring, point) + u32::from(bottom))
    }

    /// Top-surface vertex at `(ring, point)`.
    pub fn top_vertex(&self, ring: usize, point: usize) -> Option<DVec3> {
        self.vertex_index(ring, point, false).map(|i| self.mesh.vertex(i))
    }

    /// Bottom-surface vertex at `(ring, point)`.
    pub fn bottom_vertex(&self, ring: usize, point: usize) -> Option<DVec3> {
        self.vertex_index(ring, point, true).map(|i| self.mesh.vertex(i))
    }

    /// Vertical gap between the surfaces at rim point `point`.
    pub fn edge_thickness_at(&self, point: usize) -> Option<f64> {
        let ring = self.rings.checked_sub(1)?;
        Some(self.top_vertex(ring, point)?.y - self.bottom_vertex(ring, point)?.y)
    }

    /// Thickest and thinnest rim gap, in that order.
    pub fn edge_thickness_range(&self) -> (f64, f64) {
        (0..self.points_per_ring)
            .filter_map(|i| self.edge_thickness_at(i))
            .fold((f64::NEG_INFINITY, f64::INFINITY), |(max, min), t| {
                (max.max(t), min.min(t))
            })
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds lens shells, logging the full curvature breakdown on first use.
///
/// The flag lives on the instance; hosts that want the breakdown again
/// create a new builder.
#[derive(Debug, Default)]
pub struct LensMeshBuilder {
    logged: Cell<bool>,
}

impl LensMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the curvature breakdown has been emitted.
    pub fn has_logged(&self) -> bool {
        self.logged.get()
    }

    /// Builds a shell. See [`build_lens_mesh`].
    #[instrument(level = "trace", skip(self, outline), fields(points = outline.len()))]
    pub fn build(&self, outline: &[DVec2], params: &LensShellParams) -> MeshResult<LensMesh> {
        let lens = build_shell(outline, params)?;

        if !self.logged.replace(true) {
            let surfaces = lens.surfaces();
            let (max_edge, min_edge) = lens.edge_thickness_range();
            debug!(
                prescription = params.prescription,
                power_scale = params.power_scale,
                refractive_index = params.refractive_index,
                front_power = surfaces.front_power,
                back_power = surfaces.back_power,
                front_radius_mm = surfaces.front_radius_mm,
                back_radius_mm = surfaces.back_radius_mm,
                center_thickness_mm = params.center_thickness_mm,
                max_edge,
                min_edge,
                "lens curvature"
            );
        }
        Ok(lens)
    }
}

/// Builds a closed lens shell from a unit outline.
///
/// `outline` is a normalized closed loop in `(x, z)`. Each point is scaled by
/// `diameter_mm` and the ring ratio; the top surface sits at `-s1` and the
/// bottom at `-center_thickness - s2`, so the gap at any sample is
/// `center_thickness + s2 - s1`.
///
/// # Errors
///
/// - [`MeshError::MalformedOutline`] for fewer than 3 points
/// - [`MeshError::InvalidParameter`] for a non-finite outline point or a bad
///   parameter (see [`LensShellParams::validate`])
/// - [`MeshError::InvalidRingCount`] if `ring_count == 0`
/// - [`MeshError::TooManyVertices`] if the grid exceeds [`MAX_VERTICES`]
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lens_mesh::{build_lens_mesh, LensShellParams};
///
/// let square = [
///     DVec2::new(-0.5, -0.5),
///     DVec2::new(0.5, -0.5),
///     DVec2::new(0.5, 0.5),
///     DVec2::new(-0.5, 0.5),
/// ];
/// let params = LensShellParams::new(65.0, 2.0, -3.0, 1.60).with_ring_count(1);
/// let lens = build_lens_mesh(&square, &params).unwrap();
/// assert_eq!(lens.mesh().vertex_count(), 16);
/// ```
pub fn build_lens_mesh(outline: &[DVec2], params: &LensShellParams) -> MeshResult<LensMesh> {
    build_shell(outline, params)
}

fn build_shell(outline: &[DVec2], params: &LensShellParams) -> MeshResult<LensMesh> {
    let n = outline.len();
    if n < MIN_OUTLINE_POINTS {
        return Err(MeshError::malformed_outline(n));
    }
    params.validate()?;
    if let Some(p) = outline.iter().find(|p| !p.is_finite()) {
        let value = if p.x.is_finite() { p.y } else { p.x };
        return Err(MeshError::invalid_parameter("outline", value));
    }

    let requested = (u64::from(params.ring_count) + 1).saturating_mul(n as u64 * 2);
    if requested > MAX_VERTICES as u64 {
        return Err(MeshError::TooManyVertices {
            count: usize::try_from(requested).unwrap_or(usize::MAX),
            max: MAX_VERTICES,
        });
    }
    let ring_count = params.ring_count as usize;
    let rings = ring_count + 1;
    let vertex_count = rings * n * 2;

    let surfaces = params.surfaces();
    let triangle_count = ring_count * n * 4 + n * 2;
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    for ring in 0..rings {
        let ratio = if ring == 0 {
            CENTER_RING_RATIO
        } else {
            ring as f64 / ring_count as f64
        };
        for point in outline {
            let planar = *point * params.diameter_mm * ratio;
            let (s1, s2) = surfaces.sagittas(planar.length());
            mesh.add_vertex(DVec3::new(planar.x, -s1, planar.y));
            mesh.add_vertex(DVec3::new(
                planar.x,
                -params.center_thickness_mm - s2,
                planar.y,
            ));
        }
    }

    let flip = shoelace(outline) < 0.0;
    let mut push = |a: u32, b: u32, c: u32| {
        if flip {
            mesh.add_triangle(a, c, b);
        } else {
            mesh.add_triangle(a, b, c);
        }
    };

    for ring in 0..ring_count {
        for i in 0..n {
            let next = (i + 1) % n;
            let c = grid_index(n, ring, i);
            let nx = grid_index(n, ring, next);
            let cn = grid_index(n, ring + 1, i);
            let nn = grid_index(n, ring + 1, next);

            push(c, nx, cn);
            push(nx, nn, cn);

            push(c + 1, cn + 1, nx + 1);
            push(nx + 1, cn + 1, nn + 1);
        }
    }

    for i in 0..n {
        let c = grid_index(n, ring_count, i);
        let nx = grid_index(n, ring_count, (i + 1) % n);
        push(c, nx, c + 1);
        push(nx, nx + 1, c + 1);
    }

    mesh.compute_normals();

    trace!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built lens mesh"
    );

    Ok(LensMesh {
        mesh,
        surfaces,
        center_thickness_mm: params.center_thickness_mm,
        rings,
        points_per_ring: n,
    })
}

#[inline]
fn grid_index(points_per_ring: usize, ring: usize, point: usize) -> u32 {
    (ring * points_per_ring * 2 + point * 2) as u32
}

fn shoelace(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}
