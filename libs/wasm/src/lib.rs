//! WASM-facing entry points for the lens pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Every exported function has a `*_internal` twin that
//! returns Rust errors, so native tests never need a JS host.
//!
//! ```
//! let t = lens_wasm::estimate_thickness_internal(-2.0, 1.50, 65.0).unwrap();
//! assert_eq!(t.center, 2.0);
//! ```

use glam::DVec2;
use lens_mesh::{build_lens_mesh as build_shell, LensShellParams, MeshError, RenderOptions};
use lens_optics::{DivisorModel, LensSpec, OpticsResult, Prescription, ThicknessModel, ThicknessResult};
use lens_outline::{catalog, get_outline as resolve_outline, ShapeId};
use lens_scene::{layout_dual_lenses as solve_layout, DualLensLayout};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::LensMeshHandle;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "lens_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Default number of outline samples.
#[wasm_bindgen]
pub fn default_outline_points() -> usize {
    config::constants::DEFAULT_OUTLINE_POINTS
}

// =============================================================================
// THICKNESS
// =============================================================================

/// Center and edge thickness in millimeters.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessEstimate {
    pub center: f64,
    pub edge: f64,
}

impl From<ThicknessResult> for ThicknessEstimate {
    fn from(t: ThicknessResult) -> Self {
        Self {
            center: t.center,
            edge: t.edge,
        }
    }
}

/// Estimates lens thickness.
///
/// # Errors
/// Returns a JavaScript error for an index at or below 1.0, a non-positive
/// diameter or a non-numeric input.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const { center, edge } = estimate_thickness(-4.0, 1.67, 65);
/// ```
#[wasm_bindgen]
pub fn estimate_thickness(
    prescription: f64,
    refractive_index: f64,
    diameter_mm: f64,
) -> Result<ThicknessEstimate, JsValue> {
    estimate_thickness_internal(prescription, refractive_index, diameter_mm)
        .map(ThicknessEstimate::from)
        .map_err(to_js)
}

/// Host-side twin of [`estimate_thickness`].
pub fn estimate_thickness_internal(
    prescription: f64,
    refractive_index: f64,
    diameter_mm: f64,
) -> OpticsResult<ThicknessResult> {
    let spec = LensSpec::new(
        Prescription::sphere(prescription),
        refractive_index,
        diameter_mm,
        ShapeId::DEFAULT,
    )?;
    Ok(DivisorModel.estimate_spec(&spec))
}

// =============================================================================
// OUTLINES
// =============================================================================

/// Returns the outline for a shape id as flat `[x, z, x, z, ...]` pairs.
///
/// Unknown ids fall back to the default rectangle.
///
/// # Examples
/// ```
/// let flat = lens_wasm::get_outline("round", 64);
/// assert_eq!(flat.len(), 128);
/// ```
#[wasm_bindgen]
pub fn get_outline(shape_id: &str, num_points: usize) -> Vec<f64> {
    resolve_outline(shape_id, num_points)
        .points()
        .iter()
        .flat_map(|p| [p.x, p.y])
        .collect()
}

/// Shape catalog as a JSON array of `{ id, key, name, description, width_ratio }`.
#[wasm_bindgen]
pub fn shape_catalog_json() -> Result<String, JsValue> {
    shape_catalog_json_internal().map_err(to_js)
}

/// Host-side twin of [`shape_catalog_json`].
pub fn shape_catalog_json_internal() -> serde_json::Result<String> {
    serde_json::to_string(&catalog())
}

// =============================================================================
// MESH
// =============================================================================

/// Builds a lens mesh from a flat `[x, z, ...]` outline.
///
/// `power_scale` defaults to the display attenuation when omitted.
///
/// # Errors
/// Returns a JavaScript error for an odd-length or too-short outline, a zero
/// ring count or out-of-range parameters.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const outline = get_outline("aviator", 120);
/// // const { center } = estimate_thickness(-4, 1.6, 65);
/// // const mesh = build_lens_mesh(outline, 65, center, -4, 1.6, 50);
/// ```
#[wasm_bindgen]
pub fn build_lens_mesh(
    outline: &[f64],
    diameter_mm: f64,
    center_thickness_mm: f64,
    prescription: f64,
    refractive_index: f64,
    ring_count: u32,
    power_scale: Option<f64>,
) -> Result<LensMeshHandle, JsValue> {
    build_lens_mesh_internal(
        outline,
        diameter_mm,
        center_thickness_mm,
        prescription,
        refractive_index,
        ring_count,
        power_scale,
    )
    .map_err(to_js)
}

/// Host-side twin of [`build_lens_mesh`].
pub fn build_lens_mesh_internal(
    outline: &[f64],
    diameter_mm: f64,
    center_thickness_mm: f64,
    prescription: f64,
    refractive_index: f64,
    ring_count: u32,
    power_scale: Option<f64>,
) -> Result<LensMeshHandle, MeshError> {
    if outline.len() % 2 != 0 {
        return Err(MeshError::validation_failed(format!(
            "outline has {} values, expected x/z pairs",
            outline.len()
        )));
    }
    let points: Vec<DVec2> = outline
        .chunks_exact(2)
        .map(|pair| DVec2::new(pair[0], pair[1]))
        .collect();

    let params = LensShellParams {
        ring_count,
        power_scale: power_scale.unwrap_or(RenderOptions::default().power_scale),
        ..LensShellParams::new(diameter_mm, center_thickness_mm, prescription, refractive_index)
    };
    let lens = build_shell(&points, &params)?;
    Ok(LensMeshHandle::from_lens_mesh(&lens))
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Horizontal lens centers for a frame.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutHandle {
    pub right_x: f64,
    pub left_x: f64,
}

impl From<DualLensLayout> for LayoutHandle {
    fn from(layout: DualLensLayout) -> Self {
        Self {
            right_x: layout.right_x,
            left_x: layout.left_x,
        }
    }
}

/// Places two lenses so their inner edges are `bridge_width_mm` apart.
///
/// # Examples
/// ```
/// let layout = lens_wasm::layout_dual_lenses(1.0, 1.0, 50.0, 50.0, 20.0);
/// assert_eq!(layout.right_x, -35.0);
/// ```
#[wasm_bindgen]
pub fn layout_dual_lenses(
    left_width_ratio: f64,
    right_width_ratio: f64,
    left_diameter_mm: f64,
    right_diameter_mm: f64,
    bridge_width_mm: f64,
) -> LayoutHandle {
    solve_layout(
        left_width_ratio,
        right_width_ratio,
        left_diameter_mm,
        right_diameter_mm,
        bridge_width_mm,
    )
    .into()
}

#[cfg(test)]
mod tests;
