//! # Lens Outline
//!
//! Library of named 2D lens rim outlines.
//!
//! ## Architecture
//!
//! ```text
//! ShapeId ─┬─ parametric (rounded polygons, ellipses, modulated curves)
//!          └─ digitized  (static traced tables)
//!                 │
//!                 ▼
//!          normalize + orient → ShapeOutline
//! ```
//!
//! Every outline leaves the library centered on the origin, with the longer
//! bounding-box side exactly 1.0 and clockwise traversal as seen from the
//! front (z pointing down).
//!
//! ## Usage
//!
//! ```rust
//! use lens_outline::{get_outline, ShapeId};
//!
//! let outline = get_outline("aviator", 120);
//! assert_eq!(outline.len(), 120);
//!
//! let fallback = get_outline("unknown", 64);
//! assert_eq!(fallback, ShapeId::Rectangle.outline(64));
//! ```

pub mod catalog;
pub mod digitized;
pub mod error;
pub mod outline;
pub mod parametric;
pub mod rounded;

pub use catalog::{catalog, ShapeId, ShapeInfo};
pub use error::{OutlineError, OutlineResult};
pub use outline::{normalize_points, ShapeOutline, Winding};

/// Generates the outline for `id` with `num_points` samples.
pub fn generate(id: ShapeId, num_points: usize) -> ShapeOutline {
    id.outline(num_points)
}

/// Generates an outline by key. Unknown keys fall back to the default style.
///
/// Digitized styles ignore `num_points` and return their stored table size.
pub fn get_outline(shape_id: &str, num_points: usize) -> ShapeOutline {
    ShapeId::resolve(shape_id).outline(num_points)
}

/// Generates an outline by key, rejecting unknown keys.
///
/// # Errors
///
/// Returns [`OutlineError::UnknownShape`] if `shape_id` is not in the catalog.
pub fn try_get_outline(shape_id: &str, num_points: usize) -> OutlineResult<ShapeOutline> {
    Ok(shape_id.parse::<ShapeId>()?.outline(num_points))
}
