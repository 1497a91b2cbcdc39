//! # Lens Scene
//!
//! Ties the lens crates together for a renderer.
//!
//! ## Architecture
//!
//! ```text
//! LensSpec ──► estimate_thickness ──► center thickness ─┐
//!          └─► ShapeId::outline ───► unit outline ──────┴─► build mesh ─► LensRender
//!
//! EyePair<LensRender> + BridgeSpec ──► layout_dual_lenses ──► PairRender
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lens_mesh::RenderOptions;
//! use lens_optics::{EyePair, LensSpec, Prescription};
//! use lens_scene::{render_pair, BridgeSpec};
//!
//! let right = LensSpec { prescription: Prescription::sphere(-2.0), ..LensSpec::default() };
//! let left = LensSpec { prescription: Prescription::sphere(-2.5), ..LensSpec::default() };
//!
//! let pair = render_pair(&EyePair::new(right, left), &BridgeSpec::default(), &RenderOptions::default()).unwrap();
//! assert!(pair.layout.right_x < 0.0 && pair.layout.left_x > 0.0);
//! ```

pub mod error;
pub mod layout;
pub mod pipeline;

pub use error::{SceneError, SceneResult};
pub use layout::{
    layout_dual_lenses, BridgeSpec, DualLensInput, DualLensLayout, LensFootprint, LensPlacement,
};
pub use pipeline::{render_lens, render_pair, LensPipeline, LensRender, PairRender};
