//! # Lens Mesh
//!
//! Triangle meshes for spectacle lenses.
//!
//! ## Architecture
//!
//! ```text
//! outline (unit, x/z) + prescription → SurfacePair → ring sweep → Mesh
//! ```
//!
//! The front surface takes the base curve, the back surface takes the rest
//! of the (attenuated) power. Both are spheres; thickness anywhere on the
//! lens is `center + s2 - s1`, never interpolated separately.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use lens_mesh::{LensMeshBuilder, LensShellParams, RenderOptions};
//!
//! let outline: Vec<DVec2> = (0..64)
//!     .map(|i| {
//!         let t = i as f64 / 64.0 * std::f64::consts::TAU;
//!         DVec2::new(t.cos(), t.sin()) * 0.5
//!     })
//!     .collect();
//!
//! let params = LensShellParams::new(65.0, 1.0, -4.0, 1.67).with_options(&RenderOptions::default());
//! let lens = LensMeshBuilder::new().build(&outline, &params).unwrap();
//! assert!(lens.mesh().validate());
//! ```

pub mod error;
pub mod mesh;
pub mod options;
pub mod shell;
pub mod surface;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use options::RenderOptions;
pub use shell::{build_lens_mesh, LensMesh, LensMeshBuilder, LensShellParams};
pub use surface::{base_curve, radius_from_power, sagitta, SurfacePair};
