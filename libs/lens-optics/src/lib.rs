//! # Lens Optics
//!
//! Prescription data model and empirical thickness estimation.
//!
//! ## Models
//!
//! - [`DivisorModel`]: piecewise divisor fit per refractive-index band. This is
//!   the model the mesh pipeline uses.
//! - [`ReferenceChartModel`]: direct interpolation of the manufacturer chart
//!   the divisor model was fitted against.
//!
//! ## Usage
//!
//! ```rust
//! use lens_optics::{estimate_thickness, LensSpec, Prescription, ThicknessModel, DivisorModel};
//!
//! let spec = LensSpec {
//!     prescription: Prescription::sphere(-6.0),
//!     refractive_index: 1.67,
//!     ..LensSpec::default()
//! };
//! spec.validate().unwrap();
//!
//! let thickness = DivisorModel.estimate_spec(&spec);
//! assert_eq!(thickness, estimate_thickness(-6.0, 1.67, 65.0));
//! ```

pub mod chart;
pub mod error;
pub mod lens_spec;
pub mod material;
pub mod prescription;
pub mod thickness;

pub use chart::ReferenceChartModel;
pub use error::{OpticsError, OpticsResult};
pub use lens_spec::LensSpec;
pub use material::{FrameSize, IndexBand, Material};
pub use prescription::{Eye, EyePair, LensKind, Prescription};
pub use thickness::{
    compare_materials, estimate_thickness, DivisorModel, MaterialThickness, ThicknessModel,
    ThicknessResult,
};
