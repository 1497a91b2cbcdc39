//! # Outline Trace
//!
//! Extracts normalized lens outlines from photographed silhouettes: a dark
//! lens on a light background. This is how the digitized catalog tables
//! were produced.
//!
//! ## Usage
//!
//! ```rust
//! use outline_trace::{trace, LuminanceImage, TraceParams};
//!
//! // A dark ellipse, 160 × 100 px
//! let image = LuminanceImage::from_fn(200, 140, |x, y| {
//!     let dx = (x as f64 - 100.0) / 80.0;
//!     let dy = (y as f64 - 70.0) / 50.0;
//!     if dx * dx + dy * dy <= 1.0 { 20.0 } else { 255.0 }
//! })
//! .unwrap();
//!
//! let traced = trace(&image, &TraceParams::default()).unwrap();
//! assert_eq!(traced.points.len(), 120);
//! assert!((traced.width_ratio - 1.6).abs() < 0.05);
//!
//! let outline = traced.into_outline().unwrap();
//! assert!((outline.size().x - 1.0).abs() < 1e-9);
//! ```

pub mod contour;
pub mod error;
pub mod geometry;
pub mod image;
pub mod trace;

pub use contour::{angular_sweep, centroid, douglas_peucker, perpendicular_distance};
pub use error::{TraceError, TraceResult};
pub use geometry::{normalize, resample_arc_length, rotate, smooth};
pub use image::{luma, LuminanceImage, PixelFormat};
pub use trace::{trace, TraceParams, TracedOutline};
