//! # Config Crate
//!
//! Centralized configuration constants for the lens pipeline.
//! All magic numbers and tunable parameters are defined here so that the
//! outline library, the thickness estimator, the mesh generator and the
//! layout agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_OUTLINE_POINTS, DEFAULT_RING_COUNT, POINT_MERGE_EPSILON};
//!
//! // Consecutive outline points closer than this are coincident
//! assert!(POINT_MERGE_EPSILON > 0.0);
//!
//! // Tessellation defaults for a lens shell
//! assert_eq!(DEFAULT_OUTLINE_POINTS, 120);
//! assert_eq!(DEFAULT_RING_COUNT, 50);
//! ```
//!
//! ## Categories
//!
//! - **Precision**: Point-coincidence tolerance
//! - **Outline**: Sampling density and corner rounding limits
//! - **Material**: Refractive index band limits
//! - **Surface**: Curvature guards and display attenuation
//! - **Frame**: Default frame geometry

pub mod constants;

#[cfg(test)]
mod tests;
