//! # Configuration Constants
//!
//! Centralized constants for the lens pipeline. Outline sampling, surface
//! curvature guards, material band limits and frame defaults live here.
//!
//! ## Categories
//!
//! - **Precision**: Point-coincidence tolerance
//! - **Outline**: Default sampling density and rounded-corner limits
//! - **Mesh**: Ring counts and safety bounds for generated shells
//! - **Material**: Refractive index band limits used by the estimator
//! - **Surface**: Flat-surface guards and display attenuation
//! - **Frame**: Default diameter and bridge width

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum separation between two consecutive outline points.
///
/// Outlines whose consecutive points are closer than this are treated as
/// containing coincident points and rejected.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_MERGE_EPSILON;
///
/// let gap: f64 = 1e-12;
/// assert!(gap < POINT_MERGE_EPSILON);
/// ```
pub const POINT_MERGE_EPSILON: f64 = 1e-9;

// =============================================================================
// OUTLINE CONSTANTS
// =============================================================================

/// Default number of points sampled along a lens outline.
///
/// Every digitized outline in the shape library is stored at this density.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_OUTLINE_POINTS;
///
/// let requested: Option<usize> = None;
/// assert_eq!(requested.unwrap_or(DEFAULT_OUTLINE_POINTS), 120);
/// ```
pub const DEFAULT_OUTLINE_POINTS: usize = 120;

/// Minimum number of points a closed outline needs to form a ring.
pub const MIN_OUTLINE_POINTS: usize = 3;

/// Upper bound for a rounded-polygon corner radius, in normalized units.
///
/// Corner radii are additionally clamped to half of each adjacent edge.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CORNER_RADIUS;
///
/// let requested = 0.8_f64;
/// assert_eq!(requested.min(MAX_CORNER_RADIUS), 0.49);
/// ```
pub const MAX_CORNER_RADIUS: f64 = 0.49;

/// Minimum length of a straight run between two corner arcs.
///
/// Shorter runs are dropped so that adjacent arcs join directly.
pub const MIN_EDGE_LENGTH: f64 = 0.001;

/// Fallback half-angle (radians) for a corner whose edges are collinear.
pub const MIN_CORNER_HALF_ANGLE: f64 = 0.001;

// =============================================================================
// MESH CONSTANTS
// =============================================================================

/// Default number of radial ring intervals between the center and the rim.
///
/// A value of `n` produces `n + 1` rings of vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RING_COUNT;
///
/// let rings_emitted = DEFAULT_RING_COUNT + 1;
/// assert_eq!(rings_emitted, 51);
/// ```
pub const DEFAULT_RING_COUNT: u32 = 50;

/// Scale of the innermost ring relative to the outline.
///
/// The shell starts from a tiny ring instead of a single apex vertex so the
/// center never produces degenerate fans.
pub const CENTER_RING_RATIO: f64 = 0.001;

/// Maximum number of vertices in a single lens mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 2 * 51 * 120;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// MATERIAL CONSTANTS
// =============================================================================

/// Upper bound (inclusive) of the low-index material band (1.50 class).
///
/// Also selects the low-index base-curve rule in the surface model.
pub const LOW_INDEX_LIMIT: f64 = 1.53;

/// Upper bound (inclusive) of the 1.60 material band.
pub const MID_INDEX_LIMIT: f64 = 1.63;

/// Upper bound (inclusive) of the 1.67 material band. Anything above is
/// treated as the 1.74 band.
pub const HIGH_INDEX_LIMIT: f64 = 1.70;

/// Prescription magnitude (D) at which the low-index divisor correction starts.
pub const LOW_INDEX_CORRECTION_POWER: f64 = 8.0;

/// Prescription magnitude (D) at which the high-index divisor correction starts.
pub const HIGH_INDEX_CORRECTION_POWER: f64 = 6.0;

// =============================================================================
// SURFACE CONSTANTS
// =============================================================================

/// Surface powers (D) with a magnitude below this are treated as flat.
///
/// # Example
///
/// ```rust
/// use config::constants::{FLAT_SURFACE_RADIUS_MM, SURFACE_POWER_EPSILON};
///
/// let power = 0.0004_f64;
/// let radius = if power.abs() < SURFACE_POWER_EPSILON {
///     FLAT_SURFACE_RADIUS_MM
/// } else {
///     (1000.0 * 0.5 / power).abs()
/// };
/// assert_eq!(radius, FLAT_SURFACE_RADIUS_MM);
/// ```
pub const SURFACE_POWER_EPSILON: f64 = 0.001;

/// Radius (mm) substituted for a surface whose power is effectively zero.
pub const FLAT_SURFACE_RADIUS_MM: f64 = 10_000.0;

/// Default attenuation applied to the prescription before splitting it into
/// front and back curvatures, so strong prescriptions stay legible on screen.
///
/// `1.0` renders physically literal curvatures.
pub const DEFAULT_POWER_SCALE: f64 = 0.5;

/// Base curve (D) used for plano lenses.
pub const PLANO_BASE_CURVE: f64 = 6.0;

// =============================================================================
// FRAME CONSTANTS
// =============================================================================

/// Default frame diameter in millimeters.
pub const DEFAULT_DIAMETER_MM: f64 = 65.0;

/// Default bridge width (DBL) in millimeters.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BRIDGE_WIDTH_MM;
///
/// let user_bridge: Option<f64> = None;
/// assert_eq!(user_bridge.unwrap_or(DEFAULT_BRIDGE_WIDTH_MM), 17.0);
/// ```
pub const DEFAULT_BRIDGE_WIDTH_MM: f64 = 17.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks whether a refractive index belongs to the low-index (1.50) band.
///
/// # Example
///
/// ```rust
/// use config::constants::is_low_index;
///
/// assert!(is_low_index(1.50));
/// assert!(!is_low_index(1.60));
/// ```
#[inline]
pub fn is_low_index(refractive_index: f64) -> bool {
    refractive_index <= LOW_INDEX_LIMIT
}
