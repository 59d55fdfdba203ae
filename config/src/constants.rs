//! # Configuration Constants
//!
//! Dimensions and tolerances shared by every paint holder preset.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default `$fn` facet count
//! - **Clipping**: The stand-in for "infinity" used by half planes
//! - **Holes**: Clearances for bottle, finger and grip cutters
//! - **Profile**: Anchor positions of the revolved cross-section

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(40.0, 40.0 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

/// One full revolution in degrees.
pub const FULL_TURN: f64 = 360.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default value written to the `$fn` header.
///
/// The renderer uses this many fragments for every circle and cylinder
/// in the emitted model.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FACETS;
///
/// let user_facets: Option<u32> = None;
/// assert_eq!(user_facets.unwrap_or(DEFAULT_FACETS), 64);
/// ```
pub const DEFAULT_FACETS: u32 = 64;

/// Smallest facet count the renderer accepts for a closed outline.
pub const MIN_FACETS: u32 = 3;

// =============================================================================
// CLIPPING CONSTANTS
// =============================================================================

/// Default distance standing in for "infinity" when building half planes.
///
/// A half plane is a square of side `2 * HALF_PLANE_DISTANCE` shifted by
/// `HALF_PLANE_DISTANCE` along its direction. It must be large relative to
/// the model or the clip truncates real geometry.
///
/// # Example
///
/// ```rust
/// use config::constants::HALF_PLANE_DISTANCE;
///
/// let model_extent = 145.0;
/// assert!(HALF_PLANE_DISTANCE > 2.0 * model_extent);
/// ```
pub const HALF_PLANE_DISTANCE: f64 = 1000.0;

// =============================================================================
// HOLE CONSTANTS
// =============================================================================

/// Extra diameter added to a bottle to get its hole diameter.
///
/// # Example
///
/// ```rust
/// use config::constants::HOLE_CLEARANCE;
///
/// let hole = 25.0 + HOLE_CLEARANCE;
/// assert_eq!(hole, 27.0);
/// ```
pub const HOLE_CLEARANCE: f64 = 2.0;

/// Diameter removed from a hole to get the finger push-through below it.
pub const FINGER_RELIEF: f64 = 10.0;

/// Height of every subtracting cylinder. Tall enough to pierce the body.
pub const CUTTER_HEIGHT: f64 = 100.0;

/// Diameter of the finger grips cut into the knob.
pub const GRIP_DIAMETER: f64 = 10.0;

/// Tilt of a grip cutter about the X axis, in degrees.
pub const GRIP_TILT: f64 = 20.0;

/// Radial distance of a grip cutter from the vertical axis.
pub const GRIP_OFFSET: f64 = 20.0;

/// Grip height as a fraction of the knob height.
pub const GRIP_HEIGHT_RATIO: f64 = 0.8;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Vertical offset of the upper rim anchor above the lower one.
pub const RIM_HEIGHT: f64 = 10.0;

/// Height of the crest anchor as a fraction of the base diameter.
///
/// # Example
///
/// ```rust
/// use config::constants::CREST_RATIO;
///
/// let crest = CREST_RATIO * 145.0;
/// assert!((crest - 50.75).abs() < 1e-9);
/// ```
pub const CREST_RATIO: f64 = 0.35;

/// Width of the spine rectangle joining the base to the knob.
pub const SPINE_WIDTH: f64 = 10.0;

/// Vertical spacing between knob lobes.
pub const KNOB_LOBE_SPACING: f64 = 20.0;

/// Height of the knob cap above the knob centre.
pub const KNOB_CAP_OFFSET: f64 = 25.0;

/// Heights of the stacked chamfered rings above the knob centre.
pub const KNOB_RING_OFFSETS: [f64; 2] = [45.0, 65.0];

/// Radius of the stacked chamfered rings.
pub const KNOB_RING_RADIUS: f64 = 10.0;

/// Lift applied to the knob hole cutter after it is lowered by the knob height.
pub const KNOB_HOLE_LIFT: f64 = 10.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
