//! # Revolution
//!
//! Lifting the 2D cross-section into the solid holder body.

use scad_tree::Shape;

/// Sweeps a half cross-section a full turn about the vertical axis.
pub fn revolve(profile: Shape) -> Shape {
    if !profile.is_2d() {
        tracing::warn!("revolving a profile that is not planar");
    }
    profile.rotate_extrude()
}

// =============================================================================
// TESTS
// =============================================================================
