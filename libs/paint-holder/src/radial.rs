//! # Radial Repetition
//!
//! Places copies of a shape evenly around the vertical axis. Copy `i` of `n`
//! is rotated by `i * 360 / n` degrees, so the result is symmetric under a
//! rotation by `360 / n`.

use config::constants::FULL_TURN;
use scad_tree::{union, Shape};

/// Rotation of each copy, in degrees, starting at 0.
pub fn radial_angles(count: u32) -> Vec<f64> {
    (0..count)
        .map(|i| f64::from(i) * FULL_TURN / f64::from(count))
        .collect()
}

/// Union of `count` copies of `shape` spread evenly about Z.
///
/// A count of 1 returns `shape` untouched. A count of 0 yields
/// [`Shape::Empty`].
pub fn radial(shape: Shape, count: u32) -> Shape {
    if count == 1 {
        return shape;
    }
    union(
        radial_angles(count)
            .into_iter()
            .map(|angle| shape.clone().rotate_z(angle)),
    )
}

// =============================================================================
// TESTS
// =============================================================================
