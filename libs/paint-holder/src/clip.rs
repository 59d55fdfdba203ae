//! # Half-Plane Clipping
//!
//! A half plane is a square of side `2 * distance`, centered `distance` away
//! from the origin along a direction. Intersecting a profile with it keeps the
//! part of the profile on that side of the axis.
//!
//! `distance` must be large relative to the model. Nothing checks this; a
//! half plane that is too small silently truncates real geometry.

use config::constants::HALF_PLANE_DISTANCE;
use glam::DVec2;
use scad_tree::{intersection, Shape};

use crate::direction::Direction;
use crate::error::Result;

/// Half plane on the `direction` side of the origin.
///
/// ## Example
///
/// ```rust
/// use paint_holder::clip::half_plane;
/// use paint_holder::direction::Direction;
/// use scad_tree::render_body;
///
/// let text = render_body(&half_plane(Direction::North, 1000.0));
/// assert_eq!(
///     text,
///     "translate(v = [0, 1000, 0]) {\n\tsquare(size = [2000, 2000], center = true);\n}\n"
/// );
/// ```
pub fn half_plane(direction: Direction, distance: f64) -> Shape {
    let offset = direction.unit() * distance;
    Shape::centered_square(2.0 * distance).translate_2d(offset.to_array())
}

/// [`half_plane`] at [`HALF_PLANE_DISTANCE`].
pub fn half_plane_default(direction: Direction) -> Shape {
    half_plane(direction, HALF_PLANE_DISTANCE)
}

/// [`half_plane`] from a direction token such as `"R"`.
pub fn half_plane_token(token: &str, distance: f64) -> Result<Shape> {
    Ok(half_plane(token.parse()?, distance))
}

/// Lower-left and upper-right corners of the region a [`half_plane`] tree
/// covers, read from its translation and centred square.
///
/// Returns `None` for any other shape.
pub fn half_plane_bounds(plane: &Shape) -> Option<[DVec2; 2]> {
    let Shape::Translate { offset, child } = plane else {
        return None;
    };
    let Shape::Square { size, center: true } = child.as_ref() else {
        return None;
    };
    let center = DVec2::new(offset[0], offset[1]);
    let half = DVec2::from_array(*size) / 2.0;
    Some([center - half, center + half])
}

/// Keeps the part of `shape` on the `direction` side of the origin.
pub fn clip(shape: Shape, direction: Direction, distance: f64) -> Shape {
    intersection([shape, half_plane(direction, distance)])
}

/// [`clip`] at [`HALF_PLANE_DISTANCE`].
pub fn clip_default(shape: Shape, direction: Direction) -> Shape {
    clip(shape, direction, HALF_PLANE_DISTANCE)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HolderError;

    #[test]
    fn test_right_half_plane_starts_at_axis() {
        let [min, max] = half_plane_bounds(&half_plane(Direction::East, 1000.0)).unwrap();
        assert_eq!(min, DVec2::new(0.0, -1000.0));
        assert_eq!(max, DVec2::new(2000.0, 1000.0));
    }

    #[test]
    fn test_bounds_of_other_shapes() {
        assert!(half_plane_bounds(&Shape::centered_square(2.0)).is_none());
        let uncentered = Shape::square(2.0).translate_2d([1.0, 0.0]);
        assert!(half_plane_bounds(&uncentered).is_none());
    }

    #[test]
    fn test_default_distance() {
        assert_eq!(
            half_plane_default(Direction::South),
            half_plane(Direction::South, HALF_PLANE_DISTANCE)
        );
        assert_eq!(
            clip_default(Shape::circle(5.0), Direction::East),
            clip(Shape::circle(5.0), Direction::East, HALF_PLANE_DISTANCE)
        );
    }

    #[test]
    fn test_half_plane_structure() {
        match half_plane(Direction::West, 10.0) {
            Shape::Translate { offset, child } => {
                assert_eq!(offset, [-10.0, 0.0, 0.0]);
                assert_eq!(*child, Shape::centered_square(20.0));
            }
            other => panic!("Expected Translate, got {:?}", other),
        }
    }

    #[test]
    fn test_alias_token_matches_compass() {
        assert_eq!(
            half_plane_token("R", 1000.0).unwrap(),
            half_plane_token("E", 1000.0).unwrap()
        );
    }

    #[test]
    fn test_invalid_token_fails() {
        let err = half_plane_token("Q", 1000.0).unwrap_err();
        assert!(matches!(err, HolderError::InvalidDirection(_)));
    }

    #[test]
    fn test_clip_is_intersection() {
        let clipped = clip(Shape::circle(5.0), Direction::East, 100.0);
        match clipped {
            Shape::Intersection { children } => {
                assert_eq!(children[0], Shape::circle(5.0));
                assert_eq!(children[1], half_plane(Direction::East, 100.0));
            }
            other => panic!("Expected Intersection, got {:?}", other),
        }
    }
}
