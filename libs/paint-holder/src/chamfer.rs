//! # Corner Reliefs
//!
//! Circles with a flat foot, used as profile anchors so the revolved edge
//! prints without overhang.
//!
//! - [`chamfer_circle`]: circle with a mitred 45° foot below it.
//! - [`curved_chamfer_circle`]: circle with a concave fillet foot, which can
//!   be pointed in any of the four directions.

use std::f64::consts::SQRT_2;

use scad_tree::{difference, union, Shape};

use crate::direction::{parse_directions, Direction};
use crate::error::Result;

/// Circle of radius `r` with a mitred foot reaching down to `y = -r`.
pub fn chamfer_circle(r: f64) -> Shape {
    let side = (SQRT_2 - 1.0) * r;
    let bevel = (3.0 - 2.0 * SQRT_2).sqrt() * r;

    let half = Shape::square(side).union_with(
        Shape::square(bevel)
            .rotate_z(45.0)
            .translate_2d([side, 0.0]),
    );
    let foot = half.clone().union_with(half.mirror([1.0, 0.0, 0.0]));

    Shape::circle(r).union_with(foot.translate_2d([0.0, -r]))
}

/// Circle of radius `r` with a concave fillet foot on each side in `directions`.
///
/// The foot is drawn facing south and turned by [`Direction::chamfer_angle`].
/// An empty direction set yields [`Shape::Empty`].
pub fn curved_chamfer_circle(r: f64, directions: &[Direction]) -> Shape {
    let piece = fillet_foot(r);
    union(
        directions
            .iter()
            .map(|direction| piece.clone().rotate_z(direction.chamfer_angle())),
    )
}

/// [`curved_chamfer_circle`] from a token set such as `"DU"`.
pub fn curved_chamfer_circle_tokens(r: f64, tokens: &str) -> Result<Shape> {
    Ok(curved_chamfer_circle(r, &parse_directions(tokens)?))
}

fn fillet_foot(r: f64) -> Shape {
    let fillet = (SQRT_2 - 1.0) * r;
    let block = Shape::circle(r).union_with(Shape::square(r / SQRT_2).translate_2d([0.0, -r]));
    let half = difference(block, [Shape::circle(fillet).translate_2d([r, -r])]);
    half.clone().union_with(half.mirror([1.0, 0.0, 0.0]))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chamfer_is_deterministic() {
        assert_eq!(chamfer_circle(2.0), chamfer_circle(2.0));
        assert_ne!(chamfer_circle(2.0), chamfer_circle(3.0));
    }

    #[test]
    fn test_chamfer_starts_with_circle() {
        let shape = chamfer_circle(2.0);
        assert_eq!(shape.children()[0], Shape::circle(2.0));
        match &shape.children()[1] {
            Shape::Translate { offset, .. } => assert_eq!(*offset, [0.0, -2.0, 0.0]),
            other => panic!("Expected Translate, got {:?}", other),
        }
    }

    #[test]
    fn test_chamfer_bevel_matches_foot() {
        // sqrt(3 - 2√2) == √2 - 1
        let r = 2.0;
        let side = (SQRT_2 - 1.0) * r;
        let bevel = (3.0 - 2.0 * SQRT_2).sqrt() * r;
        assert_relative_eq!(bevel, side, epsilon = 1e-12);
    }

    #[test]
    fn test_fillet_cutter_sits_on_the_foot_corner() {
        let foot = fillet_foot(10.0);
        let [half, mirrored] = foot.children() else {
            panic!("Expected two halves, got {:?}", foot);
        };
        assert!(matches!(mirrored, Shape::Mirror { normal, .. } if *normal == [1.0, 0.0, 0.0]));

        let [block, cutter] = half.children() else {
            panic!("Expected block and cutter, got {:?}", half);
        };
        match cutter {
            Shape::Translate { offset, child } => {
                assert_eq!(*offset, [10.0, -10.0, 0.0]);
                match child.as_ref() {
                    Shape::Circle { radius, .. } => {
                        assert_relative_eq!(*radius, 4.142135623730951, epsilon = 1e-12)
                    }
                    other => panic!("Expected Circle, got {:?}", other),
                }
            }
            other => panic!("Expected Translate, got {:?}", other),
        }

        assert_eq!(block.children()[0], Shape::circle(10.0));
        match &block.children()[1] {
            Shape::Translate { offset, child } => {
                assert_eq!(*offset, [0.0, -10.0, 0.0]);
                match child.as_ref() {
                    Shape::Square { size, center } => {
                        assert!(!center);
                        assert_relative_eq!(size[0], 7.0710678118654755, epsilon = 1e-12);
                        assert_relative_eq!(size[1], size[0]);
                    }
                    other => panic!("Expected Square, got {:?}", other),
                }
            }
            other => panic!("Expected Translate, got {:?}", other),
        }
    }

    #[test]
    fn test_curved_chamfer_one_copy_per_direction() {
        let shape = curved_chamfer_circle_tokens(10.0, "DU").unwrap();
        let angles: Vec<f64> = shape
            .children()
            .iter()
            .map(|child| match child {
                Shape::Rotate { angles, .. } => angles[2],
                other => panic!("Expected Rotate, got {:?}", other),
            })
            .collect();
        assert_eq!(angles, vec![0.0, 180.0]);
    }

    #[test]
    fn test_curved_chamfer_single_direction_is_unwrapped_rotate() {
        let shape = curved_chamfer_circle(10.0, &[Direction::East]);
        assert!(matches!(shape, Shape::Rotate { angles, .. } if angles[2] == 90.0));
    }

    #[test]
    fn test_curved_chamfer_empty_set() {
        assert!(curved_chamfer_circle(10.0, &[]).is_empty());
    }

    #[test]
    fn test_curved_chamfer_rejects_bad_token() {
        assert!(curved_chamfer_circle_tokens(10.0, "DX").is_err());
    }

    #[test]
    fn test_curved_chamfer_is_deterministic() {
        let dirs = [Direction::South, Direction::North];
        assert_eq!(
            curved_chamfer_circle(10.0, &dirs),
            curved_chamfer_circle(10.0, &dirs)
        );
    }
}
