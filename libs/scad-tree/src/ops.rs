//! # Shape Construction
//!
//! Constructors, transforms and explicit boolean operations.
//!
//! ## Operations
//!
//! - Primitives: `circle`, `square`, `rectangle`, `cylinder`
//! - Transforms: `translate`, `rotate`, `scale`, `mirror` (consume and wrap)
//! - Extrusions: `linear_extrude`, `rotate_extrude`
//! - Booleans: [`union`], [`difference`], [`intersection`], [`hull`], [`minkowski`]
//!
//! ## Example
//!
//! ```rust
//! use scad_tree::{hull, Shape};
//!
//! let capsule = hull([
//!     Shape::circle(2.0),
//!     Shape::circle(2.0).translate_2d([10.0, 0.0]),
//! ]);
//! assert_eq!(capsule.children().len(), 2);
//! ```

use config::constants::FULL_TURN;

use crate::shape::Shape;

// =============================================================================
// PRIMITIVES
// =============================================================================

impl Shape {
    /// Circle of radius `radius` centered at the origin.
    pub fn circle(radius: f64) -> Self {
        Self::Circle {
            radius,
            segments: None,
        }
    }

    /// Circle with an explicit fragment count, e.g. a hexagon for `segments = 6`.
    pub fn circle_with_segments(radius: f64, segments: u32) -> Self {
        Self::Circle {
            radius,
            segments: Some(segments),
        }
    }

    /// Square with its corner at the origin.
    pub fn square(side: f64) -> Self {
        Self::rectangle([side, side])
    }

    /// Square centered on the origin.
    pub fn centered_square(side: f64) -> Self {
        Self::Square {
            size: [side, side],
            center: true,
        }
    }

    /// Rectangle with its corner at the origin.
    pub fn rectangle(size: [f64; 2]) -> Self {
        Self::Square {
            size,
            center: false,
        }
    }

    /// Upright cylinder standing on the XY plane.
    pub fn cylinder(diameter: f64, height: f64) -> Self {
        Self::Cylinder {
            height,
            radius1: diameter / 2.0,
            radius2: diameter / 2.0,
            center: false,
        }
    }

    /// Upright cylinder centered on the XY plane.
    pub fn centered_cylinder(diameter: f64, height: f64) -> Self {
        Self::Cylinder {
            height,
            radius1: diameter / 2.0,
            radius2: diameter / 2.0,
            center: true,
        }
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

impl Shape {
    /// Moves the shape by `offset`.
    pub fn translate(self, offset: [f64; 3]) -> Self {
        Self::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Moves the shape within the XY plane.
    pub fn translate_2d(self, offset: [f64; 2]) -> Self {
        self.translate([offset[0], offset[1], 0.0])
    }

    /// Rotates the shape by Euler angles in degrees.
    pub fn rotate(self, angles: [f64; 3]) -> Self {
        Self::Rotate {
            angles,
            child: Box::new(self),
        }
    }

    /// Rotates the shape about the vertical axis.
    pub fn rotate_z(self, degrees: f64) -> Self {
        self.rotate([0.0, 0.0, degrees])
    }

    /// Scales the shape per axis.
    pub fn scale(self, factors: [f64; 3]) -> Self {
        Self::Scale {
            factors,
            child: Box::new(self),
        }
    }

    /// Mirrors the shape across the plane with the given normal.
    pub fn mirror(self, normal: [f64; 3]) -> Self {
        Self::Mirror {
            normal,
            child: Box::new(self),
        }
    }

    /// Lifts a 2D shape into 3D along Z.
    pub fn linear_extrude(self, params: LinearExtrusion) -> Self {
        Self::LinearExtrude {
            height: params.height,
            twist: params.twist,
            slices: params.slices,
            scale: params.scale,
            center: params.center,
            child: Box::new(self),
        }
    }

    /// Sweeps a 2D shape a full turn about Z.
    pub fn rotate_extrude(self) -> Self {
        self.rotate_extrude_angle(FULL_TURN)
    }

    /// Sweeps a 2D shape `angle` degrees about Z.
    pub fn rotate_extrude_angle(self, angle: f64) -> Self {
        Self::RotateExtrude {
            angle,
            child: Box::new(self),
        }
    }

    /// `union(self, other)`.
    pub fn union_with(self, other: Shape) -> Self {
        union([self, other])
    }

    /// `difference(self, other)`.
    pub fn subtract(self, other: Shape) -> Self {
        difference(self, [other])
    }
}

/// Parameters for [`Shape::linear_extrude`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearExtrusion {
    /// Extrusion height.
    pub height: f64,
    /// Total twist in degrees over the height.
    pub twist: f64,
    /// Number of slices used to approximate the twist.
    pub slices: u32,
    /// Scale of the top face relative to the bottom.
    pub scale: [f64; 2],
    /// Whether centered on Z.
    pub center: bool,
}

impl Default for LinearExtrusion {
    fn default() -> Self {
        Self {
            height: 1.0,
            twist: 0.0,
            slices: 1,
            scale: [1.0, 1.0],
            center: false,
        }
    }
}

// =============================================================================
// BOOLEAN OPERATIONS
// =============================================================================

/// Combines all shapes into one.
///
/// No shapes yield [`Shape::Empty`]; a single shape is returned as is.
pub fn union<I>(shapes: I) -> Shape
where
    I: IntoIterator<Item = Shape>,
{
    let mut children: Vec<Shape> = shapes.into_iter().collect();
    match children.len() {
        0 => Shape::Empty,
        1 => children.swap_remove(0),
        _ => Shape::Union { children },
    }
}

/// Subtracts every cutter from `base`.
///
/// With no cutters the base is returned unchanged.
pub fn difference<I>(base: Shape, cutters: I) -> Shape
where
    I: IntoIterator<Item = Shape>,
{
    let mut children = vec![base];
    children.extend(cutters);
    if children.len() == 1 {
        return children.swap_remove(0);
    }
    Shape::Difference { children }
}

/// Keeps only the region common to all shapes.
pub fn intersection<I>(shapes: I) -> Shape
where
    I: IntoIterator<Item = Shape>,
{
    Shape::Intersection {
        children: shapes.into_iter().collect(),
    }
}

/// Convex hull of all shapes.
///
/// Follows [`union`] for zero or one shape.
pub fn hull<I>(shapes: I) -> Shape
where
    I: IntoIterator<Item = Shape>,
{
    let mut children: Vec<Shape> = shapes.into_iter().collect();
    match children.len() {
        0 => Shape::Empty,
        1 => children.swap_remove(0),
        _ => Shape::Hull { children },
    }
}

/// Minkowski sum of all shapes.
pub fn minkowski<I>(shapes: I) -> Shape
where
    I: IntoIterator<Item = Shape>,
{
    Shape::Minkowski {
        children: shapes.into_iter().collect(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
