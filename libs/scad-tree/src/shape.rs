//! # Shape Types
//!
//! The CSG expression tree. A [`Shape`] is a pure description: it owns its
//! children, holds no mesh or render state, and is never mutated once built.
//! Composition always wraps existing shapes in a new node (see [`crate::ops`]).

use serde::{Deserialize, Serialize};

// =============================================================================
// SHAPE
// =============================================================================

/// A node in the CSG tree.
///
/// All values are concrete numbers. Lengths are in millimetres, angles in
/// degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================

    /// Circle primitive.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// circle(r = 5);
    /// circle(r = 2, $fn = 6);
    /// ```
    Circle {
        /// Radius.
        radius: f64,
        /// Fragment override; `None` inherits the file-level `$fn`.
        segments: Option<u32>,
    },

    /// Square/rectangle primitive.
    Square {
        /// Size as [x, y].
        size: [f64; 2],
        /// Whether centered at the origin.
        center: bool,
    },

    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================

    /// Cylinder or cone primitive.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h = 100, r = 18.5, center = false);
    /// ```
    Cylinder {
        /// Height.
        height: f64,
        /// Bottom radius.
        radius1: f64,
        /// Top radius.
        radius2: f64,
        /// Whether centered on Z.
        center: bool,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Translation transform.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<Shape>,
    },

    /// Rotation transform.
    Rotate {
        /// Rotation angles [x, y, z] in degrees.
        angles: [f64; 3],
        /// Child geometry.
        child: Box<Shape>,
    },

    /// Scale transform.
    Scale {
        /// Scale factors [x, y, z].
        factors: [f64; 3],
        /// Child geometry.
        child: Box<Shape>,
    },

    /// Mirror transform.
    Mirror {
        /// Mirror plane normal.
        normal: [f64; 3],
        /// Child geometry.
        child: Box<Shape>,
    },

    // =========================================================================
    // EXTRUSIONS
    // =========================================================================

    /// Linear extrusion of a 2D child along Z.
    LinearExtrude {
        /// Extrusion height.
        height: f64,
        /// Twist angle in degrees.
        twist: f64,
        /// Number of slices.
        slices: u32,
        /// Scale at top.
        scale: [f64; 2],
        /// Whether centered on Z.
        center: bool,
        /// Child 2D geometry.
        child: Box<Shape>,
    },

    /// Rotational extrusion of a 2D child about Z.
    RotateExtrude {
        /// Sweep angle in degrees.
        angle: f64,
        /// Child 2D geometry.
        child: Box<Shape>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<Shape>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<Shape>,
    },

    /// Intersection of children.
    Intersection {
        /// Child geometries.
        children: Vec<Shape>,
    },

    /// Convex hull of children.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// hull() {
    ///   circle(r = 2);
    ///   translate(v = [20, 0, 0]) circle(r = 2);
    /// }
    /// ```
    Hull {
        /// Child geometries to hull.
        children: Vec<Shape>,
    },

    /// Minkowski sum of children.
    ///
    /// Inflates the first child by the shape of the second.
    Minkowski {
        /// Child geometries (typically 2).
        children: Vec<Shape>,
    },

    // =========================================================================
    // META
    // =========================================================================

    /// Empty geometry (a union of nothing).
    Empty,
}

impl Shape {
    /// Check if this is an empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this is a leaf primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Circle { .. } | Self::Square { .. } | Self::Cylinder { .. }
        )
    }

    /// Check if this node describes planar geometry.
    ///
    /// Transforms and booleans inherit dimensionality from their first child;
    /// extrusions are always 3D.
    pub fn is_2d(&self) -> bool {
        match self {
            Self::Circle { .. } | Self::Square { .. } => true,
            Self::Cylinder { .. }
            | Self::LinearExtrude { .. }
            | Self::RotateExtrude { .. }
            | Self::Empty => false,
            _ => self.children().first().is_some_and(Shape::is_2d),
        }
    }

    /// Direct children in order.
    pub fn children(&self) -> &[Shape] {
        match self {
            Self::Circle { .. } | Self::Square { .. } | Self::Cylinder { .. } | Self::Empty => &[],
            Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::Scale { child, .. }
            | Self::Mirror { child, .. }
            | Self::LinearExtrude { child, .. }
            | Self::RotateExtrude { child, .. } => std::slice::from_ref(child.as_ref()),
            Self::Union { children }
            | Self::Difference { children }
            | Self::Intersection { children }
            | Self::Hull { children }
            | Self::Minkowski { children } => children,
        }
    }

    /// Pre-order iterator over this node and everything beneath it.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Total number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Shape::depth).max().unwrap_or(0)
    }

    /// Number of nodes in the tree satisfying `predicate`.
    pub fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Shape) -> bool,
    {
        self.descendants().filter(|node| predicate(node)).count()
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Pre-order traversal returned by [`Shape::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Shape>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Shape;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

// =============================================================================
// TESTS
// =============================================================================
