//! # SCAD Tree
//!
//! An immutable CSG expression tree and the printer that turns it into
//! OpenSCAD source.
//!
//! ## Architecture
//!
//! ```text
//! constructors (circle, square, cylinder)
//!       ↓
//! transforms (translate, rotate, mirror, extrude)  +  booleans (union, difference, hull)
//!       ↓
//! Shape tree → render() → "$fn=64;\n\n..." → external renderer
//! ```
//!
//! ## Example
//!
//! ```rust
//! use scad_tree::{difference, render, Shape};
//!
//! let plate = Shape::centered_square(20.0);
//! let hole = Shape::circle(4.0);
//! let part = difference(plate, [hole]);
//!
//! let text = render(&part, 32);
//! assert!(text.starts_with("$fn=32;"));
//! assert!(text.contains("difference()"));
//! ```

pub mod ops;
pub mod printer;
pub mod shape;

// Re-export public API
pub use ops::{difference, hull, intersection, minkowski, union, LinearExtrusion};
pub use printer::{render, render_body};
pub use shape::{Descendants, Shape};
