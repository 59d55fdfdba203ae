//! # Config Crate
//!
//! Centralized constants for the paint holder model builder.
//! Every dimension that is shared by all bottle presets lives here so the
//! geometry code stays declarative and free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HALF_PLANE_DISTANCE, HOLE_CLEARANCE};
//!
//! // A bottle hole is slightly wider than the bottle itself
//! let bottle = 32.5;
//! let hole = bottle + HOLE_CLEARANCE;
//! assert_eq!(hole, 34.5);
//!
//! // Half planes must dwarf the model
//! assert!(HALF_PLANE_DISTANCE > 145.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres**: Every length is in millimetres, every angle in degrees
//! - **OpenSCAD Compatible**: Values are emitted verbatim into `.scad` output

pub mod constants;
