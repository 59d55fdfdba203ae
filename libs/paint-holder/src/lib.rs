//! # Paint Holder
//!
//! Parametric builder for 3D-printable paint bottle holders.
//!
//! ## Architecture
//!
//! ```text
//! Configuration (preset or JSON)
//!       ↓
//! profile (hull of anchors, clipped to a half plane)
//!       ↓
//! revolve → body − radial(holes) − radial(grips) [− knob hole]
//!       ↓
//! scad_tree::render → "$fn=64;\n\n..." → stdout
//! ```
//!
//! ## Example
//!
//! ```rust
//! use paint_holder::{build, Preset};
//!
//! let model = build(&Preset::Citadel.configuration());
//! let text = model.render();
//! assert!(text.starts_with("$fn=64;"));
//! ```

pub mod assembly;
pub mod chamfer;
pub mod cli;
pub mod clip;
pub mod configuration;
pub mod direction;
pub mod error;
pub mod extrude;
pub mod profile;
pub mod radial;

// Re-export public API
pub use assembly::{build, Model};
pub use configuration::{Configuration, KnobStyle, Preset};
pub use direction::Direction;
pub use error::{HolderError, Result};
