//! # Final Assembly
//!
//! Turns a [`Configuration`] into the finished holder:
//!
//! ```text
//! revolve(section)
//!   − radial(bottle hole, bottle_count)
//!   − radial(grip, grip_count)
//!   − knob hole                      (if enabled)
//!   + radial(bottle, bottle_count)   (if enabled)
//! ```

use config::constants::{
    CUTTER_HEIGHT, GRIP_DIAMETER, GRIP_HEIGHT_RATIO, GRIP_OFFSET, GRIP_TILT, KNOB_HOLE_LIFT,
};
use scad_tree::{difference, render, Shape};

use crate::clip::clip_default;
use crate::configuration::Configuration;
use crate::direction::Direction;
use crate::extrude::revolve;
use crate::profile::{knob_body, section, KnobLobes};
use crate::radial::radial;

/// A built holder ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// `$fn` for the output header.
    pub facets: u32,
    /// Root of the CSG tree.
    pub shape: Shape,
}

impl Model {
    /// OpenSCAD source for this model.
    pub fn render(&self) -> String {
        render(&self.shape, self.facets)
    }
}

/// Cutter for one bottle: the bottle hole plus a narrower finger
/// push-through reaching below the base.
pub fn bottle_hole(config: &Configuration) -> Shape {
    let offset = [config.hole_radius_offset(), 0.0, 0.0];
    let large = Shape::cylinder(config.hole_diameter(), CUTTER_HEIGHT).translate(offset);
    let finger = Shape::centered_cylinder(config.finger_diameter(), CUTTER_HEIGHT).translate(offset);
    large.union_with(finger)
}

/// Tilted cutter for one finger grip in the knob.
pub fn grip(config: &Configuration) -> Shape {
    Shape::cylinder(GRIP_DIAMETER, CUTTER_HEIGHT)
        .rotate([GRIP_TILT, 0.0, 0.0])
        .translate([GRIP_OFFSET, 0.0, config.knob_height * GRIP_HEIGHT_RATIO])
}

/// Solid standing in one bottle hole, for previews.
pub fn bottle(config: &Configuration) -> Shape {
    Shape::cylinder(config.bottle_diameter, config.bottle_height)
        .translate([config.hole_radius_offset(), 0.0, 0.0])
}

/// Revolved cutter that hollows the knob from below.
pub fn knob_hole(config: &Configuration) -> Shape {
    let cutter = knob_body(config.knob_height, KnobLobes::CUTTER);
    let outline = clip_default(cutter, Direction::East);
    revolve(outline).translate([0.0, 0.0, -config.knob_height + KNOB_HOLE_LIFT])
}

/// Builds the holder described by `config`.
pub fn build(config: &Configuration) -> Model {
    let body = revolve(section(config));
    tracing::debug!(nodes = body.node_count(), "revolved body");

    let holes = radial(bottle_hole(config), config.bottle_count);
    let grips = radial(grip(config), config.grip_count);
    tracing::debug!(
        bottles = config.bottle_count,
        grips = config.grip_count,
        "placed cutters"
    );

    let mut cutters = vec![holes, grips];
    if config.knob_hole {
        cutters.push(knob_hole(config));
        tracing::debug!("hollowing knob");
    }
    let mut shape = difference(body, cutters);

    if config.show_bottles {
        shape = shape.union_with(radial(bottle(config), config.bottle_count));
        tracing::debug!("added preview bottles");
    }

    tracing::info!(
        nodes = shape.node_count(),
        depth = shape.depth(),
        facets = config.facets,
        "built holder"
    );
    Model {
        facets: config.facets,
        shape,
    }
}

// =============================================================================
// TESTS
// =============================================================================
