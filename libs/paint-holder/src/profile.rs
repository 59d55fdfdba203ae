//! # Cross-Section Profile
//!
//! The half cross-section of the holder, drawn in the XY plane with X as the
//! radius and Y as the height. Revolving it about Y gives the solid body.
//!
//! Anchors, bottom to top: a chamfered rim foot at the outer edge, a rim
//! top above it, a small square on the axis, a crest circle, the spine, the
//! lobed knob and (for stacked knobs) two chamfered rings.

use config::constants::{
    CREST_RATIO, KNOB_CAP_OFFSET, KNOB_LOBE_SPACING, KNOB_RING_OFFSETS, KNOB_RING_RADIUS,
    RIM_HEIGHT, SPINE_WIDTH,
};
use scad_tree::{hull, union, Shape};

use crate::chamfer::{chamfer_circle, curved_chamfer_circle};
use crate::clip::clip_default;
use crate::configuration::{Configuration, KnobStyle};
use crate::direction::Direction;

/// Radii of the circles the knob is hulled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobLobes {
    /// Centre lobe at the knob height.
    pub core: f64,
    /// Lobe one spacing above the centre.
    pub upper: f64,
    /// Lobe one spacing below the centre.
    pub lower: f64,
    /// Cap added on top of the hull.
    pub cap: f64,
}

impl KnobLobes {
    /// The knob itself.
    pub const KNOB: KnobLobes = KnobLobes {
        core: 20.0,
        upper: 10.0,
        lower: 10.0,
        cap: 10.0,
    };

    /// Slightly larger knob used to hollow the knob from below.
    pub const CUTTER: KnobLobes = KnobLobes {
        core: 21.0,
        upper: 10.0,
        lower: 21.0,
        cap: 11.0,
    };
}

/// Hull of the rim and crest anchors.
pub fn rim_section(config: &Configuration) -> Shape {
    let r = config.corner_radius;
    let rim_x = (config.base_diameter - r) / 2.0;
    hull([
        chamfer_circle(r).translate_2d([rim_x, 0.0]),
        Shape::circle(r).translate_2d([rim_x, RIM_HEIGHT]),
        Shape::centered_square(r),
        Shape::circle(2.0 * r).translate_2d([0.0, CREST_RATIO * config.base_diameter]),
    ])
}

/// Lobed knob centred at `knob_height` on the axis.
pub fn knob_body(knob_height: f64, lobes: KnobLobes) -> Shape {
    let lobed = hull([
        Shape::circle(lobes.core).translate_2d([0.0, knob_height]),
        Shape::circle(lobes.upper).translate_2d([0.0, knob_height + KNOB_LOBE_SPACING]),
        Shape::circle(lobes.lower).translate_2d([0.0, knob_height - KNOB_LOBE_SPACING]),
    ]);
    lobed.union_with(Shape::circle(lobes.cap).translate_2d([0.0, knob_height + KNOB_CAP_OFFSET]))
}

/// Chamfered rings stacked on the knob cap, if the style has any.
pub fn knob_rings(config: &Configuration) -> Vec<Shape> {
    match config.knob_style {
        KnobStyle::Plain => Vec::new(),
        KnobStyle::Stacked => KNOB_RING_OFFSETS
            .iter()
            .map(|offset| {
                curved_chamfer_circle(KNOB_RING_RADIUS, &[Direction::South, Direction::North])
                    .translate_2d([0.0, config.knob_height + offset])
            })
            .collect(),
    }
}

/// Complete half cross-section, clipped to the right of the axis.
pub fn section(config: &Configuration) -> Shape {
    let mut parts = vec![rim_section(config), knob_body(config.knob_height, KnobLobes::KNOB)];
    parts.extend(knob_rings(config));
    parts.push(Shape::rectangle([SPINE_WIDTH, config.knob_height]));
    clip_default(union(parts), Direction::East)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Preset;

    #[test]
    fn test_rim_section_has_four_anchors() {
        let rim = rim_section(&Preset::Citadel.configuration());
        match &rim {
            Shape::Hull { children } => {
                assert_eq!(children.len(), 4);
                assert_eq!(children[2], Shape::centered_square(2.0));
            }
            other => panic!("Expected Hull, got {:?}", other),
        }
    }

    #[test]
    fn test_rim_anchor_sits_inside_base_radius() {
        let rim = rim_section(&Preset::Citadel.configuration());
        match &rim.children()[1] {
            Shape::Translate { offset, .. } => assert_eq!(*offset, [71.5, 10.0, 0.0]),
            other => panic!("Expected Translate, got {:?}", other),
        }
    }

    #[test]
    fn test_knob_body_structure() {
        let knob = knob_body(70.0, KnobLobes::KNOB);
        let children = knob.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0], Shape::Hull { .. }));
        assert_eq!(
            children[1],
            Shape::circle(10.0).translate_2d([0.0, 95.0])
        );
    }

    #[test]
    fn test_plain_knob_has_no_rings() {
        let config = Preset::Tamiya.configuration();
        assert!(knob_rings(&config).is_empty());
    }

    #[test]
    fn test_stacked_knob_ring_heights() {
        let rings = knob_rings(&Preset::Citadel.configuration());
        let heights: Vec<f64> = rings
            .iter()
            .map(|ring| match ring {
                Shape::Translate { offset, .. } => offset[1],
                other => panic!("Expected Translate, got {:?}", other),
            })
            .collect();
        assert_eq!(heights, vec![115.0, 135.0]);
    }

    #[test]
    fn test_section_is_clipped_2d() {
        let section = section(&Preset::Standard.configuration());
        assert!(section.is_2d());
        match &section {
            Shape::Intersection { children } => {
                assert_eq!(children.len(), 2);
                // rim, knob, two rings, spine
                assert_eq!(children[0].children().len(), 5);
            }
            other => panic!("Expected Intersection, got {:?}", other),
        }
    }
}
