//! # Configuration
//!
//! The immutable parameter set a holder is built from, and the named bottle
//! presets.
//!
//! | Preset     | Bottle ⌀ × h | Bottles | `$fn` | Knob    | Knob hole |
//! |------------|--------------|---------|-------|---------|-----------|
//! | `citadel`  | 32.5 × 45    | 9       | 64    | stacked | no        |
//! | `standard` | 25 × 80      | 12      | 64    | stacked | no        |
//! | `tamiya`   | 35 × 45      | 8       | 128   | plain   | yes       |
//!
//! All presets share a 145 mm base, 6 grips, a 2 mm corner radius, a 3 mm
//! outer wall and a knob centred 70 mm up.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use config::constants::{DEFAULT_FACETS, FINGER_RELIEF, HOLE_CLEARANCE, MIN_FACETS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HolderError, Result};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Shape of the knob above the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnobStyle {
    /// Lobed knob with a cap.
    Plain,
    /// Lobed knob with two chamfered rings stacked on the cap.
    Stacked,
}

/// Parameters for one holder build. Lengths in millimetres.
///
/// Missing fields in JSON fall back to the citadel preset. Unknown fields
/// are an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Outer diameter of the base.
    pub base_diameter: f64,
    /// Diameter of one paint bottle.
    pub bottle_diameter: f64,
    /// Height of one paint bottle.
    pub bottle_height: f64,
    /// Number of bottle holes.
    pub bottle_count: u32,
    /// Number of finger grips cut into the knob.
    pub grip_count: u32,
    /// Radius of the rounded profile anchors.
    pub corner_radius: f64,
    /// `$fn` written to the output header.
    pub facets: u32,
    /// Material left between a hole and the outer rim.
    pub wall: f64,
    /// Height of the knob centre above the base.
    pub knob_height: f64,
    /// Knob decoration.
    pub knob_style: KnobStyle,
    /// Whether to hollow the knob from below.
    pub knob_hole: bool,
    /// Whether to add bottle solids to the model for preview.
    pub show_bottles: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Preset::Citadel.configuration()
    }
}

impl Configuration {
    /// Diameter of a bottle hole.
    pub fn hole_diameter(&self) -> f64 {
        self.bottle_diameter + HOLE_CLEARANCE
    }

    /// Diameter of the finger push-through below each hole.
    pub fn finger_diameter(&self) -> f64 {
        self.hole_diameter() - FINGER_RELIEF
    }

    /// Distance from the vertical axis to each hole centre.
    pub fn hole_radius_offset(&self) -> f64 {
        (self.base_diameter - self.hole_diameter()) / 2.0 - self.wall
    }

    /// Checks that the parameters describe a buildable holder.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("base_diameter", self.base_diameter),
            ("bottle_diameter", self.bottle_diameter),
            ("bottle_height", self.bottle_height),
            ("corner_radius", self.corner_radius),
            ("knob_height", self.knob_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.wall.is_finite() || self.wall < 0.0 {
            return Err(invalid(format!("wall must not be negative, got {}", self.wall)));
        }
        if self.bottle_count == 0 {
            return Err(invalid("bottle_count must be at least 1".to_string()));
        }
        if self.grip_count == 0 {
            return Err(invalid("grip_count must be at least 1".to_string()));
        }
        if self.facets < MIN_FACETS {
            return Err(invalid(format!(
                "facets must be at least {MIN_FACETS}, got {}",
                self.facets
            )));
        }
        if self.finger_diameter() <= 0.0 {
            return Err(invalid(format!(
                "bottle_diameter {} leaves no finger hole",
                self.bottle_diameter
            )));
        }
        if self.hole_radius_offset() < self.hole_diameter() / 2.0 {
            return Err(invalid(format!(
                "{} mm holes do not fit in a {} mm base",
                self.hole_diameter(),
                self.base_diameter
            )));
        }
        Ok(())
    }

    /// Parses a JSON object of overrides.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON object of overrides from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Applies a JSON object of overrides on top of `self`.
    pub fn merge_json_str(&self, json: &str) -> Result<Self> {
        let overrides: Map<String, Value> = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Applies the JSON overrides in `path` on top of `self`.
    pub fn merge_json_file(&self, path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        self.merge_json_str(&text)
    }
}

fn invalid(message: String) -> HolderError {
    HolderError::InvalidConfiguration(message)
}

// =============================================================================
// PRESETS
// =============================================================================

/// Named bottle sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Citadel paint pots.
    #[default]
    Citadel,
    /// Tall dropper bottles.
    Standard,
    /// Tamiya jars, with a hollow knob.
    Tamiya,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 3] = [Self::Citadel, Self::Standard, Self::Tamiya];

    /// Preset name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Citadel => "citadel",
            Self::Standard => "standard",
            Self::Tamiya => "tamiya",
        }
    }

    /// Parameters for this preset.
    pub fn configuration(self) -> Configuration {
        let citadel = Configuration {
            base_diameter: 145.0,
            bottle_diameter: 32.5,
            bottle_height: 45.0,
            bottle_count: 9,
            grip_count: 6,
            corner_radius: 2.0,
            facets: DEFAULT_FACETS,
            wall: 3.0,
            knob_height: 70.0,
            knob_style: KnobStyle::Stacked,
            knob_hole: false,
            show_bottles: false,
        };
        match self {
            Self::Citadel => citadel,
            Self::Standard => Configuration {
                bottle_diameter: 25.0,
                bottle_height: 80.0,
                bottle_count: 12,
                ..citadel
            },
            Self::Tamiya => Configuration {
                bottle_diameter: 35.0,
                bottle_height: 45.0,
                bottle_count: 8,
                facets: 128,
                knob_style: KnobStyle::Plain,
                knob_hole: true,
                ..citadel
            },
        }
    }
}

impl FromStr for Preset {
    type Err = HolderError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HolderError::UnknownPreset(name.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================
