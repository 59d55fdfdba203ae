//! # Directions
//!
//! Compass directions in the profile plane. Profiles are drawn with X as the
//! radius and Y as the height, so the aliases read naturally:
//!
//! | Token | Alias | Meaning          |
//! |-------|-------|------------------|
//! | `N`   | `U`   | up, +Y           |
//! | `S`   | `D`   | down, −Y         |
//! | `E`   | `R`   | right, +X        |
//! | `W`   | `L`   | left, −X         |

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::error::{HolderError, Result};

/// A direction in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +Y (`N` or `U`).
    North,
    /// −Y (`S` or `D`).
    South,
    /// +X (`E` or `R`).
    East,
    /// −X (`W` or `L`).
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Unit vector pointing this way.
    pub fn unit(self) -> DVec2 {
        match self {
            Self::North => DVec2::Y,
            Self::South => DVec2::NEG_Y,
            Self::East => DVec2::X,
            Self::West => DVec2::NEG_X,
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Rotation about Z, in degrees, that turns a relief drawn facing south
    /// so it faces this direction.
    pub fn chamfer_angle(self) -> f64 {
        match self {
            Self::South => 0.0,
            Self::East => 90.0,
            Self::West => -90.0,
            Self::North => 180.0,
        }
    }

    /// Canonical compass token.
    pub fn token(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = HolderError;

    fn try_from(token: char) -> Result<Self> {
        match token {
            'N' | 'U' => Ok(Self::North),
            'S' | 'D' => Ok(Self::South),
            'E' | 'R' => Ok(Self::East),
            'W' | 'L' => Ok(Self::West),
            other => Err(HolderError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = HolderError;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(HolderError::InvalidDirection(token.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Parses a direction set such as `"DU"`, one token per character.
pub fn parse_directions(tokens: &str) -> Result<Vec<Direction>> {
    tokens.chars().map(Direction::try_from).collect()
}

// =============================================================================
// TESTS
// =============================================================================
