//! Angle unit conversion utilities
//!
//! Configuration files and user input express angular speed in degrees per
//! second; the engine works exclusively in radians per second. The
//! conversion happens at the boundary, inside the core, because it affects
//! simulation correctness.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

/// Angular measurement units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngularUnits {
    /// Degrees (configuration boundary)
    Degrees,
    /// Radians (engine internal)
    Radians,
}

impl AngularUnits {
    /// Convert a value from one angular unit to another
    pub fn convert(value: f64, from: AngularUnits, to: AngularUnits) -> f64 {
        match (from, to) {
            (AngularUnits::Degrees, AngularUnits::Radians) => degrees_to_radians(value),
            (AngularUnits::Radians, AngularUnits::Degrees) => radians_to_degrees(value),
            _ => value,
        }
    }
}

impl Default for AngularUnits {
    fn default() -> Self {
        Self::Degrees
    }
}

impl fmt::Display for AngularUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "deg"),
            Self::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngularUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deg" | "degrees" => Ok(Self::Degrees),
            "rad" | "radians" => Ok(Self::Radians),
            _ => Err(format!("Unknown angular unit: {}", s)),
        }
    }
}

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Rebase an angle into `[0, 2π)`
///
/// Trigonometric periodicity makes this unnecessary for correctness; it
/// exists only as optional drift control for very long runs.
pub fn normalize(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
