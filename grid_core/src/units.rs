//! # Distance Units
//!
//! The three distance units a calculation can be reported in. Each unit
//! selects the radius of the spherical Earth model, so a distance "in miles"
//! is the central angle scaled by the mile radius rather than a converted
//! kilometre figure.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::units::Unit;
//!
//! let unit: Unit = "mi".parse().unwrap();
//! assert_eq!(unit, Unit::Miles);
//! assert_eq!(unit.radius(), 3959.0);
//! assert_eq!(unit.label(), "miles");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Mean Earth radius in statute miles
pub const EARTH_RADIUS_MI: f64 = 3959.0;

/// Mean Earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.0;

/// Distance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "nm")]
    NauticalMiles,
}

impl Unit {
    /// All units, in display order
    pub const ALL: [Unit; 3] = [Unit::Kilometers, Unit::Miles, Unit::NauticalMiles];

    /// Sphere radius used for distances in this unit
    pub fn radius(self) -> f64 {
        match self {
            Unit::Kilometers => EARTH_RADIUS_KM,
            Unit::Miles => EARTH_RADIUS_MI,
            Unit::NauticalMiles => EARTH_RADIUS_NM,
        }
    }

    /// Short label printed after a distance ("km", "miles", "nm")
    pub fn label(self) -> &'static str {
        match self {
            Unit::Kilometers => "km",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nm",
        }
    }

    /// Spelled-out name
    pub fn long_name(self) -> &'static str {
        match self {
            Unit::Kilometers => "kilometers",
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nautical miles",
        }
    }

    /// Token accepted on the command line and in JSON
    pub fn token(self) -> &'static str {
        match self {
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
            Unit::NauticalMiles => "nm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a unit token is not one of km, mi or nm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit '{0}'. Use km, mi, or nm.")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.token() == s)
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}
