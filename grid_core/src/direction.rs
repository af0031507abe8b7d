//! # Compass Directions
//!
//! Maps a bearing to one of the 16 points of the compass, each covering
//! 22.5° centered on its nominal heading (`N` covers 348.75°..11.25°).
//!
//! ## Example
//!
//! ```rust
//! use grid_core::direction::{to_cardinal, CardinalDirection};
//!
//! assert_eq!(to_cardinal(52.9), "NE");
//! assert_eq!(CardinalDirection::from_bearing(-90.0), CardinalDirection::W);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geodesy::normalize_angle;

/// Width of one compass sector in degrees
pub const SECTOR_DEGREES: f64 = 22.5;

/// One of the 16 compass points, declared clockwise from north.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CardinalDirection {
    /// All points clockwise from north
    pub const ALL: [CardinalDirection; 16] = [
        CardinalDirection::N,
        CardinalDirection::NNE,
        CardinalDirection::NE,
        CardinalDirection::ENE,
        CardinalDirection::E,
        CardinalDirection::ESE,
        CardinalDirection::SE,
        CardinalDirection::SSE,
        CardinalDirection::S,
        CardinalDirection::SSW,
        CardinalDirection::SW,
        CardinalDirection::WSW,
        CardinalDirection::W,
        CardinalDirection::WNW,
        CardinalDirection::NW,
        CardinalDirection::NNW,
    ];

    /// Nearest compass point to `bearing` degrees. Any finite angle is accepted.
    pub fn from_bearing(bearing: f64) -> Self {
        let sector = (normalize_angle(bearing) / SECTOR_DEGREES).round() as usize;
        Self::ALL[sector % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            CardinalDirection::N => "N",
            CardinalDirection::NNE => "NNE",
            CardinalDirection::NE => "NE",
            CardinalDirection::ENE => "ENE",
            CardinalDirection::E => "E",
            CardinalDirection::ESE => "ESE",
            CardinalDirection::SE => "SE",
            CardinalDirection::SSE => "SSE",
            CardinalDirection::S => "S",
            CardinalDirection::SSW => "SSW",
            CardinalDirection::SW => "SW",
            CardinalDirection::WSW => "WSW",
            CardinalDirection::W => "W",
            CardinalDirection::WNW => "WNW",
            CardinalDirection::NW => "NW",
            CardinalDirection::NNW => "NNW",
        }
    }

    /// Nominal heading of this point in degrees
    pub fn heading(self) -> f64 {
        self as usize as f64 * SECTOR_DEGREES
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass label for a bearing in degrees.
pub fn to_cardinal(bearing: f64) -> &'static str {
    CardinalDirection::from_bearing(bearing).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_points() {
        assert_eq!(to_cardinal(0.0), "N");
        assert_eq!(to_cardinal(90.0), "E");
        assert_eq!(to_cardinal(180.0), "S");
        assert_eq!(to_cardinal(270.0), "W");
    }

    #[test]
    fn test_wraps_to_north() {
        assert_eq!(to_cardinal(359.9), "N");
        assert_eq!(to_cardinal(360.0), "N");
        assert_eq!(to_cardinal(348.75), "N");
        assert_eq!(to_cardinal(348.7), "NNW");
    }

    #[test]
    fn test_sector_boundaries_round_half_up() {
        // 11.25 / 22.5 = 0.5 rounds away from zero
        assert_eq!(to_cardinal(11.24), "N");
        assert_eq!(to_cardinal(11.25), "NNE");
        assert_eq!(to_cardinal(33.75), "NE");
    }

    #[test]
    fn test_every_nominal_heading() {
        for (i, dir) in CardinalDirection::ALL.iter().enumerate() {
            let heading = i as f64 * SECTOR_DEGREES;
            assert_eq!(CardinalDirection::from_bearing(heading), *dir);
            assert_eq!(dir.heading(), heading);
        }
    }

    #[test]
    fn test_unnormalized_input() {
        assert_eq!(to_cardinal(-90.0), "W");
        assert_eq!(to_cardinal(-0.1), "N");
        assert_eq!(to_cardinal(450.0), "E");
        assert_eq!(to_cardinal(-720.0), "N");
    }

    #[test]
    fn test_total_on_range() {
        let mut bearing = 0.0;
        while bearing < 360.0 {
            let label = to_cardinal(bearing);
            assert!(CardinalDirection::ALL.iter().any(|d| d.label() == label));
            bearing += 0.1;
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CardinalDirection::SSW).unwrap();
        assert_eq!(json, "\"SSW\"");
    }
}
