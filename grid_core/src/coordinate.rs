//! # Coordinates
//!
//! Latitude/longitude pair in decimal degrees, as produced by the locator
//! decoder and consumed by the geodesy functions.

use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees.
///
/// ## JSON Example
///
/// ```json
/// { "latitude": 42.5, "longitude": -71.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees north of the equator (negative is south)
    pub latitude: f64,

    /// Degrees east of Greenwich (negative is west)
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Latitude in radians
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}
