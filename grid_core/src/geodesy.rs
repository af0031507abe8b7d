//! # Great-Circle Geodesy
//!
//! Distance and bearing between two points on a spherical Earth.
//!
//! - Distance: Haversine formula, sphere radius chosen by [`Unit`]
//! - Bearing: forward azimuth at the start of the great-circle path, in [0, 360)
//!
//! The back bearing in a [`DistanceResult`] is the forward azimuth computed
//! from the destination to the origin. It is not derived as `bearing + 180`.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::geodesy::calculate;
//! use grid_core::units::Unit;
//!
//! let result = calculate("CN87", "CN88", Unit::Kilometers).unwrap();
//! assert!((result.distance - 111.2).abs() < 0.1);
//! assert!(result.bearing < 1e-9);
//! assert!((result.back_bearing - 180.0).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::errors::GridResult;
use crate::locator::decode;
use crate::units::Unit;

/// Wrap any finite angle in degrees into [0, 360).
pub fn normalize_angle(degrees: f64) -> f64 {
    let angle = degrees % 360.0;
    if angle < 0.0 {
        // -1e-15 % 360 + 360 rounds to 360.0
        let wrapped = angle + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        // Folds -0.0 into 0.0
        angle + 0.0
    }
}

/// Haversine great-circle distance between `a` and `b` in `unit`.
pub fn great_circle_distance(a: Coordinate, b: Coordinate, unit: Unit) -> f64 {
    let lat1 = a.latitude_rad();
    let lat2 = b.latitude_rad();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin() * (d_lon / 2.0).sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    unit.radius() * c
}

/// Initial bearing from `a` towards `b`, degrees clockwise from true north in [0, 360).
///
/// Coincident points give 0.
pub fn initial_bearing(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude_rad();
    let lat2 = b.latitude_rad();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_angle(x.atan2(y).to_degrees())
}

/// Distance and bearings between two coordinates.
///
/// ## JSON Example
///
/// ```json
/// {
///   "distance": 111.19,
///   "unit": "km",
///   "bearing": 0.0,
///   "back_bearing": 180.0,
///   "from": { "latitude": 47.5, "longitude": -123.0 },
///   "to": { "latitude": 48.5, "longitude": -123.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// Great-circle distance in `unit`
    pub distance: f64,

    /// Unit `distance` is expressed in
    pub unit: Unit,

    /// Initial bearing from `from` to `to` (degrees)
    pub bearing: f64,

    /// Initial bearing from `to` back to `from` (degrees)
    pub back_bearing: f64,

    /// Origin
    pub from: Coordinate,

    /// Destination
    pub to: Coordinate,
}

impl DistanceResult {
    /// Distance between the same two points in another unit
    pub fn distance_in(&self, unit: Unit) -> f64 {
        if unit == self.unit {
            self.distance
        } else {
            great_circle_distance(self.from, self.to, unit)
        }
    }
}

/// Compute distance, bearing and back bearing in one pass.
pub fn compute(a: Coordinate, b: Coordinate, unit: Unit) -> DistanceResult {
    let result = DistanceResult {
        distance: great_circle_distance(a, b, unit),
        unit,
        bearing: initial_bearing(a, b),
        back_bearing: initial_bearing(b, a),
        from: a,
        to: b,
    };
    debug!(
        "{:?} -> {:?}: {} {}, bearing {}, back bearing {}",
        a, b, result.distance, unit, result.bearing, result.back_bearing
    );
    result
}

/// Decode two locators and return the distance between their centers.
pub fn distance_between(grid1: &str, grid2: &str, unit: Unit) -> GridResult<f64> {
    let from = decode(grid1)?;
    let to = decode(grid2)?;
    Ok(great_circle_distance(from, to, unit))
}

/// Decode two locators and return the initial bearing from the first to the second.
pub fn bearing_between(grid1: &str, grid2: &str) -> GridResult<f64> {
    let from = decode(grid1)?;
    let to = decode(grid2)?;
    Ok(initial_bearing(from, to))
}

/// Decode two locators and compute the full [`DistanceResult`].
///
/// Fails on the first locator that does not decode; nothing is computed
/// in that case.
pub fn calculate(grid1: &str, grid2: &str, unit: Unit) -> GridResult<DistanceResult> {
    let from = decode(grid1)?;
    let to = decode(grid2)?;
    Ok(compute(from, to, unit))
}
