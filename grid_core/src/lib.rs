//! # grid_core - Maidenhead Locator Geodesy
//!
//! `grid_core` turns Maidenhead grid-square locators into coordinates and
//! computes great-circle distance and bearing between them. All types are
//! JSON-serializable so results can be handed to other tools unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Spherical**: One mean-radius sphere per unit, no ellipsoid
//! - **Rich Errors**: The decoder reports which rule a locator broke
//!
//! ## Quick Start
//!
//! ```rust
//! use grid_core::{calculate, to_cardinal, Unit};
//!
//! let result = calculate("FN42", "JO01", Unit::Kilometers).unwrap();
//! println!(
//!     "{:.1} {} heading {:.1}° ({})",
//!     result.distance,
//!     result.unit,
//!     result.bearing,
//!     to_cardinal(result.bearing)
//! );
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("back_bearing"));
//! ```
//!
//! ## Modules
//!
//! - [`locator`] - Locator validation and decoding to cell centers
//! - [`coordinate`] - Latitude/longitude pair
//! - [`geodesy`] - Haversine distance, initial bearing, combined results
//! - [`direction`] - 16-point compass labels
//! - [`units`] - Distance units and Earth radii
//! - [`errors`] - Structured error types

pub mod coordinate;
pub mod direction;
pub mod errors;
pub mod geodesy;
pub mod locator;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use coordinate::Coordinate;
pub use direction::{to_cardinal, CardinalDirection};
pub use errors::{FormatViolation, GridError, GridResult};
pub use geodesy::{
    bearing_between, calculate, compute, distance_between, great_circle_distance,
    initial_bearing, DistanceResult,
};
pub use locator::{decode, Locator, Precision};
pub use units::Unit;
