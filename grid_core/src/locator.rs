//! # Maidenhead Locator Decoding
//!
//! A locator is a mixed-radix number: each pair of characters picks a cell
//! inside the cell chosen by the pairs before it.
//!
//! | Level     | Chars | Longitude step | Latitude step | Alphabet |
//! |-----------|-------|----------------|---------------|----------|
//! | Field     | 1-2   | 20°            | 10°           | A-R      |
//! | Square    | 3-4   | 2°             | 1°            | 0-9      |
//! | Subsquare | 5-6   | 5′             | 2.5′          | A-X      |
//! | Extended  | 7-8   | 30″            | 15″           | 0-9      |
//!
//! Decoding returns the center of the finest cell given.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::locator::{decode, Locator, Precision};
//!
//! let c = decode("fn42").unwrap();
//! assert_eq!(c.latitude, 42.5);
//! assert_eq!(c.longitude, -71.0);
//!
//! let loc: Locator = "FN42hn".parse().unwrap();
//! assert_eq!(loc.as_str(), "FN42HN");
//! assert_eq!(loc.precision(), Precision::Subsquare);
//! ```

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::errors::{FormatViolation, GridError, GridResult};

/// Longitude of the western edge of field `AA`
const LON_ORIGIN: f64 = -180.0;

/// Latitude of the southern edge of field `AA`
const LAT_ORIGIN: f64 = -90.0;

/// Resolution of a locator, one level per character pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precision {
    /// 2 characters, 20° x 10°
    Field,
    /// 4 characters, 2° x 1°
    Square,
    /// 6 characters, 5′ x 2.5′
    Subsquare,
    /// 8 characters, 30″ x 15″
    Extended,
}

impl Precision {
    /// Levels from coarsest to finest
    pub const LEVELS: [Precision; 4] = [
        Precision::Field,
        Precision::Square,
        Precision::Subsquare,
        Precision::Extended,
    ];

    /// Precision for a locator of `len` characters, if that length is valid
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            2 => Some(Precision::Field),
            4 => Some(Precision::Square),
            6 => Some(Precision::Subsquare),
            8 => Some(Precision::Extended),
            _ => None,
        }
    }

    /// Number of locator characters up to and including this level
    pub fn char_len(self) -> usize {
        match self {
            Precision::Field => 2,
            Precision::Square => 4,
            Precision::Subsquare => 6,
            Precision::Extended => 8,
        }
    }

    /// Cell width in degrees of longitude
    pub fn lon_step(self) -> f64 {
        match self {
            Precision::Field => 20.0,
            Precision::Square => 2.0,
            Precision::Subsquare => 2.0 / 24.0,
            Precision::Extended => 2.0 / 240.0,
        }
    }

    /// Cell height in degrees of latitude
    pub fn lat_step(self) -> f64 {
        match self {
            Precision::Field => 10.0,
            Precision::Square => 1.0,
            Precision::Subsquare => 1.0 / 24.0,
            Precision::Extended => 1.0 / 240.0,
        }
    }

    /// Number of symbols at this level (18 field letters, 24 subsquare letters, 10 digits)
    fn radix(self) -> u8 {
        match self {
            Precision::Field => 18,
            Precision::Subsquare => 24,
            Precision::Square | Precision::Extended => 10,
        }
    }

    /// First symbol of the level's alphabet
    fn base(self) -> u8 {
        match self {
            Precision::Field | Precision::Subsquare => b'A',
            Precision::Square | Precision::Extended => b'0',
        }
    }

    fn violation(self) -> FormatViolation {
        match self {
            Precision::Field => FormatViolation::FieldNotLetters,
            Precision::Square => FormatViolation::SquareNotDigits,
            Precision::Subsquare => FormatViolation::SubsquareNotLetters,
            Precision::Extended => FormatViolation::ExtendedNotDigits,
        }
    }

    /// Offset of `symbol` within this level's alphabet, or None if it doesn't belong
    fn digit(self, symbol: u8) -> Option<u8> {
        symbol
            .checked_sub(self.base())
            .filter(|&d| d < self.radix())
    }
}

/// A validated locator, stored in canonical uppercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locator {
    text: String,
    precision: Precision,
    /// (x, y) offset of each pair within its level's alphabet
    digits: Vec<(u8, u8)>,
}

impl Locator {
    /// Validate and canonicalize a locator string.
    ///
    /// Rules are checked in order: length first, then each character pair
    /// from coarsest to finest. The first broken rule is reported.
    pub fn parse(input: &str) -> GridResult<Self> {
        let text = input.to_ascii_uppercase();

        let precision = Precision::from_len(text.chars().count())
            .ok_or_else(|| GridError::invalid_format(input, FormatViolation::WrongLength))?;

        let bytes = text.as_bytes();
        let mut digits = Vec::with_capacity(precision.char_len() / 2);
        for level in Precision::LEVELS.into_iter().take_while(|&l| l <= precision) {
            let end = level.char_len();
            match (level.digit(bytes[end - 2]), level.digit(bytes[end - 1])) {
                (Some(x), Some(y)) => digits.push((x, y)),
                _ => return Err(GridError::invalid_format(input, level.violation())),
            }
        }

        Ok(Locator {
            text,
            precision,
            digits,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Center of the cell this locator names
    pub fn center(&self) -> Coordinate {
        let mut lon = LON_ORIGIN;
        let mut lat = LAT_ORIGIN;

        for (level, &(x, y)) in Precision::LEVELS.into_iter().zip(&self.digits) {
            lon += f64::from(x) * level.lon_step();
            lat += f64::from(y) * level.lat_step();
        }

        lon += self.precision.lon_step() / 2.0;
        lat += self.precision.lat_step() / 2.0;

        trace!("{} -> ({lat}, {lon})", self.text);
        Coordinate::new(lat, lon)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Locator {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl TryFrom<String> for Locator {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locator::parse(&value)
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.text
    }
}

/// Decode a locator string to the coordinate of its cell center.
///
/// Input is case-insensitive. Fails with [`GridError::InvalidFormat`] when
/// the length is not 2, 4, 6 or 8, or a character pair is outside its
/// level's alphabet.
pub fn decode(locator: &str) -> GridResult<Coordinate> {
    Locator::parse(locator).map(|l| l.center())
}
