//! Text and JSON rendering of calculation results.
//!
//! Everything here returns a `String` so output can be checked in tests;
//! `main` does the printing.

use std::fmt::Write;

use grid_core::direction::to_cardinal;
use grid_core::geodesy::{calculate, DistanceResult};
use grid_core::locator::Locator;
use grid_core::units::Unit;
use serde::Serialize;

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

/// Built-in demonstration pairs shown when the tool is run without arguments
pub const EXAMPLE_PAIRS: [(&str, &str, &str); 4] = [
    ("FN42", "JO01", "Boston area to London area"),
    ("FN42hn", "DM13at", "Massachusetts to Arizona"),
    ("CN87", "CN88", "Adjacent grid squares"),
    ("JN25", "QF22", "Europe to Australia"),
];

/// `"<distance> <unit>"` with one decimal place.
pub fn simple(result: &DistanceResult) -> String {
    format!("{:.1} {}\n", result.distance, result.unit)
}

/// Coordinates, distance in every unit and both bearings.
pub fn verbose(grid1: &str, grid2: &str, result: &DistanceResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "From: {:<8} ({:>8.3}°, {:>9.3}°)",
        grid1, result.from.latitude, result.from.longitude
    );
    let _ = writeln!(
        out,
        "To:   {:<8} ({:>8.3}°, {:>9.3}°)",
        grid2, result.to.latitude, result.to.longitude
    );
    out.push('\n');

    out.push_str("Distance:\n");
    for unit in Unit::ALL {
        let name = match unit {
            Unit::NauticalMiles => unit.long_name(),
            _ => unit.label(),
        };
        let _ = writeln!(out, "  {:>10.1} {}", result.distance_in(unit), name);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Bearing:      {:>5.1}° ({})",
        result.bearing,
        to_cardinal(result.bearing)
    );
    let _ = writeln!(
        out,
        "Back Bearing: {:>5.1}° ({})",
        result.back_bearing,
        to_cardinal(result.back_bearing)
    );

    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    grid1: &'a str,
    grid2: &'a str,
    #[serde(flatten)]
    result: &'a DistanceResult,
    bearing_direction: &'static str,
    back_bearing_direction: &'static str,
}

/// Pretty-printed JSON of the result plus canonical locators and compass labels.
pub fn json(grid1: &Locator, grid2: &Locator, result: &DistanceResult) -> serde_json::Result<String> {
    let report = JsonReport {
        grid1: grid1.as_str(),
        grid2: grid2.as_str(),
        result,
        bearing_direction: to_cardinal(result.bearing),
        back_bearing_direction: to_cardinal(result.back_bearing),
    };
    serde_json::to_string_pretty(&report).map(|mut s| {
        s.push('\n');
        s
    })
}

/// Banner and the [`EXAMPLE_PAIRS`] calculations.
pub fn examples() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    out.push_str("Maidenhead Grid Square Distance Calculator\n");
    let _ = writeln!(out, "{RULE}");
    out.push('\n');
    out.push_str("Example Calculations:\n");
    let _ = writeln!(out, "{THIN_RULE}");

    for (grid1, grid2, description) in EXAMPLE_PAIRS {
        out.push('\n');
        match calculate(grid1, grid2, Unit::Kilometers) {
            Ok(result) => {
                let _ = writeln!(out, "{description}");
                let _ = writeln!(
                    out,
                    "  From: {:<8} ({:>7.3}°, {:>8.3}°)",
                    grid1, result.from.latitude, result.from.longitude
                );
                let _ = writeln!(
                    out,
                    "  To:   {:<8} ({:>7.3}°, {:>8.3}°)",
                    grid2, result.to.latitude, result.to.longitude
                );
                let _ = writeln!(
                    out,
                    "  Distance: {:.1} km ({:.1} mi, {:.1} nm)",
                    result.distance,
                    result.distance_in(Unit::Miles),
                    result.distance_in(Unit::NauticalMiles)
                );
                let _ = writeln!(
                    out,
                    "  Bearing:  {:.1}° ({})",
                    result.bearing,
                    to_cardinal(result.bearing)
                );
            }
            Err(e) => {
                let _ = writeln!(out, "{description}: Error - {e}");
            }
        }
    }

    out.push('\n');
    let _ = writeln!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(g1: &str, g2: &str, unit: Unit) -> DistanceResult {
        calculate(g1, g2, unit).unwrap()
    }

    #[test]
    fn test_simple_per_unit() {
        assert_eq!(simple(&result("FN42", "JO01", Unit::Kilometers)), "5325.2 km\n");
        assert_eq!(simple(&result("FN42", "JO01", Unit::Miles)), "3309.1 miles\n");
        assert_eq!(simple(&result("FN42", "JO01", Unit::NauticalMiles)), "2875.3 nm\n");
    }

    #[test]
    fn test_verbose_layout() {
        let text = verbose("CN87", "CN88", &result("CN87", "CN88", Unit::Kilometers));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "From: CN87     (  47.500°,  -123.000°)");
        assert_eq!(lines[1], "To:   CN88     (  48.500°,  -123.000°)");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Distance:");
        assert_eq!(lines[4], "       111.2 km");
        assert_eq!(lines[5], "        69.1 miles");
        assert_eq!(lines[6], "        60.0 nautical miles");
        assert_eq!(lines[8], "Bearing:        0.0° (N)");
        assert_eq!(lines[9], "Back Bearing: 180.0° (S)");
    }

    #[test]
    fn test_verbose_is_unit_independent() {
        let km = verbose("FN42", "JO01", &result("FN42", "JO01", Unit::Kilometers));
        let mi = verbose("FN42", "JO01", &result("FN42", "JO01", Unit::Miles));
        assert_eq!(km, mi);
    }

    #[test]
    fn test_json_report() {
        let g1 = Locator::parse("cn87").unwrap();
        let g2 = Locator::parse("cn88").unwrap();
        let r = grid_core::geodesy::compute(g1.center(), g2.center(), Unit::Miles);

        let text = json(&g1, &g2, &r).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["grid1"], "CN87");
        assert_eq!(value["unit"], "mi");
        assert_eq!(value["bearing_direction"], "N");
        assert_eq!(value["back_bearing_direction"], "S");
        assert_eq!(value["from"]["latitude"], 47.5);
    }

    #[test]
    fn test_examples_cover_every_pair() {
        let text = examples();
        for (g1, g2, description) in EXAMPLE_PAIRS {
            assert!(text.contains(description));
            assert!(text.contains(&format!("From: {g1:<8}")));
            assert!(text.contains(&format!("To:   {g2:<8}")));
        }
        assert!(text.contains("  Distance: 5325.2 km (3309.1 mi, 2875.3 nm)"));
        assert!(text.contains("  Bearing:  52.9° (NE)"));
        assert!(!text.contains("Error"));
    }
}
