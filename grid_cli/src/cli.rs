//! Command-line arguments.

use clap::Parser;
use grid_core::units::{Unit, UnknownUnit};

const EXAMPLES: &str = "\
Examples:
  grid_cli FN42 JO01
  grid_cli FN42hn DM13at --unit mi
  grid_cli CN87 CN88 --verbose

Run without arguments to see a set of example calculations.";

/// Calculate distance and bearing between Maidenhead grid squares
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "grid_cli", version, after_help = EXAMPLES)]
pub struct CliArgs {
    /// First grid square (e.g., FN42, FN42hn)
    #[arg(value_name = "GRID1")]
    pub grid1: String,

    /// Second grid square
    #[arg(value_name = "GRID2")]
    pub grid2: String,

    /// Distance unit: km, mi, nm
    #[arg(short, long, value_name = "UNIT", default_value = "km", value_parser = parse_unit)]
    pub unit: Unit,

    /// Show coordinates, all units and both bearings
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "verbose")]
    pub json: bool,
}

fn parse_unit(s: &str) -> Result<Unit, UnknownUnit> {
    s.parse()
}
