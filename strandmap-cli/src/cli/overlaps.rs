use clap::Parser;

use super::MapArgs;

#[derive(Parser)]
pub struct Args {
    #[command(flatten)]
    pub map: MapArgs,

    /// Find overlaps of a to interval in the from ranges.
    #[arg(long)]
    pub reverse: bool,

    /// Interval start.
    ///
    /// Positions that are not covered by the ranges are ignored.
    #[arg(allow_hyphen_values = true)]
    pub begin: i64,

    /// Interval end (inclusive).
    #[arg(allow_hyphen_values = true)]
    pub end: i64,
}
