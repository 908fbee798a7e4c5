use clap::Parser;

use super::MapArgs;

#[derive(Parser)]
pub struct Args {
    #[command(flatten)]
    pub map: MapArgs,

    /// Locate a to interval in the from ranges.
    #[arg(long)]
    pub reverse: bool,

    /// Interval start.
    #[arg(allow_hyphen_values = true)]
    pub start: i64,

    /// Interval end (inclusive).
    #[arg(allow_hyphen_values = true)]
    pub end: i64,
}
