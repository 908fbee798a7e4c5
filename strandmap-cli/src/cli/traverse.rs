use clap::Parser;
use strandmap_core::Range;

use super::{MapArgs, Ratio};

#[derive(Parser)]
pub struct Args {
    #[command(flatten)]
    pub map: MapArgs,

    /// Comma-separated from ranges of the second map (B to C).
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub then_from: Vec<Range>,

    /// Comma-separated to ranges of the second map.
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub then_to: Vec<Range>,

    /// Ratio of the second map (`FROM:TO`).
    #[arg(long, default_value = "1:1")]
    pub then_ratio: Ratio,
}
