use clap::Parser;

use super::MapArgs;

#[derive(Parser)]
pub struct Args {
    #[command(flatten)]
    pub map: MapArgs,

    /// Translate to positions to from positions.
    #[arg(long)]
    pub reverse: bool,

    /// Positions to translate.
    #[arg(required = true, allow_hyphen_values = true)]
    pub positions: Vec<i64>,
}
