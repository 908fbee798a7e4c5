pub mod locate;
mod map;
pub mod overlaps;
pub mod shift;
pub mod traverse;

use clap::{Parser, Subcommand};

pub use self::map::{MapArgs, Ratio};

#[derive(Subcommand)]
pub enum Command {
    /// Translate single positions.
    Shift(shift::Args),
    /// Translate an interval to whole words on the other side.
    Locate(locate::Args),
    /// Translate the covered part of an interval to the other side.
    Overlaps(overlaps::Args),
    /// Compose two maps that share an intermediate space.
    Traverse(traverse::Args),
}

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
