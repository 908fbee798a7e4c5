use std::{num, str::FromStr};

use clap::Args;
use strandmap_core::{MapList, Range, map_list::MapListError};
use thiserror::Error;

#[derive(Args)]
pub struct MapArgs {
    /// Comma-separated from ranges (`START-END`).
    ///
    /// A range with `START > END` runs in reverse.
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub from: Vec<Range>,

    /// Comma-separated to ranges (`START-END`).
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub to: Vec<Range>,

    /// Number of from positions per number of to positions (`FROM:TO`).
    #[arg(long, default_value = "1:1")]
    pub ratio: Ratio,
}

impl TryFrom<MapArgs> for MapList {
    type Error = MapListError;

    fn try_from(args: MapArgs) -> Result<Self, Self::Error> {
        MapList::new(args.from, args.to, args.ratio.from, args.ratio.to)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ratio {
    pub from: u32,
    pub to: u32,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseRatioError {
    #[error("missing delimiter")]
    MissingDelimiter,
    #[error("invalid from ratio")]
    InvalidFrom(#[source] num::ParseIntError),
    #[error("invalid to ratio")]
    InvalidTo(#[source] num::ParseIntError),
}

impl FromStr for Ratio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const DELIMITER: char = ':';

        let (raw_from, raw_to) = s
            .split_once(DELIMITER)
            .ok_or(ParseRatioError::MissingDelimiter)?;

        let from = raw_from.parse().map_err(ParseRatioError::InvalidFrom)?;
        let to = raw_to.parse().map_err(ParseRatioError::InvalidTo)?;

        Ok(Self { from, to })
    }
}
