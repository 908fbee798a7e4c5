use std::io::{self, BufWriter, Write};

use strandmap_core::{MapList, Range, map_list::MapListError};
use thiserror::Error;
use tracing::info;

use crate::cli::locate;

const SEPARATOR: char = '\t';

pub fn locate(args: locate::Args) -> Result<(), LocateError> {
    let map = MapList::try_from(args.map)?;

    let (start, end) = (args.start, args.end);

    info!(start, end, reverse = args.reverse, "locating interval");

    let ranges = if args.reverse {
        map.locate_in_from(start, end)
    } else {
        map.locate_in_to(start, end)
    };

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    write_ranges(&mut writer, ranges.as_deref().unwrap_or_default())?;
    writer.flush()?;

    info!(
        range_count = ranges.as_ref().map_or(0, |ranges| ranges.len()),
        "located interval"
    );

    Ok(())
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid map")]
    InvalidMap(#[from] MapListError),
}

pub(super) fn write_ranges<W>(writer: &mut W, ranges: &[Range]) -> io::Result<()>
where
    W: Write,
{
    for range in ranges {
        writeln!(writer, "{}{SEPARATOR}{}", range.start, range.end)?;
    }

    Ok(())
}
