use std::io::{self, BufWriter, Write};

use strandmap_core::MapList;
use tracing::info;

use super::locate::write_ranges;
use crate::cli::overlaps;

pub fn overlaps(args: overlaps::Args) -> anyhow::Result<()> {
    let map = MapList::try_from(args.map)?;

    let (begin, end) = (args.begin, args.end);

    info!(begin, end, reverse = args.reverse, "finding overlaps");

    let ranges = if args.reverse {
        map.overlaps_in_from(begin, end)
    } else {
        map.overlaps_in_to(begin, end)
    };

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    write_ranges(&mut writer, ranges.as_deref().unwrap_or_default())?;
    writer.flush()?;

    info!(
        range_count = ranges.as_ref().map_or(0, |ranges| ranges.len()),
        "found overlaps"
    );

    Ok(())
}
