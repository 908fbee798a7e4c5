use std::io::{self, Write};

use anyhow::Context;
use strandmap_core::MapList;
use tracing::info;

use crate::cli::traverse;

pub fn traverse(args: traverse::Args) -> anyhow::Result<()> {
    let first = MapList::try_from(args.map)?;
    let second = MapList::new(
        args.then_from,
        args.then_to,
        args.then_ratio.from,
        args.then_ratio.to,
    )?;

    info!(first = %first, second = %second, "traversing maps");

    let map = first
        .traverse(&second)
        .context("mappings cannot be traversed")?;

    let mut stdout = io::stdout().lock();
    write_map(&mut stdout, &map)?;

    info!(
        from_ratio = map.from_ratio(),
        to_ratio = map.to_ratio(),
        "traversed maps"
    );

    Ok(())
}

fn write_map<W>(writer: &mut W, map: &MapList) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "{map}")
}
