use std::io::{self, BufWriter, Write};

use strandmap_core::{MapList, Shift, map_list::MapListError};
use thiserror::Error;
use tracing::info;

use crate::cli::shift;

const SEPARATOR: char = '\t';
const MISSING: char = '.';

pub fn shift(args: shift::Args) -> Result<(), ShiftError> {
    let map = MapList::try_from(args.map)?;

    info!(
        from_ratio = map.from_ratio(),
        to_ratio = map.to_ratio(),
        from_range_count = map.from_ranges().len(),
        to_range_count = map.to_ranges().len(),
        "built map"
    );

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    let mut mapped_count = 0;

    for &position in &args.positions {
        let shift = if args.reverse {
            map.shift_to(position)
        } else {
            map.shift_from(position)
        };

        if shift.is_some() {
            mapped_count += 1;
        }

        write_shift(&mut writer, position, shift)?;
    }

    writer.flush()?;

    info!(
        position_count = args.positions.len(),
        mapped_count, "shifted positions"
    );

    Ok(())
}

#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid map")]
    InvalidMap(#[from] MapListError),
}

fn write_shift<W>(writer: &mut W, position: i64, shift: Option<Shift>) -> io::Result<()>
where
    W: Write,
{
    match shift {
        Some(shift) => writeln!(
            writer,
            "{position}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            shift.position,
            shift.remainder,
            shift.direction.signum()
        ),
        None => writeln!(writer, "{position}{SEPARATOR}{MISSING}"),
    }
}

#[cfg(test)]
mod tests {
    use strandmap_core::Direction;

    use super::*;

    #[test]
    fn test_write_shift() -> io::Result<()> {
        let mut buf = Vec::new();

        write_shift(&mut buf, 4, Some(Shift::new(2, 0, Direction::Forward)))?;
        write_shift(&mut buf, 9, Some(Shift::new(7, 2, Direction::Reverse)))?;
        write_shift(&mut buf, 13, None)?;

        assert_eq!(buf, b"4\t2\t0\t1\n9\t7\t2\t-1\n13\t.\n");

        Ok(())
    }
}
