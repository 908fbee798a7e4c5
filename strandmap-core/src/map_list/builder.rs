use tracing::warn;

use super::{MapList, MapListError};
use crate::{Range, range_list};

/// A map list builder.
///
/// Ranges are accumulated in the order they are added. A range that continues
/// the last range on its side extends it instead of being appended.
#[derive(Debug, Default)]
pub struct Builder {
    from_ranges: Vec<Range>,
    to_ranges: Vec<Range>,
    ratio: Option<(u32, u32)>,
}

impl Builder {
    /// Sets the number of from positions that correspond to `to_ratio` to
    /// positions.
    pub fn set_ratio(mut self, from_ratio: u32, to_ratio: u32) -> Self {
        self.ratio = Some((from_ratio, to_ratio));
        self
    }

    pub fn add_from_range(mut self, range: Range) -> Self {
        range_list::add_range(&mut self.from_ranges, range);
        self
    }

    pub fn add_to_range(mut self, range: Range) -> Self {
        range_list::add_range(&mut self.to_ranges, range);
        self
    }

    /// Adds all the ranges of the given map.
    ///
    /// If no ratio is set, the ratio of `map` is used.
    pub fn extend(mut self, map: &MapList) -> Self {
        let ratio = (map.from_ratio(), map.to_ratio());

        match self.ratio {
            None => self.ratio = Some(ratio),
            Some(actual) if actual != ratio => {
                warn!(
                    expected = ?actual,
                    actual = ?ratio,
                    "adding ranges from a map with a different ratio"
                );
            }
            Some(_) => {}
        }

        for &range in map.from_ranges() {
            range_list::add_range(&mut self.from_ranges, range);
        }

        for &range in map.to_ranges() {
            range_list::add_range(&mut self.to_ranges, range);
        }

        self
    }

    /// Builds a map list.
    ///
    /// # Examples
    ///
    /// ```
    /// use strandmap_core::{MapList, Range};
    ///
    /// let map = MapList::builder()
    ///     .set_ratio(3, 1)
    ///     .add_from_range(Range::new(1, 6))
    ///     .add_from_range(Range::new(7, 9))
    ///     .add_to_range(Range::new(1, 3))
    ///     .build()?;
    ///
    /// assert_eq!(map.from_ranges(), [Range::new(1, 9)]);
    /// # Ok::<_, strandmap_core::map_list::MapListError>(())
    /// ```
    pub fn build(self) -> Result<MapList, MapListError> {
        let (from_ratio, to_ratio) = self.ratio.ok_or(MapListError::MissingRatio)?;
        MapList::validate_ratio(from_ratio, to_ratio)?;

        Ok(MapList::from_raw_parts(
            self.from_ranges,
            self.to_ranges,
            from_ratio,
            to_ratio,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() -> Result<(), Box<dyn std::error::Error>> {
        let map = Builder::default()
            .set_ratio(1, 3)
            .add_from_range(Range::new(11, 15))
            .add_from_range(Range::new(15, 16))
            .add_to_range(Range::new(72, 58))
            .add_to_range(Range::new(58, 53))
            .build()?;

        assert_eq!(map.from_ranges(), [Range::new(11, 16)]);
        assert_eq!(map.to_ranges(), [Range::new(72, 53)]);
        assert_eq!(map.from_lowest(), Some(11));
        assert_eq!(map.to_highest(), Some(72));

        Ok(())
    }

    #[test]
    fn test_build_with_invalid_ratio() {
        assert_eq!(
            Builder::default().build(),
            Err(MapListError::MissingRatio)
        );

        assert_eq!(
            Builder::default().set_ratio(0, 1).build(),
            Err(MapListError::InvalidRatio(0, 1))
        );
    }

    #[test]
    fn test_extend() -> Result<(), Box<dyn std::error::Error>> {
        let a = MapList::from_flat(&[11, 15, 20, 25, 35, 30], &[72, 22], 1, 3)?;
        let b = MapList::from_flat(&[2, 4, 37, 40], &[12, 17, 78, 83, 88, 96], 1, 3)?;

        let map = Builder::default().extend(&a).extend(&b).build()?;

        assert_eq!((map.from_ratio(), map.to_ratio()), (1, 3));
        assert_eq!(
            map.to_string(),
            "[11-15, 20-25, 35-30, 2-4, 37-40] 1:3 to [72-22, 12-17, 78-83, 88-96]"
        );

        Ok(())
    }
}
