//! Mappings between two segmented coordinate spaces.

mod builder;
pub mod offsets;
pub mod shift;
mod traverse;

use std::fmt;

use thiserror::Error;
use tracing::warn;

pub use self::{builder::Builder, shift::Shift};
use crate::{Range, range_list};

/// An error returned when a map list fails to build.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MapListError {
    /// A ratio component is 0.
    #[error("invalid ratio: {0}:{1}")]
    InvalidRatio(u32, u32),
    /// The ratio is not set.
    #[error("missing ratio")]
    MissingRatio,
}

/// A mapping between positions in "from" ranges and "to" ranges.
///
/// Every `from_ratio` consecutive from positions (in traversal order)
/// correspond to `to_ratio` consecutive to positions, e.g., 3:1 for codons to
/// residues.
///
/// Two map lists are equal when they have the same ratio and the same ranges
/// in the same order. Lists that cover the same positions in a different
/// order are not equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MapList {
    from_ranges: Vec<Range>,
    to_ranges: Vec<Range>,
    from_ratio: u32,
    to_ratio: u32,
    from_bounds: Option<(i64, i64)>,
    to_bounds: Option<(i64, i64)>,
}

impl MapList {
    /// Creates a map list.
    ///
    /// Contiguous ranges that continue in the same direction are merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use strandmap_core::{MapList, Range};
    ///
    /// let map = MapList::new(
    ///     vec![Range::new(1, 20), Range::new(21, 35)],
    ///     vec![Range::new(1, 5)],
    ///     3,
    ///     1,
    /// )?;
    ///
    /// assert_eq!(map.from_ranges(), [Range::new(1, 35)]);
    /// # Ok::<_, strandmap_core::map_list::MapListError>(())
    /// ```
    pub fn new(
        from_ranges: Vec<Range>,
        to_ranges: Vec<Range>,
        from_ratio: u32,
        to_ratio: u32,
    ) -> Result<Self, MapListError> {
        Self::validate_ratio(from_ratio, to_ratio)?;

        Ok(Self::from_raw_parts(
            range_list::coalesce(&from_ranges).into_owned(),
            range_list::coalesce(&to_ranges).into_owned(),
            from_ratio,
            to_ratio,
        ))
    }

    /// Creates a map list from flat `[start1, end1, start2, end2, ...]`
    /// positions.
    ///
    /// The ranges are kept as given. An unpaired trailing value is logged and
    /// ignored.
    pub fn from_flat(
        from: &[i64],
        to: &[i64],
        from_ratio: u32,
        to_ratio: u32,
    ) -> Result<Self, MapListError> {
        Self::validate_ratio(from_ratio, to_ratio)?;

        Ok(Self::from_raw_parts(
            range_list::pair_up(from),
            range_list::pair_up(to),
            from_ratio,
            to_ratio,
        ))
    }

    /// Returns a builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    fn validate_ratio(from_ratio: u32, to_ratio: u32) -> Result<(), MapListError> {
        if from_ratio == 0 || to_ratio == 0 {
            Err(MapListError::InvalidRatio(from_ratio, to_ratio))
        } else {
            Ok(())
        }
    }

    fn from_raw_parts(
        from_ranges: Vec<Range>,
        to_ranges: Vec<Range>,
        from_ratio: u32,
        to_ratio: u32,
    ) -> Self {
        let from_bounds = range_list::bounds(&from_ranges);
        let to_bounds = range_list::bounds(&to_ranges);

        Self {
            from_ranges,
            to_ranges,
            from_ratio,
            to_ratio,
            from_bounds,
            to_bounds,
        }
    }

    pub fn from_ranges(&self) -> &[Range] {
        &self.from_ranges
    }

    pub fn to_ranges(&self) -> &[Range] {
        &self.to_ranges
    }

    pub fn from_ratio(&self) -> u32 {
        self.from_ratio
    }

    pub fn to_ratio(&self) -> u32 {
        self.to_ratio
    }

    /// Returns the lowest from position, or `None` if there are no from
    /// ranges.
    pub fn from_lowest(&self) -> Option<i64> {
        self.from_bounds.map(|(lowest, _)| lowest)
    }

    pub fn from_highest(&self) -> Option<i64> {
        self.from_bounds.map(|(_, highest)| highest)
    }

    pub fn to_lowest(&self) -> Option<i64> {
        self.to_bounds.map(|(lowest, _)| lowest)
    }

    pub fn to_highest(&self) -> Option<i64> {
        self.to_bounds.map(|(_, highest)| highest)
    }

    /// Translates a from position to the first position of its word in the to
    /// ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use strandmap_core::{Direction, MapList, Range, Shift};
    ///
    /// let map = MapList::new(vec![Range::new(1, 300)], vec![Range::new(1, 100)], 3, 1)?;
    ///
    /// assert_eq!(map.shift_from(3), Some(Shift::new(1, 2, Direction::Forward)));
    /// assert_eq!(map.shift_from(4), Some(Shift::new(2, 0, Direction::Forward)));
    /// assert_eq!(map.shift_from(301), None);
    /// # Ok::<_, strandmap_core::map_list::MapListError>(())
    /// ```
    pub fn shift_from(&self, position: i64) -> Option<Shift> {
        shift::shift(
            position,
            &self.from_ranges,
            self.from_ratio,
            &self.to_ranges,
            self.to_ratio,
        )
    }

    /// Translates a to position to the first position of its word in the from
    /// ranges.
    pub fn shift_to(&self, position: i64) -> Option<Shift> {
        shift::shift(
            position,
            &self.to_ranges,
            self.to_ratio,
            &self.from_ranges,
            self.from_ratio,
        )
    }

    /// Returns the from ranges that map to any position in `start..=end` of
    /// the to ranges.
    ///
    /// Partially covered words are expanded to whole words. Runs in reverse
    /// ranges are reversed.
    pub fn locate_in_from(&self, start: i64, end: i64) -> Option<Vec<Range>> {
        offsets::map_positions(
            start,
            end,
            &self.to_ranges,
            &self.from_ranges,
            self.to_ratio,
            self.from_ratio,
        )
    }

    /// Returns the to ranges that map to any position in `start..=end` of the
    /// from ranges.
    pub fn locate_in_to(&self, start: i64, end: i64) -> Option<Vec<Range>> {
        offsets::map_positions(
            start,
            end,
            &self.from_ranges,
            &self.to_ranges,
            self.from_ratio,
            self.to_ratio,
        )
    }

    /// Returns the from ranges mapped to by the part of `begin..=end` that is
    /// covered by the to ranges.
    pub fn overlaps_in_from(&self, begin: i64, end: i64) -> Option<Vec<Range>> {
        let overlap = range_list::find_overlap(&self.to_ranges, begin, end)?;
        self.locate_in_from(overlap.start, overlap.end)
    }

    /// Returns the to ranges mapped to by the part of `begin..=end` that is
    /// covered by the from ranges.
    pub fn overlaps_in_to(&self, begin: i64, end: i64) -> Option<Vec<Range>> {
        let overlap = range_list::find_overlap(&self.from_ranges, begin, end)?;
        self.locate_in_to(overlap.start, overlap.end)
    }

    /// Returns whether both sides are a single range.
    pub fn is_contiguous(&self) -> bool {
        self.from_ranges.len() == 1 && self.to_ranges.len() == 1
    }

    pub fn is_from_forward_strand(&self) -> bool {
        range_list::is_forward_strand(&self.from_ranges)
    }

    pub fn is_to_forward_strand(&self) -> bool {
        range_list::is_forward_strand(&self.to_ranges)
    }

    /// Returns whether the ratio is 3:1 or 1:3.
    pub fn is_triplet_map(&self) -> bool {
        matches!((self.from_ratio, self.to_ratio), (3, 1) | (1, 3))
    }

    /// Returns a map list with the from and to sides swapped.
    pub fn inverse(&self) -> Self {
        Self {
            from_ranges: self.to_ranges.clone(),
            to_ranges: self.from_ranges.clone(),
            from_ratio: self.to_ratio,
            to_ratio: self.from_ratio,
            from_bounds: self.to_bounds,
            to_bounds: self.from_bounds,
        }
    }

    /// Adds the ranges of `other` to the end of each side.
    ///
    /// A range that continues the last range on its side extends it. Nothing
    /// is added if `other` is equal to this map.
    pub fn extend(&mut self, other: &MapList) {
        if self == other {
            return;
        }

        if (self.from_ratio, self.to_ratio) != (other.from_ratio, other.to_ratio) {
            warn!(
                expected = %format_args!("{}:{}", self.from_ratio, self.to_ratio),
                actual = %format_args!("{}:{}", other.from_ratio, other.to_ratio),
                "extending map list with a different ratio"
            );
        }

        self.from_bounds = merge_bounds(self.from_bounds, other.from_bounds);
        self.to_bounds = merge_bounds(self.to_bounds, other.to_bounds);

        for &range in &other.from_ranges {
            range_list::add_range(&mut self.from_ranges, range);
        }

        for &range in &other.to_ranges {
            range_list::add_range(&mut self.to_ranges, range);
        }
    }
}

fn merge_bounds(a: Option<(i64, i64)>, b: Option<(i64, i64)>) -> Option<(i64, i64)> {
    match (a, b) {
        (Some((a_lowest, a_highest)), Some((b_lowest, b_highest))) => {
            Some((a_lowest.min(b_lowest), a_highest.max(b_highest)))
        }
        (a, None) => a,
        (None, b) => b,
    }
}

impl fmt::Display for MapList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_ranges(f: &mut fmt::Formatter<'_>, ranges: &[Range]) -> fmt::Result {
            f.write_str("[")?;

            for (i, range) in ranges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                write!(f, "{range}")?;
            }

            f.write_str("]")
        }

        write_ranges(f, &self.from_ranges)?;
        write!(f, " {}:{} to ", self.from_ratio, self.to_ratio)?;
        write_ranges(f, &self.to_ranges)
    }
}
