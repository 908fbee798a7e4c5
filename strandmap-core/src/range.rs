mod direction;

use std::{fmt, num, str::FromStr};

use thiserror::Error;

pub use self::direction::Direction;

/// An inclusive run of 1-based positions.
///
/// `start < end` is a forward run and `start > end` is a reverse run. A single
/// position (`start == end`) has no direction of its own.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Returns the number of positions in the range.
    pub fn len(&self) -> u64 {
        self.start.abs_diff(self.end).saturating_add(1)
    }

    /// Returns the direction of the range, or `None` for a single position.
    pub fn direction(&self) -> Option<Direction> {
        use std::cmp::Ordering;

        match self.start.cmp(&self.end) {
            Ordering::Less => Some(Direction::Forward),
            Ordering::Equal => None,
            Ordering::Greater => Some(Direction::Reverse),
        }
    }

    /// Returns the direction used to walk the range. Single positions step
    /// forward.
    pub fn step(&self) -> Direction {
        if self.is_forward() {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    pub fn is_forward(&self) -> bool {
        self.end >= self.start
    }

    pub fn min(&self) -> i64 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> i64 {
        self.start.max(self.end)
    }

    pub fn contains(&self, position: i64) -> bool {
        (self.min()..=self.max()).contains(&position)
    }

    /// Returns whether both endpoints of `other` lie within this range. Either
    /// range may be reversed.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Returns the 0-based offset of `position` from the start of the range,
    /// counted in the direction of the range.
    ///
    /// The position is expected to be contained in the range.
    pub fn offset_of(&self, position: i64) -> u64 {
        self.start.abs_diff(position)
    }

    /// Returns the position at the 0-based `offset` from the start of the
    /// range, counted in the direction of the range.
    ///
    /// The offset is expected to be less than the length of the range.
    pub fn position_at(&self, offset: u64) -> i64 {
        // The result lies between `start` and `end`, so it never wraps.
        match self.step() {
            Direction::Forward => self.start.wrapping_add_unsigned(offset),
            Direction::Reverse => self.start.wrapping_sub_unsigned(offset),
        }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// An error returned when a range fails to parse.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseRangeError {
    #[error("empty input")]
    Empty,
    #[error("missing delimiter")]
    MissingDelimiter,
    #[error("invalid start")]
    InvalidStart(#[source] num::ParseIntError),
    #[error("invalid end")]
    InvalidEnd(#[source] num::ParseIntError),
}

impl FromStr for Range {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const DELIMITER: u8 = b'-';

        if s.is_empty() {
            return Err(ParseRangeError::Empty);
        }

        // The first byte may be the sign of a negative start.
        let i = s
            .bytes()
            .skip(1)
            .position(|b| b == DELIMITER)
            .map(|i| i + 1)
            .ok_or(ParseRangeError::MissingDelimiter)?;

        let (raw_start, raw_end) = (&s[..i], &s[i + 1..]);

        let start = raw_start.parse().map_err(ParseRangeError::InvalidStart)?;
        let end = raw_end.parse().map_err(ParseRangeError::InvalidEnd)?;

        Ok(Self::new(start, end))
    }
}
