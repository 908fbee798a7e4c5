use crate::{
    Direction, Range,
    range_list::{count_positions, traverse_to_position},
};

/// A position translated to the other side of a mapping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Shift {
    /// The first position of the corresponding word on the target side.
    pub position: i64,
    /// The 0-based phase of the source position within its source word.
    pub remainder: u32,
    /// The direction of the target range containing `position`.
    pub direction: Direction,
}

impl Shift {
    pub fn new(position: i64, remainder: u32, direction: Direction) -> Self {
        Self {
            position,
            remainder,
            direction,
        }
    }
}

/// Translates a position in the source ranges to the target ranges.
///
/// The ordinal of `position` among all source positions is grouped into words
/// of `source_ratio` positions; the result is the first position of the
/// matching word of `target_ratio` positions on the target side. A position
/// in the middle of a source word therefore maps to the start of the target
/// word, and its phase is kept in [`Shift::remainder`].
///
/// Returns `None` if `position` is not covered by the source ranges, the
/// target ranges are too short, or either ratio is 0.
pub fn shift(
    position: i64,
    source_ranges: &[Range],
    source_ratio: u32,
    target_ranges: &[Range],
    target_ratio: u32,
) -> Option<Shift> {
    let (count, _) = count_positions(source_ranges, position)?;

    let source_ratio = u64::from(source_ratio);
    let target_ratio = u64::from(target_ratio);

    if target_ratio == 0 {
        return None;
    }

    // SAFETY: `count` is 1-based.
    let i = count - 1;

    let remainder = i.checked_rem(source_ratio)?;
    let word_index = i
        .checked_div(source_ratio)?
        .checked_mul(target_ratio)?
        .checked_add(1)?;

    let (target_position, direction) = traverse_to_position(target_ranges, word_index)?;

    // `remainder < source_ratio <= u32::MAX`
    let remainder = u32::try_from(remainder).ok()?;

    Some(Shift::new(target_position, remainder, direction))
}
