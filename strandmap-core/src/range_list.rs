//! Operations on ordered lists of ranges.
//!
//! A range list describes one side of a mapping. Its traversal order defines
//! the concatenated offset of every position it covers: the first position of
//! the first range has offset 0, and each range continues where the previous
//! one ended, regardless of the gaps between them in absolute coordinates.

use std::borrow::Cow;

use tracing::error;

use crate::{Direction, Range};

/// Merges contiguous ranges that continue in the same direction.
///
/// A range is merged into its predecessor when it starts one position past
/// the end of the predecessor, in the predecessor's direction. A single
/// position merges into a directed range without changing that direction.
/// The input is not sorted, and overlapping ranges are kept as they are.
///
/// This returns the input unchanged (borrowed) if nothing was merged.
pub fn coalesce(ranges: &[Range]) -> Cow<'_, [Range]> {
    let Some((first, rest)) = ranges.split_first() else {
        return Cow::Borrowed(ranges);
    };

    let mut merged = Vec::with_capacity(ranges.len());
    let mut changed = false;

    let mut last = *first;
    let mut last_direction = first.step();

    for range in rest {
        let is_same_direction = range.direction().is_none_or(|d| d == last_direction);
        let is_extending = last.end.checked_add(last_direction.signum()) == Some(range.start);

        if is_same_direction && is_extending {
            last.end = range.end;
            changed = true;
        } else {
            merged.push(last);
            last = *range;

            if let Some(direction) = range.direction() {
                last_direction = direction;
            }
        }
    }

    merged.push(last);

    if changed {
        Cow::Owned(merged)
    } else {
        Cow::Borrowed(ranges)
    }
}

/// Appends a range, extending the last range instead if the new one continues
/// it.
///
/// The last range is extended when both ranges run in the same direction
/// (single positions count as forward) and the new range starts either at the
/// last end position or at the position following it.
pub fn add_range(ranges: &mut Vec<Range>, range: Range) {
    if let Some(last) = ranges.last_mut() {
        let step = last.step();

        if step == range.step()
            && (range.start == last.end || last.end.checked_add(step.signum()) == Some(range.start))
        {
            last.end = range.end;
            return;
        }
    }

    ranges.push(range);
}

/// Counts how many positions are traversed (inclusive) to reach `position`.
///
/// This also returns the direction of the range `position` was found in. The
/// first range that contains the position wins.
///
/// Returns `None` if no range contains `position`.
pub fn count_positions(ranges: &[Range], position: i64) -> Option<(u64, Direction)> {
    let mut count: u64 = 0;

    for range in ranges {
        if range.contains(position) {
            let n = count.saturating_add(range.offset_of(position)).saturating_add(1);
            return Some((n, range.step()));
        }

        count = count.saturating_add(range.len());
    }

    None
}

/// Walks the ranges until `count` positions have been traversed.
///
/// This returns the position at the `count`th slot (1-based) and the
/// direction of the range it lies in.
///
/// Returns `None` if `count` is 0 or the ranges cover fewer than `count`
/// positions.
pub fn traverse_to_position(ranges: &[Range], count: u64) -> Option<(i64, Direction)> {
    if count == 0 {
        return None;
    }

    let mut traversed: u64 = 0;

    for range in ranges {
        let len = range.len();

        if count - traversed <= len {
            let position = range.position_at(count - traversed - 1);
            return Some((position, range.step()));
        }

        traversed = traversed.saturating_add(len);
    }

    None
}

/// Finds the maximal span of the ranges overlapped by `begin..=end`.
///
/// The ranges are expected to be forward and in ascending order. The result
/// starts at the first covered position at or after `begin` and ends at the
/// last covered position at or before `end`.
///
/// Returns `None` if no range overlaps.
pub fn find_overlap(ranges: &[Range], begin: i64, end: i64) -> Option<Range> {
    let mut from = None;
    let mut to = None;

    for range in ranges {
        if from.is_none() {
            if range.start >= begin {
                from = Some(range.start);
            } else if range.end >= begin {
                from = Some(begin);
            }
        }

        if range.start <= end {
            to = Some(end.min(range.end));
        }
    }

    match (from, to) {
        (Some(from), Some(to)) if to >= from => Some(Range::new(from, to)),
        _ => None,
    }
}

/// Returns the total number of positions covered.
pub fn length(ranges: &[Range]) -> u64 {
    ranges
        .iter()
        .fold(0, |sum: u64, range| sum.saturating_add(range.len()))
}

pub fn contains(ranges: &[Range], position: i64) -> bool {
    ranges.iter().any(|range| range.contains(position))
}

/// Returns whether the ranges run forward.
///
/// This is decided by the first range that is not a single position. If all
/// ranges are single positions, the ranges are considered forward.
pub fn is_forward_strand(ranges: &[Range]) -> bool {
    ranges
        .iter()
        .find_map(Range::direction)
        .is_none_or(Direction::is_forward)
}

/// Returns the lowest and highest endpoints across all ranges.
pub fn bounds(ranges: &[Range]) -> Option<(i64, i64)> {
    ranges.iter().fold(None, |acc, range| match acc {
        Some((lowest, highest)) => Some((
            i64::min(lowest, range.min()),
            i64::max(highest, range.max()),
        )),
        None => Some((range.min(), range.max())),
    })
}

/// Returns an iterator over every position in traversal order.
pub fn positions(ranges: &[Range]) -> impl Iterator<Item = i64> {
    ranges
        .iter()
        .flat_map(|range| (0..range.len()).map(move |offset| range.position_at(offset)))
}

/// Converts ranges to `[start1, end1, start2, end2, ...]`.
pub fn flatten(ranges: &[Range]) -> Vec<i64> {
    ranges
        .iter()
        .flat_map(|range| [range.start, range.end])
        .collect()
}

/// Converts `[start1, end1, start2, end2, ...]` to ranges.
///
/// An unpaired trailing value is logged and ignored.
pub fn pair_up(values: &[i64]) -> Vec<Range> {
    let pairs = values.chunks_exact(2);

    if let [value] = pairs.remainder() {
        error!(
            len = values.len(),
            value, "unbalanced start/end positions; ignoring trailing value"
        );
    }

    pairs.map(|pair| Range::new(pair[0], pair[1])).collect()
}

/// Returns a copy of the ranges with the first `n` positions removed.
///
/// Leading ranges are dropped entirely or have their start advanced (in their
/// own direction) until `n` positions are gone. If the ranges cover `n` or
/// fewer positions, the result is empty.
pub fn remove_start_positions(n: u64, ranges: &[Range]) -> Vec<Range> {
    let mut remaining = n;

    for (i, range) in ranges.iter().enumerate() {
        let len = range.len();

        if remaining < len {
            let mut adjusted = Vec::with_capacity(ranges.len() - i);
            adjusted.push(Range::new(range.position_at(remaining), range.end));
            adjusted.extend_from_slice(&ranges[i + 1..]);
            return adjusted;
        }

        remaining -= len;
    }

    Vec::new()
}

/// Removes the last `n` positions from the ranges in place.
///
/// Only forward ranges are trimmed. Reaching a reverse range logs an error and
/// stops, leaving the remaining positions in place.
pub fn remove_end_positions(n: u64, ranges: &mut Vec<Range>) {
    let mut remaining = n;

    while remaining > 0 {
        let Some(last) = ranges.last_mut() else {
            break;
        };

        if last.direction() == Some(Direction::Reverse) {
            error!(range = %last, remaining, "cannot remove end positions from a reverse range");
            return;
        }

        let len = last.len();

        if len > remaining {
            last.end = last.end.wrapping_sub_unsigned(remaining);
            remaining = 0;
        } else {
            remaining -= len;
            ranges.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(pairs: &[(i64, i64)]) -> Vec<Range> {
        pairs
            .iter()
            .map(|&(start, end)| Range::new(start, end))
            .collect()
    }

    #[test]
    fn test_coalesce() {
        fn t(input: &[(i64, i64)], expected: &[(i64, i64)]) {
            let input = ranges(input);
            assert_eq!(coalesce(&input).as_ref(), ranges(expected));
        }

        t(
            &[(1, 10), (11, 20), (25, 30)],
            &[(1, 20), (25, 30)],
        );

        // forward, with an overlapping single position
        t(
            &[(1, 3), (4, 5), (5, 5), (6, 7)],
            &[(1, 5), (5, 7)],
        );

        // reverse
        t(
            &[(7, 5), (5, 4), (4, 4), (3, 1)],
            &[(7, 5), (5, 4), (4, 1)],
        );

        // direction switches; a single position keeps the reverse direction
        t(
            &[
                (1, 3),
                (4, 5),
                (5, 5),
                (6, 6),
                (12, 10),
                (9, 8),
                (8, 8),
                (7, 7),
            ],
            &[(1, 5), (5, 6), (12, 8), (8, 7)],
        );

        // subsumed ranges are kept
        t(&[(10, 30), (15, 25)], &[(10, 30), (15, 25)]);
    }

    #[test]
    fn test_coalesce_without_changes_borrows_input() {
        let mut input = Vec::new();
        assert!(matches!(coalesce(&input), Cow::Borrowed(_)));

        input.push(Range::new(1, 3));
        assert!(matches!(coalesce(&input), Cow::Borrowed(_)));

        // not contiguous
        input.push(Range::new(5, 6));
        assert!(matches!(coalesce(&input), Cow::Borrowed(_)));

        // contiguous but in the opposite direction
        input.push(Range::new(7, 6));
        assert!(matches!(coalesce(&input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_add_range() {
        let mut actual = Vec::new();

        add_range(&mut actual, Range::new(1, 5));
        assert_eq!(actual, ranges(&[(1, 5)]));

        // same position
        add_range(&mut actual, Range::new(5, 10));
        assert_eq!(actual, ranges(&[(1, 10)]));

        // next position
        add_range(&mut actual, Range::new(11, 15));
        assert_eq!(actual, ranges(&[(1, 15)]));

        // change of direction
        add_range(&mut actual, Range::new(16, 10));
        assert_eq!(actual, ranges(&[(1, 15), (16, 10)]));

        // reverse, same position
        add_range(&mut actual, Range::new(10, 8));
        assert_eq!(actual, ranges(&[(1, 15), (16, 8)]));

        // reverse, next position
        add_range(&mut actual, Range::new(7, 6));
        assert_eq!(actual, ranges(&[(1, 15), (16, 6)]));

        // change of direction
        add_range(&mut actual, Range::new(6, 9));
        assert_eq!(actual, ranges(&[(1, 15), (16, 6), (6, 9)]));

        // not contiguous
        add_range(&mut actual, Range::new(11, 12));
        assert_eq!(actual, ranges(&[(1, 15), (16, 6), (6, 9), (11, 12)]));
    }

    #[test]
    fn test_count_positions() {
        use Direction::{Forward, Reverse};

        let mut intervals = Vec::new();
        assert_eq!(count_positions(&intervals, 1), None);

        intervals.push(Range::new(10, 20));
        assert_eq!(count_positions(&intervals, 9), None);
        assert_eq!(count_positions(&intervals, 21), None);
        assert_eq!(count_positions(&intervals, 10), Some((1, Forward)));
        assert_eq!(count_positions(&intervals, 15), Some((6, Forward)));
        assert_eq!(count_positions(&intervals, 20), Some((11, Forward)));

        intervals.push(Range::new(25, 25));
        assert_eq!(count_positions(&intervals, 25), Some((12, Forward)));

        // a repeated position is found at its first occurrence
        intervals.push(Range::new(25, 26));
        assert_eq!(count_positions(&intervals, 25), Some((12, Forward)));
        assert_eq!(count_positions(&intervals, 26), Some((14, Forward)));

        let mut intervals = ranges(&[(5, -5)]);
        assert_eq!(count_positions(&intervals, 6), None);
        assert_eq!(count_positions(&intervals, -6), None);
        assert_eq!(count_positions(&intervals, 5), Some((1, Reverse)));
        assert_eq!(count_positions(&intervals, -1), Some((7, Reverse)));
        assert_eq!(count_positions(&intervals, -5), Some((11, Reverse)));

        intervals.push(Range::new(5, 10));
        assert_eq!(count_positions(&intervals, 6), Some((13, Forward)));

        intervals.push(Range::new(-10, -20));
        assert_eq!(count_positions(&intervals, -12), Some((20, Reverse)));

        // single positions are forward
        intervals.push(Range::new(30, 30));
        assert_eq!(count_positions(&intervals, 30), Some((29, Forward)));
    }

    #[test]
    fn test_traverse_to_position() {
        use Direction::{Forward, Reverse};

        assert_eq!(traverse_to_position(&[], 0), None);
        assert_eq!(traverse_to_position(&[], 1), None);

        let intervals = ranges(&[(3, 6), (20, 18), (30, 30)]);
        assert_eq!(traverse_to_position(&intervals, 0), None);
        assert_eq!(traverse_to_position(&intervals, 1), Some((3, Forward)));
        assert_eq!(traverse_to_position(&intervals, 4), Some((6, Forward)));
        assert_eq!(traverse_to_position(&intervals, 5), Some((20, Reverse)));
        assert_eq!(traverse_to_position(&intervals, 7), Some((18, Reverse)));
        assert_eq!(traverse_to_position(&intervals, 8), Some((30, Forward)));
        assert_eq!(traverse_to_position(&intervals, 9), None);
    }

    #[test]
    fn test_count_positions_inverts_traverse_to_position() {
        let intervals = ranges(&[(3, 6), (20, 18), (-2, 2)]);

        for count in 1..=length(&intervals) {
            let (position, direction) = traverse_to_position(&intervals, count).unwrap();
            assert_eq!(
                count_positions(&intervals, position),
                Some((count, direction))
            );
        }
    }

    #[test]
    fn test_find_overlap() {
        let intervals = ranges(&[(4, 8), (10, 12), (16, 19)]);

        assert_eq!(find_overlap(&intervals, 1, 20), Some(Range::new(4, 19)));
        assert_eq!(find_overlap(&intervals, 6, 11), Some(Range::new(6, 11)));
        assert_eq!(find_overlap(&intervals, 9, 15), Some(Range::new(10, 12)));
        assert_eq!(find_overlap(&intervals, 13, 15), None);
        assert_eq!(find_overlap(&intervals, 20, 25), None);
        assert_eq!(find_overlap(&intervals, 1, 3), None);
        assert_eq!(find_overlap(&[], 1, 3), None);
    }

    #[test]
    fn test_length() {
        assert_eq!(length(&[]), 0);
        assert_eq!(length(&ranges(&[(1, 4), (9, 7), (12, 12)])), 8);
    }

    #[test]
    fn test_contains() {
        let intervals = ranges(&[(1, 4), (9, 7)]);
        assert!(contains(&intervals, 1));
        assert!(contains(&intervals, 8));
        assert!(!contains(&intervals, 5));
        assert!(!contains(&[], 1));
    }

    #[test]
    fn test_is_forward_strand() {
        assert!(is_forward_strand(&ranges(&[(2, 2), (3, 9), (12, 11)])));
        assert!(!is_forward_strand(&ranges(&[(2, 2), (11, 5), (13, 14)])));
        assert!(is_forward_strand(&ranges(&[(2, 2), (4, 4), (6, 6)])));
        assert!(is_forward_strand(&[]));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(bounds(&[]), None);
        assert_eq!(bounds(&ranges(&[(9, 6)])), Some((6, 9)));
        assert_eq!(bounds(&ranges(&[(100, 91), (80, 79)])), Some((79, 100)));
    }

    #[test]
    fn test_positions() {
        fn t(input: &[(i64, i64)], expected: &[i64]) {
            let actual: Vec<_> = positions(&ranges(input)).collect();
            assert_eq!(actual, expected);
        }

        t(&[(1, 4)], &[1, 2, 3, 4]);
        t(&[(1, 1), (2, 2), (3, 3)], &[1, 2, 3]);
        t(&[(1, 4), (7, 9), (12, 12)], &[1, 2, 3, 4, 7, 8, 9, 12]);
        t(&[(12, 12), (9, 7), (4, 1)], &[12, 9, 8, 7, 4, 3, 2, 1]);
        t(&[(4, 6), (3, 1)], &[4, 5, 6, 3, 2, 1]);
        t(&[(3, 1), (4, 6)], &[3, 2, 1, 4, 5, 6]);
    }

    #[test]
    fn test_flatten_and_pair_up() {
        let intervals = ranges(&[(1, 4), (9, 7)]);
        assert_eq!(flatten(&intervals), [1, 4, 9, 7]);
        assert_eq!(pair_up(&[1, 4, 9, 7]), intervals);

        // trailing unpaired value
        assert_eq!(pair_up(&[1, 4, 9, 7, 15]), intervals);
        assert!(pair_up(&[]).is_empty());
    }

    #[test]
    fn test_remove_start_positions() {
        fn t(n: u64, input: &[(i64, i64)], expected: &[(i64, i64)]) {
            assert_eq!(remove_start_positions(n, &ranges(input)), ranges(expected));
        }

        t(0, &[(1, 10)], &[(1, 10)]);
        t(1, &[(1, 10)], &[(2, 10)]);
        t(1, &[(2, 3), (10, 12)], &[(3, 3), (10, 12)]);
        t(1, &[(2, 2), (8, 12)], &[(8, 12)]);
        t(2, &[(2, 2), (8, 12)], &[(9, 12)]);
        t(1, &[(2, 2), (4, 4), (9, 12)], &[(4, 4), (9, 12)]);
        t(2, &[(2, 2), (4, 4), (9, 12)], &[(9, 12)]);
        t(3, &[(2, 3), (9, 12)], &[(10, 12)]);

        // reverse
        t(0, &[(10, 1)], &[(10, 1)]);
        t(1, &[(10, 1)], &[(9, 1)]);
        t(3, &[(12, 11), (8, 1)], &[(7, 1)]);

        // everything removed
        t(6, &[(2, 3), (9, 12)], &[]);
        t(7, &[(2, 3), (9, 12)], &[]);
    }

    #[test]
    fn test_remove_end_positions() {
        fn t(n: u64, input: &[(i64, i64)], expected: &[(i64, i64)]) {
            let mut actual = ranges(input);
            remove_end_positions(n, &mut actual);
            assert_eq!(actual, ranges(expected));
        }

        t(0, &[(1, 10)], &[(1, 10)]);
        t(3, &[(1, 10)], &[(1, 7)]);
        t(3, &[(1, 10), (21, 23)], &[(1, 10)]);
        t(4, &[(1, 10), (21, 23)], &[(1, 9)]);
        t(2, &[(1, 10), (15, 15), (21, 21)], &[(1, 10)]);
        t(20, &[(1, 10)], &[]);

        // reverse ranges are left alone
        t(3, &[(10, 1)], &[(10, 1)]);
        t(2, &[(1, 5), (10, 8)], &[(1, 5), (10, 8)]);
    }
}
