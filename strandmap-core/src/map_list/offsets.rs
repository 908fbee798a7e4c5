//! Interval translation through concatenated offsets.
//!
//! Translating an interval is done in two passes. The source ranges are
//! walked to mark, in a bit set, the target offsets of every word the interval
//! touches. The target ranges are then walked to convert each run of marked
//! offsets back to absolute positions.

use bitvec::{slice::BitSlice, vec::BitVec};

use crate::{Range, range_list};

/// Returns the ranges in `target_ranges` that correspond to any position in
/// `start..=end` of `source_ranges`.
///
/// `start` and `end` may be given in either order. Source words that are only
/// partially overlapped are mapped as whole words. Ranges are returned in
/// target traversal order; a run in a reverse target range is returned
/// reversed (`end < start`).
///
/// Returns `None` if nothing maps.
pub fn map_positions(
    start: i64,
    end: i64,
    source_ranges: &[Range],
    target_ranges: &[Range],
    source_word_length: u32,
    target_word_length: u32,
) -> Option<Vec<Range>> {
    let (start, end) = if end < start {
        (end, start)
    } else {
        (start, end)
    };

    let target_length = usize::try_from(range_list::length(target_ranges)).unwrap_or(usize::MAX);

    let offsets = mapped_offsets_for_positions(
        start,
        end,
        source_ranges,
        source_word_length,
        target_word_length,
        target_length,
    );

    let mapped = positions_for_offsets(target_ranges, &offsets);

    if mapped.is_empty() {
        None
    } else {
        Some(mapped)
    }
}

/// Marks the target offsets of the source positions that lie in
/// `start..=end`.
///
/// Source offsets are counted from the start of `source_ranges` (in traversal
/// order) and converted to target offsets in whole words: a source word of
/// `source_word_length` positions covers a target word of
/// `target_word_length` offsets, so a partial overlap marks the entire target
/// word.
///
/// The returned set has `target_length` bits; offsets at or beyond it cannot
/// be reached on the target side and are not marked.
///
/// ```text
/// 1:1, ranges {10-20, 31-40}
///   1..=9   -> {}
///   1..=11  -> {0, 1}
///   15..=35 -> {5..=15}
/// 1:3, ranges {1-200}
///   9..=9   -> {24, 25, 26}
/// 3:1, ranges {101-150, 171-180}
///   101..=102 -> {0}
///   150..=171 -> {16}
/// ```
pub fn mapped_offsets_for_positions(
    start: i64,
    end: i64,
    source_ranges: &[Range],
    source_word_length: u32,
    target_word_length: u32,
    target_length: usize,
) -> BitVec {
    let mut offsets = BitVec::repeat(false, target_length);

    if source_word_length == 0 || target_word_length == 0 {
        return offsets;
    }

    let source_word_length = u64::from(source_word_length);
    let target_word_length = u64::from(target_word_length);

    let mut base: u64 = 0;

    for range in source_ranges {
        let (lo, hi) = (range.min(), range.max());

        if start <= hi && end >= lo {
            let a = range.offset_of(start.max(lo));
            let b = range.offset_of(end.min(hi));

            let mut first = base.saturating_add(a.min(b));
            let mut last = base.saturating_add(a.max(b));

            if source_word_length != target_word_length {
                first = (first / source_word_length).saturating_mul(target_word_length);
                last = (last / source_word_length)
                    .saturating_mul(target_word_length)
                    .saturating_add(target_word_length - 1);
            }

            mark(&mut offsets, first, last);
        }

        base = base.saturating_add(range.len());
    }

    offsets
}

fn mark(offsets: &mut BitSlice, first: u64, last: u64) {
    let len = offsets.len();

    let Some(first) = usize::try_from(first).ok().filter(|&i| i < len) else {
        return;
    };

    let last = usize::try_from(last).map_or(len - 1, |i| i.min(len - 1));

    offsets[first..=last].fill(true);
}

/// Collects the runs of positions in `target_ranges` at the marked offsets.
///
/// Offsets are counted from the start of `target_ranges` in traversal order.
/// Each maximal run of marked offsets within a single range becomes one
/// range, oriented like the range it lies in.
pub fn positions_for_offsets(target_ranges: &[Range], offsets: &BitSlice) -> Vec<Range> {
    let mut mapped = Vec::new();
    let mut remaining = offsets.count_ones();
    let mut base: usize = 0;

    for range in target_ranges {
        if remaining == 0 || base >= offsets.len() {
            break;
        }

        let len = usize::try_from(range.len()).unwrap_or(usize::MAX);
        let end = base.saturating_add(len).min(offsets.len());
        let window = &offsets[base..end];

        let mut i = 0;

        while let Some(n) = window[i..].first_one() {
            let first = i + n;
            let last = window[first..]
                .first_zero()
                .map_or(window.len(), |n| first + n)
                - 1;

            let start_position = range.position_at(first as u64);
            let end_position = range.position_at(last as u64);
            mapped.push(Range::new(start_position, end_position));

            remaining = remaining.saturating_sub(last - first + 1);
            i = last + 1;

            if i >= window.len() {
                break;
            }
        }

        base = end;
    }

    mapped
}
