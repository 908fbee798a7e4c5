use tracing::debug;

use super::MapList;
use crate::range_list;

impl MapList {
    /// Composes this map (A to B) with `other` (B to C) into a map from A to C.
    ///
    /// The result keeps the from ranges of this map. Its to ranges are this
    /// map's to ranges as located in `other`, and its ratio is the product of
    /// both ratios, reduced.
    ///
    /// ```text
    /// self:   [1-50] 1:1 to [70-119]
    /// other:  [1-500] 1:1 to [1000-901, 600-201]
    /// result: [1-50] 1:1 to [931-901, 600-582]
    /// ```
    ///
    /// Returns `None` if any of this map's to ranges is not fully covered by
    /// `other`'s from ranges. A partial composite is never returned.
    pub fn traverse(&self, other: &MapList) -> Option<MapList> {
        let from_ratio = u64::from(self.from_ratio) * u64::from(other.from_ratio);
        let to_ratio = u64::from(self.to_ratio) * u64::from(other.to_ratio);
        let d = gcd(from_ratio, to_ratio);

        let from_ratio = u32::try_from(from_ratio / d).ok()?;
        let to_ratio = u32::try_from(to_ratio / d).ok()?;

        let mut to_ranges = Vec::new();

        for range in &self.to_ranges {
            let Some(transferred) = other.locate_in_to(range.start, range.end) else {
                debug!(%range, "cannot traverse unmapped range");
                return None;
            };

            let from_len = range.len();
            let to_len = range_list::length(&transferred);

            if u128::from(from_len) * u128::from(other.to_ratio)
                != u128::from(to_len) * u128::from(other.from_ratio)
            {
                debug!(
                    %range,
                    from_len,
                    to_len,
                    "cannot traverse partially mapped range"
                );

                return None;
            }

            to_ranges.extend(transferred);
        }

        Some(MapList::from_raw_parts(
            range_list::coalesce(&self.from_ranges).into_owned(),
            range_list::coalesce(&to_ranges).into_owned(),
            from_ratio,
            to_ratio,
        ))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}
