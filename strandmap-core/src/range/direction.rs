/// The direction in which a range is traversed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Ascending positions (`start < end`).
    Forward,
    /// Descending positions (`start > end`).
    Reverse,
}

impl Direction {
    /// Returns `1` for forward and `-1` for reverse.
    pub fn signum(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}
