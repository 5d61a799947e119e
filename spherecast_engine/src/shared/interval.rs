use std::fmt::{Display, Formatter};
use std::ops::{Bound, Range, RangeBounds, RangeFull, RangeInclusive, RangeTo};

/// Represents a interval of values. Each end may be inclusive, exclusive, or missing entirely.
///
/// Used to restrict which intersection distances along a ray are accepted.
///
/// # Requirements
/// It is a logic error for `start > end`. This is not enforced, such an interval simply contains nothing.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: Bound<T>,
    pub end: Bound<T>,
}

impl<T> Interval<T> {
    pub const FULL: Self = Self {
        start: Bound::Unbounded,
        end: Bound::Unbounded,
    };

    /// An interval that excludes both of its ends: `start < x < end`
    pub const fn open(start: T, end: T) -> Self {
        Self {
            start: Bound::Excluded(start),
            end: Bound::Excluded(end),
        }
    }

    /// An interval with no lower limit, that excludes its end: `x < end`
    pub const fn below(end: T) -> Self {
        Self {
            start: Bound::Unbounded,
            end: Bound::Excluded(end),
        }
    }
}

// region From<> Range types

impl<T> From<RangeFull> for Interval<T> {
    fn from(_value: RangeFull) -> Self { Self::FULL }
}
impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (start, end) = value.into_inner();
        Self {
            start: Bound::Included(start),
            end: Bound::Included(end),
        }
    }
}
impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(value: RangeTo<T>) -> Self { Self::below(value.end) }
}
impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self {
            start: Bound::Included(value.start),
            end: Bound::Excluded(value.end),
        }
    }
}

// endregion From<> Range types

/// Gives us [RangeBounds::contains] for free, with the same semantics as the std ranges
impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> { self.start.as_ref() }
    fn end_bound(&self) -> Bound<&T> { self.end.as_ref() }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.start {
            Bound::Included(start) => write!(f, "[{start}")?,
            Bound::Excluded(start) => write!(f, "({start}")?,
            Bound::Unbounded => write!(f, "(")?,
        }
        write!(f, "..")?;
        match &self.end {
            Bound::Included(end) => write!(f, "{end}]"),
            Bound::Excluded(end) => write!(f, "{end})"),
            Bound::Unbounded => write!(f, ")"),
        }
    }
}
