use core::ops::{Bound, RangeBounds};
use deranged::RangedUsize;

/// Converts a statically-bounded range into an `(offset, len)` pair within a region whose last
/// valid index is `MAX`.
///
/// Inverted ranges produce a length of zero.
pub(crate) fn translate_range<const MAX: usize, Range>(range: Range) -> (usize, usize)
where
    Range: RangeBounds<RangedUsize<0, MAX>>,
{
    let offset = match range.start_bound() {
        Bound::Included(start) => start.get(),
        Bound::Excluded(start) => start.get() + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(end) => end.get() + 1,
        Bound::Excluded(end) => end.get(),
        Bound::Unbounded => MAX + 1,
    };
    (offset, end.saturating_sub(offset))
}
