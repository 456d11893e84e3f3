//! # Range Utilities

use core::ops::RangeInclusive;

use crate::types::{RangeInt, wide};

/// Number of values in the inclusive span ``first..=last``.
///
/// Saturates at `usize::MAX` for spans wider than the platform can count.
pub fn span_len<T: RangeInt>(
    first: T,
    last: T,
) -> usize {
    if last < first {
        return 0;
    }
    let steps = wide(last).wrapping_sub(wide(first)) as u128;
    usize::try_from(steps)
        .ok()
        .and_then(|s| s.checked_add(1))
        .unwrap_or(usize::MAX)
}

/// Add an offset to both ends of a [`RangeInclusive<T>`].
///
/// ## Returns
/// `None` if either end overflows `T`.
pub fn offset_range<T: RangeInt>(
    range: RangeInclusive<T>,
    offset: T,
) -> Option<RangeInclusive<T>> {
    let (start, end) = range.into_inner();
    Some(start.checked_add(&offset)?..=end.checked_add(&offset)?)
}
