//! # Unit Range Iterator

use core::iter::FusedIterator;

use crate::{compat::ranges::span_len, types::RangeInt};

/// Iterator over the values ``first..=last`` of a unit range.
///
/// Never steps past either end, so ranges touching `T::MAX` or `T::MIN`
/// iterate without overflow.
#[derive(Debug, Clone)]
pub struct UnitRangeIter<T: RangeInt> {
    front: T,
    back: T,
    remaining: usize,
}

impl<T: RangeInt> UnitRangeIter<T> {
    /// Iterate ``first..=last``; empty if ``last < first``.
    pub fn new(
        first: T,
        last: T,
    ) -> Self {
        Self {
            front: first,
            back: last,
            remaining: span_len(first, last),
        }
    }
}

impl<T: RangeInt> Iterator for UnitRangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.front + T::one();
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: RangeInt> DoubleEndedIterator for UnitRangeIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.back - T::one();
        }
        Some(value)
    }
}

impl<T: RangeInt> ExactSizeIterator for UnitRangeIter<T> {}

impl<T: RangeInt> FusedIterator for UnitRangeIter<T> {}
