//! # Offset Iterator

use core::iter::FusedIterator;

use crate::types::RangeInt;

/// Iterator adding a fixed offset to every value of a parent iterator.
///
/// All iteration state lives in the parent iterator.
#[derive(Debug, Clone)]
pub struct OffsetIter<I, T: RangeInt> {
    inner: I,
    offset: T,
}

impl<I, T> OffsetIter<I, T>
where
    I: Iterator<Item = T>,
    T: RangeInt,
{
    /// Wrap `inner`, shifting each value by `offset`.
    ///
    /// The caller guarantees the shifted values fit in `T`.
    pub fn new(
        inner: I,
        offset: T,
    ) -> Self {
        Self { inner, offset }
    }
}

impl<I, T> Iterator for OffsetIter<I, T>
where
    I: Iterator<Item = T>,
    T: RangeInt,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|v| v + self.offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, T> DoubleEndedIterator for OffsetIter<I, T>
where
    I: DoubleEndedIterator<Item = T>,
    T: RangeInt,
{
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|v| v + self.offset)
    }
}

impl<I, T> ExactSizeIterator for OffsetIter<I, T>
where
    I: ExactSizeIterator<Item = T>,
    T: RangeInt,
{
}

impl<I, T> FusedIterator for OffsetIter<I, T>
where
    I: FusedIterator<Item = T>,
    T: RangeInt,
{
}
