//! # Unconstrained Unit Range

use core::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
};

use crate::{
    compat::ranges::{offset_range, span_len},
    errors::RangeResult,
    ranges::{AbstractUnitRange, OneTo, RangeKind, UnitRangeIter},
    types::{RangeInt, cast_elem},
};

/// An inclusive unit range ``start..=stop`` that may start anywhere.
///
/// Indexed by position, ``1..=len``.
///
/// Empty ranges are normalized to ``stop == start - 1``;
/// so derived equality is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitRange<T: RangeInt> {
    start: T,
    stop: T,
}

impl<T: RangeInt> UnitRange<T> {
    /// Build ``start..=stop``.
    pub fn new(
        start: T,
        stop: T,
    ) -> Self {
        // `stop < start` implies `start > T::MIN`.
        let stop = if stop < start { start - T::one() } else { stop };
        Self { start, stop }
    }

    /// The canonical empty range, ``1..=0``.
    pub fn empty() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The range shifted by `by`.
    ///
    /// ## Returns
    /// `None` if either end overflows `T`.
    pub fn checked_shift(
        &self,
        by: T,
    ) -> Option<Self> {
        offset_range(self.start..=self.stop, by).map(Self::from)
    }
}

impl<T: RangeInt> From<RangeInclusive<T>> for UnitRange<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, stop) = range.into_inner();
        Self::new(start, stop)
    }
}

impl<T: RangeInt> From<OneTo<T>> for UnitRange<T> {
    fn from(range: OneTo<T>) -> Self {
        Self::new(T::one(), range.last())
    }
}

impl<T: RangeInt> Display for UnitRange<T> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{}:{}", self.start, self.stop)
    }
}

impl<T: RangeInt> AbstractUnitRange for UnitRange<T> {
    type Elem = T;
    type Axis = OneTo<T>;
    type Iter = UnitRangeIter<T>;

    const KIND: RangeKind = RangeKind::Unconstrained;

    fn first(&self) -> T {
        self.start
    }

    fn last(&self) -> T {
        self.stop
    }

    fn len(&self) -> usize {
        span_len(self.start, self.stop)
    }

    /// The positions ``1..=len``, counted in `T`.
    ///
    /// A range holding more values than `T` can count (e.g. all of `i8`)
    /// saturates at ``T::MAX``; offset ranges refuse such parents.
    fn axis(&self) -> OneTo<T> {
        let n = self
            .stop
            .checked_sub(&self.start)
            .and_then(|span| span.checked_add(&T::one()))
            .unwrap_or_else(T::max_value);
        OneTo::new(n)
    }

    fn iter(&self) -> UnitRangeIter<T> {
        UnitRangeIter::new(self.start, self.stop)
    }

    fn get(
        &self,
        index: T,
    ) -> Option<T> {
        if index < T::one() {
            return None;
        }
        let value = self.start.checked_add(&(index - T::one()))?;
        (value <= self.stop).then_some(value)
    }

    fn checkindex(
        &self,
        index: T,
    ) -> bool {
        self.get(index).is_some()
    }

    fn try_convert_from<R: AbstractUnitRange>(r: &R) -> RangeResult<Self> {
        Ok(Self::new(cast_elem(r.first())?, cast_elem(r.last())?))
    }
}

impl<T: RangeInt> IntoIterator for UnitRange<T> {
    type Item = T;
    type IntoIter = UnitRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
