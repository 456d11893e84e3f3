//! # One-Based Unit Range

use core::fmt::{Display, Formatter};

use num_traits::One;

use crate::{
    compat::ranges::span_len,
    errors::{RangeError, RangeResult},
    ranges::{AbstractUnitRange, RangeKind, UnitRangeIter},
    types::{RangeInt, cast_elem, wide},
};

/// The unit range ``1..=n``.
///
/// This kind cannot represent any other start; its index space
/// is its value space, so ``axis() == self``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneTo<T: RangeInt> {
    stop: T,
}

impl<T: RangeInt> OneTo<T> {
    /// Build ``1..=n``; negative `n` is clamped to 0.
    pub fn new(n: T) -> Self {
        Self {
            stop: n.max(T::zero()),
        }
    }
}

impl<T: RangeInt> Display for OneTo<T> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "1:{}", self.stop)
    }
}

impl<T: RangeInt> AbstractUnitRange for OneTo<T> {
    type Elem = T;
    type Axis = Self;
    type Iter = UnitRangeIter<T>;

    const KIND: RangeKind = RangeKind::OneBased;

    fn first(&self) -> T {
        T::one()
    }

    fn last(&self) -> T {
        self.stop
    }

    fn len(&self) -> usize {
        span_len(T::one(), self.stop)
    }

    fn axis(&self) -> Self {
        *self
    }

    fn iter(&self) -> UnitRangeIter<T> {
        UnitRangeIter::new(T::one(), self.stop)
    }

    fn get(
        &self,
        index: T,
    ) -> Option<T> {
        self.checkindex(index).then_some(index)
    }

    fn checkindex(
        &self,
        index: T,
    ) -> bool {
        T::one() <= index && index <= self.stop
    }

    fn try_convert_from<R: AbstractUnitRange>(r: &R) -> RangeResult<Self> {
        let first = r.first();
        if first != R::Elem::one() {
            log::debug!("refusing to convert {r} into a one-based range");
            return Err(RangeError::FirstNotOne { first: wide(first) });
        }
        Ok(Self::new(cast_elem(r.last())?))
    }
}

impl<T: RangeInt> IntoIterator for OneTo<T> {
    type Item = T;
    type IntoIter = UnitRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
