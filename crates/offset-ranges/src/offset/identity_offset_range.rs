//! # Identity Offset Range

use core::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

use num_traits::CheckedAdd;

use crate::{
    alloc::string::ToString,
    errors::{RangeError, RangeResult},
    offset::{OffsetCoerce, OffsetIter},
    ranges::{AbstractUnitRange, OneTo, RangeKind, UnitRange},
    types::{RangeInt, cast_elem, wide},
};

/// A unit range whose index space is its parent's index space shifted by `offset`.
///
/// The values are the parent's values shifted by the same `offset`;
/// so position ``i`` maps to ``parent[i - offset] + offset``.
///
/// When the parent is its own index space (as [`OneTo`] is), so is this range:
/// ``axes(r) == (r,)``.
///
/// ## Construction
/// * [`Self::new`] / [`Self::try_new`] - wrap a parent as-is.
/// * [`Self::coerce_from`] - rebuild any range on a `P` parent, preserving values.
/// * [`Self::convert_from`] - rebuild any range on a `P` parent, preserving
///   values *and* indices; fails if `P` cannot do that.
/// * [`Self::from_values_indices`] - from explicit value and index ranges.
///
/// Equality and hashing compare the ``(index, value)`` sequence, not the
/// representation; how a shift is split between `parent` and `offset`
/// does not matter.
#[derive(Clone, Copy)]
pub struct IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    parent: P,
    offset: T,
}

/// An offset range over a [`UnitRange`] parent.
pub type OffsetUnitRange<T> = IdentityOffsetRange<T, UnitRange<T>>;

/// An offset range over a [`OneTo`] parent.
pub type OffsetOneTo<T> = IdentityOffsetRange<T, OneTo<T>>;

impl<T, P> IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    /// Wrap `parent` with `offset`, without coercion.
    ///
    /// ## Returns
    /// [`RangeError::ArithmeticOverflow`] if the parent holds more values
    /// than `T` can count, or if shifting the parent's values or indices
    /// by `offset` leaves `T`.
    pub fn try_new(
        parent: P,
        offset: T,
    ) -> RangeResult<Self> {
        let countable = parent.is_empty()
            || parent
                .last()
                .checked_sub(&parent.first())
                .and_then(|span| span.checked_add(&T::one()))
                .is_some();
        if !countable {
            return Err(RangeError::ArithmeticOverflow(
                "range length outside element type",
            ));
        }

        let ends = [
            parent.first(),
            parent.last(),
            parent.first_index(),
            parent.last_index(),
        ];
        if ends.iter().any(|end| end.checked_add(&offset).is_none()) {
            return Err(RangeError::ArithmeticOverflow(
                "offset moves range outside element type",
            ));
        }
        Ok(Self { parent, offset })
    }

    /// Wrap `parent` with `offset`, without coercion.
    ///
    /// ## Panics
    /// If shifting the parent by `offset` leaves `T`; see [`Self::try_new`].
    pub fn new(
        parent: P,
        offset: T,
    ) -> Self {
        match Self::try_new(parent, offset) {
            Ok(r) => r,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build from any range, preserving values.
    ///
    /// The input is coerced onto a `P` parent; whatever shift that needs is
    /// folded into the stored offset, along with the extra `offset`.
    /// Offset range inputs have their parent coerced and their own offset added.
    ///
    /// The result's values are the values of `r` shifted by `offset`;
    /// its index space may differ from that of `r`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn coerce_from<R: AbstractUnitRange>(
        r: &R,
        offset: T,
    ) -> RangeResult<Self>
    where
        P: OffsetCoerce,
    {
        let (parent, residual) = r.coerce_parts::<P>()?;
        let offset = residual
            .checked_add(&offset)
            .ok_or(RangeError::ArithmeticOverflow("offset composition"))?;

        log::trace!(
            "coerced {r} onto {} parent {parent} with offset {offset}",
            P::KIND
        );
        Self::try_new(parent, offset)
    }

    /// Build from any range, preserving both values and indices.
    ///
    /// ## Returns
    /// The converted range, or an error if a `P` parent cannot hold `r`
    /// without moving its indices; e.g. [`RangeError::FirstNotOne`] for [`OneTo`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn convert_from<R: AbstractUnitRange>(r: &R) -> RangeResult<Self> {
        Self::try_convert_from(r)
    }

    /// Build from explicit value and index ranges of equal length.
    ///
    /// The stored offset is ``first(indices) - 1``, and the parent is
    /// ``values - offset`` converted into `P`.
    pub fn from_values_indices<V, I>(
        values: &V,
        indices: &I,
    ) -> RangeResult<Self>
    where
        V: AbstractUnitRange,
        I: AbstractUnitRange,
    {
        if values.len() != indices.len() {
            return Err(RangeError::LengthMismatch {
                values: values.len(),
                indices: indices.len(),
            });
        }

        let overflow = RangeError::ArithmeticOverflow("values and indices offset");
        let offset = cast_elem::<_, T>(indices.first())?
            .checked_sub(&T::one())
            .ok_or(overflow.clone())?;
        let first = cast_elem::<_, T>(values.first())?
            .checked_sub(&offset)
            .ok_or(overflow.clone())?;
        let last = cast_elem::<_, T>(values.last())?
            .checked_sub(&offset)
            .ok_or(overflow)?;

        let parent = P::try_convert_from(&UnitRange::new(first, last))?;
        Self::try_new(parent, offset)
    }

    /// The parent range.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// The stored offset.
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Split into ``(parent, offset)``.
    pub fn into_parts(self) -> (P, T) {
        (self.parent, self.offset)
    }

    /// The axes of this range, as a 1-tuple.
    pub fn axes(&self) -> (IdentityOffsetRange<T, P::Axis>,) {
        (self.axis(),)
    }

    /// Look up the value at position `index`.
    ///
    /// ## Returns
    /// The value, or [`RangeError::IndexOutOfBounds`] naming the parent
    /// and the shifted position.
    pub fn try_index(
        &self,
        index: T,
    ) -> RangeResult<T> {
        self.get(index).ok_or_else(|| self.bounds_error(index))
    }

    /// Look up the values at the positions of `positions`.
    ///
    /// ## Returns
    /// The values ``{ self[i] : i in positions }`` in order,
    /// or [`RangeError::IndexOutOfBounds`] for the first bad end.
    pub fn try_slice<S>(
        &self,
        positions: &S,
    ) -> RangeResult<UnitRange<T>>
    where
        S: AbstractUnitRange<Elem = T>,
    {
        if positions.is_empty() {
            return Ok(UnitRange::empty());
        }
        for index in [positions.first(), positions.last()] {
            if !self.checkindex(index) {
                return Err(self.bounds_error(index));
            }
        }
        self.get_slice(positions.first(), positions.last())
            .ok_or(RangeError::ArithmeticOverflow("slice shift"))
    }

    fn bounds_error(
        &self,
        index: T,
    ) -> RangeError {
        RangeError::IndexOutOfBounds {
            parent: self.parent.to_string(),
            len: self.parent.len(),
            index: wide(index).saturating_sub(wide(self.offset)),
        }
    }
}

impl<T, P> AbstractUnitRange for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    type Elem = T;
    type Axis = IdentityOffsetRange<T, P::Axis>;
    type Iter = OffsetIter<P::Iter, T>;

    const KIND: RangeKind = RangeKind::Offset;

    fn first(&self) -> T {
        self.parent.first() + self.offset
    }

    fn last(&self) -> T {
        self.parent.last() + self.offset
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn axis(&self) -> Self::Axis {
        // In range: `try_new` checked the parent's index ends.
        IdentityOffsetRange {
            parent: self.parent.axis(),
            offset: self.offset,
        }
    }

    fn iter(&self) -> Self::Iter {
        OffsetIter::new(self.parent.iter(), self.offset)
    }

    fn get(
        &self,
        index: T,
    ) -> Option<T> {
        let value = self.parent.get(index.checked_sub(&self.offset)?)?;
        value.checked_add(&self.offset)
    }

    fn checkindex(
        &self,
        index: T,
    ) -> bool {
        index
            .checked_sub(&self.offset)
            .is_some_and(|shifted| self.parent.checkindex(shifted))
    }

    fn get_slice(
        &self,
        first_index: T,
        last_index: T,
    ) -> Option<UnitRange<T>> {
        if last_index < first_index {
            return Some(UnitRange::empty());
        }
        self.parent
            .get_slice(
                first_index.checked_sub(&self.offset)?,
                last_index.checked_sub(&self.offset)?,
            )?
            .checked_shift(self.offset)
    }

    fn try_convert_from<R: AbstractUnitRange>(r: &R) -> RangeResult<Self> {
        let (parent, offset) = r.convert_parts::<P>()?;
        Self::try_new(parent, offset)
    }

    fn convert_parts<Q: AbstractUnitRange>(&self) -> RangeResult<(Q, Q::Elem)> {
        let (parent, residual) = self.parent.convert_parts::<Q>()?;
        let offset = residual
            .checked_add(&cast_elem(self.offset)?)
            .ok_or(RangeError::ArithmeticOverflow("offset composition"))?;
        Ok((parent, offset))
    }

    fn coerce_parts<Q: OffsetCoerce>(&self) -> RangeResult<(Q, Q::Elem)> {
        let (parent, residual) = self.parent.coerce_parts::<Q>()?;
        let offset = residual
            .checked_add(&cast_elem(self.offset)?)
            .ok_or(RangeError::ArithmeticOverflow("offset composition"))?;
        Ok((parent, offset))
    }
}

impl<T, P, Q> PartialEq<IdentityOffsetRange<T, Q>> for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
    Q: AbstractUnitRange<Elem = T>,
{
    fn eq(
        &self,
        other: &IdentityOffsetRange<T, Q>,
    ) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.is_empty()
            || (self.first() == other.first() && self.first_index() == other.first_index())
    }
}

impl<T, P> Eq for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
}

impl<T, P> Hash for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.len().hash(state);
        if !self.is_empty() {
            self.first().hash(state);
            self.first_index().hash(state);
        }
    }
}

impl<T, P> Display for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{}:{}", self.first(), self.last())
    }
}

impl<T, P> Debug for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "IdentityOffsetRange(values={}:{}, indices={}:{})",
            self.first(),
            self.last(),
            self.first_index(),
            self.last_index()
        )
    }
}

impl<T, P> IntoIterator for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    type Item = T;
    type IntoIter = OffsetIter<P::Iter, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P> IntoIterator for &IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: AbstractUnitRange<Elem = T>,
{
    type Item = T;
    type IntoIter = OffsetIter<P::Iter, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::{format, vec, vec::Vec};

    fn example() -> OffsetUnitRange<i64> {
        IdentityOffsetRange::new(UnitRange::new(11, 13), -2)
    }

    #[test]
    fn test_type_is_send_sync() {
        fn is_send_sync<S: Send + Sync + Copy>(_: &S) {}
        is_send_sync(&example());
    }

    #[test]
    fn test_new() {
        let r = example();
        assert_eq!(r.parent(), &UnitRange::new(11, 13));
        assert_eq!(r.offset(), -2);
        assert_eq!(r.first(), 9);
        assert_eq!(r.last(), 11);
        assert_eq!(r.len(), 3);
        assert_eq!(r.first_index(), -1);
        assert_eq!(r.last_index(), 1);
        assert_eq!(r.into_parts(), (UnitRange::new(11, 13), -2));
    }

    #[test]
    fn test_try_new_overflow() {
        assert_eq!(
            OffsetUnitRange::try_new(UnitRange::new(120i8, 125), 10).unwrap_err(),
            RangeError::ArithmeticOverflow("offset moves range outside element type")
        );
        assert!(OffsetUnitRange::try_new(UnitRange::new(110i8, 117), 10).is_ok());
    }

    #[test]
    fn test_try_new_uncountable_parent() {
        assert_eq!(
            OffsetUnitRange::try_new(UnitRange::new(i8::MIN, i8::MAX), 0).unwrap_err(),
            RangeError::ArithmeticOverflow("range length outside element type")
        );
        assert_eq!(
            OffsetOneTo::<i8>::coerce_from(&UnitRange::new(-100i8, 100), 0).unwrap_err(),
            RangeError::ArithmeticOverflow("one-based shift")
        );

        // The widest countable parent keeps its full index space.
        let r = OffsetUnitRange::new(UnitRange::new(i8::MIN, -2), 0);
        let (axis,) = r.axes();
        assert_eq!(axis.len(), r.len());
        assert_eq!(r.last_index(), i8::MAX);
        assert_eq!(r.try_index(i8::MAX).unwrap(), -2);
    }

    #[test]
    fn test_wide_parent_bounds() {
        let stop = 1i128 << 70;
        let r = OffsetUnitRange::new(UnitRange::new(0i128, stop), 0);
        assert_eq!(r.last_index(), stop + 1);

        for i in [0, 1, stop, stop + 1, stop + 2, 1 << 71] {
            assert_eq!(r.checkindex(i), r.try_index(i).is_ok(), "index {i}");
        }
        assert!(!r.checkindex(1 << 71));
        assert_eq!(r.try_index(stop + 1).unwrap(), stop);
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_overflow() {
        OffsetUnitRange::new(UnitRange::new(120i8, 125), 10);
    }

    #[test]
    fn test_try_index() {
        let r = example();
        assert_eq!(r.try_index(-1).unwrap(), 9);
        assert_eq!(r.try_index(0).unwrap(), 10);
        assert_eq!(r.try_index(1).unwrap(), 11);

        let err = r.try_index(3).unwrap_err();
        assert_eq!(
            err,
            RangeError::IndexOutOfBounds {
                parent: "11:13".to_string(),
                len: 3,
                index: 5,
            }
        );

        assert!(r.try_index(-2).is_err());
        assert!(r.try_index(i64::MIN).is_err());
    }

    #[test]
    fn test_checkindex_matches_try_index() {
        let ranges = [
            example(),
            OffsetUnitRange::new(UnitRange::new(-5, 5), 7),
            OffsetUnitRange::new(UnitRange::new(3, 2), 1),
        ];
        for r in ranges {
            for i in -20..20 {
                assert_eq!(r.checkindex(i), r.try_index(i).is_ok(), "{r:?} at {i}");
            }
        }
    }

    #[test]
    fn test_try_slice() {
        let r = example();
        assert_eq!(
            r.try_slice(&UnitRange::new(-1, 0)).unwrap(),
            UnitRange::new(9, 10)
        );
        assert_eq!(
            r.try_slice(&UnitRange::new(-1, 1)).unwrap(),
            UnitRange::new(9, 11)
        );
        assert!(r.try_slice(&UnitRange::new(1, 0)).unwrap().is_empty());

        let err = r.try_slice(&UnitRange::new(0, 2)).unwrap_err();
        assert_eq!(
            err,
            RangeError::IndexOutOfBounds {
                parent: "11:13".to_string(),
                len: 3,
                index: 4,
            }
        );

        let sliced = r.try_slice(&OneTo::new(1)).unwrap();
        assert_eq!(sliced, UnitRange::new(11, 11));
    }

    #[test]
    fn test_iter() {
        let r = example();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![9, 10, 11]);
        assert_eq!(r.iter().rev().collect::<Vec<_>>(), vec![11, 10, 9]);
        assert_eq!((&r).into_iter().len(), 3);

        // Restartable.
        let total: i64 = r.into_iter().sum();
        assert_eq!(total, 30);
        assert_eq!(r.iter().count(), 3);
    }

    #[test]
    fn test_axes() {
        let r = example();
        let (axis,) = r.axes();
        assert_eq!(axis.parent(), &OneTo::new(3));
        assert_eq!(axis.offset(), -2);
        assert_eq!(axis.iter().collect::<Vec<_>>(), vec![-1, 0, 1]);

        let r = OffsetOneTo::new(OneTo::new(3i64), 5);
        let (axis,) = r.axes();
        assert_eq!(axis, r);
        assert_eq!(
            axis.iter().collect::<Vec<_>>(),
            r.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_coerce_from_into_one_to() {
        let r = OffsetOneTo::<i64>::coerce_from(&UnitRange::new(3i64, 5), 0).unwrap();
        assert_eq!(r.parent(), &OneTo::new(3));
        assert_eq!(r.offset(), 2);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5]);

        let r = OffsetOneTo::<i64>::coerce_from(&UnitRange::new(3i64, 5), -10).unwrap();
        assert_eq!(r.offset(), -8);
        assert_eq!(r.first(), -7);
        assert_eq!(r.last(), -5);
    }

    #[test]
    fn test_coerce_from_unconstrained() {
        let r = OffsetUnitRange::<i32>::coerce_from(&UnitRange::new(11i64, 13), -2).unwrap();
        assert_eq!(r.parent(), &UnitRange::new(11, 13));
        assert_eq!(r.offset(), -2);
        assert_eq!(r, example_i32());
    }

    fn example_i32() -> OffsetUnitRange<i32> {
        IdentityOffsetRange::new(UnitRange::new(11, 13), -2)
    }

    #[test]
    fn test_coerce_from_offset_range() {
        let src = example();

        // Parent coerced, offsets summed.
        let r = OffsetOneTo::<i64>::coerce_from(&src, 0).unwrap();
        assert_eq!(r.parent(), &OneTo::new(3));
        assert_eq!(r.offset(), 8);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![9, 10, 11]);

        let r = OffsetUnitRange::<i64>::coerce_from(&src, 1).unwrap();
        assert_eq!(r.parent(), &UnitRange::new(11, 13));
        assert_eq!(r.offset(), -1);
    }

    #[test]
    fn test_coerce_from_same_type_is_identity() {
        let src = OffsetOneTo::new(OneTo::new(4i32), 6);
        let r = OffsetOneTo::<i32>::coerce_from(&src, 0).unwrap();
        assert_eq!(r.into_parts(), src.into_parts());

        let src = example();
        let r = OffsetUnitRange::<i64>::coerce_from(&src, 0).unwrap();
        assert_eq!(r.into_parts(), src.into_parts());
    }

    #[test]
    fn test_coerce_from_zero_offset_one_based() {
        let r = OffsetOneTo::<i32>::coerce_from(&OneTo::new(5i32), 0).unwrap();
        assert_eq!(r.into_parts(), (OneTo::new(5), 0));
    }

    #[test]
    fn test_coerce_from_element_overflow() {
        let err = OffsetUnitRange::<i8>::coerce_from(&UnitRange::new(1000i64, 1002), 0).unwrap_err();
        assert!(matches!(err, RangeError::ElementOverflow { value: 1000, .. }));
    }

    #[test]
    fn test_convert_from() {
        let r = OffsetUnitRange::<i64>::convert_from(&UnitRange::new(3i32, 4)).unwrap();
        assert_eq!(r.into_parts(), (UnitRange::new(3, 4), 0));

        let err = OffsetOneTo::<i64>::convert_from(&UnitRange::new(3i64, 4)).unwrap_err();
        assert_eq!(err, RangeError::FirstNotOne { first: 3 });

        let r = OffsetOneTo::<i64>::convert_from(&UnitRange::new(1i64, 4)).unwrap();
        assert_eq!(r.first(), 1);
        assert_eq!(r.into_parts(), (OneTo::new(4), 0));
    }

    #[test]
    fn test_convert_between_offset_ranges() {
        let src = OffsetOneTo::new(OneTo::new(3i64), 5);
        let r = OffsetUnitRange::<i64>::convert_from(&src).unwrap();
        assert_eq!(r.into_parts(), (UnitRange::new(1, 3), 5));
        assert_eq!(r, src);

        let src = OffsetUnitRange::new(UnitRange::new(1i64, 3), 4);
        let r = OffsetOneTo::<i64>::convert_from(&src).unwrap();
        assert_eq!(r.into_parts(), (OneTo::new(3), 4));

        let err = OffsetOneTo::<i64>::convert_from(&example()).unwrap_err();
        assert_eq!(err, RangeError::FirstNotOne { first: 11 });
    }

    #[test]
    fn test_from_values_indices() {
        let r = OffsetUnitRange::<i64>::from_values_indices(
            &UnitRange::new(9i64, 11),
            &UnitRange::new(-1i64, 1),
        )
        .unwrap();
        assert_eq!(r.into_parts(), example().into_parts());

        let r = OffsetOneTo::<i64>::from_values_indices(
            &UnitRange::new(-2i64, 5),
            &UnitRange::new(-2i64, 5),
        )
        .unwrap();
        assert_eq!(r.into_parts(), (OneTo::new(8), -3));

        assert_eq!(
            OffsetUnitRange::<i64>::from_values_indices(
                &UnitRange::new(1i64, 3),
                &UnitRange::new(1i64, 4),
            )
            .unwrap_err(),
            RangeError::LengthMismatch {
                values: 3,
                indices: 4,
            }
        );

        assert_eq!(
            OffsetOneTo::<i64>::from_values_indices(
                &UnitRange::new(9i64, 11),
                &UnitRange::new(-1i64, 1),
            )
            .unwrap_err(),
            RangeError::FirstNotOne { first: 11 }
        );
    }

    #[test]
    fn test_search() {
        let r = example();
        assert!(r.contains(9));
        assert!(!r.contains(12));
        assert_eq!(r.position_of(9), Some(-1));
        assert_eq!(r.position_of(11), Some(1));
        assert_eq!(r.position_of(8), None);
    }

    #[test]
    fn test_semantic_equality() {
        let a = OffsetUnitRange::new(UnitRange::new(1i32, 3), 4);
        let b = OffsetOneTo::new(OneTo::new(3i32), 4);
        assert_eq!(a, b);

        // Same values, different indices.
        let c = OffsetUnitRange::new(UnitRange::new(5i32, 7), 0);
        assert_eq!(a.iter().collect::<Vec<_>>(), c.iter().collect::<Vec<_>>());
        assert_ne!(a, c);

        let e1 = OffsetUnitRange::new(UnitRange::new(3i32, 2), 1);
        let e2 = OffsetOneTo::new(OneTo::new(0i32), 9);
        assert_eq!(e1, e2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of<H: Hash>(value: &H) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = OffsetUnitRange::new(UnitRange::new(1i32, 3), 4);
        let b = OffsetUnitRange::convert_from(&OffsetOneTo::new(OneTo::new(3i32), 4)).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_display_and_debug() {
        let r = example();
        assert_eq!(r.to_string(), "9:11");
        assert_eq!(
            format!("{r:?}"),
            "IdentityOffsetRange(values=9:11, indices=-1:1)"
        );
    }

    #[test]
    fn test_nested_parent() {
        type Nested = IdentityOffsetRange<i32, OffsetOneTo<i32>>;

        let r = Nested::coerce_from(&UnitRange::new(3i32, 5), 1).unwrap();
        assert_eq!(r.parent().parent(), &OneTo::new(3));
        assert_eq!(r.parent().offset(), 2);
        assert_eq!(r.offset(), 1);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(r.try_index(5).unwrap(), 5);

        let (axis,) = r.axes();
        assert_eq!(axis.iter().collect::<Vec<_>>(), vec![4, 5, 6]);

        let r = Nested::convert_from(&example_i32()).unwrap_err();
        assert_eq!(r, RangeError::FirstNotOne { first: 11 });

        let src = OffsetUnitRange::new(UnitRange::new(1i32, 3), -2);
        let r = Nested::convert_from(&src).unwrap();
        assert_eq!(r, src);
        assert_eq!(r.parent().into_parts(), (OneTo::new(3), 0));
    }
}
