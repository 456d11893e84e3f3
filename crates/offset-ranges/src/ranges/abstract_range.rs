//! # Unit Range Capability Trait

use core::{
    fmt::{Debug, Display},
    iter::FusedIterator,
};

use num_traits::{CheckedAdd, CheckedSub};

use crate::{
    errors::RangeResult,
    offset::OffsetCoerce,
    ranges::UnitRange,
    types::RangeInt,
};

/// Representation tag for a parent range kind.
///
/// Drives which coercion rule applies when a range is rebuilt
/// on top of a different representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[non_exhaustive]
pub enum RangeKind {
    /// May start at any value; see [`UnitRange`].
    Unconstrained,

    /// Must start at exactly 1; see [`crate::ranges::OneTo`].
    OneBased,

    /// An offset range; see [`crate::offset::IdentityOffsetRange`].
    Offset,

    /// A kind defined outside this crate.
    Custom,
}

/// A finite, inclusive, unit-stride integer range.
///
/// Every range has two spaces:
/// * the *value* space: ``first()..=last()``,
/// * the *index* space: ``first_index()..=last_index()``, described by [`Self::axis`].
///
/// Point and slice lookups take positions in the index space.
pub trait AbstractUnitRange: Copy + Debug + Display {
    /// The element type.
    type Elem: RangeInt;

    /// The range describing the index space.
    type Axis: AbstractUnitRange<Elem = Self::Elem>;

    /// The value iterator.
    type Iter: Iterator<Item = Self::Elem>
        + ExactSizeIterator
        + DoubleEndedIterator
        + FusedIterator;

    /// The representation tag.
    const KIND: RangeKind;

    /// The first value.
    ///
    /// For empty ranges this is still defined, but not a member.
    fn first(&self) -> Self::Elem;

    /// The last value.
    ///
    /// For empty ranges this is ``first() - 1``.
    fn last(&self) -> Self::Elem;

    /// The number of values.
    fn len(&self) -> usize;

    /// Is the range empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The index space of this range.
    fn axis(&self) -> Self::Axis;

    /// The first valid index.
    fn first_index(&self) -> Self::Elem {
        self.axis().first()
    }

    /// The last valid index.
    fn last_index(&self) -> Self::Elem {
        self.axis().last()
    }

    /// Iterate the values, in order.
    fn iter(&self) -> Self::Iter;

    /// Look up the value at a position in the index space.
    ///
    /// ## Returns
    /// `None` if the position is out of bounds.
    fn get(
        &self,
        index: Self::Elem,
    ) -> Option<Self::Elem>;

    /// Is `index` a valid position in the index space?
    ///
    /// Agrees with ``get(index).is_some()``.
    fn checkindex(
        &self,
        index: Self::Elem,
    ) -> bool;

    /// Look up the values at positions ``first_index..=last_index``.
    ///
    /// An empty position span always succeeds with an empty range.
    ///
    /// ## Returns
    /// `None` if either end is out of bounds.
    fn get_slice(
        &self,
        first_index: Self::Elem,
        last_index: Self::Elem,
    ) -> Option<UnitRange<Self::Elem>> {
        if last_index < first_index {
            return Some(UnitRange::empty());
        }
        Some(UnitRange::new(
            self.get(first_index)?,
            self.get(last_index)?,
        ))
    }

    /// Is `value` one of the values of this range?
    fn contains(
        &self,
        value: Self::Elem,
    ) -> bool {
        !self.is_empty() && self.first() <= value && value <= self.last()
    }

    /// Find the position of `value` in the index space.
    ///
    /// ## Returns
    /// `None` if `value` is not in the range, or its position
    /// does not fit in the element type.
    fn position_of(
        &self,
        value: Self::Elem,
    ) -> Option<Self::Elem> {
        if !self.contains(value) {
            return None;
        }
        let steps = value.checked_sub(&self.first())?;
        self.first_index().checked_add(&steps)
    }

    /// Build a range of this kind from `r`, preserving both values and indices.
    ///
    /// ## Returns
    /// The converted range, or an error if this kind cannot represent
    /// `r` without moving its index space.
    fn try_convert_from<R: AbstractUnitRange>(r: &R) -> RangeResult<Self>;

    /// Convert this range into a `(parent, offset)` pair over a `P` parent.
    ///
    /// Offset ranges override this to convert their parent and
    /// add their stored offset.
    fn convert_parts<P: AbstractUnitRange>(&self) -> RangeResult<(P, P::Elem)> {
        Ok((P::try_convert_from(self)?, num_traits::zero()))
    }

    /// Coerce this range into a `(parent, offset)` pair over a `P` parent.
    ///
    /// Offset ranges override this to coerce their parent and
    /// add their stored offset.
    fn coerce_parts<P: OffsetCoerce>(&self) -> RangeResult<(P, P::Elem)> {
        P::offset_coerce(self)
    }
}
