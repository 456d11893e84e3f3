//! # Offset Coercion
//!
//! Rebuilding a range on top of a given parent kind, preserving values.
//!
//! Each parent kind picks its rule by implementing [`OffsetCoerce`]:
//! * [`UnitRange`] - reinterpret the element type; residual offset 0.
//! * [`OneTo`] - restart at 1; the dropped shift becomes the residual offset.
//! * [`IdentityOffsetRange`] - coerce into the inner parent kind, keep the
//!   residual as the inner offset; residual offset 0.
//!
//! Kinds without a rule of their own get the fallback: direct conversion
//! with residual offset 0, or [`RangeError::UnsupportedCoercion`].

use crate::{
    alloc::string::ToString,
    errors::{RangeError, RangeResult},
    offset::IdentityOffsetRange,
    ranges::{AbstractUnitRange, OneTo, UnitRange},
    types::{RangeInt, cast_elem},
};

/// A parent range kind that ranges can be coerced into.
pub trait OffsetCoerce: AbstractUnitRange {
    /// Rebuild `r` as this kind, preserving its values.
    ///
    /// ## Returns
    /// ``(coerced, residual)``, such that the values of `coerced`
    /// shifted by `residual` are the values of `r`.
    fn offset_coerce<R: AbstractUnitRange>(r: &R) -> RangeResult<(Self, Self::Elem)> {
        match Self::try_convert_from(r) {
            Ok(coerced) => Ok((coerced, num_traits::zero())),
            Err(err) => Err(RangeError::UnsupportedCoercion {
                from: r.to_string(),
                target: Self::KIND,
                reason: err.to_string(),
            }),
        }
    }
}

impl<T: RangeInt> OffsetCoerce for UnitRange<T> {
    fn offset_coerce<R: AbstractUnitRange>(r: &R) -> RangeResult<(Self, T)> {
        Ok((Self::try_convert_from(r)?, T::zero()))
    }
}

impl<T: RangeInt> OffsetCoerce for OneTo<T> {
    fn offset_coerce<R: AbstractUnitRange>(r: &R) -> RangeResult<(Self, T)> {
        let first: T = cast_elem(r.first())?;
        let last: T = cast_elem(r.last())?;

        let shift = first
            .checked_sub(&T::one())
            .ok_or(RangeError::ArithmeticOverflow("one-based shift"))?;
        let stop = last
            .checked_sub(&shift)
            .ok_or(RangeError::ArithmeticOverflow("one-based shift"))?;

        if shift != T::zero() {
            log::trace!("folding shift {shift} of {r} into the offset");
        }
        Ok((Self::new(stop), shift))
    }
}

impl<T, P> OffsetCoerce for IdentityOffsetRange<T, P>
where
    T: RangeInt,
    P: OffsetCoerce<Elem = T>,
{
    fn offset_coerce<R: AbstractUnitRange>(r: &R) -> RangeResult<(Self, T)> {
        let (inner, residual) = r.coerce_parts::<P>()?;
        Ok((Self::try_new(inner, residual)?, T::zero()))
    }
}
