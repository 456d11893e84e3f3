//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{PrimInt, Signed};

use crate::errors::{RangeError, RangeResult};

/// A type that can be used as the element type of a unit range.
///
/// These are constrained to be signed primitive integers;
/// offsets may be negative, and are stored in the element type.
pub trait RangeInt:
    'static + PrimInt + Signed + Hash + Default + Debug + Display + Send + Sync
{
}

impl<T> RangeInt for T where
    T: 'static + PrimInt + Signed + Hash + Default + Debug + Display + Send + Sync
{
}

/// Widen a value to `i128` for diagnostics.
///
/// Every [`RangeInt`] fits in an `i128`.
pub fn wide<T: RangeInt>(value: T) -> i128 {
    // Signed primitives are at most 128 bits; `to_i128` is always `Some`.
    value.to_i128().unwrap_or_default()
}

/// Reinterpret a value as a different element type.
///
/// ## Returns
/// The same value in `T`, or [`RangeError::ElementOverflow`]
/// if `T` cannot represent it.
pub fn cast_elem<S, T>(value: S) -> RangeResult<T>
where
    S: RangeInt,
    T: RangeInt,
{
    num_traits::cast::<S, T>(value).ok_or(RangeError::ElementOverflow {
        value: wide(value),
        target: core::any::type_name::<T>(),
    })
}
