//! # Identity Offset Ranges
//!
//! [`IdentityOffsetRange`] pairs a parent unit range with an integer offset;
//! both its values and its index space are the parent's, shifted by the offset.
//!
//! Two ways to build one from an arbitrary range, which must not be confused:
//! * [`IdentityOffsetRange::coerce_from`] preserves *values*; the index space
//!   may move when the parent kind requires it (see [`OffsetCoerce`]).
//! * [`IdentityOffsetRange::convert_from`] preserves values *and* indices;
//!   and fails when the parent kind cannot do that.

pub mod identity_offset_range;
pub mod offset_coerce;
pub mod offset_iter;

#[doc(inline)]
pub use identity_offset_range::{IdentityOffsetRange, OffsetOneTo, OffsetUnitRange};
#[doc(inline)]
pub use offset_coerce::OffsetCoerce;
#[doc(inline)]
pub use offset_iter::OffsetIter;
