//! # Unit Ranges
//!
//! This module provides the unit-stride range capability, and the two
//! canonical parent range kinds:
//! * [`UnitRange`] - ``start..=stop``; may start anywhere; indexed ``1..=len``.
//! * [`OneTo`] - ``1..=n``; its own index space.
//!
//! Offset ranges over these kinds live in [`crate::offset`].

pub mod abstract_range;
pub mod one_to;
pub mod range_iter;
pub mod unit_range;

#[doc(inline)]
pub use abstract_range::{AbstractUnitRange, RangeKind};
#[doc(inline)]
pub use one_to::OneTo;
#[doc(inline)]
pub use range_iter::UnitRangeIter;
#[doc(inline)]
pub use unit_range::UnitRange;
