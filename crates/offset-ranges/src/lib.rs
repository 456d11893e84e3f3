//! # `offset-ranges` Identity Offset Ranges
//!
//! Unit-stride integer ranges whose index space is shifted from the
//! conventional origin by a constant offset; the axis building block for
//! arrays indexed from, say, ``-2..=5`` rather than ``1..=8``.
//!
//! See:
//! * [`ranges`] for the [`AbstractUnitRange`] capability and the parent kinds
//!   [`UnitRange`] and [`OneTo`].
//! * [`offset`] for [`IdentityOffsetRange`] and [`OffsetCoerce`].
//!
//! ## Example
//!
//! ```rust
//! use offset_ranges::{AbstractUnitRange, IdentityOffsetRange, OneTo, UnitRange};
//!
//! // Values 9..=11 at indices -1..=1.
//! let r = IdentityOffsetRange::new(UnitRange::new(11i64, 13), -2);
//! assert_eq!(r.try_index(-1)?, 9);
//! assert_eq!(r.try_index(1)?, 11);
//! assert!(!r.checkindex(3));
//! assert_eq!(r.to_string(), "9:11");
//!
//! // Value-preserving: the shift of 3..=5 is folded into the offset.
//! let r = IdentityOffsetRange::<i64, OneTo<i64>>::coerce_from(&UnitRange::new(3i64, 5), 0)?;
//! assert_eq!(r.offset(), 2);
//! assert_eq!(r.axes().0, r);
//!
//! // Index-preserving: 3..=5 cannot sit on a one-based parent.
//! assert!(IdentityOffsetRange::<i64, OneTo<i64>>::convert_from(&UnitRange::new(3i64, 5)).is_err());
//! # Ok::<(), offset_ranges::RangeError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod compat;
pub mod errors;
pub mod offset;
pub mod ranges;
pub mod types;

#[doc(inline)]
pub use errors::{RangeError, RangeResult};
#[doc(inline)]
pub use offset::{IdentityOffsetRange, OffsetCoerce, OffsetOneTo, OffsetUnitRange};
#[doc(inline)]
pub use ranges::{AbstractUnitRange, OneTo, RangeKind, UnitRange};
#[doc(inline)]
pub use types::RangeInt;
