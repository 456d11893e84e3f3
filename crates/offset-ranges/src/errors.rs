//! # Error Types

use crate::{alloc::string::String, ranges::RangeKind};

/// Errors from range construction, conversion, and indexing.
///
/// Every variant is a usage error at the call site;
/// none of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A point or slice index fell outside the valid index space.
    #[error("attempt to access {len}-element {parent} at index [{index}]")]
    IndexOutOfBounds {
        /// The rendered parent range that was indexed.
        parent: String,

        /// The length of the parent range.
        len: usize,

        /// The offending position, in the parent's index space.
        index: i128,
    },

    /// A conversion into a one-based range kind from a range that does not start at 1.
    #[error("first element must be 1, got {first}")]
    FirstNotOne {
        /// The first value of the input range.
        first: i128,
    },

    /// No coercion rule exists for the target kind, and direct conversion failed.
    #[error("cannot coerce {from} into a {target} range: {reason}")]
    UnsupportedCoercion {
        /// The rendered input range.
        from: String,

        /// The requested parent range kind.
        target: RangeKind,

        /// The rendered conversion failure.
        reason: String,
    },

    /// Value and index ranges given to a constructor have different lengths.
    #[error("values and indices must have the same length, got {values} and {indices}")]
    LengthMismatch {
        /// The length of the value range.
        values: usize,

        /// The length of the index range.
        indices: usize,
    },

    /// A value is not representable in the target element type.
    #[error("value {value} is not representable as {target}")]
    ElementOverflow {
        /// The value that did not fit.
        value: i128,

        /// The target element type name.
        target: &'static str,
    },

    /// Offset arithmetic overflowed the element type.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),
}

/// Result type for range operations.
pub type RangeResult<T> = core::result::Result<T, RangeError>;
