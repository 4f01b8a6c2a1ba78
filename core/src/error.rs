//! The error reported by checked array reads.
//!
//! Reads are strict and writes are lenient: [`DynamicArray::get`] is the only
//! operation that fails. Out-of-range writes are ignored and slice bounds are
//! clamped instead.
//!
//! [`DynamicArray::get`]: crate::DynamicArray::get

/// A checked read addressed a position outside `[0, length)`.
///
/// Carries the requested index and the array's length at the time of the
/// read so callers can tell an off-by-one from a negative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("index {index} is out of range for array of length {length}")]
pub struct IndexOutOfRange {
    /// The requested position. May be negative.
    pub index: isize,
    /// Number of elements in the array when the read happened.
    pub length: usize,
}

impl IndexOutOfRange {
    pub fn new(index: isize, length: usize) -> Self {
        Self { index, length }
    }
}

pub type Result<T, E = IndexOutOfRange> = core::result::Result<T, E>;
