//! PlainArray - flat, indexable storage for list-shaped sequences
//!
//! # Overview
//!
//! Immutable sequences whose canonical form is a singly-linked list are cheap
//! to prepend to and walk, but slow to index, update, slice or concatenate.
//! PlainArray is the random-access backing store for those operations: build
//! a [`DynamicArray`] once, work on it by position, then hand it back as a
//! list.
//!
//! # Quick Start
//!
//! ```
//! use plain_array::{ConsList, DynamicArray};
//!
//! // Build from a list
//! let list: ConsList<i32> = [1, 2, 3].into_iter().collect();
//! let array = DynamicArray::from_sequence(list);
//!
//! // Positional work
//! let array = array.set(0, 10).push(4);
//! assert_eq!(array.get(0), Ok(&10));
//! assert!(array.get(10).is_err());
//!
//! // Bulk transforms
//! let total = array.foldl(0, |x, acc| acc + x);
//! assert_eq!(total, 19);
//!
//! // Back to a list, same order
//! let back: ConsList<i32> = array.slice(1, -1).into_sequence();
//! assert_eq!(back.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```
//!
//! # Strict Reads, Lenient Writes
//!
//! Only [`DynamicArray::get`] fails, with [`IndexOutOfRange`]. Out-of-range
//! writes are ignored and slice bounds are clamped.
//!
//! # Unchecked Access
//!
//! [`DynamicArray::get_unchecked`] and [`DynamicArray::set_unchecked`] skip
//! the bounds check and are `unsafe`. Prefer the checked forms unless the
//! index has already been validated.

// Re-export the array API from plain_array_core
pub use plain_array_core::{
    ArrayBuilder, ArrayOptions, ArrayOptionsOverride, DynamicArray, GrowthPolicy,
    IndexOutOfRange, OrderedSequence, Result,
};

// Re-export the reference list collaborator
pub use plain_array_cons_list::{self as cons_list, ConsList};
