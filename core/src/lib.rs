#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Flat, indexable storage for list-shaped sequences.
//!
//! A [`DynamicArray`] is built once from an [`OrderedSequence`], a generator
//! or a raw buffer, then supports O(1) positional reads and writes, amortized
//! O(1) appends, bulk transforms, slicing and concatenation before being
//! converted back to sequence form.
//!
//! ```
//! use plain_array_core::{ConsList, DynamicArray, IndexOutOfRange};
//!
//! let list: ConsList<i32> = [10, 20, 30].into_iter().collect();
//! let array = DynamicArray::from_sequence(list);
//!
//! assert_eq!(array.get(1), Ok(&20));
//! assert_eq!(array.get(3), Err(IndexOutOfRange { index: 3, length: 3 }));
//!
//! let doubled = array.map(|x| x * 2);
//! let back: ConsList<i32> = doubled.into_sequence();
//! assert_eq!(back.iter().copied().collect::<Vec<_>>(), vec![20, 40, 60]);
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod builder;
pub mod error;
pub mod options;
pub mod sequence;

pub use array::DynamicArray;
pub use builder::ArrayBuilder;
pub use error::{IndexOutOfRange, Result};
pub use options::{ArrayOptions, ArrayOptionsOverride, GrowthPolicy};
pub use plain_array_cons_list::ConsList;
pub use sequence::OrderedSequence;
