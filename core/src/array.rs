//! DynamicArray: a flat, indexable buffer backing list-shaped sequences.
//!
//! Sequences are built once (from an ordered sequence, a generator or a raw
//! buffer), then read and written by position, transformed in bulk, sliced
//! and concatenated, and finally converted back to sequence form.
//!
//! # Ownership
//!
//! The buffer is never copied on write. Mutating operations (`set`, `push`,
//! `set_unchecked`) take the array by value and hand back the same buffer:
//!
//! ```
//! use plain_array_core::DynamicArray;
//!
//! let array = DynamicArray::from_raw_buffer(vec![1, 2, 3]);
//! let array = array.set(1, 20).push(4);
//! assert_eq!(array.as_raw_buffer(), &[1, 20, 3, 4]);
//! ```
//!
//! The binding passed in is moved, so a stale alias of the pre-mutation array
//! cannot be observed. Operations that produce a new array (`map`, `slice`,
//! `append`, ...) never share storage with their inputs.
//!
//! # Strict reads, lenient writes
//!
//! | Operation | Out of range |
//! |-----------|--------------|
//! | `get`     | `Err(IndexOutOfRange)` |
//! | `set`     | no-op, array returned unchanged |
//! | `slice`   | bounds clamped |

#![allow(unsafe_code)]

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::slice;

use crate::builder::ArrayBuilder;
use crate::error::{IndexOutOfRange, Result};
use crate::options::ArrayOptions;
use crate::sequence::OrderedSequence;

/// A zero-or-more element buffer with O(1) positional access.
///
/// Valid positions are exactly `[0, len())`; the buffer never has holes.
/// Element order is sequence order and no operation reorders it.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DynamicArray<T> {
    buffer: Vec<T>,
}

// Length is derived from the buffer, not stored next to it.
static_assertions::assert_eq_size!(DynamicArray<u8>, Vec<u8>);

// ============================================================================
// Construction
// ============================================================================

impl<T> DynamicArray<T> {
    /// The empty array. Does not allocate.
    pub const fn empty() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Wrap `buffer` as-is, including an empty one and its capacity.
    pub fn empty_with(buffer: Vec<T>) -> Self {
        Self { buffer }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Build an array of `len` elements where slot `i` holds `generator(i)`.
    ///
    /// The generator runs once per slot in ascending order. A `len` of zero
    /// or less yields the empty array without calling it.
    ///
    /// ```
    /// use plain_array_core::DynamicArray;
    ///
    /// let squares = DynamicArray::initialize(3, |i| i * i);
    /// assert_eq!(squares.as_raw_buffer(), &[0, 1, 4]);
    /// ```
    pub fn initialize(len: isize, mut generator: impl FnMut(usize) -> T) -> Self {
        if len <= 0 {
            tracing::trace!(len, "initialize with non-positive length");
            return Self::empty();
        }
        let len = len.unsigned_abs();
        let mut buffer = Vec::with_capacity(len);
        for index in 0..len {
            buffer.push(generator(index));
        }
        Self { buffer }
    }

    /// Drain `sequence` front to back into a new array.
    pub fn from_sequence<S>(sequence: S) -> Self
    where
        S: OrderedSequence<Item = T>,
    {
        Self::from_sequence_with(sequence, &ArrayOptions::default())
    }

    /// Like [`from_sequence`](Self::from_sequence), sizing the buffer
    /// according to `options`.
    pub fn from_sequence_with<S>(sequence: S, options: &ArrayOptions) -> Self
    where
        S: OrderedSequence<Item = T>,
    {
        let mut builder = ArrayBuilder::new(options);
        let mut rest = sequence;
        while let Some((value, tail)) = rest.uncons() {
            builder.push(value);
            rest = tail;
        }
        builder.finish()
    }

    /// Take ownership of `buffer` without copying it.
    ///
    /// An empty buffer is replaced by [`DynamicArray::empty`], dropping any
    /// capacity it had.
    pub fn from_raw_buffer(buffer: Vec<T>) -> Self {
        if buffer.is_empty() {
            return Self::empty();
        }
        Self { buffer }
    }
}

// ============================================================================
// Indexed access
// ============================================================================

impl<T> DynamicArray<T> {
    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    fn checked_index(&self, index: isize) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&index| index < self.buffer.len())
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] when `index < 0` or `index >= len()`.
    pub fn get(&self, index: isize) -> Result<&T> {
        match self.checked_index(index) {
            // SAFETY: `checked_index` only returns positions below `len()`.
            Some(position) => Ok(unsafe { self.get_unchecked(position) }),
            None => {
                let length = self.len();
                tracing::debug!(index, length, "array read out of range");
                Err(IndexOutOfRange::new(index, length))
            }
        }
    }

    /// The element at `index`, or `None` when out of range.
    pub fn get_opt(&self, index: isize) -> Option<&T> {
        self.checked_index(index)
            // SAFETY: `checked_index` only returns positions below `len()`.
            .map(|position| unsafe { self.get_unchecked(position) })
    }

    /// The element at `index`, or `default` when out of range.
    pub fn get_or<'a>(&'a self, index: isize, default: &'a T) -> &'a T {
        self.get_opt(index).unwrap_or(default)
    }

    /// The element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`. Anything else is undefined behavior.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.buffer.len());
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Replace the element at `index`, reusing this array's buffer.
    ///
    /// An out-of-range `index` is not an error: the array comes back
    /// unchanged and `item` is dropped.
    #[must_use]
    pub fn set(self, index: isize, item: T) -> Self {
        match self.checked_index(index) {
            // SAFETY: `checked_index` only returns positions below `len()`.
            Some(position) => unsafe { self.set_unchecked(position, item) },
            None => {
                tracing::trace!(index, length = self.len(), "ignoring out-of-range write");
                self
            }
        }
    }

    /// [`set`](Self::set) through a unique borrow. Returns whether the
    /// write happened.
    pub fn set_in_place(&mut self, index: isize, item: T) -> bool {
        let Some(position) = self.checked_index(index) else {
            tracing::trace!(index, length = self.len(), "ignoring out-of-range write");
            return false;
        };
        // SAFETY: `checked_index` only returns positions below `len()`.
        unsafe { *self.buffer.get_unchecked_mut(position) = item };
        true
    }

    /// Replace the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below `len()`. Anything else is undefined behavior.
    #[must_use]
    pub unsafe fn set_unchecked(mut self, index: usize, item: T) -> Self {
        debug_assert!(index < self.buffer.len());
        unsafe { *self.buffer.get_unchecked_mut(index) = item };
        self
    }

    /// Append `item` at the end. Amortized O(1), same buffer.
    #[must_use]
    pub fn push(mut self, item: T) -> Self {
        self.buffer.push(item);
        self
    }

    pub fn push_in_place(&mut self, item: T) {
        self.buffer.push(item);
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }
}

// ============================================================================
// Bulk transforms
// ============================================================================

impl<T> DynamicArray<T> {
    /// A new array with `f` applied to every element, in ascending order.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> DynamicArray<U> {
        DynamicArray {
            buffer: self.buffer.iter().map(f).collect(),
        }
    }

    /// Like [`map`](Self::map), with the element's position as first argument.
    pub fn indexed_map<U>(&self, mut f: impl FnMut(usize, &T) -> U) -> DynamicArray<U> {
        DynamicArray {
            buffer: self
                .buffer
                .iter()
                .enumerate()
                .map(|(index, value)| f(index, value))
                .collect(),
        }
    }

    /// [`map`](Self::map) that consumes the array and passes elements by value.
    pub fn map_into<U>(self, f: impl FnMut(T) -> U) -> DynamicArray<U> {
        DynamicArray {
            buffer: self.buffer.into_iter().map(f).collect(),
        }
    }

    pub fn indexed_map_into<U>(self, mut f: impl FnMut(usize, T) -> U) -> DynamicArray<U> {
        DynamicArray {
            buffer: self
                .buffer
                .into_iter()
                .enumerate()
                .map(|(index, value)| f(index, value))
                .collect(),
        }
    }

    /// Fold from the first element to the last.
    ///
    /// `f` receives the element first and the accumulator second:
    /// `f(a[n-1], ... f(a[1], f(a[0], initial)))`.
    ///
    /// ```
    /// use plain_array_core::DynamicArray;
    ///
    /// let words = DynamicArray::from_raw_buffer(vec!["a", "b", "c"]);
    /// let joined = words.foldl(String::new(), |word, acc| acc + *word);
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn foldl<B>(&self, initial: B, mut f: impl FnMut(&T, B) -> B) -> B {
        self.buffer.iter().fold(initial, |acc, value| f(value, acc))
    }

    /// Fold from the last element to the first, with the same argument
    /// order as [`foldl`](Self::foldl).
    ///
    /// ```
    /// use plain_array_core::DynamicArray;
    ///
    /// let words = DynamicArray::from_raw_buffer(vec!["a", "b", "c"]);
    /// let joined = words.foldr(String::new(), |word, acc| acc + *word);
    /// assert_eq!(joined, "cba");
    /// ```
    pub fn foldr<B>(&self, initial: B, mut f: impl FnMut(&T, B) -> B) -> B {
        self.buffer.iter().rfold(initial, |acc, value| f(value, acc))
    }
}

// ============================================================================
// Slicing & concatenation
// ============================================================================

/// Resolve one slice bound: negative counts from the end, and the result
/// is clamped into `[0, len]`.
fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(len)
    }
}

fn clamp_range(from: isize, to: isize, len: usize) -> (usize, usize) {
    let start = clamp_bound(from, len);
    let end = clamp_bound(to, len);
    if usize::try_from(from).ok() != Some(start) || usize::try_from(to).ok() != Some(end) {
        tracing::trace!(from, to, start, end, len, "slice bounds clamped");
    }
    (start, end)
}

impl<T> DynamicArray<T> {
    /// A new array holding the half-open range `[from, to)`.
    ///
    /// Negative bounds count from the end, bounds past either end are
    /// clamped, and an empty or inverted range gives the empty array.
    ///
    /// ```
    /// use plain_array_core::DynamicArray;
    ///
    /// let array = DynamicArray::from_raw_buffer(vec![5, 6, 7]);
    /// assert_eq!(array.slice(1, 100).as_raw_buffer(), &[6, 7]);
    /// assert_eq!(array.slice(-2, -1).as_raw_buffer(), &[6]);
    /// assert!(array.slice(2, 1).is_empty());
    /// ```
    pub fn slice(&self, from: isize, to: isize) -> Self
    where
        T: Clone,
    {
        let (start, end) = clamp_range(from, to, self.len());
        if start >= end {
            return Self::empty();
        }
        Self {
            buffer: self.buffer[start..end].to_vec(),
        }
    }

    /// [`slice`](Self::slice) that consumes the array, keeping its buffer.
    pub fn slice_into(mut self, from: isize, to: isize) -> Self {
        let (start, end) = clamp_range(from, to, self.len());
        if start >= end {
            return Self::empty();
        }
        self.buffer.truncate(end);
        self.buffer.drain(..start);
        self
    }

    /// `self`'s elements followed by `other`'s.
    ///
    /// When either side is empty the other is returned untouched. Otherwise
    /// both buffers are moved into freshly allocated storage of exact size.
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        if self.is_empty() {
            tracing::trace!(len = other.len(), "append onto empty array");
            return other;
        }
        if other.is_empty() {
            tracing::trace!(len = self.len(), "append of empty array");
            return self;
        }
        let mut buffer = Vec::with_capacity(self.len() + other.len());
        buffer.extend(self.buffer);
        buffer.extend(other.buffer);
        Self { buffer }
    }

    /// Borrowing [`append`](Self::append): clones both inputs into a new array.
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut buffer = Vec::with_capacity(self.len() + other.len());
        buffer.extend_from_slice(&self.buffer);
        buffer.extend_from_slice(&other.buffer);
        Self::from_raw_buffer(buffer)
    }
}

// ============================================================================
// Conversion
// ============================================================================

impl<T> DynamicArray<T> {
    /// Convert into an ordered sequence with the same element order.
    ///
    /// The sequence is built by prepending from the last element to the
    /// first, so traversal order matches index order.
    pub fn into_sequence<S>(self) -> S
    where
        S: OrderedSequence<Item = T>,
    {
        self.buffer
            .into_iter()
            .rfold(S::nil(), |tail, value| S::cons(value, tail))
    }

    /// Borrowing [`into_sequence`](Self::into_sequence).
    pub fn to_sequence<S>(&self) -> S
    where
        S: OrderedSequence<Item = T>,
        T: Clone,
    {
        self.buffer
            .iter()
            .rfold(S::nil(), |tail, value| S::cons(value.clone(), tail))
    }

    /// The live buffer. No copy is made.
    pub fn as_raw_buffer(&self) -> &[T] {
        &self.buffer
    }

    pub fn as_raw_buffer_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// Give up the array and return its buffer. No copy is made.
    pub fn into_raw_buffer(self) -> Vec<T> {
        self.buffer
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `index >= len()`, with the [`IndexOutOfRange`] message.
    fn index(&self, index: usize) -> &T {
        match self.buffer.get(index) {
            Some(value) => value,
            None => panic!(
                "{}",
                IndexOutOfRange::new(isize::try_from(index).unwrap_or(isize::MAX), self.len())
            ),
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(buffer: Vec<T>) -> Self {
        Self::from_raw_buffer(buffer)
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.into_raw_buffer()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_raw_buffer(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
