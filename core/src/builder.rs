use alloc::vec::Vec;

use crate::array::DynamicArray;
use crate::options::{ArrayOptions, GrowthPolicy};

/// Write-once construction of a [`DynamicArray`].
///
/// Elements are appended in order and the buffer grows according to the
/// [`GrowthPolicy`] in the options. Nothing can be read back until
/// [`finish`](Self::finish) hands over the array.
#[derive(Debug)]
pub struct ArrayBuilder<T> {
    buffer: Vec<T>,
    growth: GrowthPolicy,
}

impl<T> ArrayBuilder<T> {
    pub fn new(options: &ArrayOptions) -> Self {
        Self {
            buffer: Vec::with_capacity(options.initial_capacity),
            growth: options.growth,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.buffer.len() == self.buffer.capacity() {
            self.grow();
        }
        self.buffer.push(value);
    }

    #[cold]
    fn grow(&mut self) {
        match self.growth {
            GrowthPolicy::Doubling => self.buffer.reserve(1),
            GrowthPolicy::Exact => self.buffer.reserve_exact(1),
            GrowthPolicy::Chunked(chunk) => self.buffer.reserve_exact(chunk.max(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Hand over the built array. An empty builder yields
    /// [`DynamicArray::empty`] and releases any reserved capacity.
    pub fn finish(self) -> DynamicArray<T> {
        DynamicArray::from_raw_buffer(self.buffer)
    }
}

impl<T> Default for ArrayBuilder<T> {
    fn default() -> Self {
        Self::new(&ArrayOptions::default())
    }
}

impl<T> Extend<T> for ArrayBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn options(initial_capacity: usize, growth: GrowthPolicy) -> ArrayOptions {
        ArrayOptions {
            initial_capacity,
            growth,
        }
    }

    #[test]
    fn test_builder_keeps_push_order() {
        let mut builder = ArrayBuilder::default();
        builder.extend([3, 1, 2]);
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.finish().into_raw_buffer(), vec![3, 1, 2]);
    }

    #[test]
    fn test_initial_capacity_is_reserved() {
        let builder = ArrayBuilder::<u32>::new(&options(10, GrowthPolicy::Doubling));
        assert!(builder.is_empty());
        assert!(builder.capacity() >= 10);
    }

    #[test]
    fn test_exact_growth() {
        let mut builder = ArrayBuilder::new(&options(0, GrowthPolicy::Exact));
        for i in 0..5u32 {
            builder.push(i);
            assert!(builder.capacity() >= builder.len());
        }
        assert_eq!(builder.finish().into_raw_buffer(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_chunked_growth() {
        let mut builder = ArrayBuilder::new(&options(0, GrowthPolicy::Chunked(4)));
        builder.push(1u32);
        let first = builder.capacity();
        assert!(first >= 4);
        // A whole chunk was reserved up front, so filling it does not grow.
        builder.extend(2..=first as u32);
        assert_eq!(builder.capacity(), first);
        builder.push(first as u32 + 1);
        assert!(builder.capacity() >= first + 4);
    }

    #[test]
    fn test_zero_chunk_still_grows() {
        let mut builder = ArrayBuilder::new(&options(0, GrowthPolicy::Chunked(0)));
        builder.extend([1u8, 2, 3]);
        assert_eq!(builder.len(), 3);
        assert!(builder.capacity() >= 3);
    }

    #[test]
    fn test_empty_builder_finishes_empty() {
        let builder = ArrayBuilder::<u64>::new(&options(32, GrowthPolicy::Doubling));
        let array = builder.finish();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 0);
    }
}
