//! Property tests for DynamicArray.

use plain_array_core::{ConsList, DynamicArray, IndexOutOfRange};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64)
}

/// Reference slice bounds: negative counts from the end, then clamp.
fn model_bound(bound: isize, len: usize) -> usize {
    let len = len as isize;
    let resolved = if bound < 0 { len + bound } else { bound };
    resolved.clamp(0, len) as usize
}

proptest! {
    #[test]
    fn set_then_get_returns_written_value(values in values(), index in any::<prop::sample::Index>(), item: i32) {
        prop_assume!(!values.is_empty());
        let i = index.index(values.len()) as isize;
        let array = DynamicArray::from_raw_buffer(values).set(i, item);
        prop_assert_eq!(array.get(i), Ok(&item));
    }

    #[test]
    fn out_of_range_set_leaves_array_unchanged(values in values(), offset in 0isize..1000, negative: bool, item: i32) {
        let len = values.len() as isize;
        let i = if negative { -1 - offset } else { len + offset };
        let array = DynamicArray::from_raw_buffer(values.clone());

        let expected = IndexOutOfRange { index: i, length: values.len() };
        prop_assert_eq!(array.get(i), Err(expected));
        let array = array.set(i, item);
        prop_assert_eq!(array.as_raw_buffer(), values.as_slice());
        prop_assert_eq!(array.get(i), Err(expected));
    }

    #[test]
    fn from_sequence_length_matches(values in values()) {
        let list: ConsList<i32> = values.iter().copied().collect();
        prop_assert_eq!(DynamicArray::from_sequence(list).len(), values.len());
    }

    #[test]
    fn sequence_round_trip(values in values()) {
        let list: ConsList<i32> = values.iter().copied().collect();
        let back: ConsList<i32> = DynamicArray::from_sequence(list.clone()).into_sequence();
        prop_assert_eq!(back, list);
    }

    #[test]
    fn map_identity_is_equal_but_distinct(values in values()) {
        prop_assume!(!values.is_empty());
        let array = DynamicArray::from_raw_buffer(values);
        let copy = array.map(|x| *x);
        prop_assert_eq!(&copy, &array);
        prop_assert_ne!(copy.as_raw_buffer().as_ptr(), array.as_raw_buffer().as_ptr());
    }

    #[test]
    fn fold_symmetry(values in values()) {
        let array = DynamicArray::from_raw_buffer(values);
        let left = array.foldl(ConsList::nil(), |x, acc| ConsList::prepend(*x, acc));
        let right = array.foldr(ConsList::nil(), |x, acc| ConsList::prepend(*x, acc));
        prop_assert_eq!(left.reverse(), right);
    }

    #[test]
    fn slice_matches_model(values in values(), from in -80isize..80, to in -80isize..80) {
        let array = DynamicArray::from_raw_buffer(values.clone());
        let start = model_bound(from, values.len());
        let end = model_bound(to, values.len());
        let expected: &[i32] = if start < end { &values[start..end] } else { &[] };

        let sliced = array.slice(from, to);
        prop_assert_eq!(sliced.as_raw_buffer(), expected);
        let sliced_into = array.slice_into(from, to);
        prop_assert_eq!(sliced_into.as_raw_buffer(), expected);
    }

    #[test]
    fn append_concatenates(a in values(), b in values()) {
        let expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        let left = DynamicArray::from_raw_buffer(a);
        let right = DynamicArray::from_raw_buffer(b);

        let concatenated = left.concat(&right);
        prop_assert_eq!(concatenated.as_raw_buffer(), expected.as_slice());
        prop_assert_eq!(left.append(right).into_raw_buffer(), expected);
    }
}
