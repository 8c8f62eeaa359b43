// Property tests for bounds enforcement

use boundsafe_foundation::{BoundedArray, RuntimeBoundedArray};
use proptest::prelude::*;

const CAPACITY: usize = 16;

proptest! {
    #[test]
    fn set_then_get_returns_value(index in 0..CAPACITY, value in any::<i32>()) {
        let mut arr = BoundedArray::<i32, CAPACITY>::new().unwrap();
        arr.set(index, value).unwrap();
        prop_assert_eq!(arr.get(index).unwrap(), value);
    }

    #[test]
    fn set_leaves_other_slots_unchanged(index in 0..CAPACITY, value in any::<i32>()) {
        let mut arr = BoundedArray::<i32, CAPACITY>::from_fn(|i| i as i32).unwrap();
        arr.set(index, value).unwrap();
        for (i, &v) in arr.iter().enumerate() {
            if i != index {
                prop_assert_eq!(v, i as i32);
            }
        }
    }

    #[test]
    fn index_past_end_is_rejected(index in CAPACITY..usize::MAX) {
        let mut arr = BoundedArray::<i32, CAPACITY>::new().unwrap();
        let before = arr.clone();
        prop_assert!(arr.get(index).unwrap_err().is_out_of_range());
        prop_assert!(arr.set(index, 1).unwrap_err().is_out_of_range());
        prop_assert_eq!(arr, before);
    }

    #[test]
    fn negative_index_is_rejected(index in i64::MIN..0i64) {
        let mut arr = BoundedArray::<i32, CAPACITY>::new().unwrap();
        prop_assert!(arr.get(index).unwrap_err().is_out_of_range());
        prop_assert!(arr.set(index, 1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn runtime_array_respects_requested_capacity(capacity in 1usize..256, index in any::<i16>()) {
        let mut arr = RuntimeBoundedArray::<u8>::new(capacity).unwrap();
        let in_range = usize::try_from(index).is_ok_and(|i| i < capacity);
        prop_assert_eq!(arr.set(index, 7).is_ok(), in_range);
        if in_range {
            prop_assert_eq!(arr.get(index), Ok(7));
        } else {
            prop_assert!(arr.get(index).unwrap_err().is_out_of_range());
            prop_assert!(arr.iter().all(|&v| v == 0));
        }
        prop_assert_eq!(arr.capacity(), capacity);
    }

    #[test]
    fn runtime_set_then_get_returns_value(
        capacity in 1usize..256,
        offset in any::<usize>(),
        value in any::<i64>(),
    ) {
        let index = offset % capacity;
        let mut arr = RuntimeBoundedArray::<i64>::new(capacity).unwrap();
        prop_assert_eq!(arr.set(index, value), Ok(0));
        prop_assert_eq!(arr.get(index), Ok(value));
    }

    #[test]
    fn non_positive_capacity_is_rejected(capacity in i32::MIN..=0i32) {
        let err = RuntimeBoundedArray::<u8>::new(capacity).unwrap_err();
        prop_assert!(err.is_invalid_capacity());
    }
}
