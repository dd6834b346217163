#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn filled(values: &[i32], cap: usize) -> GrowableArray<i32> {
    let mut arr = GrowableArray::with_cap(cap);
    for value in values {
        arr.push(*value);
    }
    arr
}

#[test]
fn test_insert_shifts_right() {
    let mut arr = filled(&[1, 2, 3], 6);

    arr.insert(1, 10);
    assert_eq!(&*arr, &[1, 10, 2, 3], "Elements from the index onwards should shift right.");
    assert_eq!(*arr.get(1), 10);

    arr.insert(4, 20);
    assert_eq!(&*arr, &[1, 10, 2, 3, 20], "Inserting at len should append.");

    arr.insert(0, 30);
    assert_eq!(&*arr, &[30, 1, 10, 2, 3, 20]);
    assert_eq!(arr.len(), 6);
    assert!(arr.is_full());
}

#[test]
fn test_insert_failures_leave_array_untouched() {
    let mut arr = filled(&[1, 2], 3);

    assert_eq!(
        arr.try_insert(3, 9),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 3, len: 2 })),
        "Inserting past len should fail."
    );
    assert_eq!(&*arr, &[1, 2]);

    arr.insert(2, 3);
    assert_eq!(
        arr.try_insert(0, 0),
        Err(InsertError::CapacityFull(CapacityFull { cap: 3 })),
        "Inserting into a full array should fail rather than grow."
    );
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.cap(), 3);
    assert_eq!(&*arr, &[1, 2, 3]);

    assert!(
        arr.try_insert(10, 0).unwrap_err().is_capacity_full(),
        "Capacity should be checked before the index."
    );

    assert_panics!({
        let mut arr = filled(&[1], 1);
        arr.insert(0, 0);
    });
}

#[test]
fn test_remove_shifts_left() {
    let mut arr = filled(&[1, 2, 3, 4, 5], 5);

    assert_eq!(arr.remove(1), 2);
    assert_eq!(&*arr, &[1, 3, 4, 5], "Elements after the index should shift left.");

    assert_eq!(arr.remove(3), 5);
    assert_eq!(arr.remove(0), 1);
    assert_eq!(&*arr, &[3, 4]);
    assert_eq!(arr.cap(), 5, "Removal should never change the capacity.");

    assert_eq!(
        arr.try_remove(2),
        Err(IndexOutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(&*arr, &[3, 4]);

    let mut empty = GrowableArray::<u8>::with_cap(2);
    assert!(empty.try_remove(0).is_err(), "Removing from an empty array should fail.");
}

#[test]
fn test_get_and_set() {
    let mut arr = filled(&[4, 5, 6], 4);

    assert_eq!(*arr.get(2), 6);
    assert_eq!(arr.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    assert_eq!(arr.set(0, 40), 4);
    *arr.get_mut(1) *= 10;
    assert_eq!(&*arr, &[40, 50, 6]);

    assert!(
        arr.try_set(3, 0).is_err(),
        "Spare capacity should never be reachable through set."
    );
    assert_eq!(arr.len(), 3);

    assert_panics!({
        let arr = filled(&[1], 2);
        arr.get(1);
    });
}

#[test]
fn test_extend() {
    let mut arr = filled(&[1, 2, 3], 3);
    assert!(arr.is_full());

    arr.extend(0);
    assert_eq!(arr.cap(), 3, "Extending by zero should do nothing.");

    arr.extend(4);
    assert_eq!(arr.cap(), 7, "Capacity should grow by exactly the requested amount.");
    assert_eq!(arr.len(), 3);
    assert_eq!(&*arr, &[1, 2, 3], "Existing elements should survive reallocation.");
    assert!(!arr.is_full());

    let mut empty = GrowableArray::<String>::new();
    empty.extend(2);
    empty.push(String::from("a"));
    assert_eq!(empty.cap(), 2);
    assert_eq!(empty[0], "a");
}

#[test]
fn test_extend_overflow() {
    let mut arr = filled(&[1, 2], 2);

    assert_eq!(
        arr.try_extend(usize::MAX),
        Err(AllocError::CapacityOverflow(CapacityOverflow)),
        "Capacity that can't be represented should be reported."
    );
    assert!(
        arr.try_extend(isize::MAX as usize).unwrap_err().is_capacity_overflow(),
        "A layout larger than isize::MAX bytes should be reported."
    );
    assert_eq!(arr.cap(), 2, "A failed extend should keep the old buffer.");
    assert_eq!(&*arr, &[1, 2]);

    assert!(GrowableArray::<u64>::try_with_cap(usize::MAX).is_err());
}

#[test]
fn test_search() {
    let arr = filled(&[3, 1, 4, 1, 5], 8);

    assert_eq!(arr.search(&1), Some(1), "The lowest matching index should be returned.");
    assert_eq!(arr.search(&5), Some(4));
    assert_eq!(arr.search(&9), None);
    assert!(arr.contains(&4));

    let mut arr = filled(&[7], 2);
    arr.remove(0);
    assert_eq!(arr.search(&7), None, "Removed values should not be found.");
}

#[test]
fn test_push_and_pop() {
    let mut arr = GrowableArray::with_cap(2);
    arr.push('a');
    arr.push('b');
    assert_eq!(arr.try_push('c'), Err(CapacityFull { cap: 2 }));

    assert_eq!(arr.pop(), Some('b'));
    assert_eq!(arr.pop(), Some('a'));
    assert_eq!(arr.pop(), None);
    assert!(arr.is_empty());
}

#[test]
fn test_clone_independence() {
    let original = filled(&[1, 2, 3], 5);
    let mut copy = original.clone();

    assert_eq!(copy, original, "A clone should be equal before mutation.");
    assert_eq!(copy.cap(), original.cap());
    assert_ne!(
        copy.as_ptr(),
        original.as_ptr(),
        "A clone should own a separate buffer."
    );

    copy.set(0, 100);
    copy.remove(2);
    copy.extend(3);
    assert_eq!(&*original, &[1, 2, 3], "Mutating a clone should never change the original.");
    assert_eq!(original.cap(), 5);
    assert_eq!(&*copy, &[100, 2]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut arr = GrowableArray::with_cap(10);
    for _ in 0..10 {
        arr.push(counter.clone());
    }

    drop(arr.remove(3));
    assert_eq!(counter.count(), 1, "A removed element should be dropped by its new owner.");

    drop(arr.set(0, counter.clone()));
    assert_eq!(counter.count(), 2, "An overwritten element should be dropped exactly once.");

    arr.extend(5);
    assert_eq!(counter.count(), 2, "Growing should move elements, not drop them.");

    drop(arr);
    assert_eq!(counter.count(), 11, "Every remaining element should be dropped once.");
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut arr: GrowableArray<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let cap = arr.cap();

    arr.clear();
    assert_eq!(counter.count(), 4);
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), cap, "Clearing should keep the capacity.");

    arr.clear();
    assert!(arr.is_empty(), "Clearing an empty array should succeed.");
    assert_eq!(counter.count(), 4);
}

#[test]
fn test_zst_support() {
    let mut arr = GrowableArray::<ZeroSizedType>::with_cap(3);
    for _ in 0..3 {
        arr.push(ZeroSizedType);
    }
    assert!(arr.is_full());

    arr.extend(usize::MAX - 3);
    assert_eq!(arr.cap(), usize::MAX, "Zero-sized types never need an allocation.");

    arr.insert(1, ZeroSizedType);
    assert_eq!(arr.remove(0), ZeroSizedType);
    assert_eq!(arr.len(), 3);
}

#[test]
fn test_collect_and_format() {
    let arr: GrowableArray<_> = (0_u8..10).collect();
    assert_eq!(arr.len(), 10);
    assert!(arr.cap() >= 10, "Collecting should grow as needed.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let arr: GrowableArray<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
    assert_eq!(
        format!("{arr:?}"),
        "GrowableArray { contents: [1, 2, 3], len: 3, cap: 3 }"
    );

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(filled(&[1, 2, 3], 10)),
        "Equal contents should produce the same hash regardless of capacity."
    );
}
