use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::raw_buffer::RawBuffer;
#[doc(inline)]
pub use crate::util::error::{
    AllocError, CapacityFull, CapacityOverflow, IndexOutOfBounds, InsertError,
};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

/// A contiguous collection with an explicit capacity, which is only ever increased on request.
///
/// Unlike [`Vec`], inserting into a full GrowableArray doesn't reallocate. Instead, insertion fails
/// with [`CapacityFull`] and the caller decides when to [`extend`](GrowableArray::extend) the
/// capacity. Only the first `len` slots of the buffer hold values, the rest are never exposed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the GrowableArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `extend` | `O(n)`*, `O(1)` |
/// | `search` | `O(n)` |
///
/// \* Growing the buffer may have to move every element into a new allocation.
pub struct GrowableArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> GrowableArray<T> {
    /// Creates a new GrowableArray with length and capacity 0. Nothing is allocated until the
    /// capacity is extended.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<u8> = GrowableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// assert!(arr.is_full());
    /// ```
    pub const fn new() -> GrowableArray<T> {
        GrowableArray {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates a new GrowableArray with capacity exactly equal to `cap`.
    ///
    /// # Panics
    /// Panics if the buffer can't be allocated, see [`try_with_cap`](GrowableArray::try_with_cap).
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<u8> = GrowableArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// assert!(arr.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> GrowableArray<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates a new GrowableArray with capacity exactly equal to `cap`, returning an [`Err`] if
    /// the buffer can't be allocated.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the layout of the buffer would exceed [`isize::MAX`] bytes or
    /// the allocator fails.
    pub fn try_with_cap(cap: usize) -> Result<GrowableArray<T>, AllocError> {
        Ok(GrowableArray {
            buf: RawBuffer::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Returns the number of elements in the GrowableArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots allocated for the GrowableArray.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns true if the GrowableArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every allocated slot holds an element, meaning that the next insertion will
    /// fail.
    pub const fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= len`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe { &*self.buf.slot(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index >= len`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len and all values < len are initialized. The returned reference borrows
        // self mutably, so no other access can occur while it is live.
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(arr.set(1, 20), 2);
    /// assert_eq!(&*arr, &[1, 20, 3]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Overwrites the element at `index`, returning the previous value or an [`Err`] if
    /// `index >= len`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Inserts `value` at `index`, shifting all following elements one slot to the right. An
    /// `index` equal to `len` appends the value.
    ///
    /// # Panics
    /// Panics if the GrowableArray is full or `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(4);
    /// arr.insert(0, 1);
    /// arr.insert(1, 3);
    /// arr.insert(1, 2);
    /// arr.insert(0, 0);
    /// assert_eq!(&*arr, &[0, 1, 2, 3]);
    /// assert!(arr.try_insert(4, 4).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, shifting all following elements one slot to the right. The
    /// GrowableArray is left unchanged if an [`Err`] is returned.
    ///
    /// # Errors
    /// Returns [`CapacityFull`] if `len == cap`, which is checked before the index, or
    /// [`IndexOutOfBounds`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        if self.is_full() {
            return Err(CapacityFull { cap: self.cap() }.into());
        }
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into());
        }

        // SAFETY: len < cap, so the slot at len is allocated and the shifted range [index + 1,
        // len + 1) is in bounds. ptr::copy handles the overlap between source and destination.
        // The slot at index is then overwritten without dropping, because its value has just been
        // moved.
        unsafe {
            let slot = self.buf.slot(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all following elements one slot to the
    /// left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = "Hello!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), '!');
    /// assert_eq!(arr.iter().collect::<String>(), "Hllo");
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, shifting all following elements one slot to the
    /// left. The GrowableArray is left unchanged if an [`Err`] is returned.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value at index is initialized and is moved out before the
        // following len - index - 1 initialized values are shifted over it.
        let value = unsafe {
            let slot = self.buf.slot(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Appends `value` to the end of the GrowableArray.
    ///
    /// # Panics
    /// Panics if the GrowableArray is full.
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Appends `value` to the end of the GrowableArray, returning an [`Err`] if it is full.
    ///
    /// # Errors
    /// Returns [`CapacityFull`] if `len == cap`.
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityFull> {
        if self.is_full() {
            return Err(CapacityFull { cap: self.cap() });
        }
        // SAFETY: len < cap was just checked.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Removes the last element and returns it, or [`None`] if the GrowableArray is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: len has just been decremented, so it indexes the last initialized value,
            // which is forgotten by the buffer as soon as it is read out.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Increases the capacity by exactly `amount` slots, moving all existing elements into the new
    /// buffer. An `amount` of zero does nothing. This is the only way the capacity ever changes.
    ///
    /// # Panics
    /// Panics if the new buffer can't be allocated, see [`try_extend`](GrowableArray::try_extend).
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(1);
    /// arr.push('a');
    /// assert!(arr.try_push('b').is_err());
    ///
    /// arr.extend(2);
    /// assert_eq!(arr.cap(), 3);
    /// arr.push('b');
    /// assert_eq!(&*arr, &['a', 'b']);
    /// ```
    pub fn extend(&mut self, amount: usize) {
        self.try_extend(amount).throw()
    }

    /// Increases the capacity by exactly `amount` slots, returning an [`Err`] if the new buffer
    /// can't be allocated. On failure, the existing buffer and its elements are kept as they were.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the new capacity can't be represented, or an allocation
    /// failure reported by the allocator.
    pub fn try_extend(&mut self, amount: usize) -> Result<(), AllocError> {
        if amount == 0 {
            return Ok(());
        }
        let new_cap = self.cap().checked_add(amount).ok_or(CapacityOverflow)?;
        self.buf.try_grow(new_cap)
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len);
        // Set len first, so that a panicking drop can't lead to a double drop.
        self.len = 0;
        // SAFETY: The first len slots were initialized and are no longer tracked by self.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Writes `value` into the first unused slot.
    ///
    /// # Safety
    /// The GrowableArray must not be full.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that len < cap, so the slot is allocated and
        // currently uninitialized.
        unsafe { self.buf.slot(self.len).write(value) }
        self.len += 1;
    }

    /// Grows the buffer geometrically. Only used when collecting from an iterator, explicit
    /// insertion never grows implicitly.
    ///
    /// # Panics
    /// Panics if the new buffer can't be allocated.
    pub(crate) fn grow(&mut self) {
        let target = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);
        self.extend(target - self.cap());
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Returns the index of the first element equal to `value`, or [`None`] if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<_> = [5, 7, 5].into_iter().collect();
    /// assert_eq!(arr.search(&5), Some(0));
    /// assert_eq!(arr.search(&7), Some(1));
    /// assert_eq!(arr.search(&9), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns true if any element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = GrowableArray::with_cap(iter.size_hint().0);

        for item in iter {
            if arr.is_full() {
                arr.grow();
            }
            // SAFETY: The buffer has just been grown if there was no spare slot.
            unsafe { arr.push_unchecked(item) }
        }

        arr
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        self.clear();
        // The buffer itself is released when self.buf is dropped.
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The buffer is valid for len initialized values. The pointer is nonnull and
        // properly aligned (dangling when nothing is allocated, which is valid for len 0 and for
        // zero-sized types). The borrow checker prevents mutation while the slice is live.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the borrow checker preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for GrowableArray<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for GrowableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// SAFETY: GrowableArrays uniquely own their buffer, so they are safe to Send when T: Send.
unsafe impl<T: Send> Send for GrowableArray<T> {}
// SAFETY: GrowableArray's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that GrowableArray<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for GrowableArray<T> {}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Creates an independent copy with its own buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: arr has the same capacity as self, which holds at least as many values.
            unsafe { arr.push_unchecked(value.clone()) }
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
