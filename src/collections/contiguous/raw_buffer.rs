use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{AllocError, AllocFailure, CapacityOverflow};

/// An owned allocation of `cap` slots of `T`, similar to a `Box<[MaybeUninit<T>]>`.
///
/// The buffer never reads, writes or drops its slots. Tracking which slots hold initialized values
/// is entirely the responsibility of the owner, and all live values must be dropped by the owner
/// before the buffer itself is dropped.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a buffer with no slots. Nothing is allocated.
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a buffer with exactly `cap` uninitialized slots.
    pub fn try_with_cap(cap: usize) -> Result<RawBuffer<T>, AllocError> {
        let mut buf = RawBuffer::new();
        buf.try_grow(cap)?;
        Ok(buf)
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to `cap`. A pointer produced for `index == cap` is one
    /// past the end of the allocation and can't be read or written.
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index is within (or one past) the allocation, whose
        // size in bytes is no greater than isize::MAX.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Grows the buffer to hold `new_cap` slots, moving the contents of all existing slots into the
    /// new allocation and releasing the old one. On failure, the buffer is left untouched.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the new allocation would exceed [`isize::MAX`] bytes, or
    /// [`AllocFailure`] if the allocator can't provide the memory.
    pub fn try_grow(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.cap, "RawBuffer can only grow");

        let new_layout = Self::make_layout(new_cap)?;

        let new_ptr = match (self.cap, new_cap) {
            (old, new) if old == new => return Ok(()),
            // Zero-sized types never need memory, only the capacity changes.
            _ if new_layout.size() == 0 => self.ptr,
            (0, _) => {
                // SAFETY: new_layout has a non-zero size, zero-sized layouts are handled above.
                let raw = unsafe { alloc::alloc(new_layout) };
                Self::wrap_ptr(raw, new_layout)?
            },
            (old, _) => {
                let old_layout = Self::make_layout(old)?;

                // SAFETY: ptr was allocated by the global allocator with old_layout, which has a
                // non-zero size because old > 0 and T isn't zero-sized. The new size is non-zero
                // and was checked to be <= isize::MAX when building new_layout.
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };
                Self::wrap_ptr(raw, new_layout)?
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    fn wrap_ptr(raw: *mut u8, layout: Layout) -> Result<NonNull<T>, AllocFailure> {
        NonNull::new(raw.cast()).ok_or(AllocFailure { bytes: layout.size() })
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        match Self::make_layout(self.cap) {
            Ok(layout) if layout.size() != 0 => {
                // SAFETY: ptr is always allocated in the global allocator with this layout when
                // the layout has a non-zero size. Zero-sized layouts are never allocated.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            },
            // A layout for the current capacity was valid when it was allocated, so the error
            // branch can't be reached.
            _ => {},
        }
    }
}
