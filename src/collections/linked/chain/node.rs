use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::AllocFailure;

/// A forward link. [`None`] is the terminal marker after the last node.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// NOTE: Each node owns its successor through a Box, so dropping a link releases the entire rest of
// the chain. LinkedChain unlinks nodes one at a time instead, to avoid recursing once per node.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    /// Moves `value` into a new heap allocated node without a successor.
    ///
    /// Unlike [`Box::new`], which aborts when the allocator fails, this reports the failure so that
    /// it can be returned to the caller.
    pub fn try_boxed(value: T) -> Result<Box<Node<T>>, AllocFailure> {
        let layout = Layout::new::<Node<T>>();

        // SAFETY: Node always contains a link, so the layout is never zero-sized.
        let raw = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();
        let ptr = NonNull::new(raw).ok_or(AllocFailure { bytes: layout.size() })?;

        // SAFETY: ptr was just allocated by the global allocator with the layout of Node<T>, so it
        // is valid for writes and properly aligned. Once written, it holds an initialized Node<T>,
        // which is exactly what Box::from_raw requires to take ownership of it.
        unsafe {
            ptr.as_ptr().write(Node { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}
