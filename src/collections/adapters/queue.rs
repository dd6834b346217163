use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedChain;
#[doc(inline)]
pub use crate::util::error::{AllocError, EmptyCollection};
use crate::util::error::IndexOrAllocError;
use crate::util::result::ResultExtension;

/// A first-in-first-out collection over a [`LinkedChain`]. Values are pushed at the front of the
/// chain and leave from the back.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(n)` |
/// | `peek` | `O(n)` |
///
/// The chain can only be walked forwards from its sentinel, so reaching the oldest element means
/// traversing every other one first.
///
/// # Examples
/// ```
/// # use linear_collections::collections::adapters::Queue;
/// let mut queue = Queue::new();
/// queue.push('a');
/// queue.push('b');
/// assert_eq!(*queue.peek(), 'a');
/// assert_eq!(queue.pop(), 'a');
/// assert_eq!(queue.pop(), 'b');
/// assert!(queue.try_peek().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) chain: LinkedChain<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            chain: LinkedChain::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the node for `value` can't be allocated.
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Adds `value` to the back of the Queue, returning an [`Err`] if it can't be allocated.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the node for `value` can't be allocated.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        match self.chain.try_insert(0, value) {
            Err(IndexOrAllocError::AllocError(err)) => Err(err),
            // Index 0 directly follows the sentinel, so it is never out of bounds.
            _ => Ok(()),
        }
    }

    /// Removes and returns the oldest element.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes and returns the oldest element, or an [`Err`] if the Queue is empty.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        let last = self.chain.len().checked_sub(1).ok_or(EmptyCollection)?;
        self.chain.try_remove(last).map_err(|_| EmptyCollection)
    }

    /// Returns a reference to the oldest element.
    ///
    /// # Panics
    /// Panics if the Queue is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    /// Returns a reference to the oldest element, or an [`Err`] if the Queue is empty.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        let last = self.chain.len().checked_sub(1).ok_or(EmptyCollection)?;
        self.chain.try_get(last).map_err(|_| EmptyCollection)
    }

    /// Drops every element in the Queue.
    pub fn clear(&mut self) {
        self.chain.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("newest_first", &self.chain)
            .finish()
    }
}
