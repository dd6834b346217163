use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::LinkedChain;
#[doc(inline)]
pub use crate::util::error::{AllocError, EmptyCollection};
use crate::util::error::IndexOrAllocError;
use crate::util::result::ResultExtension;

/// A last-in-first-out collection, which pushes and pops at the front of a [`LinkedChain`].
///
/// Every operation is `O(1)`, because the top of the Stack is always the node directly after the
/// chain's sentinel.
///
/// # Examples
/// ```
/// # use linear_collections::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(*stack.top(), 2);
/// assert_eq!(stack.pop(), 2);
/// assert_eq!(stack.pop(), 1);
/// assert!(stack.try_pop().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) chain: LinkedChain<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            chain: LinkedChain::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Places `value` on top of the Stack.
    ///
    /// # Panics
    /// Panics if the node for `value` can't be allocated.
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Places `value` on top of the Stack, returning an [`Err`] if it can't be allocated.
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

    /// Removes and returns the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes and returns the top element, or an [`Err`] if the Stack is empty.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.chain.try_remove(0).map_err(|_| EmptyCollection)
    }

    /// Returns a reference to the top element.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn top(&self) -> &T {
        self.try_top().throw()
    }

    /// Returns a reference to the top element, or an [`Err`] if the Stack is empty.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn try_top(&self) -> Result<&T, EmptyCollection> {
        self.chain.try_get(0).map_err(|_| EmptyCollection)
    }

    /// Drops every element in the Stack.
    pub fn clear(&mut self) {
        self.chain.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes each value in turn, so the last value yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_down", &self.chain)
            .finish()
    }
}
