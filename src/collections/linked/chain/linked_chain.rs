use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use super::{Iter, IterMut, Link, Node};
#[doc(inline)]
pub use crate::util::error::{AllocError, IndexOrAllocError, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A singly linked list, where values are stored in a chain of nodes that starts at a sentinel
/// link.
///
/// The sentinel is the chain's own head link. It never holds a value, so inserting or removing at
/// index 0 relinks the sentinel in exactly the same way as any other preceding node. Each node
/// exclusively owns the node after it, and the last node ends with the terminal [`None`] link.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedChain.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `find` | `O(n)` |
/// | `traverse` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Only forward traversal is possible, so anything at the end of the chain costs `O(n)` to reach.
pub struct LinkedChain<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

/// A logical position that a node can be located at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    /// The sentinel, which precedes index 0.
    Sentinel,
    Node(usize),
}

impl Position {
    /// Returns the position immediately preceding `index`.
    pub const fn before(index: usize) -> Position {
        match index.checked_sub(1) {
            Some(prev) => Position::Node(prev),
            None => Position::Sentinel,
        }
    }
}

impl<T> LinkedChain<T> {
    /// Creates a new LinkedChain with no elements, just the sentinel.
    pub const fn new() -> LinkedChain<T> {
        LinkedChain {
            head: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the LinkedChain.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedChain contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
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
        self.locate(Position::before(index))
            .and_then(|link| link.as_deref())
            .map(|node| &node.value)
            .ok_or(IndexOutOfBounds { index, len: self.len })
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
        let len = self.len;
        self.locate_mut(Position::before(index))
            .and_then(|link| link.as_deref_mut())
            .map(|node| &mut node.value)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Inserts `value` so that it ends up at `index`, linking it between the preceding node (or the
    /// sentinel) and that node's former successor. An `index` equal to `len` appends the value.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the node can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedChain;
    /// let mut chain = LinkedChain::new();
    /// chain.insert(0, 'b');
    /// chain.insert(0, 'a');
    /// chain.insert(2, 'd');
    /// chain.insert(2, 'c');
    /// assert_eq!(chain.to_string(), "('a') -> ('b') -> ('c') -> ('d')");
    /// assert!(chain.try_insert(5, 'f').is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`. The LinkedChain is left unchanged if an
    /// [`Err`] is returned.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, or an [`AllocError`] if the new node can't be
    /// allocated.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrAllocError> {
        let len = self.len;
        let Some(link) = self.locate_mut(Position::before(index)) else {
            return Err(IndexOutOfBounds { index, len }.into());
        };

        let mut node = Node::try_boxed(value).map_err(AllocError::from)?;
        node.next = link.take();
        *link = Some(node);
        self.len += 1;

        Ok(())
    }

    /// Unlinks the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedChain;
    /// let mut chain: LinkedChain<_> = (1..=4).collect();
    /// assert_eq!(chain.remove(1), 2);
    /// assert_eq!(chain.remove(2), 4);
    /// assert_eq!(chain.to_string(), "(1) -> (3)");
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Unlinks the element at `index` and returns it. The LinkedChain is left unchanged if an
    /// [`Err`] is returned.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let error = IndexOutOfBounds { index, len: self.len };

        let Some(link) = self.locate_mut(Position::before(index)) else {
            return Err(error);
        };
        // The preceding node exists but may be the last one, in which case there is nothing to
        // remove.
        let Some(mut node) = link.take() else {
            return Err(error);
        };
        *link = node.next.take();
        self.len -= 1;

        Ok(node.value)
    }

    /// Drops every element, leaving only the sentinel. Clearing an empty LinkedChain does nothing.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        self.len = 0;

        // Unlink one node at a time, so that dropping a long chain doesn't recurse.
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Calls `visit` with each element in order, from the front of the LinkedChain to the back.
    ///
    /// The LinkedChain is borrowed for the whole traversal, so `visit` can't modify its structure.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedChain;
    /// let chain: LinkedChain<_> = [3, 1, 2].into_iter().collect();
    /// let mut seen = String::new();
    /// chain.traverse(|value| seen.push_str(&value.to_string()));
    /// assert_eq!(seen, "312");
    /// ```
    pub fn traverse<F: FnMut(&T)>(&self, mut visit: F) {
        for value in self.iter() {
            visit(value);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedChain<T> {
    /// Returns the index of the first element equal to `value`, or [`None`] if there isn't one.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> LinkedChain<T> {
    /// Locates the forward link owned by the node at `position`, which points at the node after
    /// it. Locating the sentinel returns the head link. Returns [`None`] if there is no node at
    /// `position`.
    pub(crate) fn locate(&self, position: Position) -> Option<&Link<T>> {
        let steps = match position {
            Position::Sentinel => 0,
            Position::Node(index) if index < self.len => index + 1,
            Position::Node(_) => return None,
        };

        let mut link = &self.head;
        for _ in 0..steps {
            link = &link.as_ref()?.next;
        }
        Some(link)
    }

    /// A mutable version of [`locate`](LinkedChain::locate), allowing the returned link to be
    /// relinked.
    pub(crate) fn locate_mut(&mut self, position: Position) -> Option<&mut Link<T>> {
        let steps = match position {
            Position::Sentinel => 0,
            Position::Node(index) if index < self.len => index + 1,
            Position::Node(_) => return None,
        };

        let mut link = &mut self.head;
        for _ in 0..steps {
            match link {
                Some(node) => link = &mut node.next,
                None => return None,
            }
        }
        Some(link)
    }

    /// Appends every value from `iter` after the last node.
    ///
    /// # Panics
    /// Panics if a node can't be allocated.
    pub(crate) fn append_all<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;
        for _ in 0..self.len {
            match tail {
                Some(node) => tail = &mut node.next,
                None => break,
            }
        }

        for value in iter {
            let node = tail.insert(Node::try_boxed(value).throw());
            tail = &mut node.next;
            self.len += 1;
        }
    }

    /// Checks that the number of reachable nodes matches len.
    #[cfg(test)]
    pub(crate) fn verify_len(&self) {
        let mut count = 0;
        let mut link = &self.head;
        while let Some(node) = link {
            count += 1;
            link = &node.next;
        }
        assert_eq!(count, self.len, "Reachable nodes should match the recorded length.");
    }
}

impl<T> FromIterator<T> for LinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = LinkedChain::new();
        chain.append_all(iter);
        chain
    }
}

impl<T> Extend<T> for LinkedChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T> Default for LinkedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedChain<T> {
    /// Duplicates every node in order, producing a chain that shares nothing with self.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

impl<T: PartialEq> PartialEq for LinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedChain<T> {}

impl<T: Hash> Hash for LinkedChain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedChain")
            .field("contents", &DebugValues(self))
            .field("len", &self.len)
            .finish()
    }
}

struct DebugValues<'a, T>(&'a LinkedChain<T>);

impl<T: Debug> Debug for DebugValues<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
