//! The error types returned by the `try_*` methods of every collection.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the range that an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was provided.
    pub index: usize,
    /// The number of elements in the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An insertion was attempted into a collection with no spare capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityFull {
    /// The capacity of the full collection.
    pub cap: usize,
}

impl Display for CapacityFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Collection is full, all {} slots are in use!", self.cap)
    }
}

impl Error for CapacityFull {}

/// An element was requested from a collection that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection is empty!")]
pub struct EmptyCollection;

/// The requested capacity can't be represented as a valid memory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator refused to provide memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Failed to allocate {bytes} bytes!")]
pub struct AllocFailure {
    /// The size of the rejected allocation.
    pub bytes: usize,
}

/// Any failure to acquire memory for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`AllocFailure`].
    AllocFailure(AllocFailure),
}

/// Errors from inserting into a fixed capacity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityFull`].
    CapacityFull(CapacityFull),
}

/// Errors from inserting into a node-based collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrAllocError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`AllocError`].
    AllocError(AllocError),
}
