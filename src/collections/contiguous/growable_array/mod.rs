//! A module containing [`GrowableArray`] and its tests.
//!
//! Borrowed iteration is provided by [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`], through `Deref<Target = [T]>`.

mod growable_array;
mod tests;

pub use growable_array::*;
