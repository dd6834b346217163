//! Contiguous collection types. Namely [`GrowableArray`], a buffer of live elements followed by
//! spare capacity that only grows when asked to.
#![warn(missing_docs)]

pub mod growable_array;
pub(crate) mod raw_buffer;

#[doc(inline)]
pub use growable_array::GrowableArray;
