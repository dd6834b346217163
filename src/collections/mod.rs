//! The linear collection types.
//!
//! # Purpose
//! Two independent storage engines, and the adapters built on one of them:
//! - [`contiguous`]: [`GrowableArray`](contiguous::GrowableArray), a single buffer with an explicit
//!   capacity.
//! - [`linked`]: [`LinkedChain`](linked::LinkedChain), a chain of individually owned nodes.
//! - [`adapters`]: [`Stack`](adapters::Stack) and [`Queue`](adapters::Queue), which restrict a
//!   LinkedChain to push / pop access.
//!
//! # Method
//! [`GrowableArray`](contiguous::GrowableArray) implements [`Deref<Target = [T]>`](std::ops::Deref)
//! (and DerefMut), which saves rewriting slice functionality such as iteration and sorting.

#[cfg(feature = "adapters")]
#[cfg_attr(docsrs, doc(cfg(feature = "adapters")))]
pub mod adapters;
#[cfg(feature = "contiguous")]
#[cfg_attr(docsrs, doc(cfg(feature = "contiguous")))]
pub mod contiguous;
#[cfg(feature = "linked")]
#[cfg_attr(docsrs, doc(cfg(feature = "linked")))]
pub mod linked;
