//! A small library of fundamental linear data structures: a bounds-checked array that only grows
//! when asked to, a singly linked list with a sentinel head, and a stack and queue built on top of
//! that list.
//!
//! # Purpose
//! This crate is a teaching-grade container toolkit, written to understand how the invariants of a
//! collection are upheld rather than to compete with [`std::collections`]. The interesting part is
//! the bookkeeping shared by [`GrowableArray`](collections::contiguous::GrowableArray) (capacity,
//! length and a raw buffer) and [`LinkedChain`](collections::linked::LinkedChain) (a chain of
//! exclusively owned nodes), and how both stay consistent across insertion, removal, growth,
//! cloning and dropping.
//!
//! # Error Handling
//! Every fallible operation comes in two forms. The `try_*` form returns a [`Result`] with a
//! strongly typed error, using enums for static dispatch rather than dynamic, with small structs
//! that implement [`Error`](std::error::Error). The plain form panics with the message of that
//! same error, for when a failure is a bug in the caller.
//!
//! A failed operation never leaves a collection partially modified. Indices are [`usize`], so a
//! negative index can't be expressed in the first place.
//!
//! Nothing in this crate logs or prints, all information about a failure is carried by the error.
//!
//! # Concurrency
//! Collections are plain owned values. They are [`Send`] and [`Sync`] when their elements are, but
//! provide no internal locking: sharing one between threads requires external synchronization.
//!
//! # Dependencies
//! This crate only depends on `std` and on `derive_more`, for the repetitive parts of error types.
//! [`GrowableArray`](collections::contiguous::GrowableArray) manages its own allocation through
//! [`std::alloc`] and doesn't use [`Vec`] at all.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
