//! Linked collection types. Primarily revolves around [`LinkedChain`], a singly linked list with a
//! sentinel head, which is also the storage behind the [`adapters`](crate::collections::adapters).

pub mod chain;

#[doc(inline)]
pub use chain::LinkedChain;
