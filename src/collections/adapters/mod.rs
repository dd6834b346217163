//! Restricted views over [`LinkedChain`](crate::collections::linked::LinkedChain). [`Stack`] and
//! [`Queue`] own a chain each and expose only push / pop style access to it, with no storage of
//! their own.

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
