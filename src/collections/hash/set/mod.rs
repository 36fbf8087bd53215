//! A module containing [`HashSet`] and associated types.
//!
//! The types here provide owned and borrowed iteration over a set's members. Iterators over the
//! result of set operations between two sets are generic over any [`Set`](crate::collections::traits::Set)
//! and live with the trait.
//!
//! As a note, there is no mutable iterator over the members of a set because mutating the members
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod tests;

pub use hash_set::*;
pub use iter::*;

#[doc(inline)]
pub use super::map::CapacityOverflow;
