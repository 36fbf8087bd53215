//! Traits shared by collection types.
//!
//! [`Set`] is the contract every set in this crate satisfies. It is also implemented for the
//! standard library's `HashSet` and `BTreeSet`, so they can be used as operands of the algebra
//! alongside this crate's [`HashSet`](crate::collections::hash::HashSet). Note that the standard
//! sets have inherent methods with some of the same names, which take precedence over the trait's;
//! call those through the trait (`Set::union(&std_set, …)`) when mixing.

mod set;

pub use set::*;
