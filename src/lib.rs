//! A small collections crate built around a hash-based set and its algebra.
//!
//! # Purpose
//! The centrepiece is [`HashSet`](collections::hash::HashSet): a mutable, unordered collection
//! with membership testing, in-place mutation, set algebra (union, intersection, difference,
//! symmetric difference) and relational predicates (subset, superset, disjoint). The algebra lives
//! on the [`Set`](collections::traits::Set) trait, so any backing structure that can answer
//! "is this a member?" gets it for free. The trait is implemented for this crate's
//! [`HashSet`](collections::hash::HashSet) as well as [`std::collections::HashSet`] and
//! [`std::collections::BTreeSet`], and operands of different implementations can be mixed.
//!
//! # Method
//! The set is a thin wrapper around [`HashMap<T, ()>`](collections::hash::HashMap), an
//! open-addressing table with linear probing. Removal uses backward-shift deletion rather than
//! tombstones, so lookups never have to step over stale buckets.
//!
//! Sets are generic over a single element type. When one set has to hold strings, integers and
//! booleans side by side, use [`Value`](collections::value::Value) as the element type.
//!
//! ```
//! use gadget::hash_set;
//! use gadget::collections::traits::Set;
//!
//! let a = hash_set![1, 2, 3];
//! let b = hash_set![2, 3, 4];
//!
//! let both = a.intersection([&b]);
//! assert_eq!(both.len(), 2);
//! assert!(both.contains_all([&2, &3]));
//! assert!(a.difference([&b]).contains(&1));
//! assert!(hash_set![1, 2].is_disjoint(&hash_set![3, 4]));
//! ```
//!
//! # Error Handling
//! Set operations are total: they are defined for every input, including empty sets and empty
//! operand lists, and never fail. The few fallible operations (like
//! [`try_reserve`](collections::hash::HashSet::try_reserve)) return strongly typed errors, using
//! structs that implement [`Error`](std::error::Error) via derive macros.
//!
//! # Logging
//! The crate emits [`tracing`] events at `trace` level when a hash table is resized. It never
//! installs a subscriber.
//!
//! # Dependencies
//! - `derive_more` for error types and the conversions on [`Value`](collections::value::Value).
//! - `tracing` for diagnostics.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

mod macros;

pub(crate) mod util;
