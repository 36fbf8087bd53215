//! General-purpose collection types.
//!
//! # Purpose
//! [`hash`] holds the concrete hash-based collections, [`traits`] the [`Set`](traits::Set)
//! contract and its algebra, and [`value`] a tagged union for sets with mixed member types.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
#[cfg(feature = "value")]
pub mod value;
