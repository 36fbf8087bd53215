use derive_more::{Display, Error};

/// Bucket lookup was attempted on a table that hasn't allocated any buckets yet.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to calculate indices for hash-based collection with capacity 0!")]
pub struct IndexNoCap;

/// The requested capacity can't be represented as a `usize`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
