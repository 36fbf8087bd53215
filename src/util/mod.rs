#[cfg(feature = "hash")]
pub mod fmt;
#[cfg(feature = "hash")]
pub mod option;

#[cfg(all(test, feature = "hash"))]
pub mod hash;
