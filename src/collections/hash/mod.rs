//! Hash-based collections: [`HashMap`] and the [`HashSet`] built on top of it.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
