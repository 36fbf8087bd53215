//! A tagged union for sets whose members have different types.
//!
//! Collections in this crate are generic over a single member type. When strings, integers and
//! booleans have to live in the same set, wrap them in a [`Value`]:
//!
//! ```
//! use std::collections::HashSet;
//!
//! use gadget::collections::value::Value;
//!
//! let set: HashSet<Value> = [Value::from("test"), Value::from(1_i64), Value::from(true)].into();
//! assert!(set.contains(&Value::from(1_i64)));
//! // Values of different variants are never equal.
//! assert!(!set.contains(&Value::from("1")));
//! ```

use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, From, IsVariant, TryInto};

/// A string, integer or boolean with structural equality and hashing.
///
/// [`Display`](std::fmt::Display) writes the payload as-is, while [`Debug`] writes the payload's
/// Debug representation, so strings are quoted (`"qq"`) and everything else is shown literally.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, TryInto, IsVariant)]
pub enum Value {
    #[display("{_0}")]
    Str(String),
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    Bool(bool),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => Debug::fmt(s, f),
            Value::Int(i) => Debug::fmt(i, f),
            Value::Bool(b) => Debug::fmt(b, f),
        }
    }
}
