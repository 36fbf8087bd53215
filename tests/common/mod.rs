//! Shared configuration and generators for the set property tests.

#![allow(dead_code)]

use gadget::collections::hash::HashSet;
use gadget::collections::value::Value;
use proptest::prelude::*;

/// Standard proptest configuration for the algebraic laws.
pub fn set_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    }
}

/// Small members, so that generated sets overlap often.
pub fn member_strategy() -> impl Strategy<Value = u16> {
    0u16..64
}

/// Sets with up to 40 members, which is enough to trigger a few rehashes.
pub fn set_strategy() -> impl Strategy<Value = HashSet<u16>> {
    prop::collection::vec(member_strategy(), 0..40).prop_map(|v| v.into_iter().collect())
}

/// Strings, integers and booleans mixed together.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z0-9]{0,3}".prop_map(Value::from),
        (-20i64..20).prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

pub fn value_set_strategy() -> impl Strategy<Value = HashSet<Value>> {
    prop::collection::vec(value_strategy(), 0..24).prop_map(|v| v.into_iter().collect())
}

/// Returns the members of `set` in ascending order, for comparisons that don't depend on
/// iteration order.
pub fn sorted<T: std::hash::Hash + Ord + Clone>(set: &HashSet<T>) -> Vec<T> {
    let mut items: Vec<T> = set.iter().cloned().collect();
    items.sort();
    items
}
