#![cfg(test)]

use super::*;
use crate::collections::traits::Set;
#[cfg(feature = "value")]
use crate::collections::value::Value;
use crate::hash_set;
use crate::util::hash::{ManualHash, PassthroughState};

#[cfg(feature = "value")]
fn mixed() -> HashSet<Value> {
    hash_set![Value::from("test"), Value::from(1_i64), Value::from(true)]
}

#[test]
fn test_new() {
    let empty = HashSet::<u8>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.cap(), 0, "An empty set shouldn't allocate.");

    let filled = hash_set!["test", "1", "true"];
    assert_eq!(filled.len(), 3);
    assert!(filled.cap() >= DEFAULT_CAP, "Sets built from values should reserve a minimum capacity.");

    let deduped = hash_set![1, 2, 2, 3, 1];
    assert_eq!(deduped.len(), 3, "Duplicate values should collapse into one member.");
}

#[test]
#[cfg(feature = "value")]
fn test_contains() {
    let set = mixed();
    assert!(set.contains(&Value::from("test")), "Contains failed for 'test'");
    assert!(set.contains(&Value::from(1_i64)), "Contains failed for 1");
    assert!(set.contains(&Value::from(true)), "Contains failed for true");
    assert!(!set.contains(&Value::from(false)), "Contains failed for false");
    assert!(!set.contains(&Value::from(27_i64)), "Contains failed for 27");
    assert!(set.contains_all(&set.items()), "Contains failed for all items of the set");
    assert!(
        !set.contains_all(&[Value::from(3_i64), Value::from(true)]),
        "Contains should fail if any of the values is missing."
    );
    assert!(set.contains_all([]), "Contains with no values should be vacuously true.");
}

#[test]
fn test_insert_is_idempotent() {
    let data = ["test", "1", "true"];
    let mut set = HashSet::new();
    for v in data {
        assert!(set.insert(v));
        assert!(set.contains(v), "Insert failed for {v}");
    }
    for v in data {
        assert!(!set.insert(v), "Re-inserting {v} should report that it was already a member.");
        assert_eq!(set.len(), 3, "{set} has the wrong length");
    }
}

#[test]
fn test_remove() {
    let mut set = hash_set!["test", "1", "true"];
    for v in ["test", "1", "true"] {
        assert!(set.contains(v), "invalid initial set for {v}");
        assert!(set.remove(v));
        assert!(!set.contains(v), "Remove failed for {v}");
    }

    let mut set = hash_set![1, 2, 3];
    assert!(!set.remove(&4), "Removing an absent value should be a no-op.");
    assert_eq!(set.len(), 3);

    set.remove_all(&[1, 2, 9]);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&3));
}

#[test]
#[cfg(feature = "value")]
fn test_len() {
    let mut set: HashSet<Value> = HashSet::new();
    assert_eq!(set.len(), 0);

    set.insert_all(mixed());
    assert_eq!(set.len(), 3);

    set.insert_all([Value::from("123"), Value::from(77_i64)]);
    assert_eq!(set.len(), 5);

    set.remove_all(&[
        Value::from(1_i64),
        Value::from("test"),
        Value::from(true),
        Value::from("123"),
        Value::from(77_i64),
    ]);
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
}

#[test]
fn test_take_and_get() {
    let mut set: HashSet<String> = hash_set![String::from("a"), String::from("b")];
    assert_eq!(set.get("a").map(String::as_str), Some("a"));
    assert_eq!(set.take("a"), Some(String::from("a")));
    assert_eq!(set.take("a"), None);
    assert_eq!(set.get("a"), None);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(PassthroughState::default());
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(0, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(0, "three"));
    set.insert(ManualHash::new(2, "four"));
    set.insert(ManualHash::new(1, "five"));

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    let mut remaining: Vec<_> = set.into_iter().map(|i| i.value()).collect();
    remaining.sort();
    assert_eq!(
        remaining,
        ["five", "four", "one", "three"],
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );
}

#[test]
fn test_equality() {
    let a = hash_set![1, 2, 3];
    let b: HashSet<i32> = (1..=3).rev().collect();
    assert_eq!(a, b, "Sets with the same members should be equal regardless of order.");

    let c = HashSet::<i32, PassthroughState>::from([1, 2, 3]);
    assert!(a == c, "Equality shouldn't depend on the hasher.");
    assert_ne!(a, hash_set![1, 2]);
    assert_ne!(a, hash_set![1, 2, 4]);
}

#[test]
fn test_operators() {
    let a = hash_set![1, 2, 3];
    let b = hash_set![2, 3, 4];

    assert_eq!(&a | &b, hash_set![1, 2, 3, 4]);
    assert_eq!(&a & &b, hash_set![2, 3]);
    assert_eq!(&a - &b, hash_set![1]);
    assert_eq!(&a ^ &b, hash_set![1, 4]);
    assert_eq!(a, hash_set![1, 2, 3], "Operators shouldn't change their operands.");

    let mut c = a.clone();
    c |= b.clone();
    assert_eq!(c, hash_set![1, 2, 3, 4]);

    let mut c = a.clone();
    c &= b.clone();
    assert_eq!(c, hash_set![2, 3]);

    let mut c = a.clone();
    c -= b.clone();
    assert_eq!(c, hash_set![1]);

    let mut c = a.clone();
    c ^= b;
    assert_eq!(c, hash_set![1, 4]);
}

#[test]
fn test_retain_and_clear() {
    let mut set: HashSet<u32> = (0..50).collect();
    set.retain(|i| i % 5 == 0);
    assert_eq!(set, (0..50).step_by(5).collect::<HashSet<u32>>());

    let cap = set.cap();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.cap(), cap);
    assert!(set.insert(3), "A cleared set should accept new members.");
}

#[test]
fn test_reserve() {
    let mut set = HashSet::new();
    set.reserve(40);
    let cap = set.cap();
    set.extend(0..40);
    assert_eq!(set.cap(), cap, "Reserved members should fit without growing.");
    assert_eq!(set.try_reserve(usize::MAX), Err(CapacityOverflow));
}

#[test]
fn test_try_reserve_unallocatable() {
    let mut set = HashSet::<u8>::new();

    for extra in [usize::MAX / 5, usize::MAX / 5 - 1] {
        assert_eq!(set.try_reserve(extra), Err(CapacityOverflow), "Reserving {extra} members should fail.");
        assert_eq!(set.cap(), 0, "A failed reservation shouldn't change the set.");
    }

    set.extend([1, 2, 3]);
    assert_eq!(set, hash_set![1, 2, 3]);
}

#[test]
fn test_iter() {
    let set = hash_set!["1", "test", "true"];
    let iter = set.iter();
    assert_eq!(iter.len(), set.len());
    let mut items: Vec<_> = iter.copied().collect();
    items.sort();
    assert_eq!(items, ["1", "test", "true"]);
}

#[test]
fn test_display() {
    let empty: HashSet<&str> = HashSet::new();
    assert_eq!(empty.to_string(), "Set{}");

    let set = hash_set!["a", "qq"];
    let repr = set.to_string();
    assert!(repr.starts_with("Set{"), "{repr} does not start with 'Set{{'");
    assert!(repr.ends_with('}'), "{repr} does not end with '}}'");
    assert!(repr.contains("\"qq\""), "{repr} does not contain a quoted 'qq'");
    assert_eq!(repr.len(), "Set{\"a\" \"qq\"}".len(), "Members should be separated by single spaces.");

    assert_eq!(hash_set![7].to_string(), "Set{7}");
}

#[test]
#[cfg(feature = "value")]
fn test_display_mixed() {
    let set = hash_set![Value::from(1_i64), Value::from(2_i64), Value::from("qq")];
    let repr = set.to_string();
    assert!(repr.contains("\"qq\""), "{repr} does not contain a quoted 'qq'");
    assert_eq!(repr.len(), "Set{1 2 \"qq\"}".len());
}

#[test]
fn test_debug() {
    let set = HashSet::<u64, PassthroughState>::from([1]);
    let repr = format!("{set:?}");
    assert!(repr.starts_with("HashSet { contents: Set{1}, len: 1"), "{repr}");
}
