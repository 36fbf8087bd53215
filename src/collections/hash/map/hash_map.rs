use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use tracing::trace;

use super::{CapacityOverflow, IndexNoCap, IntoKeys, Iter, Keys, Values};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Collisions are resolved with linear probing and removal uses backward-shift deletion, so there
/// are no tombstones: every entry can be reached from its ideal bucket without crossing an empty
/// one. A custom load factor is not supported at this point, with the default being 4/5.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
/// | `retain` | `O(n)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. This additional time is kept at a minimum and hash collisions are
/// unlikely especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new element, `insert` will take `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

/// Allocates `cap` empty buckets.
fn empty_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

/// Allocates `cap` empty buckets, reporting an allocation that can't be made instead of panicking
/// or aborting.
fn try_empty_buckets<K, V>(cap: usize) -> Result<Box<[Bucket<K, V>]>, CapacityOverflow> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(cap).map_err(|_| CapacityOverflow)?;
    buckets.resize_with(cap, || None);
    Ok(buckets.into_boxed_slice())
}

/// Returns true if `ideal` lies in the wrapping range `(hole, current]`. An entry whose ideal
/// bucket is in that range can't be moved back into `hole` without becoming unreachable.
const fn in_probe_span(hole: usize, ideal: usize, current: usize) -> bool {
    if hole <= current {
        hole < ideal && ideal <= current
    } else {
        hole < ideal || ideal <= current
    }
}

impl<K: Hash + Eq, V> HashMap<K, V> {
    /// Creates a new HashMap with capacity 0 and the default hasher. Memory will be allocated when
    /// the capacity changes.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_hasher(RandomState::new())
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing insertions without
    /// reallocation. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashMap<K, V> {
        HashMap::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: empty_buckets(0),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: empty_buckets(cap),
            len: 0,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap, which is the number of buckets rather than the
    /// number of entries that fit before growing.
    pub fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns a reference to the map's hasher.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow()
        }

        // UNREACHABLE: We've just grown if necessary, so the capacity isn't 0.
        let index = self.find_index_for_key(&key).ok().unreachable();

        // The bucket at index is either empty or contains an equal key.
        match &mut self.arr[index] {
            Some(existing) => Some(mem::replace(&mut existing.1, value)),
            None => {
                self.arr[index] = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key).ok()?;

        // If the bucket at index is empty, the map doesn't contain the key.
        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key).ok()?;

        // If the bucket at index is empty, the map doesn't contain the key.
        let removed = self.arr[index].take()?;
        self.len -= 1;

        self.close_hole(index);

        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index_for_key(key)
            .is_ok_and(|index| self.arr[index].is_some())
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a `usize` or can't be allocated. See
    /// [`try_reserve`](HashMap::try_reserve) for a non-panicking version.
    pub fn reserve(&mut self, extra: usize) {
        if let Err(err) = self.try_reserve(extra) {
            panic!("{err}");
        }
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor, returning an error if the required capacity can't be
    /// represented or allocated. The map is unchanged when an error is returned.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        if extra == 0 { return Ok(()); }

        let needed = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        let new_cap = needed.checked_mul(LOAD_FACTOR_DENOMINATOR)
            .ok_or(CapacityOverflow)? / LOAD_FACTOR_NUMERATOR + 1;
        if new_cap <= self.cap() { return Ok(()); }

        // The load check in try_realloc_with_cap multiplies by the numerator as well.
        new_cap.checked_mul(LOAD_FACTOR_NUMERATOR).ok_or(CapacityOverflow)?;

        self.try_realloc_with_cap(new_cap)
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.arr.iter_mut().for_each(|bucket| *bucket = None);
        self.len = 0;
    }

    /// Keeps only the entries for which `keep` returns true. The capacity is unchanged.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut keep: F) {
        let cap = self.cap();
        let old_arr = mem::replace(&mut self.arr, empty_buckets(cap));
        self.len = 0;

        for (key, mut value) in old_arr.into_vec().into_iter().flatten() {
            if keep(&key, &mut value) {
                // UNREACHABLE: The old Array held this entry, so the capacity isn't 0.
                let index = self.find_index_for_key(&key).ok().unreachable();
                self.arr[index] = Some((key, value));
                self.len += 1;
            }
        }
    }

    /// Returns and iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns and iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns and iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.cap() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    ///
    /// # Panics
    /// Panics if the grown bucket array can't be allocated.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_ALLOCATED_CAP);

        if let Err(err) = self.try_realloc_with_cap(new_cap) {
            panic!("{err}");
        }
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.) The map is left untouched if the new buckets can't be allocated.
    pub(crate) fn try_realloc_with_cap(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        let overloaded = new_cap.checked_mul(LOAD_FACTOR_NUMERATOR)
            .is_some_and(|load| load / LOAD_FACTOR_DENOMINATOR < self.len);
        if overloaded { return Ok(()); }

        let new_arr = try_empty_buckets(new_cap)?;

        trace!(old_cap = self.cap(), new_cap, len = self.len, "rehashing hash table");

        // Replace the buckets first so that we can consume the old ones.
        let old_arr = mem::replace(&mut self.arr, new_arr);

        for entry in old_arr.into_vec().into_iter().flatten() {
            // UNREACHABLE: If the new capacity is 0, the old buckets have no entries and we can't
            // enter this loop.
            let index = self.find_index_for_key(&entry.0).ok().unreachable();

            self.arr[index] = Some(entry);
        }

        Ok(())
    }

    /// Moves entries following the now empty bucket at `hole` backwards, so that every remaining
    /// entry is still reachable from its ideal index.
    fn close_hole(&mut self, mut hole: usize) {
        let cap = self.cap();
        let mut current = (hole + 1) % cap;

        // There is always at least one empty bucket (hole itself, at the latest), so this ends.
        while let Some((key, _)) = &self.arr[current] {
            // UNREACHABLE: The map holds an entry, so the capacity isn't 0.
            let ideal = self.index_from_key(key).ok().unreachable();

            if !in_probe_span(hole, ideal, current) {
                self.arr.swap(hole, current);
                hole = current;
            }
            current = (current + 1) % cap;
        }
    }

    /// Calculates the ideal index of a bucket for the provided `hashable`. This method doesn't
    /// consider hash collisions, see [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Result<usize, IndexNoCap> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64)
            .map(|i| i as usize)
            .ok_or(IndexNoCap)
    }

    /// Finds the first valid index for the provided `key`. This is done by calculating the ideal
    /// index and then iterating until a bucket is found that is empty or has an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Result<usize, IndexNoCap>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // This is where Eq comes in: while there is a different key at the current index,
        // increment the index (wrapping at the capacity) and check again. The load factor keeps at
        // least one bucket empty, so this can't loop forever.
        while let Some(existing) = &self.arr[index] {
            if existing.0.borrow() == key { break; }
            index = (index + 1) % self.cap();
        }

        // After that loop, index is either empty or contains an equal key.
        Ok(index)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            arr: self.arr.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map: HashMap<K, V, B> = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.arr.iter()
            .map(|bucket| DebugRaw(match bucket {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            }))
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}
