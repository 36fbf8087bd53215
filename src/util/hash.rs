use std::hash::{BuildHasherDefault, Hash, Hasher};

/// Pairs a value with a hand-picked hash. Equality only looks at the value, so two entries with
/// the same hash but different values collide without being equal.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// Folds written words together without mixing, so a single `u64` hashes to itself and the ideal
/// bucket of a [`ManualHash`] is its hash modulo the capacity.
#[derive(Debug, Default)]
pub struct PassthroughHasher {
    state: u64,
}

impl Hasher for PassthroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.state ^= u64::from_le_bytes(word);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state ^= i;
    }
}

pub type PassthroughState = BuildHasherDefault<PassthroughHasher>;
