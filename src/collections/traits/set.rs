use std::collections::{BTreeSet, HashSet as StdHashSet};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

/// A mutable, unordered collection of unique members.
///
/// Implementors provide membership, mutation and iteration. Everything else, the algebra
/// ([`union`](Set::union), [`intersection`](Set::intersection), [`difference`](Set::difference))
/// and the relational predicates ([`is_subset`](Set::is_subset), [`is_superset`](Set::is_superset),
/// [`is_disjoint`](Set::is_disjoint)) is derived from those. Operands don't need to be of the same
/// implementation as the receiver, only hold the same item type.
///
/// Algebra operations always allocate a new set, which is why they require the implementor to be
/// buildable from its items. They never mutate or share storage with their operands.
pub trait Set: Sized {
    type Item;

    type Iter<'a>: Iterator<Item = &'a Self::Item> where Self: 'a;

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Returns true if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `item` is a member.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Inserts `item`, returning true if it wasn't already a member.
    fn insert(&mut self, item: Self::Item) -> bool;

    /// Removes `item`, returning true if it was a member.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// Returns an iterator over all members, as references. The order is unspecified and may
    /// differ between calls.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns true if every item in `items` is a member. This is vacuously true for no items.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        Self::Item: 'a,
        I: IntoIterator<Item = &'a Self::Item>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Inserts every item in `items`. Items that are already members are skipped.
    fn insert_all<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }

    /// Removes every item in `items`. Items that aren't members are skipped.
    fn remove_all<'a, I>(&mut self, items: I)
    where
        Self::Item: 'a,
        I: IntoIterator<Item = &'a Self::Item>,
    {
        for item in items {
            self.remove(item);
        }
    }

    /// Returns all members as an owned sequence, in unspecified order.
    fn items(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Calls `visit` with each member until it returns false.
    ///
    /// This is a convenience over [`iter`](Set::iter), which should be preferred when the caller
    /// can consume an iterator directly.
    fn iterate<F: FnMut(&Self::Item) -> bool>(&self, mut visit: F) {
        for item in self.iter() {
            if !visit(item) {
                return;
            }
        }
    }

    /// Creates a new set with all members of `self` and every set in `others`. (`self ∪ others…`)
    fn union<'a, S, I>(&self, others: I) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone + 'a,
        S: Set<Item = Self::Item> + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let mut result: Self = self.iter().cloned().collect();
        for other in others {
            result.insert_all(other.iter().cloned());
        }
        result
    }

    /// Creates a new set with the members of `self` that are also members of every set in
    /// `others`. (`self ∩ others…`) With no other sets, this is a copy of `self`.
    fn intersection<'a, S, I>(&self, others: I) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone + 'a,
        S: Set<Item = Self::Item> + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let others: Vec<&S> = others.into_iter().collect();
        self.iter()
            .filter(|item| others.iter().all(|other| other.contains(item)))
            .cloned()
            .collect()
    }

    /// Creates a new set with the members of `self` that aren't members of any set in `others`.
    /// (`self \ others…`) With no other sets, this is a copy of `self`.
    fn difference<'a, S, I>(&self, others: I) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone + 'a,
        S: Set<Item = Self::Item> + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        let others: Vec<&S> = others.into_iter().collect();
        self.iter()
            .filter(|item| !others.iter().any(|other| other.contains(item)))
            .cloned()
            .collect()
    }

    /// Creates a new set with the members that are in either `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<S>(&self, other: &S) -> Self
    where
        Self: FromIterator<Self::Item>,
        Self::Item: Clone,
        S: Set<Item = Self::Item>,
    {
        self.symmetric_difference_iter(other).cloned().collect()
    }

    /// Returns true if `other` contains all members of `self`. (`self ⊆ other`)
    fn is_subset<S: Set<Item = Self::Item>>(&self, other: &S) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all members of `other`. (`self ⊇ other`)
    ///
    /// This is always answered by `other`'s [`is_subset`](Set::is_subset), so the two can't
    /// disagree.
    fn is_superset<S: Set<Item = Self::Item>>(&self, other: &S) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` share no members.
    fn is_disjoint<S: Set<Item = Self::Item>>(&self, other: &S) -> bool {
        !self.iter().any(|item| other.contains(item))
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn difference_iter<'a, S: Set<Item = Self::Item>>(&'a self, other: &'a S) -> Difference<'a, Self, S> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn intersection_iter<'a, S: Set<Item = Self::Item>>(&'a self, other: &'a S) -> Intersection<'a, Self, S> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`, yielding
    /// shared items once. (`self ∪ other`)
    fn union_iter<'a, S: Set<Item = Self::Item>>(&'a self, other: &'a S) -> Union<'a, Self, S> {
        Union {
            inner: self.iter().chain(other.difference_iter(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference_iter<'a, S: Set<Item = Self::Item>>(
        &'a self,
        other: &'a S,
    ) -> SymmetricDifference<'a, Self, S> {
        SymmetricDifference {
            inner: self.difference_iter(other).chain(other.difference_iter(self)),
        }
    }
}

pub struct Difference<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a O,
}

impl<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> Iterator for Difference<'a, S, O> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> FusedIterator for Difference<'a, S, O>
where
    S::Iter<'a>: FusedIterator,
{}

pub struct Intersection<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a O,
}

impl<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> Iterator for Intersection<'a, S, O> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> FusedIterator for Intersection<'a, S, O>
where
    S::Iter<'a>: FusedIterator,
{}

pub struct Union<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, O, S>>,
}

impl<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> Iterator for Union<'a, S, O> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct SymmetricDifference<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> {
    pub(crate) inner: Chain<Difference<'a, S, O>, Difference<'a, O, S>>,
}

impl<'a, S: Set + 'a, O: Set<Item = S::Item> + 'a> Iterator for SymmetricDifference<'a, S, O> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Set for StdHashSet<T, B> {
    type Item = T;

    type Iter<'a> = std::collections::hash_set::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        StdHashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        StdHashSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> bool {
        StdHashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        StdHashSet::remove(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        StdHashSet::iter(self)
    }
}

impl<T: Ord> Set for BTreeSet<T> {
    type Item = T;

    type Iter<'a> = std::collections::btree_set::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        BTreeSet::remove(self, item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}
