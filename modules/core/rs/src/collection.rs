use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use impl_tools::autoimpl;

/// Read-only capability of a finite container: its size, iteration in the container's own
/// order and membership tests.
///
/// Views and adapters only ever ask for this trait when they need to read, so a read-only
/// wrapper never has to pretend to be a mutable container.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>)]
#[allow(clippy::len_without_is_empty)]
pub trait CollectionOp {
    type Item;

    /// Number of elements currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in the container's iteration order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Check whether an element equal to `item` is stored in the container.
    /// Linear by default, hashed/ordered containers override it with their own lookup.
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|x| x == item)
    }
}

/// Growable containers: elements can be appended and the container can be emptied.
///
/// Fixed-size containers never implement this trait.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait CollectionMut: CollectionOp {
    /// Add an element to the container.
    /// Returns `true` if the container changed (sets reject duplicates).
    fn add(&mut self, item: Self::Item) -> bool;

    fn clear(&mut self);
}

impl<T> CollectionOp for [T] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<T, const N: usize> CollectionOp for [T; N] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<T> CollectionOp for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<T> CollectionMut for Vec<T> {
    fn add(&mut self, item: T) -> bool {
        Vec::push(self, item);
        true
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }
}

impl<T> CollectionOp for VecDeque<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }
}

impl<T> CollectionMut for VecDeque<T> {
    fn add(&mut self, item: T) -> bool {
        VecDeque::push_back(self, item);
        true
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher> CollectionOp for HashSet<T, S> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        HashSet::iter(self)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        HashSet::contains(self, item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> CollectionMut for HashSet<T, S> {
    fn add(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }
}

impl<T: Ord> CollectionOp for BTreeSet<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        BTreeSet::contains(self, item)
    }
}

impl<T: Ord> CollectionMut for BTreeSet<T> {
    fn add(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self)
    }
}
