use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use impl_tools::autoimpl;

/// Read-only capability of a key/value mapping.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>)]
#[allow(clippy::len_without_is_empty)]
pub trait MapOp {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Entries in the mapping's own iteration order.
    fn iter(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

/// Mutable key/value mappings.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait MapMut: MapOp {
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Store a value under the key and return the value it replaced, if any.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Remove the entry for the key and return its value.
    /// `None` means the key was absent, a present key always yields `Some`, whatever the value.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn clear(&mut self);
}

impl<K: Hash + Eq, V, S: BuildHasher> MapOp for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        HashMap::contains_key(self, key)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        HashMap::iter(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MapMut for HashMap<K, V, S> {
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value> {
        HashMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        HashMap::remove(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

impl<K: Ord, V> MapOp for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline(always)]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &Self::Key) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        BTreeMap::iter(self)
    }
}

impl<K: Ord, V> MapMut for BTreeMap<K, V> {
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value> {
        BTreeMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        BTreeMap::remove(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }
}
