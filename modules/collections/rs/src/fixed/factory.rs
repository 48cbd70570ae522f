use std::iter;
use std::sync::Arc;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use eyre::{eyre, Result};

use super::fixed_list::FixedList;

/// A fresh, empty and growable mapping. Nothing is shared between calls.
pub fn empty_map<K, V>() -> HashMap<K, V> {
    HashMap::new()
}

/// A fresh, empty and growable list. Nothing is shared between calls.
pub fn empty_list<T>() -> Vec<T> {
    Vec::new()
}

/// A fresh, empty and growable set. Nothing is shared between calls.
pub fn empty_set<T>() -> HashSet<T> {
    HashSet::new()
}

/// A fixed list of `n` slots all pointing at the same `item`.
///
/// Slots can later be replaced one by one, but the list never changes its length.
pub fn n_copies<T>(n: usize, item: T) -> FixedList<Arc<T>> {
    iter::repeat_n(Arc::new(item), n).collect()
}

/// Same as [`n_copies`] for callers holding a signed count. Negative counts are rejected.
pub fn n_copies_checked<T>(n: isize, item: T) -> Result<FixedList<Arc<T>>> {
    let n = usize::try_from(n)
        .map_err(|_| eyre!("Number of copies must be non-negative, got {}", n))?;
    Ok(n_copies(n, item))
}

/// A fixed collection holding exactly one element.
pub fn singleton<T>(item: T) -> FixedList<T> {
    FixedList::from(vec![item])
}

/// A fixed list holding exactly one element.
pub fn singleton_list<T>(item: T) -> FixedList<T> {
    FixedList::from(vec![item])
}
