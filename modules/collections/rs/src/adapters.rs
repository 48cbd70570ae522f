use jcompat_core_rs::{CollectionMut, ListWrite, MapMut};

/// Append every element of `source`, in iteration order, to `destination`.
///
/// Always returns `true`: the call is reported as successful even when a set ignored
/// duplicates.
pub fn add_all<C, I>(destination: &mut C, source: I) -> bool
where
    C: CollectionMut + ?Sized,
    I: IntoIterator<Item = C::Item>,
{
    for item in source {
        destination.add(item);
    }
    true
}

/// Remove the entry for `key` and return its value.
///
/// A missing key is a normal outcome: the mapping is left untouched and `None` is returned.
pub fn remove<M: MapMut + ?Sized>(map: &mut M, key: &M::Key) -> Option<M::Value> {
    map.remove(key)
}

/// Reverse the order of elements in place by swapping symmetric pairs from both ends.
pub fn reverse<L: ListWrite + ?Sized>(list: &mut L) {
    let len = list.len();
    if len < 2 {
        return;
    }

    let mut index = 0;
    let mut end = len - 1;
    while index < end {
        list.swap(index, end);
        index += 1;
        end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, VecDeque};

    use ahash::{HashMap, HashMapExt};
    use itertools::Itertools;

    use super::*;
    use crate::FixedList;

    #[test]
    fn test_add_all_preserves_source_order() {
        let mut list = vec![0];
        assert!(add_all(&mut list, [1, 2, 3]));
        assert_eq!(list, [0, 1, 2, 3]);

        let mut deque = VecDeque::new();
        assert!(add_all(&mut deque, "abc".chars()));
        assert_eq!(deque.into_iter().join(""), "abc");

        // Duplicates rejected by the set still count as a successful call
        let mut set = BTreeSet::from([1]);
        assert!(add_all(&mut set, vec![1, 1, 2]));
        assert_eq!(set.into_iter().collect_vec(), [1, 2]);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut map = HashMap::new();
        map.insert("zero", 0);
        map.insert("one", 1);

        assert_eq!(remove(&mut map, &"zero"), Some(0));
        assert!(!map.contains_key("zero"));

        assert_eq!(remove(&mut map, &"missing"), None);
        assert_eq!(map.len(), 1);

        let mut ordered = BTreeMap::from([(1, String::new())]);
        assert_eq!(remove(&mut ordered, &1), Some(String::new()));
        assert_eq!(remove(&mut ordered, &1), None);
    }

    #[test]
    fn test_reverse() {
        for (input, expected) in [
            (vec![], vec![]),
            (vec![1], vec![1]),
            (vec![1, 2], vec![2, 1]),
            (vec![1, 2, 3], vec![3, 2, 1]),
            (vec![1, 2, 3, 4], vec![4, 3, 2, 1]),
            (vec![1, 1, 2, 2, 3], vec![3, 2, 2, 1, 1]),
        ] {
            let mut list = input.clone();
            reverse(&mut list);
            assert_eq!(list, expected);

            reverse(&mut list);
            assert_eq!(list, input);

            let mut fixed = FixedList::from(input.clone());
            reverse(&mut fixed);
            assert_eq!(fixed.into_vec(), expected);

            let mut slice = input.into_boxed_slice();
            reverse(&mut *slice);
            assert_eq!(slice.into_vec(), expected);
        }
    }

    #[test]
    fn test_reverse_deque() {
        let mut deque: VecDeque<_> = (0..5).collect();
        deque.rotate_left(2);
        reverse(&mut deque);
        assert_eq!(deque.into_iter().collect_vec(), [1, 0, 4, 3, 2]);
    }
}
