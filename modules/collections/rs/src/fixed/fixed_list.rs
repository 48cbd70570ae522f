use derive_more::{Deref, DerefMut, From, Into};

use jcompat_core_rs::{CollectionOp, ListOp, ListWrite, ReadHandle};

/// A sequence whose length is fixed at construction.
///
/// Elements can be read, replaced, swapped or sorted in place through the slice it dereferences
/// to, but there is no way to push, insert or remove: `FixedList` implements [`ListWrite`] and
/// never [`jcompat_core_rs::CollectionMut`], so resizing attempts fail to compile instead of
/// failing at runtime.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Deref, DerefMut, From, Into)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct FixedList<T> {
    items: Box<[T]>,
}

impl<T> FixedList<T> {
    /// A zero-length list. Every call returns an independent instance.
    pub fn empty() -> Self {
        Self {
            items: Box::default(),
        }
    }

    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T> Default for FixedList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for FixedList<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            items: value.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for FixedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for FixedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        <[T]>::iter(&self.items)
    }
}

impl<T> CollectionOp for FixedList<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(&self.items)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(&self.items)
    }
}

impl<T> ListOp for FixedList<T> {
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(&self.items, index)
    }
}

impl<T> ListWrite for FixedList<T> {
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(&mut self.items, index)
    }

    #[inline(always)]
    fn swap(&mut self, first: usize, second: usize) {
        <[T]>::swap(&mut self.items, first, second)
    }
}

impl<T> ReadHandle for FixedList<T> {
    type Target = Self;

    #[inline(always)]
    fn read<R, F: FnOnce(&Self) -> R>(&self, f: F) -> R {
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_place_writes_keep_length() {
        let mut list: FixedList<_> = vec![1, 2, 3].into();

        assert_eq!(list.set(0, 10), Ok(1));
        assert_eq!(list.set(3, 40), Err(40));
        list[1] = 20;
        list.sort_by(|a, b| b.cmp(a));

        assert_eq!(CollectionOp::len(&list), 3);
        assert_eq!(&*list, &[20, 10, 3]);
    }

    #[test]
    fn test_empty_instances_are_independent() {
        let first = FixedList::<u8>::empty();
        let second = FixedList::<u8>::default();
        assert!(first.is_empty());
        assert_eq!(first, second);
        assert_eq!(first.into_vec(), Vec::<u8>::new());
    }

    #[test]
    fn test_conversions() {
        let list: FixedList<_> = (1..=3).collect();
        assert_eq!((&list).into_iter().sum::<i32>(), 6);

        let boxed: Box<[i32]> = list.clone().into();
        assert_eq!(FixedList::from(boxed), list);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
