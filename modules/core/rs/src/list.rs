use std::collections::VecDeque;

use impl_tools::autoimpl;

use crate::collection::{CollectionMut, CollectionOp};

/// Ordered sequences with positional reads.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>)]
pub trait ListOp: CollectionOp {
    /// Element at the given position, `None` if the index is out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Position of the first element equal to `item`.
    fn index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|x| x == item)
    }
}

/// Positional writes that never change the length of the sequence.
///
/// Implemented for fixed-size sequences as well as growable ones.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait ListWrite: ListOp {
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Swap two elements.
    ///
    /// # Panics
    ///
    /// Panics if `first` or `second` are out of bounds.
    fn swap(&mut self, first: usize, second: usize);

    /// Replace the element at `index` and return the previous one.
    /// If the index is out of range nothing is written and the item is handed back as `Err`.
    fn set(&mut self, index: usize, item: Self::Item) -> Result<Self::Item, Self::Item> {
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(item),
        }
    }
}

/// Sequences that can grow or shrink at arbitrary positions.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait ListMut: ListWrite + CollectionMut {
    /// Insert an element at `index`, shifting everything after it to the right.
    /// `index == len` appends. Out of range indices hand the item back as `Err`.
    fn insert(&mut self, index: usize, item: Self::Item) -> Result<(), Self::Item>;

    /// Remove and return the element at `index`, `None` if the index is out of range.
    fn remove(&mut self, index: usize) -> Option<Self::Item>;
}

impl<T> ListOp for [T] {
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> ListWrite for [T] {
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline(always)]
    fn swap(&mut self, first: usize, second: usize) {
        <[T]>::swap(self, first, second)
    }
}

impl<T, const N: usize> ListOp for [T; N] {
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> ListWrite for [T; N] {
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline(always)]
    fn swap(&mut self, first: usize, second: usize) {
        <[T]>::swap(self, first, second)
    }
}

impl<T> ListOp for Vec<T> {
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> ListWrite for Vec<T> {
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline(always)]
    fn swap(&mut self, first: usize, second: usize) {
        <[T]>::swap(self, first, second)
    }
}

impl<T> ListMut for Vec<T> {
    fn insert(&mut self, index: usize, item: T) -> Result<(), T> {
        if index > Vec::len(self) {
            return Err(item);
        }
        Vec::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index < Vec::len(self) {
            Some(Vec::remove(self, index))
        } else {
            None
        }
    }
}

impl<T> ListOp for VecDeque<T> {
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> ListWrite for VecDeque<T> {
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline(always)]
    fn swap(&mut self, first: usize, second: usize) {
        VecDeque::swap(self, first, second)
    }
}

impl<T> ListMut for VecDeque<T> {
    fn insert(&mut self, index: usize, item: T) -> Result<(), T> {
        if index > VecDeque::len(self) {
            return Err(item);
        }
        VecDeque::insert(self, index, item);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }
}
