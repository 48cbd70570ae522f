use std::sync::{Mutex, MutexGuard, PoisonError};

use jcompat_core_rs::{CollectionMut, CollectionOp, ListMut, ListOp, ListWrite, ReadHandle};

/// Wrap a list so that every operation on it is serialized through one lock.
pub fn synchronized_list<L>(list: L) -> SynchronizedList<L> {
    SynchronizedList::new(list)
}

/// A list guarded by a mutex owned by this view.
///
/// Every operation acquires the lock, delegates to the list and releases the lock when the
/// guard goes out of scope, including when the delegated call panics. Operations on one
/// instance are therefore totally ordered; two instances never share a lock.
///
/// `L` is either an owned list or a `&mut` borrow of a list owned by the caller. In both cases
/// the view is `Sync` as long as `L: Send`, so a plain reference can be handed to worker threads.
///
/// Compound operations (check-then-act, iteration) must go through [`SynchronizedList::with`],
/// [`SynchronizedList::with_mut`] or [`SynchronizedList::lock`] to run under a single
/// acquisition.
#[derive(Debug, Default)]
pub struct SynchronizedList<L> {
    list: Mutex<L>,
}

impl<L> SynchronizedList<L> {
    pub fn new(list: L) -> Self {
        Self {
            list: Mutex::new(list),
        }
    }

    /// Acquire the lock, blocking the current thread until it is available.
    ///
    /// A lock poisoned by a panicking holder is recovered: the panic has already propagated to
    /// its caller, and the list is left exactly as the failed operation left it.
    pub fn lock(&self) -> MutexGuard<'_, L> {
        self.list.lock().unwrap_or_else(|poisoned| {
            log::warn!("Recovering a SynchronizedList lock poisoned by a panicked operation");
            poisoned.into_inner()
        })
    }

    pub fn with<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Same as [`SynchronizedList::with_mut`] for fallible operations.
    /// The error is returned exactly as produced by the closure.
    pub fn try_with_mut<R, E>(&self, f: impl FnOnce(&mut L) -> Result<R, E>) -> Result<R, E> {
        self.with_mut(f)
    }

    pub fn into_inner(self) -> L {
        self.list.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: CollectionOp> SynchronizedList<L> {
    pub fn len(&self) -> usize {
        self.with(|l| l.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|l| l.is_empty())
    }

    pub fn contains(&self, item: &L::Item) -> bool
    where
        L::Item: PartialEq,
    {
        self.with(|l| l.contains(item))
    }

    /// Snapshot of the current elements, taken under the lock.
    pub fn to_vec(&self) -> Vec<L::Item>
    where
        L::Item: Clone,
    {
        self.with(|l| l.iter().cloned().collect())
    }
}

impl<L: ListOp> SynchronizedList<L> {
    pub fn get(&self, index: usize) -> Option<L::Item>
    where
        L::Item: Clone,
    {
        self.with(|l| l.get(index).cloned())
    }

    pub fn index_of(&self, item: &L::Item) -> Option<usize>
    where
        L::Item: PartialEq,
    {
        self.with(|l| l.index_of(item))
    }
}

impl<L: ListWrite> SynchronizedList<L> {
    pub fn set(&self, index: usize, item: L::Item) -> Result<L::Item, L::Item> {
        self.with_mut(|l| l.set(index, item))
    }

    pub fn swap(&self, first: usize, second: usize) {
        self.with_mut(|l| l.swap(first, second))
    }

    pub fn reverse(&self) {
        self.with_mut(|l| crate::reverse(l))
    }
}

impl<L: CollectionMut> SynchronizedList<L> {
    pub fn add(&self, item: L::Item) -> bool {
        self.with_mut(|l| l.add(item))
    }

    /// Append all items under a single acquisition.
    pub fn add_all(&self, items: impl IntoIterator<Item = L::Item>) -> bool {
        self.with_mut(|l| crate::add_all(l, items))
    }

    pub fn clear(&self) {
        self.with_mut(|l| l.clear())
    }
}

impl<L: ListMut> SynchronizedList<L> {
    pub fn insert(&self, index: usize, item: L::Item) -> Result<(), L::Item> {
        self.with_mut(|l| l.insert(index, item))
    }

    pub fn remove(&self, index: usize) -> Option<L::Item> {
        self.with_mut(|l| l.remove(index))
    }
}

impl<L> ReadHandle for SynchronizedList<L> {
    type Target = L;

    fn read<R, F: FnOnce(&L) -> R>(&self, f: F) -> R {
        self.with(f)
    }
}
