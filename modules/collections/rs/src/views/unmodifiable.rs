use derive_more::Constructor;

use jcompat_core_rs::{CollectionOp, ListOp, MapOp, ReadHandle, Unsupported};

fn reject(view: &'static str, operation: &'static str) -> Unsupported {
    log::debug!("Rejected `{operation}` on {view}");
    Unsupported::new(view, operation)
}

/// Wrap a collection into a read-only live view.
pub fn unmodifiable_collection<H>(handle: H) -> UnmodifiableCollection<H>
where
    H: ReadHandle,
    H::Target: CollectionOp,
{
    UnmodifiableCollection::new(handle)
}

/// Wrap a set into a read-only live view. Sets share the collection view.
pub fn unmodifiable_set<H>(handle: H) -> UnmodifiableCollection<H>
where
    H: ReadHandle,
    H::Target: CollectionOp,
{
    UnmodifiableCollection::new(handle)
}

/// Wrap a list into a read-only live view with positional reads.
pub fn unmodifiable_list<H>(handle: H) -> UnmodifiableList<H>
where
    H: ReadHandle,
    H::Target: ListOp,
{
    UnmodifiableList::new(handle)
}

/// Wrap a mapping into a read-only live view.
pub fn unmodifiable_map<H>(handle: H) -> UnmodifiableMap<H>
where
    H: ReadHandle,
    H::Target: MapOp,
{
    UnmodifiableMap::new(handle)
}

/// Read-only view over a collection.
///
/// Every read goes through the handle at the moment of the call, so the view always shows the
/// current content of the backing collection and never a copy of it. Every mutator fails with
/// [`Unsupported`] and leaves the backing collection untouched.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct UnmodifiableCollection<H> {
    handle: H,
}

impl<H> UnmodifiableCollection<H> {
    pub fn into_inner(self) -> H {
        self.handle
    }
}

impl<H, C> UnmodifiableCollection<H>
where
    H: ReadHandle<Target = C>,
    C: CollectionOp + ?Sized,
{
    const VIEW: &'static str = "UnmodifiableCollection";

    /// Run a read-only closure against the backing collection.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        self.handle.read(f)
    }

    pub fn len(&self) -> usize {
        self.with(|c| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|c| c.is_empty())
    }

    pub fn contains(&self, item: &C::Item) -> bool
    where
        C::Item: PartialEq,
    {
        self.with(|c| c.contains(item))
    }

    /// Snapshot of the current elements in iteration order.
    pub fn to_vec(&self) -> Vec<C::Item>
    where
        C::Item: Clone,
    {
        self.with(|c| c.iter().cloned().collect())
    }

    pub fn add(&mut self, _item: C::Item) -> Result<bool, Unsupported> {
        Err(reject(Self::VIEW, "add"))
    }

    pub fn add_all(
        &mut self,
        _items: impl IntoIterator<Item = C::Item>,
    ) -> Result<bool, Unsupported> {
        Err(reject(Self::VIEW, "add_all"))
    }

    pub fn remove(&mut self, _item: &C::Item) -> Result<bool, Unsupported> {
        Err(reject(Self::VIEW, "remove"))
    }

    pub fn retain(&mut self, _keep: impl FnMut(&C::Item) -> bool) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "retain"))
    }

    pub fn clear(&mut self) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "clear"))
    }
}

/// Read-only view over a list, see [`UnmodifiableCollection`] for the live view contract.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct UnmodifiableList<H> {
    handle: H,
}

impl<H> UnmodifiableList<H> {
    pub fn into_inner(self) -> H {
        self.handle
    }
}

impl<H, L> UnmodifiableList<H>
where
    H: ReadHandle<Target = L>,
    L: ListOp + ?Sized,
{
    const VIEW: &'static str = "UnmodifiableList";

    /// Run a read-only closure against the backing list.
    pub fn with<R>(&self, f: impl FnOnce(&L) -> R) -> R {
        self.handle.read(f)
    }

    pub fn len(&self) -> usize {
        self.with(|l| l.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|l| l.is_empty())
    }

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

    pub fn contains(&self, item: &L::Item) -> bool
    where
        L::Item: PartialEq,
    {
        self.with(|l| l.contains(item))
    }

    /// Snapshot of the current elements in order.
    pub fn to_vec(&self) -> Vec<L::Item>
    where
        L::Item: Clone,
    {
        self.with(|l| l.iter().cloned().collect())
    }

    pub fn add(&mut self, _item: L::Item) -> Result<bool, Unsupported> {
        Err(reject(Self::VIEW, "add"))
    }

    pub fn add_all(
        &mut self,
        _items: impl IntoIterator<Item = L::Item>,
    ) -> Result<bool, Unsupported> {
        Err(reject(Self::VIEW, "add_all"))
    }

    pub fn insert(&mut self, _index: usize, _item: L::Item) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "insert"))
    }

    pub fn set(&mut self, _index: usize, _item: L::Item) -> Result<L::Item, Unsupported> {
        Err(reject(Self::VIEW, "set"))
    }

    pub fn swap(&mut self, _first: usize, _second: usize) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "swap"))
    }

    pub fn remove(&mut self, _index: usize) -> Result<L::Item, Unsupported> {
        Err(reject(Self::VIEW, "remove"))
    }

    pub fn clear(&mut self) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "clear"))
    }
}

/// Read-only view over a mapping, see [`UnmodifiableCollection`] for the live view contract.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct UnmodifiableMap<H> {
    handle: H,
}

impl<H> UnmodifiableMap<H> {
    pub fn into_inner(self) -> H {
        self.handle
    }
}

impl<H, M> UnmodifiableMap<H>
where
    H: ReadHandle<Target = M>,
    M: MapOp + ?Sized,
{
    const VIEW: &'static str = "UnmodifiableMap";

    /// Run a read-only closure against the backing mapping.
    pub fn with<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        self.handle.read(f)
    }

    pub fn len(&self) -> usize {
        self.with(|m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|m| m.is_empty())
    }

    pub fn get(&self, key: &M::Key) -> Option<M::Value>
    where
        M::Value: Clone,
    {
        self.with(|m| m.get(key).cloned())
    }

    pub fn contains_key(&self, key: &M::Key) -> bool {
        self.with(|m| m.contains_key(key))
    }

    /// Snapshot of the current entries in the mapping's iteration order.
    pub fn entries(&self) -> Vec<(M::Key, M::Value)>
    where
        M::Key: Clone,
        M::Value: Clone,
    {
        self.with(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    pub fn insert(
        &mut self,
        _key: M::Key,
        _value: M::Value,
    ) -> Result<Option<M::Value>, Unsupported> {
        Err(reject(Self::VIEW, "insert"))
    }

    pub fn extend(
        &mut self,
        _entries: impl IntoIterator<Item = (M::Key, M::Value)>,
    ) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "extend"))
    }

    pub fn remove(&mut self, _key: &M::Key) -> Result<Option<M::Value>, Unsupported> {
        Err(reject(Self::VIEW, "remove"))
    }

    pub fn clear(&mut self) -> Result<(), Unsupported> {
        Err(reject(Self::VIEW, "clear"))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    use super::*;
    use crate::FixedList;

    #[test]
    fn test_list_view_is_live() {
        let backing = Rc::new(RefCell::new(vec![1, 2]));
        let view = unmodifiable_list(Rc::clone(&backing));
        assert_eq!(view.to_vec(), [1, 2]);

        backing.borrow_mut().push(3);
        backing.borrow_mut()[0] = 10;
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(0), Some(10));
        assert_eq!(view.get(3), None);
        assert_eq!(view.index_of(&3), Some(2));
        assert!(view.contains(&2));
        assert_eq!(view.with(|l| l.iter().sum::<i32>()), 15);
    }

    #[test]
    fn test_list_view_rejects_every_mutation() {
        let backing = vec!['a', 'b'];
        let mut view = unmodifiable_list(&backing);

        for (result, operation) in [
            (view.add('c').map(|_| ()), "add"),
            (view.add_all(['c', 'd']).map(|_| ()), "add_all"),
            (view.insert(0, 'c'), "insert"),
            (view.set(0, 'c').map(|_| ()), "set"),
            (view.swap(0, 1), "swap"),
            (view.remove(0).map(|_| ()), "remove"),
            (view.clear(), "clear"),
        ] {
            let err = result.unwrap_err();
            assert_eq!(err.view(), "UnmodifiableList");
            assert_eq!(err.operation(), operation);
        }
        assert_eq!(backing, ['a', 'b']);
    }

    #[test]
    fn test_collection_view() {
        let backing = Rc::new(RefCell::new(BTreeSet::from([2, 1])));
        let mut view = unmodifiable_set(Rc::clone(&backing));

        assert!(view.add(3).is_err());
        assert!(view.add_all([3, 4]).is_err());
        assert!(view.remove(&1).is_err());
        assert!(view.retain(|_| false).is_err());
        assert!(view.clear().is_err());
        assert_eq!(view.to_vec(), [1, 2]);

        backing.borrow_mut().insert(0);
        assert_eq!(view.to_vec(), [0, 1, 2]);
        assert!(view.contains(&0));
        assert!(!view.is_empty());

        let fixed = FixedList::from(vec![5]);
        let view = unmodifiable_collection(&fixed);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_map_view() {
        let backing = Rc::new(RefCell::new(BTreeMap::from([("a", 1)])));
        let mut view = unmodifiable_map(Rc::clone(&backing));

        assert_eq!(view.insert("b", 2).unwrap_err().operation(), "insert");
        assert_eq!(view.extend([("b", 2)]).unwrap_err().operation(), "extend");
        assert_eq!(view.remove(&"a").unwrap_err().operation(), "remove");
        assert_eq!(view.clear().unwrap_err().view(), "UnmodifiableMap");
        assert_eq!(view.get(&"a"), Some(1));

        backing.borrow_mut().insert("b", 2);
        backing.borrow_mut().remove("a");
        assert!(!view.contains_key(&"a"));
        assert_eq!(view.entries(), [("b", 2)]);
        assert_eq!(view.len(), 1);
    }
}
