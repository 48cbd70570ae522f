use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use impl_tools::autoimpl;

/// Shared access to a container that someone else may keep mutating.
///
/// Views hold a handle instead of a copy, so every read observes the container as it is at the
/// moment of the call. Interior-mutability cells let the owner mutate between reads;
/// plain containers are readable handles to themselves.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
pub trait ReadHandle {
    type Target: ?Sized;

    fn read<R, F: FnOnce(&Self::Target) -> R>(&self, f: F) -> R;
}

impl<C: ?Sized> ReadHandle for RefCell<C> {
    type Target = C;

    /// # Panics
    ///
    /// Panics if the cell is mutably borrowed at the moment of the read.
    fn read<R, F: FnOnce(&C) -> R>(&self, f: F) -> R {
        f(&*RefCell::borrow(self))
    }
}

impl<C: ?Sized> ReadHandle for RwLock<C> {
    type Target = C;

    fn read<R, F: FnOnce(&C) -> R>(&self, f: F) -> R {
        let guard = RwLock::read(self).unwrap_or_else(|poisoned| {
            log::warn!("Reading through a poisoned RwLock, a writer panicked while holding it");
            poisoned.into_inner()
        });
        f(&*guard)
    }
}

impl<C: ?Sized> ReadHandle for Mutex<C> {
    type Target = C;

    fn read<R, F: FnOnce(&C) -> R>(&self, f: F) -> R {
        let guard = Mutex::lock(self).unwrap_or_else(|poisoned| {
            log::warn!("Reading through a poisoned Mutex, a writer panicked while holding it");
            poisoned.into_inner()
        });
        f(&*guard)
    }
}

macro_rules! impl_self_handle {
    ($($container:ident < $($param:ident),+ >),+ $(,)?) => {
        $(
            impl<$($param),+> ReadHandle for $container<$($param),+> {
                type Target = Self;

                #[inline(always)]
                fn read<R, F: FnOnce(&Self) -> R>(&self, f: F) -> R {
                    f(self)
                }
            }
        )+
    };
}

impl_self_handle!(
    Vec<T>,
    VecDeque<T>,
    HashSet<T, S>,
    BTreeSet<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
);

impl<T> ReadHandle for [T] {
    type Target = [T];

    #[inline(always)]
    fn read<R, F: FnOnce(&[T]) -> R>(&self, f: F) -> R {
        f(self)
    }
}
